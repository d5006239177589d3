//! Property tests for the precedence resolver.
//!
//! Random arithmetic expressions are run through the interpreter and compared
//! with an independent precedence-climbing evaluator over the same text.

use proptest::prelude::*;
use stackwalk::{error::Error, interpreter::value::Value, run, util::num::floor_divmod};

const OPERATORS: &[&str] = &["+", "-", "*", "/", "//", "%", "**"];

/// Generates space-separated expressions over small integers, with optional
/// parenthesized groups.
fn expression_strategy() -> impl Strategy<Value = String> {
    let leaf = (1u8..=9).prop_map(|n| n.to_string());
    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![(inner.clone(), prop::sample::select(OPERATORS), inner.clone())
                            .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                        inner.prop_map(|e| format!("( {e} )")),]
        })
}

fn rank(op: &str) -> Option<(u8, bool)> {
    match op {
        "+" | "-" => Some((4, false)),
        "*" | "/" | "//" | "%" => Some((5, false)),
        "**" => Some((6, true)),
        _ => None,
    }
}

/// Applies an operator; `None` stands for a division by zero.
fn apply(op: &str, l: f64, r: f64) -> Option<f64> {
    match op {
        "+" => Some(l + r),
        "-" => Some(l - r),
        "*" => Some(l * r),
        "/" | "//" | "%" if r == 0.0 => None,
        "/" => Some(l / r),
        "//" => Some(floor_divmod(l, r).0),
        "%" => Some(floor_divmod(l, r).1),
        "**" if l == 0.0 && r < 0.0 => None,
        "**" => Some(l.powf(r)),
        _ => unreachable!("unknown operator {op}"),
    }
}

fn climb(tokens: &[&str], pos: &mut usize, min_rank: u8) -> Option<f64> {
    let mut lhs = atom(tokens, pos)?;

    while let Some((op, (op_rank, right_assoc))) =
        tokens.get(*pos).and_then(|t| rank(t).map(|r| (*t, r)))
    {
        if op_rank < min_rank {
            break;
        }
        *pos += 1;
        let next = if right_assoc { op_rank } else { op_rank + 1 };
        let rhs = climb(tokens, pos, next)?;
        lhs = apply(op, lhs, rhs)?;
    }

    Some(lhs)
}

fn atom(tokens: &[&str], pos: &mut usize) -> Option<f64> {
    let token = tokens[*pos];
    *pos += 1;
    if token == "(" {
        let value = climb(tokens, pos, 1)?;
        assert_eq!(tokens[*pos], ")");
        *pos += 1;
        Some(value)
    } else {
        Some(token.parse().expect("number"))
    }
}

fn reference(expr: &str) -> Option<f64> {
    let tokens = expr.split_whitespace().collect::<Vec<_>>();
    let mut pos = 0;
    let value = climb(&tokens, &mut pos, 1);
    assert_eq!(pos, tokens.len());
    value
}

fn interpret(expr: &str) -> Result<f64, Error> {
    let globals = run(&format!("x = {expr}"))?;
    match globals.get("x") {
        Some(Value::Number(n)) => Ok(*n),
        other => panic!("unexpected binding {other:?}"),
    }
}

#[test]
fn documented_example_matches_reference() {
    let expr = "4 + 2 * ( 10 / ( 25 // ( 7 + 1 ) - 1 ) ) ** ( 2 + 3 ) % 7 - 3";
    assert_eq!(reference(expr), Some(7.0));
    assert_eq!(interpret(expr).unwrap(), 7.0);
}

proptest! {
    #[test]
    fn postfix_evaluation_matches_precedence_climbing(expr in expression_strategy()) {
        match (reference(&expr), interpret(&expr)) {
            (Some(expected), Ok(actual)) => {
                prop_assert!(expected == actual || (expected.is_nan() && actual.is_nan()),
                             "{expr}: expected {expected}, got {actual}");
            },
            (None, Err(_)) => {},
            (expected, actual) => {
                prop_assert!(false, "{expr}: expected {expected:?}, got {actual:?}");
            },
        }
    }
}
