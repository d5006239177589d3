use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::Value,
    },
    util::num::floor_divmod,
};

impl Engine {
    /// Evaluates a binary operation between two values.
    ///
    /// Both operands have already been evaluated, nothing short-circuits.
    /// `or` yields the left operand when it is truthy and the right one
    /// otherwise; `and` yields the left operand when it is falsy and the right
    /// one otherwise. Booleans take part in arithmetic, ordering and equality
    /// as `0` and `1`. Functions are only equal to themselves and cannot be
    /// used as numbers.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand (pushed first).
    /// - `right`: Right operand (pushed last).
    ///
    /// # Example
    /// ```
    /// use stackwalk::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Engine, value::Value},
    /// };
    ///
    /// let result = Engine::eval_binary(BinaryOperator::FloorDiv,
    ///                                  &Value::Number(25.0),
    ///                                  &Value::Number(8.0));
    /// assert_eq!(result.unwrap(), Value::Number(3.0));
    ///
    /// let result = Engine::eval_binary(BinaryOperator::Or,
    ///                                  &Value::Number(0.0),
    ///                                  &Value::Number(5.0));
    /// assert_eq!(result.unwrap(), Value::Number(5.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };

        match op {
            Or => Ok(if left.is_truthy() { left.clone() } else { right.clone() }),
            And => Ok(if left.is_truthy() { right.clone() } else { left.clone() }),
            Equal => Ok(Value::from(Self::values_equal(left, right))),
            NotEqual => Ok(Value::from(!Self::values_equal(left, right))),
            Less => Self::compare(op, left, right, |l, r| l < r),
            LessEqual => Self::compare(op, left, right, |l, r| l <= r),
            Greater => Self::compare(op, left, right, |l, r| l > r),
            GreaterEqual => Self::compare(op, left, right, |l, r| l >= r),
            Add => Self::arithmetic(op, left, right, |l, r| Ok(l + r)),
            Sub => Self::arithmetic(op, left, right, |l, r| Ok(l - r)),
            Mul => Self::arithmetic(op, left, right, |l, r| Ok(l * r)),
            Div => Self::arithmetic(op, left, right, |l, r| nonzero(op, r).map(|r| l / r)),
            FloorDiv => {
                Self::arithmetic(op, left, right, |l, r| nonzero(op, r).map(|r| floor_divmod(l, r).0))
            },
            Mod => {
                Self::arithmetic(op, left, right, |l, r| nonzero(op, r).map(|r| floor_divmod(l, r).1))
            },
            Pow => Self::arithmetic(op, left, right, |l, r| {
                if l == 0.0 && r < 0.0 {
                    Err(RuntimeError::DivisionByZero { op })
                } else {
                    Ok(l.powf(r))
                }
            }),
        }
    }

    /// Equality across value kinds: numbers and booleans compare numerically,
    /// functions by identity.
    fn values_equal(left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
            _ => matches!((left.as_number(), right.as_number()), (Ok(l), Ok(r)) if l == r),
        }
    }

    fn compare(op: BinaryOperator,
               left: &Value,
               right: &Value,
               test: impl FnOnce(f64, f64) -> bool)
               -> EvalResult<Value> {
        let (l, r) = Self::numeric_operands(op, left, right)?;
        Ok(Value::from(test(l, r)))
    }

    /// Applies an arithmetic operator to the numeric forms of both operands.
    ///
    /// `/` is true division, `//` floors the quotient and `%` takes the sign
    /// of the divisor.
    fn arithmetic(op: BinaryOperator,
                  left: &Value,
                  right: &Value,
                  apply: impl FnOnce(f64, f64) -> EvalResult<f64>)
                  -> EvalResult<Value> {
        let (l, r) = Self::numeric_operands(op, left, right)?;
        apply(l, r).map(Value::from)
    }

    fn numeric_operands(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<(f64, f64)> {
        match (left.as_number(), right.as_number()) {
            (Ok(l), Ok(r)) => Ok((l, r)),
            _ => Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                                left.type_name(),
                                                                right.type_name()) }),
        }
    }
}

fn nonzero(op: BinaryOperator, divisor: f64) -> EvalResult<f64> {
    if divisor == 0.0 {
        Err(RuntimeError::DivisionByZero { op })
    } else {
        Ok(divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::FunctionDef;

    fn num(value: f64) -> Value {
        Value::Number(value)
    }

    fn eval(op: &str, left: Value, right: Value) -> EvalResult<Value> {
        Engine::eval_binary(BinaryOperator::from_symbol(op).unwrap(), &left, &right)
    }

    fn function(name: &str) -> Value {
        Value::Function(Rc::new(FunctionDef { name:   name.to_string(),
                                              params: vec![],
                                              body:   vec![], }))
    }

    #[test]
    fn arithmetic_operators() {
        assert_eq!(eval("+", num(2.0), num(3.0)), Ok(num(5.0)));
        assert_eq!(eval("-", num(2.0), num(3.0)), Ok(num(-1.0)));
        assert_eq!(eval("*", num(2.0), num(3.0)), Ok(num(6.0)));
        assert_eq!(eval("/", num(7.0), num(2.0)), Ok(num(3.5)));
        assert_eq!(eval("**", num(2.0), num(10.0)), Ok(num(1024.0)));
    }

    #[test]
    fn floor_division_and_modulo_follow_the_divisor_sign() {
        assert_eq!(eval("//", num(7.0), num(2.0)), Ok(num(3.0)));
        assert_eq!(eval("//", num(-7.0), num(2.0)), Ok(num(-4.0)));
        assert_eq!(eval("%", num(-7.0), num(2.0)), Ok(num(1.0)));
        assert_eq!(eval("%", num(7.0), num(-2.0)), Ok(num(-1.0)));
        assert_eq!(eval("%", num(6250.0), num(7.0)), Ok(num(6.0)));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        for op in ["/", "//", "%"] {
            assert!(matches!(eval(op, num(1.0), num(0.0)),
                             Err(RuntimeError::DivisionByZero { .. })));
        }
        assert!(matches!(eval("**", num(0.0), num(-1.0)),
                         Err(RuntimeError::DivisionByZero { .. })));
        assert!(matches!(eval("/", num(1.0), Value::Bool(false)),
                         Err(RuntimeError::DivisionByZero { .. })));
    }

    #[test]
    fn comparisons_produce_booleans() {
        assert_eq!(eval("<", num(1.0), num(2.0)), Ok(Value::Bool(true)));
        assert_eq!(eval(">=", num(1.0), num(2.0)), Ok(Value::Bool(false)));
        assert_eq!(eval("==", num(2.0), num(2.0)), Ok(Value::Bool(true)));
        assert_eq!(eval("!=", num(2.0), num(3.0)), Ok(Value::Bool(true)));
    }

    #[test]
    fn logical_operators_return_an_operand() {
        assert_eq!(eval("or", num(0.0), num(5.0)), Ok(num(5.0)));
        assert_eq!(eval("or", num(2.0), num(5.0)), Ok(num(2.0)));
        assert_eq!(eval("and", num(3.0), num(4.0)), Ok(num(4.0)));
        assert_eq!(eval("and", num(0.0), num(4.0)), Ok(num(0.0)));
        assert_eq!(eval("and", Value::Bool(true), num(0.0)), Ok(num(0.0)));
        assert_eq!(eval("or", Value::Bool(false), Value::Bool(false)), Ok(Value::Bool(false)));
    }

    #[test]
    fn booleans_act_as_zero_and_one() {
        assert_eq!(eval("+", Value::Bool(true), num(1.0)), Ok(num(2.0)));
        assert_eq!(eval("*", Value::Bool(false), num(7.0)), Ok(num(0.0)));
        assert_eq!(eval("<", num(0.5), Value::Bool(true)), Ok(Value::Bool(true)));
        assert_eq!(eval("==", Value::Bool(true), num(1.0)), Ok(Value::Bool(true)));
        assert_eq!(eval("!=", Value::Bool(false), num(0.0)), Ok(Value::Bool(false)));
        assert_eq!(eval("==", Value::Bool(true), num(2.0)), Ok(Value::Bool(false)));
    }

    #[test]
    fn functions_are_not_numbers() {
        let f = function("f");

        assert!(matches!(eval("+", f.clone(), num(1.0)), Err(RuntimeError::TypeError { .. })));
        assert!(matches!(eval("<", num(1.0), f.clone()), Err(RuntimeError::TypeError { .. })));
        assert_eq!(eval("==", f.clone(), f.clone()), Ok(Value::Bool(true)));
        assert_eq!(eval("==", f, function("f")), Ok(Value::Bool(false)));
        assert_eq!(eval("==", function("g"), num(1.0)), Ok(Value::Bool(false)));
    }
}
