use crate::{
    ast::{Associativity, BinaryOperator},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Entries held on the operator stack while an expression is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(BinaryOperator),
    LParen,
}

/// Shunting-yard converter from infix to postfix order.
///
/// Tokens of a single expression are fed one at a time with
/// [`ShuntingYard::push`]; [`ShuntingYard::finish`] drains the operator stack
/// and returns the postfix sequence. Operands and operators are the only
/// tokens that reach the output, parentheses are consumed.
///
/// # Example
/// ```
/// use stackwalk::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::precedence::ShuntingYard},
/// };
///
/// // 2 ** 3 ** 2 groups to the right: 2 3 2 ** **
/// let mut yard = ShuntingYard::new();
/// for token in [Token::Number(2.0),
///               Token::Operator(BinaryOperator::Pow),
///               Token::Number(3.0),
///               Token::Operator(BinaryOperator::Pow),
///               Token::Number(2.0)]
/// {
///     yard.push(&token, 1).unwrap();
/// }
///
/// assert_eq!(yard.finish(1).unwrap(),
///            vec![Token::Number(2.0),
///                 Token::Number(3.0),
///                 Token::Number(2.0),
///                 Token::Operator(BinaryOperator::Pow),
///                 Token::Operator(BinaryOperator::Pow)]);
/// ```
#[derive(Debug, Default)]
pub struct ShuntingYard {
    output:    Vec<Token>,
    operators: Vec<Pending>,
}

impl ShuntingYard {
    /// Creates an empty converter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one expression token.
    ///
    /// An incoming operator first pops every stacked operator that binds
    /// tighter, or equally tight when the incoming operator is
    /// left-associative. Equal-precedence right-associative operators stay on
    /// the stack, which keeps `**` grouping right to left.
    ///
    /// # Errors
    /// - `UnbalancedParenthesis` if a `)` has no matching `(`.
    /// - `UnexpectedToken` if the token cannot be part of an expression.
    pub fn push(&mut self, token: &Token, line: usize) -> ParseResult<()> {
        match token {
            Token::Number(_) | Token::Identifier(_) => self.output.push(token.clone()),
            Token::LParen => self.operators.push(Pending::LParen),
            Token::RParen => loop {
                match self.operators.pop() {
                    Some(Pending::Operator(op)) => self.output.push(Token::Operator(op)),
                    Some(Pending::LParen) => break,
                    None => return Err(ParseError::UnbalancedParenthesis { line }),
                }
            },
            Token::Operator(incoming) => {
                while let Some(Pending::Operator(top)) = self.operators.last().copied() {
                    let yields = top.precedence() > incoming.precedence()
                                 || (top.precedence() == incoming.precedence()
                                     && incoming.associativity() == Associativity::Left);
                    if !yields {
                        break;
                    }
                    self.operators.pop();
                    self.output.push(Token::Operator(top));
                }
                self.operators.push(Pending::Operator(*incoming));
            },
            other => {
                return Err(ParseError::UnexpectedToken { token: format!("'{other}' in expression"),
                                                         line });
            },
        }
        Ok(())
    }

    /// Drains the operator stack and returns the postfix sequence.
    ///
    /// The result is checked to reduce to exactly one value, so empty
    /// expressions and sequences like `1 2` or `1 +` are rejected here.
    ///
    /// # Errors
    /// - `UnbalancedParenthesis` if a `(` was never closed.
    /// - `MalformedExpression` if the postfix sequence does not leave exactly
    ///   one value.
    pub fn finish(mut self, line: usize) -> ParseResult<Vec<Token>> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.output.push(Token::Operator(op)),
                Pending::LParen => return Err(ParseError::UnbalancedParenthesis { line }),
            }
        }

        let mut depth = 0usize;
        for token in &self.output {
            if matches!(token, Token::Operator(_)) {
                depth = depth.checked_sub(1)
                             .filter(|d| *d > 0)
                             .ok_or(ParseError::MalformedExpression { line })?;
            } else {
                depth += 1;
            }
        }
        if depth != 1 {
            return Err(ParseError::MalformedExpression { line });
        }

        Ok(self.output)
    }
}
