/// Represents all errors that can occur during scanning or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The scanner met a character, or a run of operator characters, that is
    /// not part of the language.
    #[error("Error on line {line}: Invalid character: {found}.")]
    InvalidCharacter {
        /// The offending source text.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Invalid syntax: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A parenthesis in an expression has no partner.
    #[error("Error on line {line}: Unbalanced parenthesis.")]
    UnbalancedParenthesis {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression is empty or does not reduce to exactly one value.
    #[error("Error on line {line}: Malformed expression.")]
    MalformedExpression {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::UnbalancedParenthesis { line }
            | Self::MalformedExpression { line } => *line,
        }
    }
}
