use logos::Logos;
use tracing::debug;

use crate::{ast::BinaryOperator, error::ParseError};

/// Represents a lexical token in the source input.
///
/// Keywords and the word operators `or`/`and` are matched case-insensitively.
/// Symbolic operators are scanned as maximal runs of operator characters and
/// then looked up in the operator table, so a run such as `=-` or `+*` is an
/// error rather than two operators.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens such as `42`, `3.14` or `5.`. Always floating
    /// point.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// `if`
    #[token("if", priority = 3, ignore(ascii_case))]
    If,
    /// `else`
    #[token("else", priority = 3, ignore(ascii_case))]
    Else,
    /// `while`
    #[token("while", priority = 3, ignore(ascii_case))]
    While,
    /// `function`
    #[token("function", priority = 3, ignore(ascii_case))]
    Function,
    /// Binary operators, both symbolic (`+`, `**`, `<=`, ...) and the word
    /// operators `or` and `and`.
    #[token("or", callback = |_| BinaryOperator::Or, priority = 3, ignore(ascii_case))]
    #[token("and", callback = |_| BinaryOperator::And, priority = 3, ignore(ascii_case))]
    #[regex(r"[<>=!+\-*/%]+", parse_operator)]
    Operator(BinaryOperator),
    /// Identifier tokens; variable or function names. Original case is kept.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`. A lone `=` is assignment, never an operator run.
    #[token("=", priority = 3)]
    Assign,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// Statement separator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\x0B\x0C]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::If => write!(f, "IF"),
            Self::Else => write!(f, "ELSE"),
            Self::While => write!(f, "WHILE"),
            Self::Function => write!(f, "FUNCTION"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Assign => write!(f, "="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Scans source text into tokens paired with their line numbers.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for the first character, or run
/// of operator characters, that does not form a token.
///
/// # Example
/// ```
/// use stackwalk::{ast::BinaryOperator, interpreter::lexer::{Token, scan}};
///
/// let tokens = scan("x = 2 ** 3\n").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Assign,
///                 Token::Number(2.0),
///                 Token::Operator(BinaryOperator::Pow),
///                 Token::Number(3.0),
///                 Token::NewLine]);
/// ```
pub fn scan(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        if let Ok(tok) = token {
            // A newline token belongs to the line it ends.
            let line = if tok == Token::NewLine { line - 1 } else { line };
            tokens.push((tok, line));
        } else {
            return Err(ParseError::InvalidCharacter { found: lexer.slice().to_string(),
                                                      line });
        }
    }

    debug!(count = tokens.len(), "scanned source");
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Resolves a run of operator characters against the operator table.
///
/// Returns `None`, which the lexer reports as an error, when the whole run is
/// not a declared operator.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<BinaryOperator> {
    BinaryOperator::from_symbol(lex.slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        scan(source).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn keywords_ignore_case_identifiers_keep_it() {
        assert_eq!(kinds("If ELSE wHiLe function Foo"),
                   vec![Token::If,
                        Token::Else,
                        Token::While,
                        Token::Function,
                        Token::Identifier("Foo".to_string())]);
    }

    #[test]
    fn word_operators_are_operators() {
        assert_eq!(kinds("a OR b and c"),
                   vec![Token::Identifier("a".to_string()),
                        Token::Operator(BinaryOperator::Or),
                        Token::Identifier("b".to_string()),
                        Token::Operator(BinaryOperator::And),
                        Token::Identifier("c".to_string())]);
    }

    #[test]
    fn keyword_prefix_is_an_identifier() {
        assert_eq!(kinds("iffy order"),
                   vec![Token::Identifier("iffy".to_string()),
                        Token::Identifier("order".to_string())]);
    }

    #[test]
    fn numbers_are_floats() {
        assert_eq!(kinds("7 2.5 10."),
                   vec![Token::Number(7.0), Token::Number(2.5), Token::Number(10.0)]);
    }

    #[test]
    fn operator_runs_are_greedy() {
        assert_eq!(kinds("a//b**c<=d==e!=f"),
                   vec![Token::Identifier("a".to_string()),
                        Token::Operator(BinaryOperator::FloorDiv),
                        Token::Identifier("b".to_string()),
                        Token::Operator(BinaryOperator::Pow),
                        Token::Identifier("c".to_string()),
                        Token::Operator(BinaryOperator::LessEqual),
                        Token::Identifier("d".to_string()),
                        Token::Operator(BinaryOperator::Equal),
                        Token::Identifier("e".to_string()),
                        Token::Operator(BinaryOperator::NotEqual),
                        Token::Identifier("f".to_string())]);
    }

    #[test]
    fn single_equals_is_assignment() {
        assert_eq!(kinds("x=1"),
                   vec![Token::Identifier("x".to_string()), Token::Assign, Token::Number(1.0)]);
        assert_eq!(kinds("t = a == b"),
                   vec![Token::Identifier("t".to_string()),
                        Token::Assign,
                        Token::Identifier("a".to_string()),
                        Token::Operator(BinaryOperator::Equal),
                        Token::Identifier("b".to_string())]);
    }

    #[test]
    fn unknown_operator_run_is_invalid() {
        assert_eq!(scan("x = 1 +* 2"),
                   Err(ParseError::InvalidCharacter { found: "+*".to_string(),
                                                      line:  1, }));
        assert!(matches!(scan("b=-1"), Err(ParseError::InvalidCharacter { .. })));
    }

    #[test]
    fn unknown_character_reports_its_line() {
        assert_eq!(scan("a = 1\nb = $"),
                   Err(ParseError::InvalidCharacter { found: "$".to_string(),
                                                      line:  2, }));
    }

    #[test]
    fn newlines_are_tokens_with_lines() {
        let tokens = scan("a\n\nb").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Identifier("a".to_string()), 1),
                        (Token::NewLine, 1),
                        (Token::NewLine, 2),
                        (Token::Identifier("b".to_string()), 3)]);
    }
}
