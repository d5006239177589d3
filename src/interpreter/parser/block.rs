use std::iter::Peekable;

use crate::{
    ast::Command,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::expect_token},
    },
};

/// Parses a newline-separated list of statements.
///
/// Statements are separated by one or more newline tokens. A position that
/// does not start a statement (end of input, a closing brace, ...) yields an
/// empty statement, which is how blank lines and block ends are handled; the
/// caller decides whether the token that stopped the list is acceptable.
///
/// Grammar: `statement_list := statement (NEWLINE+ statement)*`
pub fn parse_statement_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Command>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut commands = parse_statement(tokens)?;

    while let Some((Token::NewLine, _)) = tokens.peek() {
        skip_newlines(tokens);
        commands.extend(parse_statement(tokens)?);
    }

    Ok(commands)
}

/// Parses a block delimited by braces.
///
/// Newlines before the opening brace are skipped, so the brace may sit on its
/// own line.
///
/// Grammar: `block := NEWLINE* "{" statement_list "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned before the opening brace.
/// - `line`: Line number of the statement that owns the block.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Command>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    skip_newlines(tokens);
    let line = expect_token(tokens, &Token::LBrace, line)?;
    let commands = parse_statement_list(tokens)?;
    expect_token(tokens, &Token::RBrace, line)?;

    Ok(commands)
}

/// Consumes consecutive newline tokens.
pub fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}
