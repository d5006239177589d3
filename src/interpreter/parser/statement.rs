use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Command, FunctionDef},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::{parse_block, skip_newlines},
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// The statement kind is chosen by the current token:
/// - an identifier followed by `(` is a function call,
/// - any other identifier starts an assignment,
/// - `FUNCTION` starts a declaration,
/// - `IF` and `WHILE` start their respective statements.
///
/// Any other token (or the end of input) produces no commands and is left in
/// the stream for the caller.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The commands of the statement, possibly empty.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Command>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek().copied() else {
        return Ok(Vec::new());
    };
    let line = *line;

    match token {
        Token::Identifier(_) => {
            let mut lookahead = tokens.clone();
            lookahead.next();
            if let Some((Token::LParen, _)) = lookahead.peek() {
                parse_function_call(tokens, line)
            } else {
                parse_assignment(tokens, line)
            }
        },
        Token::Function => Ok(vec![parse_function_declaration(tokens, line)?]),
        Token::If => Ok(vec![parse_if(tokens, line)?]),
        Token::While => Ok(vec![parse_while(tokens, line)?]),
        _ => Ok(Vec::new()),
    }
}

/// Parses an assignment of the form `<identifier> = <expression>`.
///
/// The expression commands come first, followed by the `Assign` that pops
/// their result.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Command>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens, line)?;
    expect_token(tokens, &Token::Assign, line)?;

    let mut commands = parse_expression(tokens, line)?;
    commands.push(Command::Assign(name));

    Ok(commands)
}

/// Parses a call statement of the form `<identifier>(arg, ...)`.
///
/// Arguments are bare identifiers or number literals. Their commands are
/// emitted left to right ahead of the `FunctionCall`, so the values are on the
/// stack in declaration order when the call executes.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Command>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens, line)?;
    expect_token(tokens, &Token::LParen, line)?;

    let mut commands = parse_comma_separated(tokens,
                                             |tokens| parse_argument(tokens, line),
                                             &Token::RParen,
                                             line)?;
    let argc = commands.len();
    commands.push(Command::FunctionCall { name, argc });

    Ok(commands)
}

/// Parses one call argument: an identifier or a number literal.
fn parse_argument<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(Command::VariableRef(name.clone())),
        Some((Token::Number(value), _)) => Ok(Command::Literal(*value)),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected argument, found '{tok}'"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a function declaration.
///
/// Syntax:
/// ```text
///     FUNCTION name(param, ...)
///     {
///         statements
///     }
/// ```
/// Newlines are allowed between the parameter list and the opening brace.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::Function, line)?;
    let name = parse_identifier(tokens, line)?;

    expect_token(tokens, &Token::LParen, line)?;
    let params = parse_comma_separated(tokens,
                                       |tokens| parse_identifier(tokens, line),
                                       &Token::RParen,
                                       line)?;

    let body = parse_block(tokens, line)?;

    Ok(Command::FunctionDecl(Rc::new(FunctionDef { name, params, body })))
}

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     IF <condition> { consequent }
///     ELSE { alternative }
/// ```
/// Blank lines may separate the consequent from `ELSE`. When no `ELSE`
/// follows, the stream is rewound to just after the consequent so the blank
/// lines still separate it from the next statement, and the alternative is
/// empty.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::If, line)?;
    let condition = parse_expression(tokens, line)?;
    let consequent = parse_block(tokens, line)?;

    let checkpoint = tokens.clone();
    skip_newlines(tokens);

    let alternative = if let Some((Token::Else, else_line)) = tokens.peek() {
        let else_line = *else_line;
        tokens.next();
        parse_block(tokens, else_line)?
    } else {
        *tokens = checkpoint;
        Vec::new()
    };

    Ok(Command::If { condition,
                     consequent,
                     alternative })
}

/// Parses a `while` statement.
///
/// Syntax: `WHILE <condition> { body }`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::While, line)?;
    let condition = parse_expression(tokens, line)?;
    let body = parse_block(tokens, line)?;

    Ok(Command::While { condition, body })
}
