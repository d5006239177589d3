use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Command,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{block::parse_statement_list, precedence::ShuntingYard},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// A program is a list of statements separated by one or more newlines. Every
/// token must be consumed; anything left over after the statement list (for
/// example a stray `}`) is an error.
///
/// # Errors
/// Returns a `ParseError` for the first token that does not fit the grammar.
///
/// # Example
/// ```
/// use stackwalk::{
///     ast::{BinaryOperator, Command},
///     interpreter::{lexer::scan, parser::core::parse_program},
/// };
///
/// let tokens = scan("x = 1 + y").unwrap();
/// let commands = parse_program(&tokens).unwrap();
///
/// assert_eq!(commands,
///            vec![Command::Literal(1.0),
///                 Command::VariableRef("y".to_string()),
///                 Command::BinaryOp(BinaryOperator::Add),
///                 Command::Assign("x".to_string())]);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Command>> {
    let mut iter = tokens.iter().peekable();

    let commands = parse_statement_list(&mut iter)?;

    if let Some((token, line)) = iter.peek() {
        return Err(ParseError::UnexpectedToken { token: format!("unexpected '{token}'"),
                                                 line:  *line, });
    }

    debug!(count = commands.len(), "parsed program");
    Ok(commands)
}

/// Parses an expression into postfix commands.
///
/// Tokens are consumed greedily while they are operators, identifiers,
/// numbers or parentheses, and fed to the precedence resolver. The first
/// token outside that set ends the expression and is left in the stream.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
/// - `line`: Line of the enclosing statement, used when the expression is
///   empty.
///
/// # Returns
/// `Literal`, `VariableRef` and `BinaryOp` commands in postfix order.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Command>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut yard = ShuntingYard::new();
    let mut line = line;

    while let Some((token, token_line)) = tokens.peek() {
        if !matches!(token,
                     Token::Operator(_)
                     | Token::Identifier(_)
                     | Token::Number(_)
                     | Token::LParen
                     | Token::RParen)
        {
            break;
        }
        line = *token_line;
        yard.push(token, line)?;
        tokens.next();
    }

    let commands = yard.finish(line)?
                       .into_iter()
                       .filter_map(|token| match token {
                           Token::Number(value) => Some(Command::Literal(value)),
                           Token::Identifier(name) => Some(Command::VariableRef(name)),
                           Token::Operator(op) => Some(Command::BinaryOp(op)),
                           _ => None,
                       })
                       .collect();
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{
        ast::{BinaryOperator, FunctionDef},
        interpreter::lexer::scan,
    };

    fn parse(source: &str) -> ParseResult<Vec<Command>> {
        parse_program(&scan(source)?)
    }

    fn var(name: &str) -> Command {
        Command::VariableRef(name.to_string())
    }

    fn assign(name: &str) -> Command {
        Command::Assign(name.to_string())
    }

    #[test]
    fn while_loop_program() {
        let commands = parse("a=0\nb=0\nwhile b<=10\n{\nb=b+1\n}").unwrap();

        assert_eq!(commands,
                   vec![Command::Literal(0.0),
                        assign("a"),
                        Command::Literal(0.0),
                        assign("b"),
                        Command::While { condition: vec![var("b"),
                                                         Command::Literal(10.0),
                                                         Command::BinaryOp(BinaryOperator::LessEqual)],
                                         body:      vec![var("b"),
                                                         Command::Literal(1.0),
                                                         Command::BinaryOp(BinaryOperator::Add),
                                                         assign("b")], }]);
    }

    #[test]
    fn function_declaration_and_call() {
        let commands = parse("function f(x,y)\n{\nz=x+y\n}\nf(3,q)").unwrap();

        let def = FunctionDef { name:   "f".to_string(),
                                params: vec!["x".to_string(), "y".to_string()],
                                body:   vec![var("x"),
                                             var("y"),
                                             Command::BinaryOp(BinaryOperator::Add),
                                             assign("z")], };
        assert_eq!(commands,
                   vec![Command::FunctionDecl(Rc::new(def)),
                        Command::Literal(3.0),
                        var("q"),
                        Command::FunctionCall { name: "f".to_string(),
                                                argc: 2, }]);
    }

    #[test]
    fn empty_argument_lists_are_allowed() {
        let commands = parse("function g()\n{\nn=1\n}\ng()").unwrap();

        assert_eq!(commands[1],
                   Command::FunctionCall { name: "g".to_string(),
                                           argc: 0, });
    }

    #[test]
    fn if_else_skips_blank_lines_before_else() {
        let commands = parse("if a\n{\nb=1\n}\n\n\nelse\n{\nb=2\n}").unwrap();

        assert_eq!(commands,
                   vec![Command::If { condition:   vec![var("a")],
                                      consequent:  vec![Command::Literal(1.0), assign("b")],
                                      alternative: vec![Command::Literal(2.0), assign("b")], }]);
    }

    #[test]
    fn if_without_else_leaves_following_statement() {
        let commands = parse("if a { b=1 }\n\nc=2").unwrap();

        assert_eq!(commands,
                   vec![Command::If { condition:   vec![var("a")],
                                      consequent:  vec![Command::Literal(1.0), assign("b")],
                                      alternative: vec![], },
                        Command::Literal(2.0),
                        assign("c")]);
    }

    #[test]
    fn leading_and_trailing_newlines_are_ignored() {
        assert_eq!(parse("\n\nx=1\n\n").unwrap(), vec![Command::Literal(1.0), assign("x")]);
        assert_eq!(parse("").unwrap(), vec![]);
    }

    #[test]
    fn missing_assignment_operator_is_rejected() {
        assert!(matches!(parse("x 1"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn empty_right_hand_side_is_rejected() {
        assert_eq!(parse("x =\ny = 2"), Err(ParseError::MalformedExpression { line: 1 }));
    }

    #[test]
    fn stray_closing_brace_is_rejected() {
        assert_eq!(parse("x = 1\n}"),
                   Err(ParseError::UnexpectedToken { token: "unexpected '}'".to_string(),
                                                     line:  2, }));
    }

    #[test]
    fn unterminated_block_is_rejected() {
        assert!(matches!(parse("while x\n{\nx = 0\n"),
                         Err(ParseError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn call_arguments_must_be_bare() {
        assert!(parse("f(1 + 2)").is_err());
    }
}
