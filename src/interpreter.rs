/// The evaluator module executes commands and computes results.
///
/// The evaluator walks the command list produced by the parser, evaluating
/// postfix expressions on a value stack and running control flow, function
/// calls and assignments against a chain of environments. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes every command variant, performing all side effects.
/// - Maintains the environment chain used for name lookup and assignment.
/// - Reports runtime errors such as unresolved names or stack underflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a number, identifier, keyword, operator or
/// punctuation mark. Newlines are kept as statement separators. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with their line.
/// - Matches keywords case-insensitively and validates operator runs.
/// - Reports invalid characters.
pub mod lexer;
/// The parser module builds the command list from tokens.
///
/// The parser recognizes statements by recursive descent and hands every
/// expression to a shunting-yard precedence resolver, producing a flat list of
/// commands with expressions in postfix order.
///
/// # Responsibilities
/// - Converts tokens into commands (assignments, calls, declarations, `if`,
///   `while`).
/// - Orders expression operators by precedence and associativity.
/// - Reports syntax errors with line information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, booleans and declared functions.
pub mod value;
