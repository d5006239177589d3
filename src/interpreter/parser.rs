/// Parser entry points and shared result type.
///
/// Contains the program-level entry point and expression parsing, which feeds
/// expression tokens to the precedence resolver.
pub mod core;

/// Shunting-yard precedence resolver.
///
/// Reorders the tokens of one expression into postfix order according to the
/// operator table.
pub mod precedence;

/// Statement parsing.
///
/// Dispatches on the leading token to assignments, calls, function
/// declarations, `if` and `while` statements.
pub mod statement;

/// Block and statement-list parsing.
///
/// Handles newline-separated statement lists and brace-delimited blocks.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectations, identifier parsing and comma-separated lists.
pub mod utils;
