/// Core evaluation logic and engine state.
///
/// Contains the execution engine, command dispatch and the value stack.
pub mod core;

/// The environment chain.
///
/// Holds the frames used for name lookup and assignment, innermost last.
pub mod environment;

/// Binary operator evaluation logic.
///
/// Implements arithmetic, comparison and logical operators.
pub mod binary;

/// Function declaration and call handling.
pub mod function;

/// Evaluation of `if` and `while` statements.
pub mod control;
