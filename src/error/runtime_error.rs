/// Represents all errors that can occur while executing commands.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// A name is bound in no environment of the chain.
    #[error("Name error: '{name}' is not defined.")]
    UnknownName {
        /// The unresolved name.
        name: String,
    },
    /// An operation needed more values than the stack holds.
    #[error("Stack underflow: {needed} value(s) needed, {available} available.")]
    StackUnderflow {
        /// Number of values the operation consumes.
        needed:    usize,
        /// Number of values on the stack.
        available: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// A call named something that is not a function.
    #[error("Type error: '{name}' is not a function.")]
    NotCallable {
        /// The name that was called.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Function '{name}' takes {expected} argument(s) but {found} were given.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// Attempted division or modulo by zero.
    #[error("Division by zero in '{op}'.")]
    DivisionByZero {
        /// The operator that divided.
        op: crate::ast::BinaryOperator,
    },
    /// Nested calls went deeper than the engine allows.
    #[error("Maximum call depth of {limit} exceeded.")]
    RecursionLimit {
        /// The configured call depth limit.
        limit: usize,
    },
}
