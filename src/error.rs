/// Scanning and parsing errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens and tokens into commands. These include unrecognized characters,
/// unknown operator runs, unexpected tokens and malformed expressions.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing commands, such
/// as unresolved names, stack underflow, type mismatches or division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program could not be scanned or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
