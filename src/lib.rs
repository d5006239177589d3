//! # stackwalk
//!
//! stackwalk is an interpreter for a small imperative scripting language.
//! Source text is scanned into tokens, statements are parsed by recursive
//! descent, expressions are reordered into postfix form by a shunting-yard
//! resolver, and the resulting command list is executed on a value stack
//! against a chain of environments. A run produces the bindings of the
//! top-level variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{collections::HashMap, sync::Once};

use tracing::debug;

use crate::{
    ast::Command,
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Engine, lexer::Token, parser::core::parse_program, value::Value,
    },
};

/// Defines the command representation of a parsed program.
///
/// This module declares the `Command` enum produced by the parser and
/// executed by the evaluator, along with the operator table and function
/// declarations.
///
/// # Responsibilities
/// - Defines every command variant, with expressions in postfix order.
/// - Declares operator precedence and associativity.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing
/// or executing a program. Every error aborts the run.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Attaches line numbers to scan and parse errors.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation and value
/// representations to provide a complete runtime for source programs.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric utilities.
pub mod util;

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber for diagnostic output.
///
/// Nothing is installed unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=stackwalk=debug` or `RUST_LOG=stackwalk=trace`. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry().with(fmt::layer().with_target(true).with_level(true))
                                          .with(EnvFilter::from_default_env())
                                          .init();
        }
    });
}

/// Scans source text into tokens paired with their line numbers.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` for unrecognized input.
pub fn scan(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    interpreter::lexer::scan(source)
}

/// Parses scanned tokens into a command list.
///
/// # Errors
/// Returns a `ParseError` for the first token that does not fit the grammar.
pub fn parse(tokens: &[(Token, usize)]) -> Result<Vec<Command>, ParseError> {
    parse_program(tokens)
}

/// Runs a program on a fresh engine and returns the root bindings.
///
/// # Errors
/// Returns an error if scanning, parsing or execution fails.
///
/// # Examples
/// ```
/// use stackwalk::{interpreter::value::Value, run};
///
/// let globals = run("a=0\nb=0\nwhile b<=10\n{\nb=b+1\n}").unwrap();
/// assert_eq!(globals["a"], Value::Number(0.0));
/// assert_eq!(globals["b"], Value::Number(11.0));
///
/// // 'x' is not defined.
/// assert!(run("y = x + 1").is_err());
/// ```
pub fn run(source: &str) -> Result<HashMap<String, Value>, Error> {
    let mut engine = Engine::new();
    run_with(source, &mut engine)?;
    Ok(engine.into_globals())
}

/// Runs a program on a caller-supplied engine.
///
/// On failure the engine keeps whatever bindings were made before the error,
/// which can be inspected through [`Engine::globals`].
///
/// # Errors
/// Returns an error if scanning, parsing or execution fails.
pub fn run_with(source: &str, engine: &mut Engine) -> Result<(), Error> {
    let tokens = scan(source)?;
    let commands = parse(&tokens)?;
    engine.execute_block(&commands)?;

    debug!(bindings = engine.globals().len(), "program finished");
    Ok(())
}
