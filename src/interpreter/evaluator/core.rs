use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::Command,
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested function calls.
///
/// Calls recurse on the native stack; this depth fits a default 2 MiB
/// thread stack in unoptimized builds. Deeper limits need a thread with a
/// stack of at least [`STACK_BYTES_PER_CALL`] per level.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 100;

/// Native stack reserved per nested call when sizing an interpreter thread.
pub const STACK_BYTES_PER_CALL: usize = 64 * 1024;

/// The execution engine.
///
/// An engine owns an evaluation stack and an environment chain. Commands are
/// executed in order: expressions push and pop values on the stack, while
/// assignments, declarations and calls read and write the environment.
///
/// ## Usage
///
/// Build a fresh engine for every run; engines are not meant to be shared
/// between programs.
///
/// ```
/// use stackwalk::{
///     ast::{BinaryOperator, Command},
///     interpreter::{evaluator::core::Engine, value::Value},
/// };
///
/// let mut engine = Engine::new();
/// engine.execute_block(&[Command::Literal(2.0),
///                        Command::Literal(3.0),
///                        Command::BinaryOp(BinaryOperator::Pow),
///                        Command::Assign("x".to_string())])
///       .unwrap();
///
/// assert_eq!(engine.globals().get("x"), Some(&Value::Number(8.0)));
/// assert!(engine.stack().is_empty());
/// ```
#[derive(Debug)]
pub struct Engine {
    pub(crate) stack:          Vec<Value>,
    pub(crate) environment:    Environment<Value>,
    pub(crate) max_call_depth: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with an empty stack and an empty root environment.
    #[must_use]
    pub fn new() -> Self {
        Self { stack:          Vec::new(),
               environment:    Environment::new(),
               max_call_depth: DEFAULT_MAX_CALL_DEPTH, }
    }

    /// Sets the maximum number of nested function calls.
    #[must_use]
    pub const fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Executes a sequence of commands in order.
    ///
    /// # Errors
    /// Stops at and returns the first runtime error.
    pub fn execute_block(&mut self, commands: &[Command]) -> EvalResult<()> {
        for command in commands {
            self.execute(command)?;
        }
        Ok(())
    }

    /// Executes a single command.
    ///
    /// # Errors
    /// - `UnknownName` if a referenced variable or function is unbound.
    /// - `StackUnderflow` if an operation finds too few values on the stack.
    /// - Any error raised by operators, calls or nested blocks.
    pub fn execute(&mut self, command: &Command) -> EvalResult<()> {
        match command {
            Command::Literal(value) => {
                trace!(value, "push literal");
                self.stack.push(Value::Number(*value));
            },
            Command::VariableRef(name) => {
                let value = self.environment
                                .get_variable(name)
                                .cloned()
                                .ok_or_else(|| RuntimeError::UnknownName { name: name.clone() })?;
                trace!(%name, %value, "push variable");
                self.stack.push(value);
            },
            Command::Assign(name) => {
                let value = self.pop()?;
                trace!(%name, %value, "assign");
                self.environment.assign_nearest(name, value);
            },
            Command::BinaryOp(op) => {
                let (left, right) = self.pop_pair()?;
                let result = Self::eval_binary(*op, &left, &right)?;
                trace!(%op, %left, %right, %result, "apply operator");
                self.stack.push(result);
            },
            Command::FunctionDecl(def) => self.declare_function(def),
            Command::FunctionCall { name, argc } => self.call_function(name, *argc)?,
            Command::If { condition,
                          consequent,
                          alternative, } => self.execute_if(condition, consequent, alternative)?,
            Command::While { condition, body } => self.execute_while(condition, body)?,
        }
        Ok(())
    }

    /// The bindings of the root environment.
    #[must_use]
    pub fn globals(&self) -> &HashMap<String, Value> {
        self.environment.root()
    }

    /// Consumes the engine and returns the bindings of the root environment.
    #[must_use]
    pub fn into_globals(self) -> HashMap<String, Value> {
        self.environment.into_root()
    }

    /// The current contents of the evaluation stack, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Number of function calls currently active.
    #[must_use]
    pub fn call_depth(&self) -> usize {
        self.environment.depth() - 1
    }

    /// Pops the topmost value.
    pub(crate) fn pop(&mut self) -> EvalResult<Value> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow { needed:    1,
                                                              available: 0, })
    }

    /// Pops the two topmost values, returned in push order.
    pub(crate) fn pop_pair(&mut self) -> EvalResult<(Value, Value)> {
        let mut values = self.pop_n(2)?.into_iter();
        match (values.next(), values.next()) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(RuntimeError::StackUnderflow { needed:    2,
                                                    available: 0, }),
        }
    }

    /// Pops the `n` topmost values, returned in push order.
    pub(crate) fn pop_n(&mut self, n: usize) -> EvalResult<Vec<Value>> {
        let available = self.stack.len();
        if available < n {
            return Err(RuntimeError::StackUnderflow { needed: n,
                                                      available });
        }
        Ok(self.stack.split_off(available - n))
    }
}
