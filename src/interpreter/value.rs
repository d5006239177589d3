use std::rc::Rc;

use crate::{ast::FunctionDef, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Functions and variables share one namespace, so a declared function is
/// stored in the environment as a value like any other.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point). Every number
    /// literal is materialized as one.
    Number(f64),
    /// A boolean value, produced by comparison and logical operators.
    Bool(bool),
    /// A declared function.
    Function(Rc<FunctionDef>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns whether the value counts as true in a condition.
    ///
    /// Numbers are truthy when non-zero; functions are always truthy.
    ///
    /// # Example
    /// ```
    /// use stackwalk::interpreter::value::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Bool(b) => *b,
            Self::Function(_) => true,
        }
    }

    /// Converts the value to an `f64`. Booleans count as `0` and `1`.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` for functions.
    ///
    /// # Example
    /// ```
    /// use stackwalk::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_number(), Ok(1.0));
    /// assert_eq!(Value::Number(2.5).as_number(), Ok(2.5));
    /// ```
    pub fn as_number(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Bool(b) => Ok(f64::from(u8::from(*b))),
            Self::Function(_) => {
                Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                               self.type_name()) })
            },
        }
    }

    /// Returns a human readable name of the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Function(_) => "function",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Function(def) => write!(f, "<function {}({})>", def.name, def.params.join(", ")),
        }
    }
}
