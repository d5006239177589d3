use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::Value,
    },
};

impl Engine {
    /// Binds a function declaration in the current environment.
    pub(crate) fn declare_function(&mut self, def: &Rc<FunctionDef>) {
        debug!(function = %def.name, params = def.params.len(), "declare");
        self.environment.define_local(&def.name, Value::Function(Rc::clone(def)));
    }

    /// Executes a call to a declared function.
    ///
    /// The function is resolved through the environment chain. Its arguments
    /// are the `argc` topmost stack values, bound positionally to the declared
    /// parameters in push order. The body runs in a new environment whose
    /// parent is the caller's, so it can read and assign every binding
    /// visible at the call site; the new environment is discarded when the
    /// body finishes.
    ///
    /// # Errors
    /// - `UnknownName` if the name is unbound.
    /// - `NotCallable` if the name is bound to something other than a
    ///   function.
    /// - `ArgumentCountMismatch` if `argc` differs from the parameter count.
    /// - `RecursionLimit` if the call would exceed the configured depth.
    /// - Any error raised by the body.
    pub(crate) fn call_function(&mut self, name: &str, argc: usize) -> EvalResult<()> {
        let def = match self.environment.get_variable(name) {
            Some(Value::Function(def)) => Rc::clone(def),
            Some(_) => return Err(RuntimeError::NotCallable { name: name.to_string() }),
            None => return Err(RuntimeError::UnknownName { name: name.to_string() }),
        };

        if argc != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: def.params.len(),
                                                             found:    argc, });
        }
        if self.call_depth() >= self.max_call_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.max_call_depth });
        }

        let args = self.pop_n(argc)?;
        let frame = def.params
                       .iter()
                       .cloned()
                       .zip(args)
                       .collect::<HashMap<_, _>>();

        self.environment.push_frame(frame);
        debug!(function = %def.name, depth = self.call_depth(), "call");

        let result = self.execute_block(&def.body);

        self.environment.pop_frame();
        debug!(function = %def.name, ok = result.is_ok(), "return");

        result
    }
}
