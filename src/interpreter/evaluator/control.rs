use crate::{
    ast::Command,
    interpreter::evaluator::core::{Engine, EvalResult},
};

impl Engine {
    /// Executes an `if` statement.
    ///
    /// The condition runs in the current environment and exactly one branch
    /// is executed. Neither branch introduces a new environment.
    pub(crate) fn execute_if(&mut self,
                             condition: &[Command],
                             consequent: &[Command],
                             alternative: &[Command])
                             -> EvalResult<()> {
        if self.eval_condition(condition)? {
            self.execute_block(consequent)
        } else {
            self.execute_block(alternative)
        }
    }

    /// Executes a `while` statement.
    ///
    /// The condition is re-evaluated after every iteration and the loop stops
    /// the first time it is falsy. There is no iteration cap.
    pub(crate) fn execute_while(&mut self, condition: &[Command], body: &[Command]) -> EvalResult<()> {
        while self.eval_condition(condition)? {
            self.execute_block(body)?;
        }
        Ok(())
    }

    /// Runs condition commands and pops their truthiness.
    fn eval_condition(&mut self, condition: &[Command]) -> EvalResult<bool> {
        self.execute_block(condition)?;
        Ok(self.pop()?.is_truthy())
    }
}
