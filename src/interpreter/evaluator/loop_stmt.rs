use std::io::Write;

use crate::{
    ast::{Expression, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl<'p, W: Write> Evaluator<'p, W> {
    /// Executes a counted loop.
    ///
    /// Both bounds are evaluated once, before the first iteration, and must
    /// be numbers. The loop gets a single fresh scope for its entire run;
    /// the loop variable is bound there each iteration, shadowing any outer
    /// binding of the same name, and everything declared in the body stays
    /// in that scope until the loop completes.
    ///
    /// Iteration uses a floating-point counter starting at `from` and
    /// stepping by 1.0 while `counter <= to`, so an empty range (`from`
    /// greater than `to`) runs zero iterations and equal bounds run exactly
    /// one.
    ///
    /// The scope is popped even when an iteration fails, so a propagating
    /// error leaves no dangling scope.
    ///
    /// # Parameters
    /// - `variable`: Name of the loop variable.
    /// - `from`: Lower bound expression.
    /// - `to`: Upper bound expression (inclusive).
    /// - `body`: The loop body.
    ///
    /// # Returns
    /// `Ok(())` when the loop ran to completion, or the error that aborted
    /// it.
    pub(crate) fn execute_loop(&mut self,
                               variable: &str,
                               from: &'p Expression,
                               to: &'p Expression,
                               body: &'p [Statement])
                               -> EvalResult<()> {
        let from = match self.evaluate(from)? {
            Value::Number(n) => n,
            value => return Err(RuntimeError::NonNumberLoopBound { actual: value.ty() }),
        };

        let to = match self.evaluate(to)? {
            Value::Number(n) => n,
            value => return Err(RuntimeError::NonNumberLoopBound { actual: value.ty() }),
        };

        self.push_scope();
        let result = self.run_iterations(variable, from, to, body);
        self.pop_scope();

        result
    }

    /// Runs the iterations of an already-scoped loop.
    fn run_iterations(&mut self,
                      variable: &str,
                      from: f64,
                      to: f64,
                      body: &'p [Statement])
                      -> EvalResult<()> {
        let mut counter = from;

        while counter <= to {
            // Rebinding each iteration keeps the counter authoritative even
            // if the body assigns to the loop variable.
            self.define_local(variable, Value::Number(counter));
            self.execute_block(body)?;
            counter += 1.0;
        }

        Ok(())
    }
}
