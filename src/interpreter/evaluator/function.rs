use std::io::Write;

use crate::{
    ast::{Expression, FunctionDeclaration},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl<'p, W: Write> Evaluator<'p, W> {
    /// Evaluates a function call.
    ///
    /// The function is resolved by name through the scope stack, then the
    /// arguments are evaluated left to right in the caller's environment
    /// and checked against the declaration's arity. The body runs in a
    /// fresh scope pushed on top of the caller's, so parameter bindings are
    /// local while outer names stay visible; this also makes plain
    /// recursion work, since the declaration itself lives in an enclosing
    /// scope.
    ///
    /// The call scope is popped even when the body fails.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions, in call order.
    ///
    /// # Returns
    /// Always [`Value::Void`] on success; procedures have no return values.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - An argument whose type does not match its parameter.
    /// - Any error raised while running the body.
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                arguments: &'p [Expression])
                                -> EvalResult<Value> {
        let declaration =
            self.get_function(name)
                .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string() })?;

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate(argument)?);
        }

        if values.len() != declaration.parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { function: name.to_string(),
                                                             expected:
                                                                 declaration.parameters.len(),
                                                             found:    values.len(), });
        }

        self.push_scope();
        let result = self.bind_and_run(declaration, values);
        self.pop_scope();

        result.map(|()| Value::Void)
    }

    /// Binds the parameters of an already-scoped call and runs the body.
    ///
    /// Argument types are checked one position at a time while binding, so
    /// a mismatch aborts before the body starts.
    fn bind_and_run(&mut self,
                    declaration: &'p FunctionDeclaration,
                    values: Vec<Value>)
                    -> EvalResult<()> {
        for (parameter, value) in declaration.parameters.iter().zip(values) {
            if !parameter.ty.is_compatible_with(value.ty()) {
                return Err(RuntimeError::ArgumentTypeMismatch { function:
                                                                    declaration.name.clone(),
                                                                parameter:
                                                                    parameter.name.clone(),
                                                                expected: parameter.ty,
                                                                actual: value.ty(), });
            }
            self.define_local(&parameter.name, value);
        }

        self.execute_block(&declaration.body)
    }
}
