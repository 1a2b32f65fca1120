use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Expression, FunctionDeclaration, LiteralValue, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, unary},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// One entry in the scope stack.
///
/// A scope owns the variable bindings created while it is active and the
/// functions declared in it. Function declarations are borrowed from the
/// program tree, which outlives every scope.
struct Scope<'p> {
    variables: HashMap<String, Value>,
    functions: HashMap<String, &'p FunctionDeclaration>,
}

impl Scope<'_> {
    fn new() -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(), }
    }
}

/// Walks the program tree and performs its effects.
///
/// The evaluator holds the scope stack and the output sink. Statements are
/// executed in order; the first runtime error aborts the program, leaving
/// already-emitted output in place.
///
/// ## Usage
///
/// An `Evaluator` is created with an output sink, used for one program run,
/// and then discarded. The driver passes locked stdout; tests pass a
/// `Vec<u8>` and inspect the captured bytes.
pub struct Evaluator<'p, W> {
    scope_stack: Vec<Scope<'p>>,
    output:      W,
}

impl<'p, W: Write> Evaluator<'p, W> {
    /// Creates a fresh evaluator with a single root scope and the given
    /// output sink.
    pub fn new(output: W) -> Self {
        Self { scope_stack: vec![Scope::new()],
               output }
    }

    /// Executes a whole program.
    ///
    /// Statements run in source order; the first error aborts the run and
    /// is returned.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by any statement.
    pub fn run(&mut self, program: &'p Program) -> EvalResult<()> {
        for statement in &program.statements {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Dispatches on the statement variant. Loop and function-call scopes
    /// are handled in their own modules; everything else runs in the
    /// current scope.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// `Ok(())` on success, or the error that aborted the statement.
    pub(crate) fn execute_statement(&mut self, statement: &'p Statement) -> EvalResult<()> {
        match statement {
            Statement::VariableDeclaration { declared,
                                             name,
                                             initializer, } => {
                let value = self.evaluate(initializer)?;
                if !declared.is_compatible_with(value.ty()) {
                    return Err(RuntimeError::DeclarationTypeMismatch { declared: *declared,
                                                                      actual:   value.ty(), });
                }
                self.define_local(name, value);
                Ok(())
            },

            Statement::Assignment { name, value } => {
                let value = self.evaluate(value)?;
                if self.assign_nearest(name, value) {
                    Ok(())
                } else {
                    Err(RuntimeError::UndefinedVariable { name: name.clone() })
                }
            },

            Statement::If { condition,
                            then_body,
                            else_body, } => match self.evaluate(condition)? {
                Value::Boolean(true) => self.execute_block(then_body),
                Value::Boolean(false) => self.execute_block(else_body),
                value => Err(RuntimeError::NonBooleanCondition { actual: value.ty() }),
            },

            Statement::Loop { variable,
                              from,
                              to,
                              body, } => self.execute_loop(variable, from, to, body),

            Statement::Function(declaration) => {
                self.define_function(declaration);
                Ok(())
            },

            Statement::Print { value } => {
                let value = self.evaluate(value)?;
                writeln!(self.output, "{value}").map_err(RuntimeError::Io)
            },

            Statement::Expression { expression } => {
                self.evaluate(expression)?;
                Ok(())
            },
        }
    }

    /// Executes a sequence of statements in the current scope.
    pub(crate) fn execute_block(&mut self, statements: &'p [Statement]) -> EvalResult<()> {
        for statement in statements {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant: literals, variable
    /// references, unary and binary operations, and function calls.
    ///
    /// # Parameters
    /// - `expression`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`], or the error that aborted evaluation.
    pub(crate) fn evaluate(&mut self, expression: &'p Expression) -> EvalResult<Value> {
        match expression {
            Expression::Literal(literal) => Self::evaluate_literal(literal),

            Expression::Identifier { name } => self.evaluate_identifier(name),

            Expression::Unary { operator, operand } => {
                let value = self.evaluate(operand)?;
                unary::eval_unary(*operator, &value)
            },

            Expression::Binary { left,
                                 operator,
                                 right, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                binary::core::eval_binary(*operator, &left, &right)
            },

            Expression::Call { name, arguments } => self.call_function(name, arguments),
        }
    }

    /// Converts a literal payload into a runtime value.
    ///
    /// Number payloads are decoded here, not in the scanner, so a malformed
    /// run of digits and dots only fails once it is actually evaluated.
    fn evaluate_literal(literal: &LiteralValue) -> EvalResult<Value> {
        match literal {
            LiteralValue::Number(raw) => {
                raw.parse::<f64>()
                   .map(Value::from)
                   .map_err(|_| RuntimeError::InvalidNumber { literal: raw.clone() })
            },
            LiteralValue::Text(content) => Ok(content.clone().into()),
            LiteralValue::Boolean(value) => Ok((*value).into()),
        }
    }

    /// Resolves a variable reference through the scope stack.
    fn evaluate_identifier(&self, name: &str) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Pushes a fresh innermost scope.
    pub(crate) fn push_scope(&mut self) {
        self.scope_stack.push(Scope::new());
    }

    /// Pops the innermost scope, releasing its bindings.
    pub(crate) fn pop_scope(&mut self) {
        self.scope_stack.pop();
    }

    /// Binds a variable in the innermost scope, shadowing any outer binding
    /// of the same name.
    pub(crate) fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.variables.insert(name.to_string(), value);
        }
    }

    /// Looks a variable up through the scope stack, innermost first.
    pub(crate) fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.variables.get(name))
    }

    /// Overwrites an existing binding in whichever scope currently holds
    /// it, searching innermost first.
    ///
    /// Returns `false` when no scope holds the name; the caller turns that
    /// into an undefined-variable error. The declared type is deliberately
    /// not re-checked: the new value's type wins.
    pub(crate) fn assign_nearest(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.scope_stack
                                .iter_mut()
                                .rev()
                                .find_map(|scope| scope.variables.get_mut(name))
        {
            *slot = value;
            return true;
        }
        false
    }

    /// Binds a function declaration in the innermost scope.
    ///
    /// Redeclaring a name overwrites the previous binding.
    pub(crate) fn define_function(&mut self, declaration: &'p FunctionDeclaration) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.functions.insert(declaration.name.clone(), declaration);
        }
    }

    /// Looks a function up through the scope stack, innermost first.
    pub(crate) fn get_function(&self, name: &str) -> Option<&'p FunctionDeclaration> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.functions.get(name).copied())
    }
}
