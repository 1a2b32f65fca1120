use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a logical connective between two boolean values.
///
/// Both operands were evaluated before this point; `and` and `or` do not
/// short-circuit, so a failing right operand aborts even when the left
/// operand already decides the result. Non-boolean operands are an error
/// naming both types.
///
/// # Parameters
/// - `operator`: `and` or `or`.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean.
pub fn eval_logic(operator: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Boolean(l), Value::Boolean(r)) => {
            Ok(Value::Boolean(match operator {
                                  BinaryOperator::And => *l && *r,
                                  BinaryOperator::Or => *l || *r,
                                  _ => unreachable!("eval_logic used with a non-logical operator"),
                              }))
        },

        _ => {
            Err(RuntimeError::InvalidOperands { operator,
                                                left: left.ty(),
                                                right: right.ty() })
        },
    }
}
