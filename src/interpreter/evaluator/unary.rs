use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation; requires a number.
/// - `Not`: logical not; requires a boolean.
///
/// Any other operand type is an error naming the operand's type.
///
/// # Parameters
/// - `operator`: Unary operator.
/// - `value`: Input value.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
pub fn eval_unary(operator: UnaryOperator, value: &Value) -> EvalResult<Value> {
    match operator {
        UnaryOperator::Negate => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => {
                Err(RuntimeError::InvalidUnaryOperand { operator,
                                                        actual: value.ty() })
            },
        },

        UnaryOperator::Not => match value {
            Value::Boolean(b) => Ok(Value::Boolean(!b)),
            _ => {
                Err(RuntimeError::InvalidUnaryOperand { operator,
                                                        actual: value.ty() })
            },
        },
    }
}
