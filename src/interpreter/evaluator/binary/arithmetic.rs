use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an arithmetic operation.
///
/// Two numbers combine with ordinary 64-bit floating-point arithmetic. The
/// `+` operator additionally concatenates text with text, and text with a
/// number on either side; the number is rendered in its canonical display
/// form. Every other combination of operand types is an error naming the
/// operation and both types.
///
/// # Parameters
/// - `operator`: One of `+`, `-`, `*`, `/`.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
pub fn eval_arithmetic(operator: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => eval_number_arithmetic(operator, *l, *r),

        (Value::Text(l), Value::Text(r)) if operator == BinaryOperator::Add => {
            Ok(format!("{l}{r}").into())
        },
        (Value::Text(l), Value::Number(r)) if operator == BinaryOperator::Add => {
            Ok(format!("{l}{r}").into())
        },
        (Value::Number(l), Value::Text(r)) if operator == BinaryOperator::Add => {
            Ok(format!("{l}{r}").into())
        },

        _ => {
            Err(RuntimeError::InvalidOperands { operator,
                                                left: left.ty(),
                                                right: right.ty() })
        },
    }
}

/// Evaluates an arithmetic operation between two numbers.
fn eval_number_arithmetic(operator: BinaryOperator, left: f64, right: f64) -> EvalResult<Value> {
    match operator {
        BinaryOperator::Add => Ok((left + right).into()),
        BinaryOperator::Sub => Ok((left - right).into()),
        BinaryOperator::Mul => Ok((left * right).into()),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok((left / right).into())
        },
        _ => unreachable!("eval_number_arithmetic used with a non-arithmetic operator"),
    }
}
