use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Absolute tolerance used when comparing two numbers for equality.
///
/// Two numbers whose difference is smaller than this are considered equal
/// by `==` and `!=`, even though `<` and `>` stay exact.
pub const EQUALITY_TOLERANCE: f64 = 1e-9;

/// Evaluates an equality comparison.
///
/// Operands of the same variant compare by payload, with numbers using the
/// fixed absolute [`EQUALITY_TOLERANCE`]. Operands of different variants
/// are never equal (`==` yields false, `!=` yields true) rather than being
/// an error. Void values never compare equal, not even to each other.
///
/// # Parameters
/// - `operator`: `==` or `!=`.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The boolean result; equality cannot fail.
#[must_use]
pub fn eval_equality(operator: BinaryOperator, left: &Value, right: &Value) -> Value {
    let equal = match (left, right) {
        (Value::Number(l), Value::Number(r)) => (l - r).abs() < EQUALITY_TOLERANCE,
        (Value::Text(l), Value::Text(r)) => l == r,
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        _ => false,
    };

    match operator {
        BinaryOperator::Equal => equal.into(),
        BinaryOperator::NotEqual => (!equal).into(),
        _ => unreachable!("eval_equality used with a non-equality operator"),
    }
}

/// Evaluates a relational comparison.
///
/// Relational operators are defined for numbers only; any other operand
/// type is an error naming both types.
///
/// # Parameters
/// - `operator`: One of `<`, `<=`, `>`, `>=`.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean.
pub fn eval_relational(operator: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => {
            Ok(Value::Boolean(match operator {
                                  BinaryOperator::Less => l < r,
                                  BinaryOperator::LessEqual => l <= r,
                                  BinaryOperator::Greater => l > r,
                                  BinaryOperator::GreaterEqual => l >= r,
                                  _ => unreachable!("eval_relational used with a non-relational operator"),
                              }))
        },

        _ => {
            Err(RuntimeError::InvalidOperands { operator,
                                                left: left.ty(),
                                                right: right.ty() })
        },
    }
}
