use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{arithmetic, comparison, logic},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two already-computed values.
///
/// Both operands have been evaluated by the caller, so `and` and `or` see
/// both sides regardless of the left operand's value: the language has no
/// short-circuit behavior.
///
/// The operation is routed by operator class: arithmetic (including the
/// text concatenation forms of `+`), equality, relational comparison, and
/// the logical connectives.
///
/// # Parameters
/// - `operator`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
pub fn eval_binary(operator: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
    };

    match operator {
        Add | Sub | Mul | Div => arithmetic::eval_arithmetic(operator, left, right),

        Equal | NotEqual => Ok(comparison::eval_equality(operator, left, right)),

        Less | LessEqual | Greater | GreaterEqual => {
            comparison::eval_relational(operator, left, right)
        },

        And | Or => logic::eval_logic(operator, left, right),
    }
}
