use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::value::types::Type,
};

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors fall into three families: type errors (mismatched operand
/// or declaration types), name errors (unresolved variables or functions)
/// and arithmetic errors (division by zero, malformed numeric literals).
/// All of them abort the program at the first occurrence; none carry a
/// source location.
pub enum RuntimeError {
    /// Tried to read or assign a variable that is not in scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not in scope.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// A declaration's initialiser value does not fit the declared type.
    DeclarationTypeMismatch {
        /// The declared type.
        declared: Type,
        /// The type of the initialiser value.
        actual:   Type,
    },
    /// An `if` condition evaluated to something other than a boolean.
    NonBooleanCondition {
        /// The type the condition actually had.
        actual: Type,
    },
    /// A loop bound evaluated to something other than a number.
    NonNumberLoopBound {
        /// The type the bound actually had.
        actual: Type,
    },
    /// A binary operator was applied to operand types it does not accept.
    InvalidOperands {
        /// The operator.
        operator: BinaryOperator,
        /// Type of the left operand.
        left:     Type,
        /// Type of the right operand.
        right:    Type,
    },
    /// A unary operator was applied to an operand type it does not accept.
    InvalidUnaryOperand {
        /// The operator.
        operator: UnaryOperator,
        /// The type the operand actually had.
        actual:   Type,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        function: String,
        /// How many parameters the declaration has.
        expected: usize,
        /// How many arguments the call supplied.
        found:    usize,
    },
    /// A function argument's type does not match its parameter declaration.
    ArgumentTypeMismatch {
        /// The name of the function.
        function:  String,
        /// The name of the parameter.
        parameter: String,
        /// The declared parameter type.
        expected:  Type,
        /// The type the argument actually had.
        actual:    Type,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// A numeric literal could not be decoded into a number.
    InvalidNumber {
        /// The raw literal text.
        literal: String,
    },
    /// The output sink rejected a write.
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UndefinedFunction { name } => write!(f, "undefined function: {name}"),

            Self::DeclarationTypeMismatch { declared, actual } => write!(f,
                                                                         "type mismatch: cannot assign {actual} to variable of type {declared}"),

            Self::NonBooleanCondition { actual } => {
                write!(f, "condition must be boolean, got {actual}")
            },
            Self::NonNumberLoopBound { actual } => {
                write!(f, "loop bounds must be numbers, got {actual}")
            },

            Self::InvalidOperands { operator, left, right } => match operator {
                BinaryOperator::Add => write!(f, "cannot add {left} and {right}"),
                BinaryOperator::Sub => write!(f, "cannot subtract {right} from {left}"),
                BinaryOperator::Mul => write!(f, "cannot multiply {left} and {right}"),
                BinaryOperator::Div => write!(f, "cannot divide {left} by {right}"),
                BinaryOperator::Equal
                | BinaryOperator::NotEqual
                | BinaryOperator::Less
                | BinaryOperator::LessEqual
                | BinaryOperator::Greater
                | BinaryOperator::GreaterEqual => {
                    write!(f, "cannot compare {left} and {right}")
                },
                BinaryOperator::And => {
                    write!(f, "cannot perform logical 'and' on {left} and {right}")
                },
                BinaryOperator::Or => {
                    write!(f, "cannot perform logical 'or' on {left} and {right}")
                },
            },

            Self::InvalidUnaryOperand { operator, actual } => match operator {
                UnaryOperator::Negate => write!(f, "cannot negate a value of type {actual}"),
                UnaryOperator::Not => write!(f, "cannot apply 'not' to a value of type {actual}"),
            },

            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found, } => {
                write!(f,
                       "function {function} expects {expected} arguments, got {found}")
            },

            Self::ArgumentTypeMismatch { function,
                                         parameter,
                                         expected,
                                         actual, } => {
                write!(f,
                       "type mismatch in function {function}: parameter {parameter} expects {expected}, got {actual}")
            },

            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidNumber { literal } => write!(f, "invalid number: {literal}"),
            Self::Io(e) => write!(f, "failed to write program output: {e}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
