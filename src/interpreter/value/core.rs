use crate::interpreter::value::types::Type;

/// Represents a runtime value in the interpreter.
///
/// This enum models every value that can appear in expressions, variable
/// bindings and procedure results. Operator dispatch in the evaluator is
/// driven entirely by the variant tags of its operands; there are no implicit
/// conversions apart from rendering numbers into text during concatenation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value; possibly empty.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and required as the
    /// condition of `if` statements.
    Boolean(bool),
    /// The result of a procedure call; carries no payload.
    Void,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Gets the static type of the value.
    ///
    /// # Example
    /// ```
    /// use simplelang::interpreter::value::{core::Value, types::Type};
    ///
    /// assert_eq!(Value::Number(3.5).ty(), Type::Number);
    /// assert_eq!(Value::Void.ty(), Type::Void);
    /// ```
    #[must_use]
    pub const fn ty(&self) -> Type {
        match self {
            Self::Number(_) => Type::Number,
            Self::Text(_) => Type::Text,
            Self::Boolean(_) => Type::Boolean,
            Self::Void => Type::Void,
        }
    }
}

/// The canonical display used by `print` and by number-to-text
/// concatenation: numbers in their shortest round-trippable decimal form
/// (no trailing zeros, no forced fraction), text as its raw content with no
/// quoting, booleans lowercase, void as the word `void`.
///
/// # Example
/// ```
/// use simplelang::interpreter::value::core::Value;
///
/// assert_eq!(Value::Number(15.0).to_string(), "15");
/// assert_eq!(Value::Number(2.5).to_string(), "2.5");
/// assert_eq!(Value::Text("Hi".to_string()).to_string(), "Hi");
/// assert_eq!(Value::Boolean(false).to_string(), "false");
/// assert_eq!(Value::Void.to_string(), "void");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Void => write!(f, "void"),
        }
    }
}
