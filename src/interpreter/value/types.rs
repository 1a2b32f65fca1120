/// Represents a static type in the language.
///
/// The type system is deliberately small: three ground types that can be
/// declared in source, plus [`Type::Void`] for statement results and
/// procedure returns. There is no subtyping and no inference; every check is
/// a direct variant comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// A 64-bit floating-point number, declared with the `number` keyword.
    Number,
    /// A character sequence, declared with the `text` keyword.
    Text,
    /// A truth value, declared with the `boolean` keyword.
    Boolean,
    /// The type of statement results and procedure returns; not declarable.
    Void,
}

impl Type {
    /// Checks whether a value of type `actual` satisfies this declared type.
    ///
    /// Compatibility is strict variant equality, with one exception: a
    /// declared `Void` accepts any actual type. The check is directional, so
    /// a void value does not satisfy a `number` declaration.
    ///
    /// # Example
    /// ```
    /// use simplelang::interpreter::value::types::Type;
    ///
    /// assert!(Type::Number.is_compatible_with(Type::Number));
    /// assert!(Type::Void.is_compatible_with(Type::Text));
    /// assert!(!Type::Number.is_compatible_with(Type::Void));
    /// ```
    #[must_use]
    pub const fn is_compatible_with(self, actual: Self) -> bool {
        match self {
            Self::Void => true,
            Self::Number => matches!(actual, Self::Number),
            Self::Text => matches!(actual, Self::Text),
            Self::Boolean => matches!(actual, Self::Boolean),
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Void => "void",
        };
        write!(f, "{name}")
    }
}

/// Error returned when a string does not name a known type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownType {
    /// The string that failed to parse.
    pub name: String,
}

impl std::fmt::Display for UnknownType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown type: {}", self.name)
    }
}

impl std::error::Error for UnknownType {}

impl std::str::FromStr for Type {
    type Err = UnknownType;

    /// Parses one of the reserved type words.
    ///
    /// `void` is accepted here even though no declaration keyword produces
    /// it; it names the type of procedure returns.
    ///
    /// # Example
    /// ```
    /// use simplelang::interpreter::value::types::Type;
    ///
    /// assert_eq!("boolean".parse::<Type>(), Ok(Type::Boolean));
    /// assert!("float".parse::<Type>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Self::Number),
            "text" => Ok(Self::Text),
            "boolean" => Ok(Self::Boolean),
            "void" => Ok(Self::Void),
            _ => Err(UnknownType { name: s.to_string() }),
        }
    }
}
