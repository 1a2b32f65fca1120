#[derive(Debug)]
/// Represents all errors that can occur while parsing the token stream.
///
/// Parse errors identify the offending token by its lexeme and carry its
/// source position when one exists; running out of tokens mid-construct has
/// no position to point at.
pub enum ParseError {
    /// Found a token that cannot start a statement or expression.
    UnexpectedToken {
        /// The lexeme of the token encountered.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A specific token was required but something else was found.
    Expected {
        /// Description of what was required, e.g. `"'then' after condition"`.
        what:   &'static str,
        /// The lexeme of the token actually found.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { lexeme, line, column } => {
                write!(f, "unexpected token at line {line}, column {column}: {lexeme}")
            },

            Self::Expected { what,
                             found,
                             line,
                             column, } => {
                write!(f,
                       "expected {what}, got '{found}' at line {line}, column {column}")
            },

            Self::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}
