#[derive(Debug)]
/// Represents all errors that can occur while scanning source text.
///
/// Lexical errors are the only diagnostics that always carry an exact
/// line/column pair, pointing at the first character of the offending
/// construct.
pub enum LexError {
    /// Encountered a character no token can start with.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line of the opening quote.
        line:   usize,
        /// The source column of the opening quote.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character,
                                        line,
                                        column, } => {
                write!(f,
                       "line {line}, column {column}: unexpected character: {character}")
            },

            Self::UnterminatedString { line, column } => {
                write!(f, "line {line}, column {column}: unterminated string")
            },
        }
    }
}

impl std::error::Error for LexError {}
