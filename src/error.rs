/// Lexical errors.
///
/// Defines the errors the scanner can raise: unexpected characters and
/// unterminated string literals, each pinned to a line/column pair.
pub mod lex_error;
/// Parse errors.
///
/// Defines the errors the parser can raise: unexpected tokens, missing
/// delimiters and truncated input, each identifying the offending lexeme.
pub mod parse_error;
/// Runtime errors.
///
/// Defines the errors the evaluator can raise: type mismatches, unresolved
/// names and arithmetic failures such as division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// A single pipeline diagnostic, tagged with the stage that produced it.
///
/// The first error at any stage halts the pipeline; this umbrella type is
/// what the driver receives and prints, prefixed with the stage name.
pub enum Diagnostic {
    /// The scanner rejected the source text.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// The evaluator aborted execution.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "Lexical error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Runtime(e) => write!(f, "Runtime error: {e}"),
        }
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
