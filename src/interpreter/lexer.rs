use logos::Logos;

use crate::error::LexError;

/// Identifies the kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Literal kinds carry their decoded payload: number tokens keep the raw
/// digit-and-dot run (decoded later by the evaluator), text tokens keep the
/// content between the quotes, boolean tokens carry the truth value.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum TokenKind {
    /// Numeric literal tokens such as `42` or `3.14`.
    ///
    /// The scanner accepts any run of digits and dots, so a malformed lexeme
    /// like `1.2.3` scans fine and fails during evaluation instead.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_string())]
    Number(String),
    /// Text literal tokens, e.g. `"Hello"`.
    ///
    /// The payload excludes the surrounding quotes. Embedded newlines are
    /// legal and there are no escape sequences.
    #[regex(r#""[^"]*""#, read_text)]
    Text(String),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Boolean(bool),
    /// Identifier tokens; variable or function names such as `x` or `greet`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `number`
    #[token("number")]
    NumberKeyword,
    /// `text`
    #[token("text")]
    TextKeyword,
    /// `boolean`
    #[token("boolean")]
    BooleanKeyword,
    /// `function`
    #[token("function")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `end`
    #[token("end")]
    End,
    /// `loop`
    #[token("loop")]
    Loop,
    /// `from`
    #[token("from")]
    From,
    /// `to`
    #[token("to")]
    To,
    /// `print`
    #[token("print")]
    Print,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// Logical not, written either `!` or `not`.
    #[token("!")]
    #[token("not")]
    Not,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `,`
    #[token(",")]
    Comma,

    /// Whitespace between tokens; never significant, never emitted.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Whitespace,
}

/// A single token: its kind, the exact source lexeme it came from, and the
/// 1-based line/column of its first character.
///
/// The lexeme always equals the substring of source the token originated
/// from, except that text literals exclude their surrounding quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is, including any literal payload.
    pub kind:   TokenKind,
    /// The source text of the token.
    pub lexeme: String,
    /// 1-based source line of the token's first character.
    pub line:   usize,
    /// 1-based source column of the token's first character.
    pub column: usize,
}

/// Extracts the content of a text literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The slice with its surrounding quotes removed.
fn read_text(lex: &logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Parses a boolean literal from the current token slice (`true` or
/// `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<TokenKind>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Scans a source string into its full token sequence.
///
/// Tokens appear in source order; whitespace is skipped and never
/// significant. An empty source yields an empty sequence. The first lexical
/// problem aborts the scan with an error pinned to a line/column pair.
///
/// # Errors
/// Returns a [`LexError`] for a character no token can start with, or for a
/// string literal that is never closed.
///
/// # Example
/// ```
/// use simplelang::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("print 42").unwrap();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Print);
/// assert_eq!(tokens[1].lexeme, "42");
/// assert_eq!(tokens[1].column, 7);
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let line_starts = line_starts(source);
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let (line, column) = position(&line_starts, span.start);

        match result {
            Ok(kind) => {
                let lexeme = match &kind {
                    TokenKind::Text(content) => content.clone(),
                    _ => lexer.slice().to_string(),
                };
                tokens.push(Token { kind,
                                    lexeme,
                                    line,
                                    column });
            },
            Err(()) => {
                // A quote that never found its partner is the only way a `"`
                // reaches the error path.
                if lexer.slice().starts_with('"') {
                    return Err(LexError::UnterminatedString { line, column });
                }
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { character,
                                                           line,
                                                           column });
            },
        }
    }

    Ok(tokens)
}

/// Computes the byte offsets at which each source line starts.
///
/// The first line always starts at offset 0; every line feed opens a new
/// line directly after it.
fn line_starts(source: &str) -> Vec<usize> {
    std::iter::once(0).chain(source.char_indices()
                                   .filter_map(|(offset, c)| (c == '\n').then_some(offset + 1)))
                      .collect()
}

/// Resolves a byte offset into a 1-based `(line, column)` pair.
fn position(line_starts: &[usize], offset: usize) -> (usize, usize) {
    let line = line_starts.partition_point(|&start| start <= offset);
    let column = offset - line_starts[line - 1] + 1;
    (line, column)
}
