use std::iter::Peekable;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a program tree.
///
/// Statements are parsed in source order until the tokens run out; the
/// first syntax problem aborts parsing.
///
/// # Errors
/// Returns a [`ParseError`] identifying the offending token.
///
/// # Example
/// ```
/// use simplelang::interpreter::{lexer::scan, parser::core::parse_program};
///
/// let tokens = scan("number x = 1\nprint x").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut tokens = tokens.iter().peekable();
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(&mut tokens)?);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_logical_or(tokens)
}
