use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
        value::types::{Type, UnknownType},
    },
};

/// Consumes the next token, requiring it to be exactly `kind`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `kind`: The payload-free token kind that must come next.
/// - `what`: Description used in the error message, e.g. `"'then' after
///   condition"`.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns a `ParseError` naming `what` if the next token differs or the
/// input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind,
                                                    what: &'static str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == *kind => Ok(token),
        Some(token) => {
            Err(ParseError::Expected { what,
                                       found: token.lexeme.clone(),
                                       line: token.line,
                                       column: token.column })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `what`: Description used in the error message, e.g. `"identifier after
///   'loop'"`.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` naming `what` if the next token is not an
/// identifier or the input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              what: &'static str)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token { kind: TokenKind::Identifier(name),
                     .. }) => Ok(name.clone()),
        Some(token) => {
            Err(ParseError::Expected { what,
                                       found: token.lexeme.clone(),
                                       line: token.line,
                                       column: token.column })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a typed-declaration keyword (`number`, `text` or `boolean`) into
/// the [`Type`] it names.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a type keyword.
/// - `what`: Description used in the error message, e.g. `"parameter type"`.
///
/// # Returns
/// The named type.
///
/// # Errors
/// Returns a `ParseError` naming `what` if the next token is not a type
/// keyword or the input ends.
pub(in crate::interpreter::parser) fn parse_type_name<'a, I>(tokens: &mut Peekable<I>,
                                                             what: &'static str)
                                                             -> ParseResult<Type>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token @ Token { kind:
                                 TokenKind::NumberKeyword
                                 | TokenKind::TextKeyword
                                 | TokenKind::BooleanKeyword,
                             .. }) => {
            token.lexeme
                 .parse()
                 .map_err(|UnknownType { name }| {
                     ParseError::Expected { what,
                                            found: name,
                                            line: token.line,
                                            column: token.column }
                 })
        },
        Some(token) => {
            Err(ParseError::Expected { what,
                                       found: token.lexeme.clone(),
                                       line: token.line,
                                       column: token.column })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a comma-separated list of items terminated by a closing token.
///
/// This utility is shared by parameter lists and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma to continue the list or the closing token to end it. An immediately
/// encountered closing token produces an empty list; a trailing comma is not
/// permitted. The closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or the closing
///   token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
/// - `what`: Description of the separator used in error messages, e.g.
///   `"',' between parameters"`.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, the separator is
/// missing, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind,
    what: &'static str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();

    if let Some(token) = tokens.peek()
       && token.kind == *closing
    {
        tokens.next();
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);

        match tokens.peek() {
            Some(Token { kind: TokenKind::Comma, .. }) => {
                tokens.next();
            },
            Some(token) if token.kind == *closing => {
                tokens.next();
                break;
            },
            Some(token) => {
                return Err(ParseError::Expected { what,
                                                  found: token.lexeme.clone(),
                                                  line: token.line,
                                                  column: token.column });
            },
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    Ok(items)
}
