use std::iter::Peekable;

use crate::{
    ast::{Expression, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators:
/// - `-` (numeric negation)
/// - `!` / `not` (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed
/// as `!(-x)`. If no prefix operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expression::Unary`] node or a primary expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token { kind: TokenKind::Minus, .. }) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expression::Unary { operator: UnaryOperator::Negate,
                               operand:  Box::new(operand), })
    } else if let Some(Token { kind: TokenKind::Not, .. }) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expression::Unary { operator: UnaryOperator::Not,
                               operand:  Box::new(operand), })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric, text and boolean literals
/// - identifiers
/// - function calls (an identifier directly followed by `(`)
/// - parenthesised subexpressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | IDENT "(" arguments ")"
///              | IDENT
///              | "(" expression ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expression`], or a `ParseError` on failure.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match &token.kind {
        TokenKind::Number(raw) => Ok(Expression::Literal(LiteralValue::Number(raw.clone()))),
        TokenKind::Text(content) => Ok(Expression::Literal(LiteralValue::Text(content.clone()))),
        TokenKind::Boolean(value) => Ok(Expression::Literal(LiteralValue::Boolean(*value))),

        TokenKind::Identifier(name) => {
            if let Some(Token { kind: TokenKind::LeftParen, .. }) = tokens.peek() {
                parse_call(tokens, name.clone())
            } else {
                Ok(Expression::Identifier { name: name.clone() })
            }
        },

        TokenKind::LeftParen => {
            let expression = parse_expression(tokens)?;
            match tokens.next() {
                Some(Token { kind: TokenKind::RightParen, .. }) => Ok(expression),
                Some(token) => {
                    Err(ParseError::Expected { what:   "')'",
                                               found:  token.lexeme.clone(),
                                               line:   token.line,
                                               column: token.column, })
                },
                None => Err(ParseError::UnexpectedEndOfInput),
            }
        },

        _ => {
            Err(ParseError::UnexpectedToken { lexeme: token.lexeme.clone(),
                                              line:   token.line,
                                              column: token.column, })
        },
    }
}

/// Parses the argument list of a function call.
///
/// The iterator is positioned at the `(` following the function name.
/// Arguments are full expressions separated by commas and terminated by
/// `)`; an empty argument list is legal.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `name`: The already-consumed function name.
///
/// # Returns
/// An [`Expression::Call`] node.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, name: String) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next(); // consume '('

    let arguments = parse_comma_separated(tokens,
                                          parse_expression,
                                          &TokenKind::RightParen,
                                          "',' between arguments")?;

    Ok(Expression::Call { name, arguments })
}
