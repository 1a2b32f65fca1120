/// The evaluator module executes AST nodes and performs their effects.
///
/// The evaluator walks the program tree, executes statements in order,
/// evaluates expressions, manages the scope stack, and writes printed lines
/// to the output sink. It is the execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions by matching on node tags.
/// - Manages variable and function scopes, including loop and call frames.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each carrying its kind, the exact source lexeme, and the 1-based
/// line/column of its first character. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind and source location.
/// - Decodes numeric, text and boolean literal payloads.
/// - Reports lexical errors for unexpected characters and unterminated
///   strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence produced by the lexer and
/// constructs a program tree by recursive descent with a fixed operator
/// precedence hierarchy.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates the surface grammar, reporting the offending token on error.
/// - Handles statement dispatch, block terminators and parameter lists.
pub mod parser;
/// The value module defines the runtime data model.
///
/// This module declares the static `Type` variants, the runtime `Value`
/// variants, type compatibility checking, and the canonical display form
/// used for printing.
///
/// # Responsibilities
/// - Defines the `Type` and `Value` enums.
/// - Implements compatibility checks and type-name parsing.
/// - Provides the canonical string form of every value.
pub mod value;
