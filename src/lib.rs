//! # simplelang
//!
//! simplelang is a small, statically-typed teaching language with three
//! ground types (number, text, boolean), conditionals, counted loops and
//! first-order procedures. This crate scans, parses and interprets
//! simplelang programs, producing their printed output or the first
//! diagnostic the pipeline encounters.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::Diagnostic,
    interpreter::{evaluator::core::Evaluator, lexer, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expression` enums and related
/// types that represent the syntactic structure of source code as a tree.
/// The tree is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression variants for all language constructs.
/// - Defines the operator enums used by both the parser and the evaluator.
/// - Keeps literal payloads and their types structurally in sync.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while scanning,
/// parsing or evaluating code, and the `Diagnostic` umbrella the driver
/// receives. Scanner errors carry line/column pairs; parser errors identify
/// the offending lexeme; runtime errors carry the failure description.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage.
/// - Attaches source locations where the stage has them.
/// - Tags every error with its stage for driver output.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, parser, evaluator and value model
/// to provide a complete runtime for simplelang programs.
///
/// # Responsibilities
/// - Coordinates the pipeline stages: scan, parse, evaluate.
/// - Provides the public entry points for each stage.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a complete program from source text.
///
/// The source is scanned, parsed and executed in order; printed lines go to
/// `output`. The pipeline stops at the first problem and returns it as a
/// [`Diagnostic`] tagged with the stage that raised it. Output produced
/// before a runtime failure stays in the sink.
///
/// # Errors
/// Returns the first lexical, parse or runtime error the pipeline
/// encounters.
///
/// # Examples
/// ```
/// use simplelang::run_program;
///
/// let mut output = Vec::new();
/// run_program("number x = 10\nnumber y = 5\nprint x + y", &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "15\n");
///
/// // An undefined name surfaces as a runtime diagnostic.
/// let mut output = Vec::new();
/// let result = run_program("print missing", &mut output);
/// assert!(result.is_err());
/// ```
pub fn run_program<W: Write>(source: &str, output: &mut W) -> Result<(), Diagnostic> {
    let tokens = lexer::scan(source)?;
    let program = parse_program(&tokens)?;

    let mut evaluator = Evaluator::new(output);
    evaluator.run(&program)?;

    Ok(())
}
