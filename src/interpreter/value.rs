/// Static types.
///
/// Defines the `Type` enum covering the three declarable ground types plus
/// the internal void type, along with compatibility checking and parsing of
/// the reserved type words.
pub mod types;

pub mod core;
