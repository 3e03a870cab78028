//! # pratt_calc
//!
//! pratt_calc is an arithmetic expression engine written in Rust.
//! It tokenizes, checks, and evaluates infix expressions with named
//! constants, builtin functions, implicit multiplication and a pluggable
//! numeric type.
//!
//! ```
//! use pratt_calc::evaluate;
//!
//! assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7.0);
//! assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
//! assert_eq!(evaluate("max(1, 4, 2) + 3!").unwrap(), 10.0);
//! ```

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum that represents an expression as a
/// tree. The tree is built by the parser and walked by the evaluator.
pub mod ast;
/// Provides unified error types for every stage of the pipeline.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, validator, builder).
/// - Attaches source positions for context.
/// - Integrates with [`std::error::Error`] through `thiserror`.
pub mod error;
/// Orchestrates the pipeline from source text to value.
///
/// This module ties together tokens, symbol tables, lexing, operator
/// disambiguation, validation, tree building and evaluation.
pub mod interpreter;
/// Numeric customization of the engine.
///
/// Declares [`NumericTraits`](numeric::NumericTraits) and the two provided
/// implementations.
pub mod numeric;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert integers to floating point without silent precision loss.
pub mod util;

pub use interpreter::engine::Parser;

use crate::error::ExpressionError;

/// Evaluates an expression with 64-bit integers and double-precision reals.
///
/// A shortcut for `Parser::<DefaultTraits>::new().evaluate(expression)`.
///
/// # Errors
/// Returns an error if the expression cannot be tokenized, fails validation,
/// or contains a literal that cannot be converted.
///
/// # Examples
/// ```
/// use pratt_calc::{error::ExpressionError, evaluate};
///
/// assert_eq!(evaluate("-2^2").unwrap(), -4.0);
///
/// // Parentheses must balance.
/// assert!(matches!(evaluate("(1 + 2"),
///                  Err(ExpressionError::UnbalancedParentheses { .. })));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, ExpressionError> {
    Parser::<numeric::DefaultTraits>::new().evaluate(expression)
}
