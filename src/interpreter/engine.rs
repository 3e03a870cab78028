use log::debug;

use crate::{
    ast::Node,
    error::ExpressionError,
    interpreter::{
        lexer::tokenize, parser::core::Builder, specify::specify, symbols::SymbolTable,
        validator::validate,
    },
    numeric::{DefaultTraits, NumericTraits},
};

/// The expression engine.
///
/// Owns the read-only symbol tables and runs the whole pipeline for every
/// call: tokenize, specify, validate, build, evaluate. No state is kept
/// between calls, so evaluating an expression twice gives the same result and
/// one `Parser` can be shared between threads.
///
/// `T` selects the numeric types; see [`NumericTraits`].
///
/// # Example
/// ```
/// use pratt_calc::{Parser, error::ExpressionError};
///
/// let parser = Parser::<pratt_calc::numeric::DefaultTraits>::new();
///
/// assert_eq!(parser.evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(parser.evaluate("2(3 + 1)").unwrap(), 8.0);
/// assert_eq!(parser.evaluate("2 3"),
///            Err(ExpressionError::TwoConsecutiveNumbers { position: 2 }));
/// ```
#[derive(Debug, Clone)]
pub struct Parser<T: NumericTraits = DefaultTraits> {
    symbols: SymbolTable<T::Real>,
}

impl<T: NumericTraits> Parser<T> {
    /// Creates an engine with the builtin operators, functions and constants.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: SymbolTable::new() }
    }

    /// The symbol tables used by this engine.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable<T::Real> {
        &self.symbols
    }

    /// Turns `expression` into a validated expression tree without
    /// evaluating it.
    ///
    /// # Errors
    /// - [`ExpressionError::Lexical`] when scanning fails.
    /// - [`ExpressionError::EmptyExpression`] for blank input.
    /// - Any structural error found by the validator.
    /// - Literal conversion errors found while building.
    pub fn parse(&self, expression: &str) -> Result<Node<T>, ExpressionError> {
        let mut tokens = tokenize(expression, &self.symbols)?;
        let implicit = specify(&mut tokens);
        validate(&tokens)?;
        Builder::<T>::new(&tokens, &implicit).finish()
    }

    /// Evaluates `expression`.
    ///
    /// # Parameters
    /// - `expression`: The source text. Whitespace between tokens is ignored.
    ///
    /// # Returns
    /// The value in the real type of `T`. Arithmetic follows IEEE 754, so the
    /// result may be infinite or NaN.
    ///
    /// # Errors
    /// Everything [`parse`](Self::parse) reports. Evaluation itself cannot
    /// fail.
    pub fn evaluate(&self, expression: &str) -> Result<T::Real, ExpressionError> {
        let tree = self.parse(expression)?;
        let value = tree.evaluate();
        debug!("{expression:?} = {value:?}");
        Ok(value)
    }
}

impl<T: NumericTraits> Default for Parser<T> {
    fn default() -> Self {
        Self::new()
    }
}
