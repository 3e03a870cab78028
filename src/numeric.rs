use std::{fmt::Debug, ops::Range};

use num_traits::{Float, FloatConst, PrimInt};

use crate::util::num::{i32_to_f32_exact, i64_to_f64_exact};

/// Numeric customization point of the engine.
///
/// A traits type decides which integer and real types the engine computes
/// with and how literal text becomes a value. Literals are kept as source
/// text until the expression tree is built, so the conversion happens exactly
/// once, with the types chosen here.
///
/// The real type must provide the usual floating-point operations
/// ([`Float`]) and the named constants `pi`, `e` and `tau` ([`FloatConst`]).
///
/// # Example
/// ```
/// use pratt_calc::numeric::{DefaultTraits, NumericTraits};
///
/// assert_eq!(DefaultTraits::string_to_integer("42"), Some(42));
/// assert_eq!(DefaultTraits::string_to_real("2.5"), Some(2.5));
/// assert_eq!(DefaultTraits::substring_to_integer("x=17;", 2..4), Some(17));
/// ```
pub trait NumericTraits {
    /// Type produced by literals without a decimal point.
    type Integer: PrimInt + Debug;
    /// Type every expression finally evaluates to.
    type Real: Float + FloatConst + Debug;

    /// Parses a whole literal as an integer.
    fn string_to_integer(literal: &str) -> Option<Self::Integer>;

    /// Parses a whole literal as a real.
    fn string_to_real(literal: &str) -> Option<Self::Real>;

    /// Widens an integer to the real type. Returns `None` when the value
    /// cannot be represented exactly.
    fn integer_to_real(value: Self::Integer) -> Option<Self::Real>;

    /// Parses the byte range `range` of `source` as an integer.
    ///
    /// Out-of-bounds ranges and ranges that split a character yield `None`.
    fn substring_to_integer(source: &str, range: Range<usize>) -> Option<Self::Integer> {
        source.get(range).and_then(Self::string_to_integer)
    }

    /// Parses the byte range `range` of `source` as a real.
    fn substring_to_real(source: &str, range: Range<usize>) -> Option<Self::Real> {
        source.get(range).and_then(Self::string_to_real)
    }
}

/// 64-bit signed integers and double-precision reals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultTraits;

impl NumericTraits for DefaultTraits {
    type Integer = i64;
    type Real = f64;

    fn string_to_integer(literal: &str) -> Option<i64> {
        literal.parse().ok()
    }

    fn string_to_real(literal: &str) -> Option<f64> {
        literal.parse().ok()
    }

    fn integer_to_real(value: i64) -> Option<f64> {
        i64_to_f64_exact(value)
    }
}

/// 32-bit signed integers and single-precision reals.
///
/// # Example
/// ```
/// use pratt_calc::{Parser, numeric::SinglePrecision};
///
/// let parser = Parser::<SinglePrecision>::new();
/// assert_eq!(parser.evaluate("1.5 * 4").unwrap(), 6.0_f32);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePrecision;

impl NumericTraits for SinglePrecision {
    type Integer = i32;
    type Real = f32;

    fn string_to_integer(literal: &str) -> Option<i32> {
        literal.parse().ok()
    }

    fn string_to_real(literal: &str) -> Option<f32> {
        literal.parse().ok()
    }

    fn integer_to_real(value: i32) -> Option<f32> {
        i32_to_f32_exact(value)
    }
}
