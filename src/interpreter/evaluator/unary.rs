use num_traits::Float;

use crate::interpreter::token::id::Id;

/// Applies a prefix or postfix operator to an evaluated operand.
///
/// Supported operators:
/// - `+`: identity.
/// - `-`: negation.
/// - `!`: factorial, see [`factorial`].
///
/// Unknown identities give NaN.
#[must_use]
pub fn apply_unary<R: Float>(op: Id, value: R) -> R {
    match op {
        Id::Plus => value,
        Id::Minus => -value,
        Id::Bang => factorial(value),
        _ => R::nan(),
    }
}

/// Computes `x!` for a non-negative integral `x`.
///
/// Negative and non-integral inputs give NaN. The product stops growing once
/// it overflows to infinity, so huge inputs return quickly.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::evaluator::unary::factorial;
///
/// assert_eq!(factorial(5.0_f64), 120.0);
/// assert_eq!(factorial(0.0_f64), 1.0);
/// assert!(factorial(-1.0_f64).is_nan());
/// assert!(factorial(2.5_f64).is_nan());
/// assert_eq!(factorial(1e6_f64), f64::INFINITY);
/// ```
#[must_use]
pub fn factorial<R: Float>(x: R) -> R {
    if x < R::zero() || x.fract() != R::zero() {
        return R::nan();
    }

    let mut result = R::one();
    let mut factor = R::one() + R::one();
    while factor <= x && result.is_finite() {
        result = result * factor;
        factor = factor + R::one();
    }
    result
}
