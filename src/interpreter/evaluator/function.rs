use num_traits::Float;

use crate::interpreter::token::id::Id;

/// Applies a builtin function to evaluated arguments.
///
/// The argument count has already been checked against the function's arity;
/// a mismatching slice, like an unknown identity, gives NaN.
///
/// | function | result                               |
/// |----------|--------------------------------------|
/// | `sqrt`   | square root                          |
/// | `sin`, `cos`, `tan` | trigonometry in radians   |
/// | `cot`    | `1 / tan(x)`                         |
/// | `ln`     | natural logarithm                    |
/// | `exp`    | `e^x`                                |
/// | `abs`    | absolute value                       |
/// | `pow`    | `x^y`                                |
/// | `avg`    | arithmetic mean of all arguments     |
/// | `min`, `max` | smallest or largest argument     |
///
/// Domain violations follow IEEE 754: `sqrt(-1)` and `ln(-1)` are NaN,
/// `ln(0)` is negative infinity.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::{evaluator::function::call, token::id::Id};
///
/// assert_eq!(call(Id::Pow, &[2.0, 3.0]), 8.0);
/// assert_eq!(call(Id::Avg, &[1.0, 2.0, 6.0]), 3.0);
/// assert_eq!(call(Id::Max, &[1.0, 7.0, 6.0]), 7.0);
/// assert!(call(Id::Sqrt, &[-1.0_f64]).is_nan());
/// ```
#[must_use]
pub fn call<R: Float>(function: Id, arguments: &[R]) -> R {
    match (function, arguments) {
        (Id::Sqrt, [x]) => x.sqrt(),
        (Id::Sin, [x]) => x.sin(),
        (Id::Cos, [x]) => x.cos(),
        (Id::Tan, [x]) => x.tan(),
        (Id::Cot, [x]) => x.tan().recip(),
        (Id::Ln, [x]) => x.ln(),
        (Id::Exp, [x]) => x.exp(),
        (Id::Abs, [x]) => x.abs(),
        (Id::Pow, [x, y]) => x.powf(*y),
        (Id::Avg, [_, ..]) => average(arguments),
        (Id::Min, [first, rest @ ..]) => rest.iter().fold(*first, |acc, x| acc.min(*x)),
        (Id::Max, [first, rest @ ..]) => rest.iter().fold(*first, |acc, x| acc.max(*x)),
        _ => R::nan(),
    }
}

fn average<R: Float>(values: &[R]) -> R {
    let (sum, count) = values.iter()
                             .fold((R::zero(), R::zero()), |(sum, count), x| (sum + *x, count + R::one()));
    sum / count
}
