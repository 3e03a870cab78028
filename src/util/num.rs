/// `2^63`, the first `f64` above every `i64`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;
/// `2^31`, the first `f32` above every `i32`.
const I32_END: f32 = 2_147_483_648.0;

/// Converts an `i64` to `f64` if and only if it is exactly representable.
///
/// The value is widened and converted back; it is accepted when the round
/// trip returns the same integer. Every integer up to `2^53` qualifies, and
/// above that every integer the `f64` grid happens to contain.
///
/// ## Parameters
/// - `value`: The integer to convert.
///
/// ## Returns
/// - `Some(f64)`: The converted value if no precision was lost.
/// - `None`: If widening rounded the value.
///
/// ## Example
/// ```
/// use pratt_calc::util::num::i64_to_f64_exact;
///
/// assert_eq!(i64_to_f64_exact(42), Some(42.0));
/// assert_eq!(i64_to_f64_exact(1 << 60), Some(1_152_921_504_606_846_976.0));
/// assert_eq!(i64_to_f64_exact((1 << 53) + 1), None);
/// assert_eq!(i64_to_f64_exact(i64::MAX), None);
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn i64_to_f64_exact(value: i64) -> Option<f64> {
    let real = value as f64;
    // `i64::MAX` rounds up to 2^63, which the saturating cast maps back to itself.
    (real < I64_END && real as i64 == value).then_some(real)
}

/// Converts an `i32` to `f32` if and only if it is exactly representable.
///
/// ## Example
/// ```
/// use pratt_calc::util::num::i32_to_f32_exact;
///
/// assert_eq!(i32_to_f32_exact(-7), Some(-7.0));
/// assert_eq!(i32_to_f32_exact(16_777_216), Some(16_777_216.0));
/// assert_eq!(i32_to_f32_exact(16_777_217), None);
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn i32_to_f32_exact(value: i32) -> Option<f32> {
    let real = value as f32;
    (real < I32_END && real as i32 == value).then_some(real)
}
