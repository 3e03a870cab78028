/// Exact integer-to-real conversion helpers.
///
/// Integer literals are parsed on the integer path and only widened to the
/// engine's real type when the value survives the trip unchanged. These
/// helpers answer that question for the built-in numeric traits.
pub mod num;
