/// Core tree building.
///
/// Holds the [`Builder`](core::Builder), its cursor over the primary and
/// implicit token sequences, and the binding-power loop.
pub mod core;

/// Prefix handling.
///
/// Turns the token that starts an operand into a node: numbers, constants,
/// parentheses, function calls and prefix operators.
pub mod unary;

/// Infix and postfix handling.
///
/// Combines an already built left operand with the operator that follows it.
pub mod binary;
