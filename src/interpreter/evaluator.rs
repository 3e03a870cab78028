/// Tree walking and binary operators.
///
/// Contains [`Node::evaluate`](crate::ast::Node::evaluate), the entry point of
/// evaluation, and the arithmetic of the infix operators.
pub mod core;

/// Unary operator evaluation.
///
/// Prefix sign operators and the postfix factorial.
pub mod unary;

/// Builtin function evaluation.
///
/// Dispatches a call on the function identity and applies it to already
/// evaluated arguments.
pub mod function;
