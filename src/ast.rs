use crate::{interpreter::token::id::Id, numeric::NumericTraits};

/// A leaf value of the expression tree.
///
/// Integer literals keep their integer value until evaluation, so the
/// conversion to the real type happens in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Atom<T: NumericTraits> {
    /// An integer literal.
    Integer(T::Integer),
    /// A real literal or a named constant.
    Real(T::Real),
}

/// A node of the expression tree built by the
/// [`Builder`](crate::interpreter::parser::core::Builder).
///
/// Every operator node owns its operands; a tree is evaluated once and then
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T: NumericTraits> {
    /// A number or constant.
    Atom(Atom<T>),
    /// A prefix or postfix operator applied to one operand.
    Unary {
        /// `Plus`, `Minus` or `Bang`.
        op:      Id,
        /// The operand.
        operand: Box<Self>,
    },
    /// An infix operator.
    Binary {
        /// `Plus`, `Minus`, `Asterisk`, `Slash` or `Caret`.
        op:    Id,
        /// Left-hand operand.
        left:  Box<Self>,
        /// Right-hand operand.
        right: Box<Self>,
    },
    /// A builtin function call.
    Call {
        /// Identity of the function.
        function:  Id,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
}

impl<T: NumericTraits> Node<T> {
    /// Wraps an operand in a unary node.
    #[must_use]
    pub fn unary(op: Id, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Joins two operands with a binary node.
    #[must_use]
    pub fn binary(op: Id, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }
}
