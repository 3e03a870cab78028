use num_traits::Float;

use crate::{
    ast::{Atom, Node},
    interpreter::{
        evaluator::{function::call, unary::apply_unary},
        token::id::Id,
    },
    numeric::NumericTraits,
};

impl<T: NumericTraits> Node<T> {
    /// Evaluates the tree rooted at this node.
    ///
    /// Children are evaluated before their parent, arguments in source order.
    /// Evaluation cannot fail: arithmetic follows IEEE 754, so division by
    /// zero gives an infinity and out-of-domain arguments give NaN.
    ///
    /// # Returns
    /// The value of the expression in the real type of `T`.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::{
    ///     ast::{Atom, Node},
    ///     interpreter::token::id::Id,
    ///     numeric::DefaultTraits,
    /// };
    ///
    /// let tree = Node::<DefaultTraits>::binary(Id::Slash,
    ///                                          Node::Atom(Atom::Integer(1)),
    ///                                          Node::Atom(Atom::Real(0.0)));
    /// assert_eq!(tree.evaluate(), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> T::Real {
        match self {
            Self::Atom(atom) => evaluate_atom::<T>(atom),
            Self::Unary { op, operand } => apply_unary(*op, operand.evaluate()),
            Self::Binary { op, left, right } => {
                apply_binary(*op, left.evaluate(), right.evaluate())
            },
            Self::Call { function, arguments } => {
                let values: Vec<T::Real> = arguments.iter().map(Self::evaluate).collect();
                call(*function, &values)
            },
        }
    }
}

fn evaluate_atom<T: NumericTraits>(atom: &Atom<T>) -> T::Real {
    match atom {
        Atom::Integer(value) => T::integer_to_real(*value).unwrap_or_else(Float::nan),
        Atom::Real(value) => *value,
    }
}

/// Applies an infix operator to two evaluated operands.
///
/// `^` is [`Float::powf`]. Unknown identities give NaN.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::{evaluator::core::apply_binary, token::id::Id};
///
/// assert_eq!(apply_binary(Id::Minus, 7.0, 2.0), 5.0);
/// assert_eq!(apply_binary(Id::Caret, 2.0, 10.0), 1024.0);
/// ```
#[must_use]
pub fn apply_binary<R: Float>(op: Id, left: R, right: R) -> R {
    match op {
        Id::Plus => left + right,
        Id::Minus => left - right,
        Id::Asterisk => left * right,
        Id::Slash => left / right,
        Id::Caret => left.powf(right),
        _ => R::nan(),
    }
}
