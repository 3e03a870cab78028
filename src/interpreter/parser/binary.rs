use crate::{
    ast::Node,
    error::ExpressionError,
    interpreter::{
        parser::core::{Builder, ParseResult, Subtree},
        token::{core::Token, info::Facets},
    },
    numeric::NumericTraits,
};

impl<'t, 'src, T: NumericTraits> Builder<'t, 'src, T> {
    /// Combines `left` with the operator `token` that follows it.
    ///
    /// Binary operators build their right operand with their own binding
    /// power, which makes them left-associative. Right-to-left operators use
    /// one less, so an operator of the same kind on the right binds first and
    /// `2^3^2` reads as `2^(3^2)`.
    ///
    /// Postfix operators wrap `left` directly.
    ///
    /// # Parameters
    /// - `left`: The operand built so far.
    /// - `token`: The operator just consumed.
    ///
    /// # Returns
    /// The combined subtree.
    ///
    /// # Errors
    /// `UnexpectedToken` when `token` is not an infix or postfix operator,
    /// `NestingTooDeep` when the combined tree grows too high, and anything
    /// building the right operand reports.
    pub(crate) fn led(&mut self,
                      left: Subtree<T>,
                      token: &'t Token<'src, T::Real>)
                      -> ParseResult<Subtree<T>> {
        let op = token.info().id();

        if token.has(Facets::BINARY) {
            let bp = token.binding_power();
            let right_bp = if token.has(Facets::RIGHT_TO_LEFT) { bp.saturating_sub(1) } else { bp };
            let right = self.build(right_bp)?;
            return Subtree::join(Node::binary(op, left.node, right.node),
                                 left.height.max(right.height),
                                 token.position());
        }

        if token.has(Facets::UNARY | Facets::RIGHT_TO_LEFT) {
            return Subtree::join(Node::unary(op, left.node), left.height, token.position());
        }

        Err(ExpressionError::UnexpectedToken { position: token.position() })
    }
}
