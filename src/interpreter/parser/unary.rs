use log::trace;

use crate::{
    ast::{Atom, Node},
    error::ExpressionError,
    interpreter::{
        parser::core::{Builder, ParseResult, Subtree},
        token::{
            core::{Payload, Token},
            id::Id,
            info::Facets,
        },
    },
    numeric::NumericTraits,
};

impl<'t, 'src, T: NumericTraits> Builder<'t, 'src, T> {
    /// Builds the operand that `token` starts.
    ///
    /// Handles:
    /// - integer and real literals,
    /// - named constants,
    /// - parenthesized expressions,
    /// - function calls,
    /// - prefix `+` and `-`, which bind with their alternate binding power.
    ///
    /// # Parameters
    /// - `token`: The token just consumed.
    ///
    /// # Returns
    /// The subtree for the operand.
    ///
    /// # Errors
    /// - `LiteralTooLarge` for integer literals the numeric traits cannot
    ///   hold or widen exactly.
    /// - `InvalidLiteral` for real literals the numeric traits reject.
    /// - `MissingOperand` when a terminator stands where an operand belongs.
    /// - `NestingTooDeep` when the operand nests past the builder's limits.
    /// - `UnexpectedToken` for any other token in operand position.
    pub(crate) fn nud(&mut self, token: &'t Token<'src, T::Real>) -> ParseResult<Subtree<T>> {
        match token.payload() {
            Payload::Literal(literal) => literal_atom(literal, token).map(Subtree::leaf),
            Payload::Constant(value) => Ok(Subtree::leaf(Node::Atom(Atom::Real(*value)))),
            _ if token.is(Id::OpenParen) => self.nud_group(),
            _ if token.has(Facets::FUNCTION) => self.nud_call(token),
            _ if token.has(Facets::UNARY) && !token.has(Facets::RIGHT_TO_LEFT) => {
                let operand = self.build(token.binding_power())?;
                Subtree::join(Node::unary(token.info().id(), operand.node),
                              operand.height,
                              token.position())
            },
            _ if token.has(Facets::TERMINATOR) => {
                Err(ExpressionError::MissingOperand { position: token.position() })
            },
            _ => Err(ExpressionError::UnexpectedToken { position: token.position() }),
        }
    }

    /// Builds the inside of a parenthesized group.
    ///
    /// The closing parenthesis is consumed when present. A group left open at
    /// the end of the input is closed implicitly.
    fn nud_group(&mut self) -> ParseResult<Subtree<T>> {
        let inner = self.build(0)?;
        if self.peek().is_some_and(|next| next.is(Id::CloseParen)) {
            self.advance();
        }
        Ok(inner)
    }

    /// Builds a call of the function named by `token`.
    ///
    /// Arguments are full expressions separated by `,`; the call ends at the
    /// matching `)`.
    fn nud_call(&mut self, token: &'t Token<'src, T::Real>) -> ParseResult<Subtree<T>> {
        let Payload::Descriptor(descriptor) = token.payload() else {
            return Err(ExpressionError::UnexpectedToken { position: token.position() });
        };

        if !self.advance().is_some_and(|next| next.is(Id::OpenParen)) {
            return Err(ExpressionError::InvalidFunctionCall { name:     descriptor.name,
                                                              position: token.position(), });
        }

        let mut arguments = Vec::new();
        if self.peek().is_some_and(|next| next.is(Id::CloseParen)) {
            self.advance();
        } else {
            loop {
                arguments.push(self.build(0)?);
                match self.advance() {
                    Some(next) if next.is(Id::Comma) => {},
                    Some(next) if next.is(Id::CloseParen) => break,
                    Some(next) => {
                        return Err(ExpressionError::UnexpectedToken { position: next.position() });
                    },
                    None => {
                        return Err(ExpressionError::UnbalancedParentheses { position:
                                                                                self.end_position() });
                    },
                }
            }
        }

        let arity = descriptor.arity();
        if !arity.check(arguments.len()) {
            return Err(ExpressionError::ArgumentCountMismatch { name:     descriptor.name,
                                                                expected: arity.to_string(),
                                                                found:    arguments.len(), });
        }

        trace!("call {} with {} arguments", descriptor.name, arguments.len());
        let height = arguments.iter().map(|argument| argument.height).max().unwrap_or(0);
        let arguments = arguments.into_iter().map(|argument| argument.node).collect();
        Subtree::join(Node::Call { function: token.info().id(),
                                   arguments },
                      height,
                      token.position())
    }
}

/// Converts literal text with the numeric traits.
///
/// Integer literals must fit the integer type and widen to the real type
/// without loss.
fn literal_atom<T: NumericTraits, R>(literal: &str, token: &Token<'_, R>) -> ParseResult<Node<T>> {
    let position = token.position();

    if token.has(Facets::INTEGER) {
        let too_large = || ExpressionError::LiteralTooLarge { literal: literal.to_string(),
                                                              position };
        let value = T::string_to_integer(literal).ok_or_else(too_large)?;
        T::integer_to_real(value).ok_or_else(too_large)?;
        return Ok(Node::Atom(Atom::Integer(value)));
    }

    T::string_to_real(literal).map(|value| Node::Atom(Atom::Real(value)))
                              .ok_or_else(|| ExpressionError::InvalidLiteral { literal:
                                                                                   literal.to_string(),
                                                                               position })
}
