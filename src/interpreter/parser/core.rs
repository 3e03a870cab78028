use std::marker::PhantomData;

use log::{debug, trace};

use crate::{
    ast::Node,
    error::ExpressionError,
    interpreter::{
        specify::ImplicitToken,
        token::{core::Token, id::Id},
    },
    numeric::NumericTraits,
};

pub type ParseResult<T> = Result<T, ExpressionError>;

/// Deepest recursion the builder enters: nested parentheses, prefix
/// operators, right-associative chains and call arguments each add a level.
pub const MAX_NESTING: usize = 256;

/// Highest expression tree the builder produces. Long left-associative
/// chains such as `1+1+...+1` grow the tree without recursing.
pub const MAX_HEIGHT: usize = 1024;

/// A built subtree together with its height.
///
/// Evaluating and dropping a tree both recurse once per level, so the height
/// is tracked while building and capped at [`MAX_HEIGHT`].
pub(crate) struct Subtree<T: NumericTraits> {
    pub(crate) node:   Node<T>,
    pub(crate) height: usize,
}

impl<T: NumericTraits> Subtree<T> {
    /// A single node without children.
    pub(crate) const fn leaf(node: Node<T>) -> Self {
        Self { node, height: 1 }
    }

    /// A node one level above its highest child.
    ///
    /// # Errors
    /// `NestingTooDeep` at `position` when the result exceeds [`MAX_HEIGHT`].
    pub(crate) fn join(node: Node<T>, child_height: usize, position: usize) -> ParseResult<Self> {
        let height = child_height + 1;
        if height > MAX_HEIGHT {
            return Err(ExpressionError::NestingTooDeep { position });
        }
        Ok(Self { node, height })
    }
}

/// Builds an expression tree from a specified token sequence.
///
/// The builder reads two sequences at once: the primary tokens and the side
/// list of implicit multiplications produced by
/// [`specify`](crate::interpreter::specify::specify). Whenever the next
/// implicit operator is recorded for the current primary index, it is
/// returned before the primary token, so the merged stream reads as if the
/// `*` had been written in the source.
///
/// Precedence is resolved by binding power: each level keeps extending its
/// left operand while the next operator binds tighter than the minimum it
/// was entered with. Recursion is bounded by [`MAX_NESTING`] and tree height
/// by [`MAX_HEIGHT`].
///
/// # Example
/// ```
/// use pratt_calc::{
///     interpreter::{
///         lexer::tokenize, parser::core::Builder, specify::specify, symbols::SymbolTable,
///     },
///     numeric::DefaultTraits,
/// };
///
/// let symbols = SymbolTable::<f64>::new();
/// let mut tokens = tokenize("2 + 3 * 4", &symbols).unwrap();
/// let implicit = specify(&mut tokens);
///
/// let tree = Builder::<DefaultTraits>::new(&tokens, &implicit).finish().unwrap();
/// assert_eq!(tree.evaluate(), 14.0);
/// ```
pub struct Builder<'t, 'src, T: NumericTraits> {
    tokens:         &'t [Token<'src, T::Real>],
    implicit:       &'t [ImplicitToken<'src, T::Real>],
    index:          usize,
    implicit_index: usize,
    nesting:        usize,
    traits:         PhantomData<T>,
}

impl<'t, 'src, T: NumericTraits> Builder<'t, 'src, T> {
    /// Creates a builder positioned before the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token<'src, T::Real>],
                     implicit: &'t [ImplicitToken<'src, T::Real>])
                     -> Self {
        Self { tokens,
               implicit,
               index: 0,
               implicit_index: 0,
               nesting: 0,
               traits: PhantomData }
    }

    /// Builds the whole expression.
    ///
    /// # Errors
    /// - Anything the prefix and infix handlers report.
    /// - [`ExpressionError::NestingTooDeep`] past [`MAX_NESTING`] or
    ///   [`MAX_HEIGHT`].
    /// - [`ExpressionError::TrailingTokens`] when tokens other than the end
    ///   marker remain after a complete expression.
    pub fn finish(mut self) -> ParseResult<Node<T>> {
        let tree = self.build(0)?;

        match self.peek() {
            Some(token) if !token.is(Id::Eoex) => {
                Err(ExpressionError::TrailingTokens { position: token.position() })
            },
            _ => {
                debug!("built tree of height {} from {} tokens", tree.height, self.index);
                Ok(tree.node)
            },
        }
    }

    /// Builds the longest expression whose operators all bind tighter than
    /// `min_bp`.
    ///
    /// # Parameters
    /// - `min_bp`: Binding power of the operator waiting for this operand, or
    ///   `0` at the top level and inside parentheses.
    ///
    /// # Returns
    /// The built subtree. The cursor is left on the first operator that did
    /// not bind.
    pub(crate) fn build(&mut self, min_bp: u8) -> ParseResult<Subtree<T>> {
        let token = self.advance()
                        .ok_or(ExpressionError::MissingOperand { position: self.end_position() })?;
        if self.nesting == MAX_NESTING {
            return Err(ExpressionError::NestingTooDeep { position: token.position() });
        }

        self.nesting += 1;
        let built = self.build_from(token, min_bp);
        self.nesting -= 1;
        built
    }

    fn build_from(&mut self, token: &'t Token<'src, T::Real>, min_bp: u8) -> ParseResult<Subtree<T>> {
        let mut left = self.nud(token)?;

        while let Some(next) = self.peek()
              && !next.is(Id::Eoex)
              && next.binding_power() > min_bp
        {
            trace!("{:?} binds at {} over {min_bp}", next.info().id(), next.binding_power());
            self.advance();
            left = self.led(left, next)?;
        }

        Ok(left)
    }

    /// The next token of the merged stream, without consuming it.
    pub(crate) fn peek(&self) -> Option<&'t Token<'src, T::Real>> {
        if let Some(implicit) = self.pending_implicit() {
            return Some(&implicit.token);
        }
        self.tokens.get(self.index)
    }

    /// Consumes and returns the next token of the merged stream.
    pub(crate) fn advance(&mut self) -> Option<&'t Token<'src, T::Real>> {
        if let Some(implicit) = self.pending_implicit() {
            self.implicit_index += 1;
            return Some(&implicit.token);
        }
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    fn pending_implicit(&self) -> Option<&'t ImplicitToken<'src, T::Real>> {
        self.implicit
            .get(self.implicit_index)
            .filter(|implicit| implicit.index == self.index)
    }

    /// Position reported when the stream runs out.
    pub(crate) fn end_position(&self) -> usize {
        self.tokens.last().map_or(0, Token::position)
    }
}
