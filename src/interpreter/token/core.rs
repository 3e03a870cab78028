use crate::interpreter::{
    symbols::Descriptor,
    token::{
        id::Id,
        info::{Facets, TokenInfo},
    },
};

/// Data attached to a token beyond its packed descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'src, R> {
    /// Punctuation and the end marker carry nothing.
    Empty,
    /// Source text of a number literal, converted when the tree is built.
    Literal(&'src str),
    /// Value of a named constant.
    Constant(R),
    /// Copy of the operator or function table entry.
    Descriptor(Descriptor),
}

/// A lexical token.
///
/// `R` is the real type of the numeric traits in use; it only appears in
/// constant payloads. Tokens borrow literal text from the source, so a token
/// sequence never outlives the expression it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'src, R> {
    info:     TokenInfo,
    payload:  Payload<'src, R>,
    position: usize,
}

impl<'src, R> Token<'src, R> {
    /// Creates a token from its parts.
    #[must_use]
    pub const fn new(info: TokenInfo, payload: Payload<'src, R>, position: usize) -> Self {
        Self { info,
               payload,
               position }
    }

    /// The end-of-expression marker placed at `position`.
    #[must_use]
    pub const fn end_of_expression(position: usize) -> Self {
        Self { info: TokenInfo::new(Facets::SYMBOL.union(Facets::TERMINATOR), Id::Eoex),
               payload: Payload::Empty,
               position }
    }

    /// The empty sentinel standing before the first token.
    #[must_use]
    pub const fn sentinel() -> Self {
        Self { info:     TokenInfo::EMPTY,
               payload:  Payload::Empty,
               position: 0, }
    }

    /// The packed descriptor.
    #[must_use]
    pub const fn info(&self) -> TokenInfo {
        self.info
    }

    /// The attached payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload<'src, R> {
        &self.payload
    }

    /// Byte offset of the token in the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// `true` when all of `facets` are set.
    #[must_use]
    pub const fn has(&self, facets: Facets) -> bool {
        self.info.has(facets)
    }

    /// `true` when the identity equals `id`.
    #[must_use]
    pub const fn is(&self, id: Id) -> bool {
        self.info.is(id)
    }

    /// `true` for the empty sentinel.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.info.is_empty()
    }

    /// The binding power currently in effect.
    #[must_use]
    pub const fn binding_power(&self) -> u8 {
        self.info.binding_power()
    }

    /// Function name or operator symbol, when the payload carries one.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match &self.payload {
            Payload::Descriptor(descriptor) => Some(descriptor.name),
            _ => None,
        }
    }

    /// Commits an operator that may be read both ways to one reading.
    ///
    /// The binary reading keeps the primary binding power. The unary reading
    /// switches to the alternate one.
    pub(crate) const fn resolve_operator(&mut self, binary: bool) {
        if binary {
            self.info.remove(Facets::UNARY);
        } else {
            self.info.remove(Facets::BINARY);
            let alt = self.info.alt_binding_power();
            self.info.set_binding_power(alt);
        }
    }
}
