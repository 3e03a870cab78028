use bitflags::bitflags;

use crate::interpreter::token::id::Id;

bitflags! {
    /// Independent boolean facets of a token.
    ///
    /// A token may carry several at once: a named constant is both `NUMBER`
    /// and `CONSTANT`, an integer literal is `NUMBER`, `STRING` and
    /// `INTEGER`, and `-` starts out as both `UNARY` and `BINARY` until the
    /// disambiguator picks one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Facets: u64 {
        /// Produced from a symbol table lookup.
        const SYMBOL        = 1 << 0;
        /// The payload is literal source text.
        const STRING        = 1 << 1;
        /// A value: number literal or named constant.
        const NUMBER        = 1 << 2;
        /// A named constant such as `pi`.
        const CONSTANT      = 1 << 3;
        /// An operator character.
        const OPERATOR      = 1 << 4;
        /// A function name.
        const FUNCTION      = 1 << 5;
        /// Usable as a unary operator.
        const UNARY         = 1 << 6;
        /// Usable as a binary operator.
        const BINARY        = 1 << 7;
        /// A number literal without a decimal point.
        const INTEGER       = 1 << 8;
        /// Groups right to left. On a unary operator this means postfix.
        const RIGHT_TO_LEFT = 1 << 9;
        /// Closes an expression or an argument: `)`, `,` and the end marker.
        const TERMINATOR    = 1 << 10;
        /// A function accepting any positive number of arguments.
        const VARIADIC      = 1 << 11;
    }
}

/// Packed token descriptor.
///
/// Bit layout, least significant bit first:
///
/// | bits     | width | field                              |
/// |----------|-------|------------------------------------|
/// | `0..12`  | 12    | [`Facets`]                         |
/// | `12..28` | 16    | [`Id`]                             |
/// | `28..36` | 8     | binding power                      |
/// | `36..44` | 8     | alternate binding power            |
/// | `44..52` | 8     | required argument count (functions) |
///
/// The all-zero word is the empty sentinel standing for "no previous token".
///
/// # Example
/// ```
/// use pratt_calc::interpreter::token::{
///     id::Id,
///     info::{Facets, TokenInfo},
/// };
///
/// let minus = TokenInfo::new(Facets::OPERATOR | Facets::UNARY | Facets::BINARY, Id::Minus)
///     .with_binding_powers(10, 15);
///
/// assert!(minus.is(Id::Minus));
/// assert!(minus.has(Facets::UNARY | Facets::BINARY));
/// assert_eq!(minus.binding_power(), 10);
/// assert_eq!(minus.alt_binding_power(), 15);
/// assert_eq!((minus.raw() >> TokenInfo::ID_SHIFT) & TokenInfo::ID_MASK, Id::Minus as u64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenInfo(u64);

impl TokenInfo {
    /// Number of low bits reserved for facets.
    pub const FACET_BITS: u32 = 12;
    /// Offset of the identity field.
    pub const ID_SHIFT: u32 = Self::FACET_BITS;
    /// Mask of the identity field after shifting.
    pub const ID_MASK: u64 = (1 << 16) - 1;
    /// Width of one binding power field.
    pub const BINDING_POWER_BITS: u32 = 8;
    /// Mask of a binding power field after shifting.
    pub const BINDING_POWER_MASK: u64 = (1 << Self::BINDING_POWER_BITS) - 1;
    /// Offset of the primary binding power.
    pub const BINDING_POWER_SHIFT: u32 = Self::ID_SHIFT + 16;
    /// Offset of the alternate binding power.
    pub const ALT_BINDING_POWER_SHIFT: u32 = Self::BINDING_POWER_SHIFT + Self::BINDING_POWER_BITS;
    /// Offset of the argument count.
    pub const ARG_COUNT_SHIFT: u32 = Self::ALT_BINDING_POWER_SHIFT + Self::BINDING_POWER_BITS;
    /// Mask of the argument count after shifting.
    pub const ARG_COUNT_MASK: u64 = (1 << 8) - 1;

    /// The empty sentinel.
    pub const EMPTY: Self = Self(0);

    /// Packs a facet set and an identity. Binding powers start at zero.
    #[must_use]
    pub const fn new(facets: Facets, id: Id) -> Self {
        Self(facets.bits() | ((id as u64) << Self::ID_SHIFT))
    }

    /// Returns a copy with both binding powers replaced.
    #[must_use]
    pub const fn with_binding_powers(self, bp: u8, alt_bp: u8) -> Self {
        let cleared = self.0
                      & !(Self::BINDING_POWER_MASK << Self::BINDING_POWER_SHIFT)
                      & !(Self::BINDING_POWER_MASK << Self::ALT_BINDING_POWER_SHIFT);
        Self(cleared
             | ((bp as u64) << Self::BINDING_POWER_SHIFT)
             | ((alt_bp as u64) << Self::ALT_BINDING_POWER_SHIFT))
    }

    /// Returns a copy with the required argument count replaced.
    #[must_use]
    pub const fn with_arg_count(self, count: u8) -> Self {
        let cleared = self.0 & !(Self::ARG_COUNT_MASK << Self::ARG_COUNT_SHIFT);
        Self(cleared | ((count as u64) << Self::ARG_COUNT_SHIFT))
    }

    /// Returns a copy with additional facets set.
    #[must_use]
    pub const fn with_facets(self, facets: Facets) -> Self {
        Self(self.0 | facets.bits())
    }

    /// The raw packed word.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// `true` for the empty sentinel.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The facet set.
    #[must_use]
    pub const fn facets(self) -> Facets {
        Facets::from_bits_truncate(self.0)
    }

    /// `true` when *all* of `facets` are set.
    #[must_use]
    pub const fn has(self, facets: Facets) -> bool {
        self.0 & facets.bits() == facets.bits()
    }

    /// `true` when the identity equals `id`.
    #[must_use]
    pub const fn is(self, id: Id) -> bool {
        (self.0 >> Self::ID_SHIFT) & Self::ID_MASK == id as u64
    }

    /// The identity tag.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn id(self) -> Id {
        Id::from_raw(((self.0 >> Self::ID_SHIFT) & Self::ID_MASK) as u16)
    }

    /// The primary binding power.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn binding_power(self) -> u8 {
        ((self.0 >> Self::BINDING_POWER_SHIFT) & Self::BINDING_POWER_MASK) as u8
    }

    /// The binding power of the alternate reading of the same lexeme.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn alt_binding_power(self) -> u8 {
        ((self.0 >> Self::ALT_BINDING_POWER_SHIFT) & Self::BINDING_POWER_MASK) as u8
    }

    /// The number of arguments a function requires.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn arg_count(self) -> u8 {
        ((self.0 >> Self::ARG_COUNT_SHIFT) & Self::ARG_COUNT_MASK) as u8
    }

    /// Clears `facets`.
    pub const fn remove(&mut self, facets: Facets) {
        self.0 &= !facets.bits();
    }

    /// Replaces the primary binding power.
    pub const fn set_binding_power(&mut self, bp: u8) {
        self.0 &= !(Self::BINDING_POWER_MASK << Self::BINDING_POWER_SHIFT);
        self.0 |= (bp as u64) << Self::BINDING_POWER_SHIFT;
    }
}
