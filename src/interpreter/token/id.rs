/// Identity of an operator, function or punctuation token.
///
/// Number and constant tokens carry [`Id::None`]; their meaning lives in the
/// facet flags and the payload instead.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    /// No identity (numbers, constants, the empty sentinel).
    None = 0,
    /// End-of-expression marker appended by the lexer.
    Eoex,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `!` (postfix factorial)
    Bang,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `sqrt`
    Sqrt,
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `cot`
    Cot,
    /// `ln`
    Ln,
    /// `exp`
    Exp,
    /// `abs`
    Abs,
    /// `pow`
    Pow,
    /// `avg`
    Avg,
    /// `min`
    Min,
    /// `max`
    Max,
}

impl Id {
    const ALL: [Self; 23] = [Self::None,
                             Self::Eoex,
                             Self::Plus,
                             Self::Minus,
                             Self::Asterisk,
                             Self::Slash,
                             Self::Caret,
                             Self::Bang,
                             Self::OpenParen,
                             Self::CloseParen,
                             Self::Comma,
                             Self::Sqrt,
                             Self::Sin,
                             Self::Cos,
                             Self::Tan,
                             Self::Cot,
                             Self::Ln,
                             Self::Exp,
                             Self::Abs,
                             Self::Pow,
                             Self::Avg,
                             Self::Min,
                             Self::Max];

    /// Recovers an identity from its raw tag. Unknown tags map to `None`.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::interpreter::token::id::Id;
    ///
    /// assert_eq!(Id::from_raw(Id::Caret as u16), Id::Caret);
    /// assert_eq!(Id::from_raw(u16::MAX), Id::None);
    /// ```
    #[must_use]
    pub fn from_raw(raw: u16) -> Self {
        Self::ALL.get(usize::from(raw))
                 .copied()
                 .unwrap_or(Self::None)
    }
}
