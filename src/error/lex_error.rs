use thiserror::Error;

/// Represents all errors that can occur while tokenizing an expression.
///
/// Every variant carries the byte offset in the source where scanning
/// stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that is neither a digit, a letter, whitespace, an operator
    /// nor supported punctuation.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A number literal containing a second decimal point, such as `1.2.3`.
    #[error("malformed number '{literal}' at position {position}")]
    MalformedNumber {
        /// The scanned text up to and including the second `.`.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// An identifier that is neither a named constant nor a function.
    #[error("unknown identifier '{name}' at position {position}")]
    UnknownIdentifier {
        /// The identifier text.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
}
