use thiserror::Error;

use crate::error::LexError;

/// Represents every way evaluating an expression can fail.
///
/// Lexical failures are wrapped as [`ExpressionError::Lexical`]. Structural
/// verdicts come from the validator and always prevent tree construction.
/// Arithmetic domain problems (division by zero, square root of a negative
/// number) are not errors: they follow IEEE floating-point semantics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lexical(#[from] LexError),
    /// The input contains no tokens at all.
    #[error("empty expression")]
    EmptyExpression,
    /// Two operands follow each other with no operator between them and no
    /// implicit multiplication applies, such as `2 3` or `pi e`.
    #[error("two consecutive numbers at position {position}")]
    TwoConsecutiveNumbers {
        /// Byte offset of the second operand.
        position: usize,
    },
    /// An operator has no computable left operand, such as `*2`, `2+*3` or
    /// `3!!`.
    #[error("operator at position {position} has no left operand")]
    InvalidOperatorPosition {
        /// Byte offset of the operator.
        position: usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("unbalanced parentheses at position {position}")]
    UnbalancedParentheses {
        /// Byte offset of the stray `)` or of the end of input.
        position: usize,
    },
    /// An operator, `(` or `,` is followed directly by `)`, `,` or the end of
    /// input, such as `2+` or `()`.
    #[error("missing operand at position {position}")]
    MissingOperand {
        /// Byte offset of the token where an operand was expected.
        position: usize,
    },
    /// A function name not followed by `(`.
    #[error("function '{name}' at position {position} must be followed by '('")]
    InvalidFunctionCall {
        /// The function name.
        name:     &'static str,
        /// Byte offset of the function name.
        position: usize,
    },
    /// A `,` outside the argument list of a function call.
    #[error("misplaced ',' at position {position}")]
    MisplacedComma {
        /// Byte offset of the comma.
        position: usize,
    },
    /// A function received the wrong number of arguments.
    #[error("function '{name}' expects {expected} argument(s), found {found}")]
    ArgumentCountMismatch {
        /// The function name.
        name:     &'static str,
        /// Human readable arity, e.g. `2` or `at least 1`.
        expected: String,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// A literal the numeric traits could not parse.
    #[error("invalid literal '{literal}' at position {position}")]
    InvalidLiteral {
        /// The literal text.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// An integer literal that cannot be represented exactly as a real.
    #[error("literal '{literal}' at position {position} is too large")]
    LiteralTooLarge {
        /// The literal text.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// The builder met a token that cannot start or continue an expression.
    #[error("unexpected token at position {position}")]
    UnexpectedToken {
        /// Byte offset of the token.
        position: usize,
    },
    /// Tokens remain after a complete expression was built.
    #[error("extra tokens after expression at position {position}")]
    TrailingTokens {
        /// Byte offset of the first leftover token.
        position: usize,
    },
    /// The expression nests deeper than the builder allows, such as a
    /// thousand opening parentheses or a long run of prefix signs.
    #[error("expression nested too deeply at position {position}")]
    NestingTooDeep {
        /// Byte offset of the token where the limit was reached.
        position: usize,
    },
}
