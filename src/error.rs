/// Lexical errors.
///
/// Raised while scanning the raw character stream: characters the engine
/// does not recognise, numbers with more than one decimal point and
/// identifiers that name neither a constant nor a function. A lexical error
/// discards the whole token sequence.
pub mod lex_error;
/// Structural and build errors.
///
/// Contains every failure the pipeline can report after lexing: the
/// validator's verdicts (unbalanced parentheses, adjacent operands, operators
/// without a computable left side, malformed function calls) and the few
/// failures the tree builder can still hit (unconvertible literals, leftover
/// tokens).
pub mod expression_error;

pub use expression_error::ExpressionError;
pub use lex_error::LexError;
