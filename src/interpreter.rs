/// The token module defines what every later stage reads.
///
/// A token is a packed 64-bit descriptor (facet flags, identity, binding
/// powers, argument count) plus a payload and a source position.
pub mod token;
/// The symbols module holds the builtin operator, punctuation, function and
/// constant tables.
///
/// # Responsibilities
/// - Assigns every operator its facets and binding powers.
/// - Records the arity of every builtin function.
/// - Provides the values of the named constants in the engine's real type.
pub mod symbols;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source text and produces a sequence of tokens for
/// numbers, constants, function names, operators and punctuation, terminated
/// by an end-of-expression marker. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Keeps number literals as source text for later conversion.
/// - Reports lexical errors for unknown characters, malformed numbers and
///   unknown identifiers.
pub mod lexer;
/// Context-dependent token resolution.
///
/// Decides whether `+` and `-` are unary or binary and records the
/// multiplications the source leaves implicit.
pub mod specify;
/// Structural checks on a specified token sequence.
///
/// Rejects every sequence the tree builder could not turn into a well-formed
/// tree and reports the first problem with its source position.
pub mod validator;
/// The parser module builds the expression tree from tokens.
///
/// Uses binding powers to resolve precedence and associativity in a single
/// recursive pass.
pub mod parser;
/// The evaluator module computes the value of an expression tree.
///
/// # Responsibilities
/// - Evaluates operator and call nodes in post-order.
/// - Implements the arithmetic of every operator and builtin function.
pub mod evaluator;
/// The engine ties all stages together behind [`Parser`](engine::Parser).
pub mod engine;
