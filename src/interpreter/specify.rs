use log::{debug, trace};

use crate::interpreter::{
    symbols::MULTIPLICATION,
    token::{
        core::{Payload, Token},
        id::Id,
        info::{Facets, TokenInfo},
    },
};

/// A multiplication the source leaves implicit.
///
/// `index` is the position in the primary token sequence the operator must be
/// read before. The list is produced once by [`specify`] and read once by the
/// parser, which merges it back into the token stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImplicitToken<'src, R> {
    /// Primary token index this operator precedes.
    pub index: usize,
    /// A copy of the `*` operator token.
    pub token: Token<'src, R>,
}

/// Resolves context-dependent tokens and records implicit multiplications.
///
/// One left-to-right pass tracking the previous token:
/// - An operator usable both ways becomes binary after an operand-like token
///   and unary otherwise; the unary reading switches to the alternate
///   binding power.
/// - After an operand-like token, a `(` or a function name is preceded by an
///   implicit `*` (`2(3)`, `2 sqrt(4)`).
/// - After an operand-like token, a number is preceded by an implicit `*`
///   when exactly one of the two is a named constant, or when the previous
///   token is not a number at all (`2pi`, `pi2`, `(2)3`). Two plain numbers
///   or two constants get nothing and are left for the validator to reject.
///
/// Operand-like tokens are numbers, constants, `)` and postfix operators.
/// The primary buffer is only modified in place; implicit operators live in
/// the returned side list.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::{
///     lexer::tokenize,
///     specify::specify,
///     symbols::SymbolTable,
///     token::info::Facets,
/// };
///
/// let symbols = SymbolTable::<f64>::new();
/// let mut tokens = tokenize("-2(pi)", &symbols).unwrap();
/// let implicit = specify(&mut tokens);
///
/// assert!(tokens[0].has(Facets::UNARY));
/// assert!(!tokens[0].has(Facets::BINARY));
/// assert_eq!(implicit.len(), 1);
/// assert_eq!(implicit[0].index, 2);
/// ```
pub fn specify<'src, R: Copy>(tokens: &mut [Token<'src, R>]) -> Vec<ImplicitToken<'src, R>> {
    let mut implicit = Vec::new();
    let mut previous = TokenInfo::EMPTY;

    for (index, token) in tokens.iter_mut().enumerate() {
        let left_operand = is_operand_like(previous);

        if token.has(Facets::UNARY | Facets::BINARY) {
            token.resolve_operator(left_operand);
            trace!("{:?} at {} resolved as {}",
                   token.info().id(),
                   token.position(),
                   if left_operand { "binary" } else { "unary" });
        } else if left_operand && needs_multiplication(previous, token.info()) {
            trace!("implicit multiplication before token {index}");
            implicit.push(ImplicitToken { index,
                                          token: Token::new(MULTIPLICATION.info,
                                                            Payload::Descriptor(MULTIPLICATION),
                                                            token.position()) });
        }

        previous = token.info();
    }

    debug!("specified {} tokens, {} implicit", tokens.len(), implicit.len());
    implicit
}

/// `true` when a token can be the left operand of whatever follows it.
fn is_operand_like(info: TokenInfo) -> bool {
    info.has(Facets::NUMBER)
    || info.is(Id::CloseParen)
    || info.has(Facets::UNARY | Facets::RIGHT_TO_LEFT)
}

/// Decides whether `current`, following an operand-like `previous`, is a
/// juxtaposition that means multiplication.
fn needs_multiplication(previous: TokenInfo, current: TokenInfo) -> bool {
    if current.is(Id::OpenParen) || current.has(Facets::FUNCTION) {
        return true;
    }
    if !current.has(Facets::NUMBER) {
        return false;
    }

    let current_constant = current.has(Facets::CONSTANT);
    let previous_constant = previous.has(Facets::CONSTANT);

    (current_constant && !previous_constant)
    || (!current_constant && (previous_constant || !previous.has(Facets::NUMBER)))
}
