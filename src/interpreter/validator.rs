use log::debug;

use crate::{
    error::ExpressionError,
    interpreter::{
        symbols::Descriptor,
        token::{
            core::{Payload, Token},
            id::Id,
            info::Facets,
        },
    },
};

/// One open parenthesis and, for call parentheses, what it belongs to.
struct Frame {
    call:   Option<Descriptor>,
    commas: usize,
}

/// Checks that a specified token sequence can form an expression tree.
///
/// Runs after [`specify`](crate::interpreter::specify::specify) on the
/// primary token sequence. Implicit multiplications are not part of that
/// sequence, but every adjacency that would receive one is accepted here, so
/// `2 3` and `pi e` are the only operand pairs rejected.
///
/// Checks, in order, for every token:
/// - a function name must be followed by `(`,
/// - parentheses balance, commas only inside call parentheses, and the
///   argument count of every call matches its function,
/// - `)`, `,` and the end marker need an operand before them,
/// - two plain numbers or two constants may not be adjacent,
/// - a binary operator needs a computable left side,
/// - a postfix operator must follow a number or `)`.
///
/// # Errors
/// The first violated check, as the matching [`ExpressionError`] variant.
///
/// # Example
/// ```
/// use pratt_calc::{
///     error::ExpressionError,
///     interpreter::{lexer::tokenize, specify::specify, symbols::SymbolTable, validator::validate},
/// };
///
/// let symbols = SymbolTable::<f64>::new();
/// let mut tokens = tokenize("(2+3", &symbols).unwrap();
/// specify(&mut tokens);
///
/// assert!(matches!(validate(&tokens),
///                  Err(ExpressionError::UnbalancedParentheses { .. })));
/// ```
pub fn validate<R>(tokens: &[Token<'_, R>]) -> Result<(), ExpressionError> {
    if tokens.first().is_none_or(|token| token.is(Id::Eoex)) {
        return Err(ExpressionError::EmptyExpression);
    }

    let sentinel = Token::sentinel();
    let mut previous = &sentinel;
    let mut frames: Vec<Frame> = Vec::new();

    for token in tokens {
        let position = token.position();

        if previous.has(Facets::FUNCTION) && !token.is(Id::OpenParen) {
            return Err(ExpressionError::InvalidFunctionCall { name: previous.name()
                                                                            .unwrap_or_default(),
                                                              position: previous.position() });
        }

        let mut empty_call = false;
        if token.is(Id::OpenParen) {
            let call = match previous.payload() {
                Payload::Descriptor(descriptor) if previous.has(Facets::FUNCTION) => {
                    Some(*descriptor)
                },
                _ => None,
            };
            frames.push(Frame { call, commas: 0 });
        } else if token.is(Id::CloseParen) {
            let frame = frames.pop()
                              .ok_or(ExpressionError::UnbalancedParentheses { position })?;
            if let Some(descriptor) = frame.call {
                empty_call = previous.is(Id::OpenParen);
                let found = if empty_call { 0 } else { frame.commas + 1 };
                check_arity(&descriptor, found)?;
            }
        } else if token.is(Id::Comma) {
            match frames.last_mut() {
                Some(frame) if frame.call.is_some() => frame.commas += 1,
                _ => return Err(ExpressionError::MisplacedComma { position }),
            }
        }

        if token.has(Facets::TERMINATOR) && !empty_call && expects_operand(previous) {
            return Err(ExpressionError::MissingOperand { position });
        }

        let both_constants = token.has(Facets::CONSTANT) && previous.has(Facets::CONSTANT);
        let both_numbers = token.has(Facets::NUMBER)
                           && !token.has(Facets::CONSTANT)
                           && previous.has(Facets::NUMBER)
                           && !previous.has(Facets::CONSTANT);
        if both_constants || both_numbers {
            return Err(ExpressionError::TwoConsecutiveNumbers { position });
        }

        if token.has(Facets::BINARY) && !has_left_side(previous) {
            return Err(ExpressionError::InvalidOperatorPosition { position });
        }

        if token.has(Facets::UNARY | Facets::RIGHT_TO_LEFT)
           && !(previous.is(Id::CloseParen) || previous.has(Facets::NUMBER))
        {
            return Err(ExpressionError::InvalidOperatorPosition { position });
        }

        previous = token;
    }

    if !frames.is_empty() {
        return Err(ExpressionError::UnbalancedParentheses { position: previous.position() });
    }

    debug!("validated {} tokens", tokens.len());
    Ok(())
}

/// `true` when `previous` leaves a right operand outstanding.
fn expects_operand<R>(previous: &Token<'_, R>) -> bool {
    previous.is_sentinel()
    || previous.is(Id::OpenParen)
    || previous.is(Id::Comma)
    || previous.has(Facets::BINARY)
    || (previous.has(Facets::UNARY) && !previous.has(Facets::RIGHT_TO_LEFT))
}

/// `true` when a binary operator after `previous` has something to combine.
fn has_left_side<R>(previous: &Token<'_, R>) -> bool {
    !(previous.is_sentinel()
      || previous.has(Facets::BINARY)
      || (previous.has(Facets::UNARY) && !previous.has(Facets::RIGHT_TO_LEFT))
      || previous.is(Id::OpenParen)
      || previous.is(Id::Comma))
}

fn check_arity(descriptor: &Descriptor, found: usize) -> Result<(), ExpressionError> {
    let arity = descriptor.arity();
    if arity.check(found) {
        return Ok(());
    }
    Err(ExpressionError::ArgumentCountMismatch { name: descriptor.name,
                                                 expected: arity.to_string(),
                                                 found })
}
