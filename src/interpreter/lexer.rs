use log::{debug, trace};
use logos::Logos;

use crate::{
    error::LexError,
    interpreter::{
        symbols::SymbolTable,
        token::{
            core::{Payload, Token},
            id::Id,
            info::{Facets, TokenInfo},
        },
    },
};

/// Raw lexical unit recognised by the scanner.
///
/// The scanner only classifies character runs. Giving them meaning (which
/// operator, which function, which constant) is a symbol table lookup done
/// by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
pub enum Lexeme<'src> {
    /// A number with a second decimal point, such as `1.2.3` or `4..`.
    #[regex(r"[0-9]+\.[0-9]*\.", |lex| lex.slice())]
    MalformedNumber(&'src str),
    /// Digits without a decimal point, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Integer(&'src str),
    /// Digits with one decimal point, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", |lex| lex.slice())]
    Real(&'src str),
    /// A run of ASCII letters, such as `pi` or `sqrt`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice())]
    Identifier(&'src str),
    /// A single operator or punctuation character.
    #[regex(r"[-+*/^!(),]", |lex| lex.slice().chars().next())]
    Symbol(char),
}

/// Converts an expression into tokens.
///
/// The whole input is consumed left to right. Whitespace is skipped, digit
/// runs become number tokens whose payload is the literal text, letter runs
/// are looked up as named constants first and functions second, and single
/// characters are looked up in the operator and punctuation tables. On
/// success an end-of-expression marker is appended.
///
/// # Errors
/// Any lexical error discards every token scanned so far:
/// - `UnexpectedCharacter` for characters no table knows,
/// - `MalformedNumber` for a literal with two decimal points,
/// - `UnknownIdentifier` for a name that is neither constant nor function.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::{lexer::tokenize, symbols::SymbolTable, token::id::Id};
///
/// let symbols = SymbolTable::<f64>::new();
/// let tokens = tokenize("2 * pi", &symbols).unwrap();
///
/// assert_eq!(tokens.len(), 4);
/// assert!(tokens[1].is(Id::Asterisk));
/// assert!(tokens[3].is(Id::Eoex));
/// assert!(tokenize("2 $ 3", &symbols).is_err());
/// ```
pub fn tokenize<'src, R: Copy>(source: &'src str,
                               symbols: &SymbolTable<R>)
                               -> Result<Vec<Token<'src, R>>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        let token = match lexeme {
            Ok(Lexeme::Integer(text)) => {
                let facets = Facets::NUMBER | Facets::STRING | Facets::INTEGER;
                Token::new(TokenInfo::new(facets, Id::None),
                           Payload::Literal(text),
                           position)
            },
            Ok(Lexeme::Real(text)) => Token::new(TokenInfo::new(Facets::NUMBER | Facets::STRING,
                                                                Id::None),
                                                 Payload::Literal(text),
                                                 position),
            Ok(Lexeme::Identifier(name)) => identifier_token(name, position, symbols)?,
            Ok(Lexeme::Symbol(symbol)) => symbol_token(symbol, position, symbols)?,
            Ok(Lexeme::MalformedNumber(text)) => {
                return Err(LexError::MalformedNumber { literal: text.to_string(),
                                                       position });
            },
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { character, position });
            },
        };
        trace!("lexed {:?} {:?} at {position}",
               token.info().id(),
               token.info().facets());
        tokens.push(token);
    }

    tokens.push(Token::end_of_expression(source.len()));
    debug!("tokenized {source:?} into {} tokens", tokens.len());
    Ok(tokens)
}

/// Resolves a letter run: named constants take priority over functions.
fn identifier_token<'src, R: Copy>(name: &'src str,
                                   position: usize,
                                   symbols: &SymbolTable<R>)
                                   -> Result<Token<'src, R>, LexError> {
    if let Some(value) = symbols.constant(name) {
        let facets = Facets::SYMBOL | Facets::NUMBER | Facets::CONSTANT;
        return Ok(Token::new(TokenInfo::new(facets, Id::None),
                             Payload::Constant(value),
                             position));
    }
    if let Some(descriptor) = symbols.function(name) {
        return Ok(Token::new(descriptor.info, Payload::Descriptor(descriptor), position));
    }
    Err(LexError::UnknownIdentifier { name: name.to_string(),
                                      position })
}

/// Resolves a single character: operators first, then punctuation.
fn symbol_token<'src, R: Copy>(symbol: char,
                               position: usize,
                               symbols: &SymbolTable<R>)
                               -> Result<Token<'src, R>, LexError> {
    if let Some(descriptor) = symbols.operator(symbol) {
        return Ok(Token::new(descriptor.info, Payload::Descriptor(descriptor), position));
    }
    if let Some(info) = symbols.punctuation(symbol) {
        return Ok(Token::new(info, Payload::Empty, position));
    }
    Err(LexError::UnexpectedCharacter { character: symbol,
                                        position })
}
