use std::{collections::HashMap, fmt};

use log::debug;
use num_traits::{Float, FloatConst};

use crate::interpreter::token::{
    id::Id,
    info::{Facets, TokenInfo},
};

/// Binding power of binary `+` and `-`.
pub const ADDITIVE_BP: u8 = 10;
/// Binding power of prefix `+` and `-`.
pub const PREFIX_BP: u8 = 15;
/// Binding power of `*` and `/`.
pub const MULTIPLICATIVE_BP: u8 = 20;
/// Binding power of `^`.
pub const EXPONENT_BP: u8 = 25;
/// Binding power of postfix `!`.
pub const POSTFIX_BP: u8 = 30;

/// A static operator or function table entry.
///
/// Tokens carry a copy of their descriptor so later stages never have to look
/// the symbol up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Source spelling, such as `"*"` or `"sqrt"`.
    pub name: &'static str,
    /// Packed token word every token of this symbol starts from.
    pub info: TokenInfo,
}

impl Descriptor {
    /// The argument count a function accepts.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::interpreter::symbols::{Arity, SymbolTable};
    ///
    /// let table = SymbolTable::<f64>::new();
    /// assert_eq!(table.function("pow").unwrap().arity(), Arity::Exact(2));
    /// assert_eq!(table.function("avg").unwrap().arity(), Arity::AtLeast(1));
    /// ```
    #[must_use]
    pub const fn arity(&self) -> Arity {
        if self.info.has(Facets::VARIADIC) {
            Arity::AtLeast(1)
        } else {
            Arity::Exact(self.info.arg_count())
        }
    }
}

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(u8),
    /// This many arguments or more.
    AtLeast(u8),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == usize::from(m),
            Self::AtLeast(m) => n >= usize::from(m),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

const fn operator(name: &'static str, id: Id, facets: Facets, bp: u8, alt_bp: u8) -> Descriptor {
    Descriptor { name,
                 info: TokenInfo::new(facets.union(Facets::OPERATOR).union(Facets::SYMBOL), id)
                     .with_binding_powers(bp, alt_bp) }
}

const fn function(name: &'static str, id: Id, arity: Arity) -> Descriptor {
    let info = TokenInfo::new(Facets::FUNCTION.union(Facets::SYMBOL), id);
    let info = match arity {
        Arity::Exact(n) => info.with_arg_count(n),
        Arity::AtLeast(n) => info.with_arg_count(n).with_facets(Facets::VARIADIC),
    };
    Descriptor { name, info }
}

/// The `*` descriptor, also used for implicit multiplication.
pub const MULTIPLICATION: Descriptor =
    operator("*", Id::Asterisk, Facets::BINARY, MULTIPLICATIVE_BP, 0);

static OPERATOR_TABLE: &[(char, Descriptor)] =
    &[('+', operator("+", Id::Plus, Facets::UNARY.union(Facets::BINARY), ADDITIVE_BP, PREFIX_BP)),
      ('-', operator("-", Id::Minus, Facets::UNARY.union(Facets::BINARY), ADDITIVE_BP, PREFIX_BP)),
      ('*', MULTIPLICATION),
      ('/', operator("/", Id::Slash, Facets::BINARY, MULTIPLICATIVE_BP, 0)),
      ('^', operator("^", Id::Caret, Facets::BINARY.union(Facets::RIGHT_TO_LEFT), EXPONENT_BP, 0)),
      ('!', operator("!", Id::Bang, Facets::UNARY.union(Facets::RIGHT_TO_LEFT), POSTFIX_BP, 0))];

static PUNCTUATION_TABLE: &[(char, TokenInfo)] =
    &[('(', TokenInfo::new(Facets::SYMBOL, Id::OpenParen)),
      (')', TokenInfo::new(Facets::SYMBOL.union(Facets::TERMINATOR), Id::CloseParen)),
      (',', TokenInfo::new(Facets::SYMBOL.union(Facets::TERMINATOR), Id::Comma))];

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the identity the evaluator dispatches on,
/// - its arity.
///
/// The macro produces `FUNCTION_TABLE`, a static table of descriptors.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                id: $id:expr,
                arity: $arity:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static FUNCTION_TABLE: &[Descriptor] = &[
            $(
                function($name, $id, $arity),
            )*
        ];
    };
}

builtin_functions! {
    "sqrt" => { id: Id::Sqrt, arity: Arity::Exact(1) },
    "sin"  => { id: Id::Sin,  arity: Arity::Exact(1) },
    "cos"  => { id: Id::Cos,  arity: Arity::Exact(1) },
    "tan"  => { id: Id::Tan,  arity: Arity::Exact(1) },
    "cot"  => { id: Id::Cot,  arity: Arity::Exact(1) },
    "ln"   => { id: Id::Ln,   arity: Arity::Exact(1) },
    "exp"  => { id: Id::Exp,  arity: Arity::Exact(1) },
    "abs"  => { id: Id::Abs,  arity: Arity::Exact(1) },
    "pow"  => { id: Id::Pow,  arity: Arity::Exact(2) },
    "avg"  => { id: Id::Avg,  arity: Arity::AtLeast(1) },
    "min"  => { id: Id::Min,  arity: Arity::AtLeast(1) },
    "max"  => { id: Id::Max,  arity: Arity::AtLeast(1) },
}

/// Every named constant with its value in the real type `R`.
fn constant_table<R: FloatConst + std::ops::Add<Output = R>>() -> [(&'static str, R); 3] {
    [("pi", R::PI()), ("e", R::E()), ("tau", R::TAU())]
}

/// Read-only lookup tables used by the lexer.
///
/// Built once when a [`Parser`](crate::Parser) is created and never mutated
/// afterwards, so one table can serve any number of concurrent evaluations.
#[derive(Debug, Clone)]
pub struct SymbolTable<R> {
    operators:   HashMap<char, Descriptor>,
    punctuation: HashMap<char, TokenInfo>,
    functions:   HashMap<&'static str, Descriptor>,
    constants:   HashMap<&'static str, R>,
}

impl<R: Float + FloatConst> SymbolTable<R> {
    /// Builds every table.
    #[must_use]
    pub fn new() -> Self {
        let table = Self { operators:   OPERATOR_TABLE.iter().copied().collect(),
                           punctuation: PUNCTUATION_TABLE.iter().copied().collect(),
                           functions:   FUNCTION_TABLE.iter().map(|d| (d.name, *d)).collect(),
                           constants:   HashMap::from(constant_table()), };
        debug!("symbol table ready: {} operators, {} functions, {} constants",
               table.operators.len(),
               table.functions.len(),
               table.constants.len());
        table
    }
}

impl<R: Float + FloatConst> Default for SymbolTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Copy> SymbolTable<R> {
    /// Looks up an operator character.
    #[must_use]
    pub fn operator(&self, symbol: char) -> Option<Descriptor> {
        self.operators.get(&symbol).copied()
    }

    /// Looks up a punctuation character.
    #[must_use]
    pub fn punctuation(&self, symbol: char) -> Option<TokenInfo> {
        self.punctuation.get(&symbol).copied()
    }

    /// Looks up a function name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Descriptor> {
        self.functions.get(name).copied()
    }

    /// Looks up a named constant.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<R> {
        self.constants.get(name).copied()
    }
}
