/// Token identities.
///
/// Declares the `Id` tag shared by operators, functions and punctuation. The
/// tag is stored inside the packed token word and recovered with a shift and
/// a mask.
pub mod id;
/// The packed token word.
///
/// Declares the facet flags and the bit layout that puts facets, identity,
/// both binding powers and a function's argument count into one `u64`. The
/// layout is the contract between the lexer, the disambiguator, the validator
/// and the parser.
pub mod info;

pub mod core;
