use pratt_calc::{
    error::ExpressionError,
    interpreter::{
        lexer::tokenize,
        parser::core::Builder,
        specify::specify,
        symbols::{PREFIX_BP, ADDITIVE_BP, SymbolTable},
        token::{id::Id, info::Facets},
        validator::validate,
    },
    numeric::DefaultTraits,
};

fn build_unvalidated(source: &str) -> Result<f64, ExpressionError> {
    let symbols = SymbolTable::<f64>::new();
    let mut tokens = tokenize(source, &symbols)?;
    let implicit = specify(&mut tokens);
    Builder::<DefaultTraits>::new(&tokens, &implicit).finish()
                                                     .map(|tree| tree.evaluate())
}

#[test]
fn specify_resolves_sign_operators() {
    let symbols = SymbolTable::<f64>::new();
    let mut tokens = tokenize("2 - -3", &symbols).unwrap();
    specify(&mut tokens);

    assert!(tokens[1].has(Facets::BINARY));
    assert!(!tokens[1].has(Facets::UNARY));
    assert_eq!(tokens[1].binding_power(), ADDITIVE_BP);

    assert!(tokens[2].has(Facets::UNARY));
    assert!(!tokens[2].has(Facets::BINARY));
    assert_eq!(tokens[2].binding_power(), PREFIX_BP);
}

#[test]
fn specify_records_implicit_multiplications() {
    let symbols = SymbolTable::<f64>::new();
    let mut tokens = tokenize("2pi(1)sqrt(4)", &symbols).unwrap();
    let implicit = specify(&mut tokens);

    let indices: Vec<usize> = implicit.iter().map(|token| token.index).collect();
    assert_eq!(indices, [1, 2, 5]);
    assert!(implicit.iter().all(|token| token.token.is(Id::Asterisk)));
    // The primary sequence is untouched in length.
    assert_eq!(tokens.len(), 10);
}

#[test]
fn specify_leaves_adjacent_numbers_alone() {
    let symbols = SymbolTable::<f64>::new();

    let mut tokens = tokenize("2 3", &symbols).unwrap();
    assert!(specify(&mut tokens).is_empty());

    let mut tokens = tokenize("pi e", &symbols).unwrap();
    assert!(specify(&mut tokens).is_empty());
}

#[test]
fn validator_accepts_well_formed_sequences() {
    let symbols = SymbolTable::<f64>::new();

    for source in ["2pi", "-(1 + 2)!", "max(1, min(2, 3), 4)", "2^-3", "(2)(3)"] {
        let mut tokens = tokenize(source, &symbols).unwrap();
        specify(&mut tokens);
        assert_eq!(validate(&tokens), Ok(()), "{source:?}");
    }
}

#[test]
fn builder_reports_leftover_tokens() {
    assert_eq!(build_unvalidated("2)"), Err(ExpressionError::TrailingTokens { position: 1 }));
}

#[test]
fn builder_rejects_misplaced_tokens() {
    assert_eq!(build_unvalidated("*2"), Err(ExpressionError::UnexpectedToken { position: 0 }));
    assert_eq!(build_unvalidated("2+"), Err(ExpressionError::MissingOperand { position: 2 }));
}

#[test]
fn builder_closes_trailing_groups() {
    assert_eq!(build_unvalidated("2 * (3 + 4"), Ok(14.0));
}

#[test]
fn every_named_constant_resolves() {
    let symbols = SymbolTable::<f64>::new();

    assert_eq!(symbols.constant("pi"), Some(std::f64::consts::PI));
    assert_eq!(symbols.constant("e"), Some(std::f64::consts::E));
    assert_eq!(symbols.constant("tau"), Some(std::f64::consts::TAU));
    assert_eq!(symbols.constant("phi"), None);

    for name in ["pi", "e", "tau"] {
        let tokens = tokenize(name, &symbols).unwrap();
        assert!(tokens[0].has(Facets::CONSTANT), "{name}");
    }
}
