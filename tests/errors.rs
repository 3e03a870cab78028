use pratt_calc::{
    error::{ExpressionError, LexError},
    evaluate,
};

#[test]
fn empty_input() {
    assert_eq!(evaluate(""), Err(ExpressionError::EmptyExpression));
    assert_eq!(evaluate("   \t"), Err(ExpressionError::EmptyExpression));
}

#[test]
fn lexical_errors() {
    assert_eq!(evaluate("2 $ 3"),
               Err(ExpressionError::Lexical(LexError::UnexpectedCharacter { character: '$',
                                                                             position:  2, })));
    assert_eq!(evaluate("1.2.3"),
               Err(ExpressionError::Lexical(LexError::MalformedNumber { literal:  "1.2.".to_string(),
                                                                         position: 0, })));
    assert_eq!(evaluate("foo(1)"),
               Err(ExpressionError::Lexical(LexError::UnknownIdentifier { name:     "foo".to_string(),
                                                                           position: 0, })));
}

#[test]
fn adjacent_numbers() {
    assert_eq!(evaluate("2 3"), Err(ExpressionError::TwoConsecutiveNumbers { position: 2 }));
    assert_eq!(evaluate("pi e"), Err(ExpressionError::TwoConsecutiveNumbers { position: 3 }));
    assert_eq!(evaluate("1 + 2 3"), Err(ExpressionError::TwoConsecutiveNumbers { position: 6 }));
}

#[test]
fn operator_positions() {
    assert_eq!(evaluate("*2"), Err(ExpressionError::InvalidOperatorPosition { position: 0 }));
    assert_eq!(evaluate("2*/3"), Err(ExpressionError::InvalidOperatorPosition { position: 2 }));
    assert_eq!(evaluate("(*2)"), Err(ExpressionError::InvalidOperatorPosition { position: 1 }));
    assert_eq!(evaluate("3!!"), Err(ExpressionError::InvalidOperatorPosition { position: 2 }));
    assert_eq!(evaluate("!3"), Err(ExpressionError::InvalidOperatorPosition { position: 0 }));
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(evaluate("(1 + 2"), Err(ExpressionError::UnbalancedParentheses { position: 6 }));
    assert_eq!(evaluate("1 + 2)"), Err(ExpressionError::UnbalancedParentheses { position: 5 }));
    assert!(matches!(evaluate("((1)"),
                     Err(ExpressionError::UnbalancedParentheses { .. })));
}

#[test]
fn missing_operands() {
    assert_eq!(evaluate("2 +"), Err(ExpressionError::MissingOperand { position: 3 }));
    assert_eq!(evaluate("()"), Err(ExpressionError::MissingOperand { position: 1 }));
    assert_eq!(evaluate("-"), Err(ExpressionError::MissingOperand { position: 1 }));
    assert_eq!(evaluate("max(1,)"), Err(ExpressionError::MissingOperand { position: 6 }));
}

#[test]
fn malformed_calls() {
    assert_eq!(evaluate("sqrt 4"),
               Err(ExpressionError::InvalidFunctionCall { name:     "sqrt",
                                                          position: 0, }));
    assert_eq!(evaluate("2 + sin"),
               Err(ExpressionError::InvalidFunctionCall { name:     "sin",
                                                          position: 4, }));
    assert_eq!(evaluate("1, 2"), Err(ExpressionError::MisplacedComma { position: 1 }));
    assert_eq!(evaluate("(1, 2)"), Err(ExpressionError::MisplacedComma { position: 2 }));
}

#[test]
fn argument_counts() {
    assert_eq!(evaluate("sqrt(1, 2)"),
               Err(ExpressionError::ArgumentCountMismatch { name:     "sqrt",
                                                            expected: "1".to_string(),
                                                            found:    2, }));
    assert_eq!(evaluate("pow(2)"),
               Err(ExpressionError::ArgumentCountMismatch { name:     "pow",
                                                            expected: "2".to_string(),
                                                            found:    1, }));
    assert_eq!(evaluate("max()"),
               Err(ExpressionError::ArgumentCountMismatch { name:     "max",
                                                            expected: "at least 1".to_string(),
                                                            found:    0, }));
}

#[test]
fn oversized_literals() {
    assert_eq!(evaluate("9007199254740993"),
               Err(ExpressionError::LiteralTooLarge { literal:  "9007199254740993".to_string(),
                                                      position: 0, }));
    assert!(matches!(evaluate("9223372036854775807"),
                     Err(ExpressionError::LiteralTooLarge { .. })));
    assert!(matches!(evaluate("1 + 99999999999999999999"),
                     Err(ExpressionError::LiteralTooLarge { position: 4, .. })));
}

#[test]
fn deep_parentheses() {
    let source = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert_eq!(evaluate(&source), Err(ExpressionError::NestingTooDeep { position: 256 }));

    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(evaluate(&source), Err(ExpressionError::NestingTooDeep { .. })));
}

#[test]
fn long_prefix_runs() {
    let source = format!("{}1", "-".repeat(50_000));
    assert_eq!(evaluate(&source), Err(ExpressionError::NestingTooDeep { position: 256 }));
}

#[test]
fn long_exponent_chains() {
    let source = vec!["2"; 5000].join("^");
    assert!(matches!(evaluate(&source), Err(ExpressionError::NestingTooDeep { .. })));
}

#[test]
fn long_sums() {
    let source = vec!["1"; 5000].join("+");
    assert!(matches!(evaluate(&source), Err(ExpressionError::NestingTooDeep { .. })));
}

#[test]
fn messages_name_the_position() {
    let message = evaluate("2 3").unwrap_err().to_string();
    assert_eq!(message, "two consecutive numbers at position 2");

    let message = evaluate("pow(1)").unwrap_err().to_string();
    assert_eq!(message, "function 'pow' expects 2 argument(s), found 1");

    let message = evaluate("#").unwrap_err().to_string();
    assert_eq!(message, "unexpected character '#' at position 0");
}
