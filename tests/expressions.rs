use std::f64::consts::{E, PI, TAU};

use pratt_calc::{Parser, evaluate, numeric::SinglePrecision};

fn eval(source: &str) -> f64 {
    evaluate(source).unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
}

fn assert_close(source: &str, expected: f64) {
    let value = eval(source);
    assert!((value - expected).abs() < 1e-12,
            "{source:?} = {value}, expected {expected}");
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(eval("1 + 2 * 3"), 7.0);
    assert_eq!(eval("(1 + 2) * 3"), 9.0);
    assert_eq!(eval("10 - 4 - 3"), 3.0);
    assert_eq!(eval("64 / 4 / 2"), 8.0);
    assert_eq!(eval("2 * 3 ^ 2"), 18.0);
    assert_eq!(eval("2^3^2"), 512.0);
    assert_eq!(eval("((((7))))"), 7.0);
}

#[test]
fn unary_operators() {
    assert_eq!(eval("-5"), -5.0);
    assert_eq!(eval("+5"), 5.0);
    assert_eq!(eval("--2"), 2.0);
    assert_eq!(eval("2++3"), 5.0);
    assert_eq!(eval("2*-3"), -6.0);
    assert_eq!(eval("-(2 + 3)"), -5.0);
    assert_eq!(eval("-2^2"), -4.0);
    assert_eq!(eval("2^-1"), 0.5);
}

#[test]
fn factorial_is_postfix() {
    assert_eq!(eval("5!"), 120.0);
    assert_eq!(eval("0!"), 1.0);
    assert_eq!(eval("3! + 1"), 7.0);
    assert_eq!(eval("-3!"), -6.0);
    assert_eq!(eval("(1 + 2)!"), 6.0);
    assert!(eval("(0 - 1)!").is_nan());
    assert!(eval("2.5!").is_nan());
}

#[test]
fn implicit_multiplication() {
    assert_eq!(eval("2pi"), 2.0 * PI);
    assert_eq!(eval("pi2"), PI * 2.0);
    assert_eq!(eval("2(3)"), 6.0);
    assert_eq!(eval("(2)(3)"), 6.0);
    assert_eq!(eval("(1 + 1)3"), 6.0);
    assert_eq!(eval("2 sqrt(16)"), 8.0);
    assert_eq!(eval("3!2"), 12.0);
    assert_eq!(eval("-2(pi)"), -2.0 * PI);
    // Implicit `*` binds like the explicit one.
    assert_eq!(eval("6 / 2(1 + 2)"), 9.0);
}

#[test]
fn constants() {
    assert_eq!(eval("pi"), PI);
    assert_eq!(eval("e"), E);
    assert_eq!(eval("tau"), TAU);
    assert_eq!(eval("tau / 2"), PI);
}

#[test]
fn builtin_functions() {
    assert_eq!(eval("sqrt(16)"), 4.0);
    assert_eq!(eval("abs(-5)"), 5.0);
    assert_eq!(eval("exp(0)"), 1.0);
    assert_eq!(eval("ln(1)"), 0.0);
    assert_eq!(eval("cos(0)"), 1.0);
    assert_eq!(eval("pow(2, 10)"), 1024.0);
    assert_eq!(eval("avg(1, 2, 3, 4)"), 2.5);
    assert_eq!(eval("min(3, 1, 2)"), 1.0);
    assert_eq!(eval("max(2)"), 2.0);
    assert_eq!(eval("max(1, 2 + 5, 3)"), 7.0);
    assert_eq!(eval("sqrt(pow(3, 2) + pow(4, 2))"), 5.0);
    assert_close("sin(pi / 2)", 1.0);
    assert_close("tan(pi / 4)", 1.0);
    assert_close("cot(pi / 4)", 1.0);
}

#[test]
fn ieee_results_are_not_errors() {
    assert_eq!(eval("1 / 0"), f64::INFINITY);
    assert_eq!(eval("-1 / 0"), f64::NEG_INFINITY);
    assert_eq!(eval("ln(0)"), f64::NEG_INFINITY);
    assert!(eval("sqrt(-1)").is_nan());
    assert!(eval("0 / 0").is_nan());
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(eval("  1 +\t2\n"), 3.0);
    assert_eq!(eval("1\x0b+\x0c2\r"), 3.0);
    assert_eq!(eval("1+2"), eval(" 1 + 2 "));
}

#[test]
fn literals() {
    assert_eq!(eval("2.5 * 2"), 5.0);
    assert_eq!(eval("0.125"), 0.125);
    assert_eq!(eval("9007199254740991"), 9_007_199_254_740_991.0);
    assert_eq!(eval("9007199254740992"), 9_007_199_254_740_992.0);
    assert_eq!(eval("10000000000000000"), 1e16);
    assert_eq!(eval("1152921504606846976"), 1_152_921_504_606_846_976.0);
    assert_eq!(eval("10000000000000000"), eval("10000000000000000.0"));
}

#[test]
fn nesting_within_limits() {
    let source = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(eval(&source), 1.0);

    let source = format!("{}1", "-".repeat(200));
    assert_eq!(eval(&source), 1.0);

    let source = vec!["1"; 1000].join("+");
    assert_eq!(eval(&source), 1000.0);
}

#[test]
fn evaluation_is_repeatable() {
    let parser = Parser::<pratt_calc::numeric::DefaultTraits>::new();
    let first = parser.evaluate("sin(2)^2 + cos(2)^2 + avg(1, 2)").unwrap();

    for _ in 0..10 {
        let again = parser.evaluate("sin(2)^2 + cos(2)^2 + avg(1, 2)").unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

#[test]
fn single_precision() {
    let parser = Parser::<SinglePrecision>::new();

    assert_eq!(parser.evaluate("1.5 * 4").unwrap(), 6.0_f32);
    assert_eq!(parser.evaluate("2^10").unwrap(), 1024.0_f32);
    assert_eq!(parser.evaluate("16777215").unwrap(), 16_777_215.0_f32);
    assert_eq!(parser.evaluate("pi").unwrap(), std::f32::consts::PI);
    assert_eq!(parser.evaluate("16777216").unwrap(), 16_777_216.0_f32);
    assert!(parser.evaluate("16777217").is_err());
}
