use std::{str::FromStr, thread};

use bigdecimal::{BigDecimal, RoundingMode};
use mathfn::{
    Error, MathFunction,
    error::{ParseError, RuntimeError},
    interpreter::{lexer::tokenize, parser::core::parse},
};

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap_or_else(|e| panic!("bad decimal {value}: {e}"))
}

fn compile(src: &str) -> MathFunction {
    parse(&tokenize(src).unwrap_or_else(|e| panic!("tokenize {src}: {e}")))
        .unwrap_or_else(|e| panic!("parse {src}: {e}"))
}

fn assert_eval_with(src: &str, inputs: &[&str], expected: &str) {
    let inputs: Vec<BigDecimal> = inputs.iter().map(|v| dec(v)).collect();
    let result = compile(src).evaluate(&inputs)
                             .unwrap_or_else(|e| panic!("evaluate {src}: {e}"));
    assert_eq!(result.with_scale_round(20, RoundingMode::HalfUp),
               dec(expected).with_scale_round(20, RoundingMode::HalfUp),
               "{src}");
}

fn assert_eval(src: &str, expected: &str) {
    assert_eval_with(src, &[], expected);
}

fn parse_failure(src: &str) -> ParseError {
    match tokenize(src).and_then(|tokens| parse(&tokens)) {
        Ok(_) => panic!("{src} parsed but was expected to fail"),
        Err(e) => e,
    }
}

fn eval_failure(src: &str) -> RuntimeError {
    match compile(src).evaluate(&[dec("0")]) {
        Ok(v) => panic!("{src} evaluated to {v} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_operations() {
    assert_eval("2+3", "5");
    assert_eval("5-2", "3");
    assert_eval("3*4", "12");
    assert_eval("8/2", "4");
    assert_eval("7%3", "1");
    assert_eval("2^3", "8");
}

#[test]
fn operator_precedence() {
    assert_eval("2+3*4", "14");
    assert_eval("(2+3)*4", "20");
    assert_eval("2^3^2", "512");
    assert_eval("2^(3^2)", "512");
    assert_eval("(2^3)^2", "64");
}

#[test]
fn unary_operations() {
    assert_eval("-5", "-5");
    assert_eval("sin(0)", "0.0");
    assert_eval("cos(0)", "1.0");
    assert_eval("tan(0)", "0.0");
    assert_eval("atan(0)", "0");
    assert_eval("catan(0)", "0");
    assert_eval("abs(-3)", "3");
    assert_eval("sqrt(4)", "2.0");
    assert_eval("ln(1)", "0.0");
    assert_eval("lg(100)", "2.0");
}

#[test]
fn variables_bind_in_order_of_first_use() {
    assert_eval_with("x", &["5"], "5");
    assert_eval_with("x+y", &["2", "3"], "5");
    assert_eval_with("x*y+z", &["2", "3", "4"], "10");
    assert_eval_with("y-x+y", &["10", "1"], "19");
}

#[test]
fn constants() {
    assert_eval("e", "2.718281828459045");
    assert_eval("pi", "3.141592653589793");
    assert_eval("PI", "3.141592653589793");
}

#[test]
fn parse_errors() {
    assert!(matches!(parse_failure("2+"), ParseError::InsufficientOperands { .. }));
    assert!(matches!(parse_failure("sin()"), ParseError::InsufficientOperands { .. }));
    assert!(matches!(parse_failure("(2+3"), ParseError::MismatchedParenthesis { .. }));
    assert!(matches!(parse_failure("2+3)"), ParseError::MismatchedParenthesis { .. }));
    assert_eq!(parse_failure("2x"), ParseError::SyntaxError { operands: 2 });
    assert_eq!(parse_failure(""), ParseError::InvalidInput);
}

#[test]
fn evaluation_errors() {
    assert_eq!(eval_failure("1/0"), RuntimeError::DivisionByZero);
    assert_eq!(eval_failure("5%0"), RuntimeError::DivisionByZero);
    assert!(matches!(eval_failure("sqrt(-1)"), RuntimeError::NegativeSquareRoot { .. }));
    assert!(matches!(eval_failure("ln(0)"), RuntimeError::NonPositiveLogarithm { .. }));
    assert!(matches!(eval_failure("lg(-10)"), RuntimeError::NonPositiveLogarithm { .. }));
    assert!(matches!(eval_failure("(-8)^(1/3)"), RuntimeError::InvalidExponent { .. }));
    assert!(matches!(eval_failure("10^400"), RuntimeError::NonFiniteResult { .. }));
    assert!(matches!(eval_failure("acatan(1)"), RuntimeError::UnsupportedOperation { .. }));
}

#[test]
fn errors_are_raised_lazily() {
    let function = compile("1/x");
    assert_eq!(function.evaluate(&[dec("0")]), Err(RuntimeError::DivisionByZero));
    assert_eq!(function.evaluate(&[dec("8")]).unwrap(), dec("0.125"));
    assert_eq!(function.evaluate(&[]),
               Err(RuntimeError::MissingOperand { name:     "x".to_string(),
                                                  index:    0,
                                                  provided: 0, }));
}

#[test]
fn complex_expressions() {
    assert_eval("(2+3)*(4-1)", "15");
    assert_eval("sin(pi/2)", "1.0");
    assert_eval_with("sqrt(x^2+y^2)", &["4", "3"], "5.0");
    assert_eval("abs(-5)*2+3", "13");
    assert_eval("-2^2", "4");
    assert_eval("-(2^2)", "-4");
}

#[test]
fn exact_decimal_arithmetic() {
    assert_eval("9999999999999999999999999999999999999999 + 1",
                "10000000000000000000000000000000000000000");
    assert_eval("0.1 + 0.2", "0.3");
    assert_eval("0,5 * 4", "2");
    assert_eval("1/3", "0.33333333333333333333");
    assert_eval("2/3", "0.66666666666666666667");
    assert_eval("-7%3", "-1");
    assert_eval("7.5%2", "1.5");
}

#[test]
fn hard_expressions() {
    assert_eval("sqrt(16)-21+3^2^1-21*3*(6+2)+ln(e)", "-511.0");
    assert_eval("(1 + 2) * (3 + (4 * (5 + 6))) / 2^3", "17.625");
    assert_eval_with("a*b + c*d - m/f + g^h",
                     &["2", "2", "3", "3", "6", "2", "7", "1"],
                     "17");
    assert_eval("1+2*3-4/5+6%7^8*9-10+11*12-13/14+15%16^17*18-19+20*21",
                "852.27142857142857142857");
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let function = compile("pi*2/3 + sin(1)");
    let first = function.evaluate(&[]).unwrap();
    for _ in 0..10 {
        assert_eq!(function.evaluate(&[]).unwrap(), first);
    }
}

#[test]
fn functions_can_be_shared_between_threads() {
    let function = compile("x^2 + 1");
    thread::scope(|scope| {
        let handles: Vec<_> = (1..=4).map(|i| {
                                         let function = &function;
                                         scope.spawn(move || {
                                                  function.evaluate(&[BigDecimal::from(i)]).unwrap()
                                              })
                                     })
                                     .collect();
        for (i, handle) in (1..=4).zip(handles) {
            assert_eq!(handle.join().unwrap(), BigDecimal::from(i * i + 1));
        }
    });
}

#[test]
fn variable_count_follows_the_root_node() {
    assert_eq!(compile("42").variable_count(), 0);
    assert_eq!(compile("-y").variable_count(), 1);
    assert_eq!(compile("x*y+z").variable_count(), 3);
    assert_eq!(compile("x+y").variable_count(), 2);
    assert_eq!(compile("(a+b)*c").variable_count(), 3);
    assert_eq!(compile("-(a+b)").variable_count(), 2);
}

#[test]
fn convenience_entry_points() {
    assert_eq!(mathfn::evaluate("x*2", &[dec("21")]).unwrap(), dec("42"));
    assert!(matches!(mathfn::evaluate("1/0", &[]), Err(Error::Runtime(RuntimeError::DivisionByZero))));
    assert!(matches!(mathfn::compile("2 # 3"), Err(Error::Parse(ParseError::UnknownCharacter { .. }))));
}

#[test]
fn long_flat_expressions() {
    let sum = vec!["1"; 10_000].join("+");
    assert_eval(&sum, "10000");

    let countdown = format!("x{}", "-1".repeat(20_000));
    assert_eval_with(&countdown, &["20000"], "0");

    let failing = format!("{sum}+1/0");
    assert_eq!(compile(&failing).evaluate(&[]), Err(RuntimeError::DivisionByZero));

    let unclosed = format!("({sum}");
    assert_eq!(parse_failure(&unclosed), ParseError::MismatchedParenthesis { position: 0 });
}
