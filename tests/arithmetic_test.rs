//! Properties of the arithmetic operations and textual dispatch

use kalkulator::domain::arithmetic::{add, divide, modulo, multiply, power, subtract};
use kalkulator::domain::{calculate, Analysis, Operator, Outcome, Parity, DIVISION_BY_ZERO};
use rstest::rstest;

#[rstest]
#[case(0.0)]
#[case(1.0)]
#[case(-1e300)]
#[case(f64::NEG_INFINITY)]
fn given_any_dividend_when_dividing_by_zero_then_never_numeric(#[case] a: f64) {
    let outcome = divide(a, 0.0);
    assert!(outcome.is_failure());
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.to_string(), DIVISION_BY_ZERO);
}

#[test]
fn given_nonzero_divisor_when_dividing_then_float_quotient() {
    assert_eq!(divide(1.0, 3.0), Outcome::Value(1.0 / 3.0));
    assert_eq!(divide(7.5, -2.5), Outcome::Value(-3.0));
}

#[test]
fn given_basic_operations_then_match_float_arithmetic() {
    assert_eq!(add(0.1, 0.2), Outcome::Value(0.1 + 0.2));
    assert_eq!(subtract(3.0, 10.0), Outcome::Value(-7.0));
    assert_eq!(multiply(-4.0, 2.5), Outcome::Value(-10.0));
}

#[rstest]
#[case(5.0, 2.0, 1.0, Parity::Odd)]
#[case(4.0, 2.0, 0.0, Parity::Even)]
#[case(3.5, 2.0, 1.5, Parity::Odd)]
fn given_modulo_result_then_parity_follows_modulo_rule(
    #[case] a: f64,
    #[case] b: f64,
    #[case] expected: f64,
    #[case] parity: Parity,
) {
    let outcome = modulo(a, b);
    assert_eq!(outcome, Outcome::Value(expected));
    assert_eq!(Analysis::of(expected).parity, parity);
}

#[test]
fn given_power_then_integer_and_fractional_paths() {
    assert_eq!(power(2.0, 10.0), Outcome::Value(1024.0));
    assert_eq!(power(2.0, -1.0), Outcome::Value(0.5));
}

#[test]
fn given_every_operator_when_dispatching_by_symbol_then_same_as_apply() {
    for op in Operator::ALL {
        assert_eq!(calculate(9.0, op.symbol(), 4.0), op.apply(9.0, 4.0), "operator {op}");
    }
}

#[test]
fn given_unknown_symbol_when_dispatching_then_distinct_failure() {
    let outcome = calculate(1.0, "//", 2.0);
    assert_eq!(outcome, Outcome::failure("Error: Operator tidak dikenal."));
    assert_ne!(outcome, divide(1.0, 0.0));
}
