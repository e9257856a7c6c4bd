//! The six arithmetic operations and operator dispatch

use crate::domain::{Operator, Outcome, DIVISION_BY_ZERO, UNKNOWN_OPERATOR};

pub fn add(a: f64, b: f64) -> Outcome {
    Outcome::Value(a + b)
}

pub fn subtract(a: f64, b: f64) -> Outcome {
    Outcome::Value(a - b)
}

pub fn multiply(a: f64, b: f64) -> Outcome {
    Outcome::Value(a * b)
}

/// Division by exactly zero (either sign) yields the failure outcome.
pub fn divide(a: f64, b: f64) -> Outcome {
    if b == 0.0 {
        return Outcome::failure(DIVISION_BY_ZERO);
    }
    Outcome::Value(a / b)
}

/// Floating remainder; the sign follows the left operand.
pub fn modulo(a: f64, b: f64) -> Outcome {
    Outcome::Value(a % b)
}

pub fn power(a: f64, b: f64) -> Outcome {
    Outcome::Value(a.powf(b))
}

impl Operator {
    /// Apply this operator to `a` and `b`.
    pub fn apply(self, a: f64, b: f64) -> Outcome {
        match self {
            Operator::Add => add(a, b),
            Operator::Subtract => subtract(a, b),
            Operator::Multiply => multiply(a, b),
            Operator::Divide => divide(a, b),
            Operator::Modulo => modulo(a, b),
            Operator::Power => power(a, b),
        }
    }
}

/// Dispatch on a raw operator symbol.
///
/// Unrecognized symbols produce the unknown-operator failure instead of an error,
/// so callers working with unvalidated text still get a printable outcome.
pub fn calculate(a: f64, symbol: &str, b: f64) -> Outcome {
    match symbol.parse::<Operator>() {
        Ok(op) => op.apply(a, b),
        Err(_) => Outcome::failure(UNKNOWN_OPERATOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(7.0)]
    #[case(-3.25)]
    #[case(f64::INFINITY)]
    fn given_zero_divisor_when_dividing_then_fails(#[case] a: f64) {
        assert_eq!(divide(a, 0.0), Outcome::failure(DIVISION_BY_ZERO));
        assert_eq!(divide(a, -0.0), Outcome::failure(DIVISION_BY_ZERO));
    }

    #[test]
    fn given_nonzero_divisor_when_dividing_then_returns_quotient() {
        assert_eq!(divide(1.0, 4.0), Outcome::Value(0.25));
        assert_eq!(divide(-9.0, 3.0), Outcome::Value(-3.0));
    }

    #[test]
    fn given_negative_left_operand_when_modulo_then_sign_follows_left() {
        assert_eq!(modulo(-5.0, 2.0), Outcome::Value(-1.0));
        assert_eq!(modulo(5.0, -2.0), Outcome::Value(1.0));
        assert_eq!(modulo(3.5, 2.0), Outcome::Value(1.5));
    }

    #[test]
    fn given_modulo_by_zero_then_value_is_nan_not_failure() {
        let outcome = modulo(5.0, 0.0);
        assert!(outcome.value().is_some_and(f64::is_nan));
    }

    #[rstest]
    #[case(2.0, 10.0, 1024.0)]
    #[case(2.0, -1.0, 0.5)]
    #[case(4.0, 0.5, 2.0)]
    #[case(0.0, 0.0, 1.0)]
    fn given_operands_when_power_then_follows_float_rules(
        #[case] a: f64,
        #[case] b: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(power(a, b), Outcome::Value(expected));
    }

    #[test]
    fn given_negative_base_and_fractional_exponent_when_power_then_nan() {
        assert!(power(-8.0, 1.0 / 3.0).value().is_some_and(f64::is_nan));
    }

    #[rstest]
    #[case("+", 15.0)]
    #[case("-", 5.0)]
    #[case("*", 50.0)]
    #[case("/", 2.0)]
    #[case("%", 0.0)]
    #[case("**", 100_000.0)]
    fn given_symbol_when_calculating_then_dispatches(#[case] symbol: &str, #[case] expected: f64) {
        assert_eq!(calculate(10.0, symbol, 5.0), Outcome::Value(expected));
    }

    #[test]
    fn given_unknown_symbol_when_calculating_then_unknown_operator_failure() {
        assert_eq!(calculate(1.0, "^", 2.0), Outcome::failure(UNKNOWN_OPERATOR));
    }
}
