//! Result of applying an operator to two operands

use std::fmt;

use crate::domain::number::format_number;

/// Message carried by the failure outcome of a division by zero.
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero!";

/// Message carried by the failure outcome of an unrecognized operator symbol.
pub const UNKNOWN_OPERATOR: &str = "Error: Operator tidak dikenal.";

/// Either a numeric value or a descriptive failure.
///
/// Failures are ordinary values: they are classified and printed like any
/// other outcome and never abort the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    Failure(String),
}

impl Outcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(*v),
            Outcome::Failure(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => f.write_str(&format_number(*v)),
            Outcome::Failure(message) => f.write_str(message),
        }
    }
}
