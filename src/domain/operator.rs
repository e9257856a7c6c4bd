//! The closed set of binary operators

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Binary arithmetic operator selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    /// All operators, in the order they are offered in the prompt.
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulo,
        Operator::Power,
    ];

    /// Textual symbol as typed by the user.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Power => "**",
        }
    }

    /// Comma separated list of accepted symbols, e.g. `+, -, *, /, %, **`.
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|op| op.symbol())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = DomainError;

    /// Must match a symbol exactly, whitespace included. Blank input is reported
    /// as empty rather than invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::EmptyOperator);
        }
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| DomainError::InvalidOperator(s.to_string()))
    }
}
