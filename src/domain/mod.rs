//! Domain layer: operators, outcomes and result analysis
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arithmetic;
pub mod error;
pub mod number;
pub mod operator;
pub mod outcome;
pub mod report;

pub use arithmetic::calculate;
pub use error::DomainError;
pub use number::{format_number, parse_number, to_fixed};
pub use operator::Operator;
pub use outcome::{Outcome, DIVISION_BY_ZERO, UNKNOWN_OPERATOR};
pub use report::{Analysis, Kind, Note, Parity, Report, Sign};
