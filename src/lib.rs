//! kalkulator: interactive two-operand calculator with result analysis
//!
//! Layers, innermost first: `domain` (operators, outcomes, classification),
//! `application` (input validation, session loop), `infrastructure` (console I/O),
//! `cli` (arguments, dispatch, exit codes).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{CalculatorSession, SessionSummary};
pub use config::Settings;
pub use domain::{calculate, Operator, Outcome, Report};
