//! Application layer: input validation and the calculator session
//!
//! This layer orchestrates domain logic and depends only on the `Console` boundary.

pub mod error;
pub mod input;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use input::{request_continue, request_number, request_operator, Decision};
pub use session::{CalculatorSession, Prompts, SessionSummary};
