//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::Operator;

/// Domain errors represent rejected user input.
/// The display text is what the user sees before being asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Input tidak boleh kosong atau dibatalkan. Silakan coba lagi.")]
    EmptyNumber,

    #[error("\"{0}\" bukan angka yang valid. Silakan masukkan angka.")]
    InvalidNumber(String),

    #[error("Operator tidak boleh kosong atau dibatalkan. Silakan coba lagi.")]
    EmptyOperator,

    #[error("Operator \"{0}\" tidak valid. Yang diizinkan: {allowed}.", allowed = Operator::allowed())]
    InvalidOperator(String),
}
