//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Division by zero is deliberately absent: the engine reports it as a
/// sentinel result value, not as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Please enter valid numbers")]
    InvalidOperands,
}
