//! Emitter error type.

use thiserror::Error;

/// Error type for JSON text emission.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmitError {
    /// A `Double` holding NaN or an infinity reached the emitter; JSON has no
    /// representation for non-finite numbers. The sink may already hold a
    /// truncated prefix of the document - emission does not roll back.
    #[error("non-finite number cannot be represented in JSON")]
    NonFiniteNumber,
}
