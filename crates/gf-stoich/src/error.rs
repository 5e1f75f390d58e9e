//! Calculator errors.

use gf_core::{CoreError, Real};
use thiserror::Error;

/// Result type for calculator operations.
pub type StoichResult<T> = Result<T, StoichError>;

/// Errors reported by the flow-rate calculators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoichError {
    /// An input lies outside its physical domain; nothing was computed.
    #[error("Validation error: {field} = {value} ({reason})")]
    Validation {
        field: &'static str,
        value: Real,
        reason: &'static str,
    },

    /// The inputs are individually valid but the formula is undefined for them.
    #[error("Domain error: {what}")]
    Domain { what: &'static str },
}

impl StoichError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoichError::Validation { .. })
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, StoichError::Domain { .. })
    }
}

impl From<CoreError> for StoichError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => StoichError::Validation {
                field: what,
                value,
                reason: "must be finite",
            },
            CoreError::Negative { what, value } => StoichError::Validation {
                field: what,
                value,
                reason: "must be non-negative",
            },
            CoreError::NonPositive { what, value } => StoichError::Validation {
                field: what,
                value,
                reason: "must be strictly positive",
            },
        }
    }
}
