//! # Error Types
//!
//! Structured error types for calc_core. Each variant carries enough context
//! to render a clear user-facing message without the library doing any I/O
//! itself: the operation library only signals, the shell renders.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn check_radicand(x: f64) -> CalcResult<()> {
//!     if x < 0.0 {
//!         return Err(CalcError::invalid_domain(
//!             "square_root",
//!             x.to_string(),
//!             "Square root of negative number is not defined",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// The taxonomy is deliberately small: an operand outside the mathematical
/// domain of its operation, or a result the 64-bit / floating-point types
/// cannot represent. Malformed console input never reaches this type; the
/// interactive shell handles that at the I/O boundary.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Operand outside the function's mathematically valid domain
    #[error("{reason}")]
    InvalidDomain {
        operation: String,
        value: String,
        reason: String,
    },

    /// Result exceeds the representable range, or is non-finite.
    ///
    /// This single category covers both true overflow (factorial past 20!)
    /// and undefined floating-point outcomes such as a fractional exponent
    /// of a negative base.
    #[error("{reason}")]
    Overflow { operation: String, reason: String },
}

impl CalcError {
    /// Create an InvalidDomain error
    pub fn invalid_domain(
        operation: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidDomain {
            operation: operation.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Overflow {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Name of the operation that signaled this error
    pub fn operation(&self) -> &str {
        match self {
            CalcError::InvalidDomain { operation, .. } => operation,
            CalcError::Overflow { operation, .. } => operation,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDomain { .. } => "INVALID_DOMAIN",
            CalcError::Overflow { .. } => "OVERFLOW",
        }
    }
}
