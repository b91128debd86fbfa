//! Error types for primr
//!
//! The numeric kernels themselves have no error paths: malformed strides,
//! wrong weight layouts, or out-of-bounds channel counts produce incorrect
//! output, never a reported error. Validation belongs to the dispatch layer
//! that sits above this crate. `Error` exists for the few preparatory
//! surfaces that do validate their inputs (weight packing, casts).

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using primr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in primr's preparatory operations
#[derive(Error, Debug)]
pub enum Error {
    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Buffer length does not match what the operation expects
    #[error("Length mismatch in '{op}': expected {expected}, got {got}")]
    LengthMismatch {
        /// The operation name
        op: &'static str,
        /// Expected element count
        expected: usize,
        /// Actual element count
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create a length mismatch error
    pub fn length_mismatch(op: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch { op, expected, got }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
