//! Error types.
use thiserror::Error;

/// Errors raised by the runtime-arity [`DataArrayN`](crate::DataArrayN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DataToolError {
    /// The array was created with zero dimensions.
    #[error("sample arrays need at least one dimension")]
    ZeroArity,
    /// A sample did not have as many coordinates as the array has dimensions.
    #[error("expected a sample with {expected} coordinates, got {actual}")]
    ArityMismatch {
        /// Arity of the array.
        expected: usize,
        /// Number of coordinates given.
        actual: usize,
    },
}
