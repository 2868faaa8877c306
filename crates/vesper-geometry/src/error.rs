//! Error types for the geometry crate.

use thiserror::Error;

/// Errors from geometric operations that have no meaningful result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A coordinate or size was divided by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A zero-length vector has no direction.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
