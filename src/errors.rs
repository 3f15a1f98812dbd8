//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Coordinate axis named in bound validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Top-level error type for the crate.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// Raised when a domain bound is non-finite or `min >= max`.
    #[error("invalid {axis} bounds: min {min} must be finite and below max {max}")]
    InvalidBounds {
        /// Offending axis.
        axis: Axis,
        /// Requested lower bound.
        min: Scalar,
        /// Requested upper bound.
        max: Scalar,
    },
    /// Raised when a resolution or stride is zero.
    #[error("resolution must be positive, got {0}")]
    InvalidResolution(usize),
    /// Raised when coordinate or field arrays do not share a shape.
    #[error("shape mismatch: {x:?} vs {y:?}")]
    ShapeMismatch {
        /// Shape of the first array as (rows, columns).
        x: (usize, usize),
        /// Shape of the second array as (rows, columns).
        y: (usize, usize),
    },
    /// Raised when the evaluator configuration is unusable.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results carrying [`FieldError`].
pub type Result<T> = std::result::Result<T, FieldError>;
