//! Error types for estimator construction and parameter validation.
//!
//! Partitioning itself never returns an error: a violated class-boundary
//! invariant is an algorithm defect and panics instead.

use thiserror::Error;

/// Error type for all fallible `cyclepart` operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter lies outside its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input sequence has no elements.
    #[error("Invalid input: sequence is empty")]
    EmptyInput,

    /// The input sequence holds an absent element (`None`, NaN).
    #[error("Invalid input: element at index {index} is absent")]
    AbsentElement { index: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("alpha {alpha} must be in [0, 1)"))
    }

    pub fn invalid_distance(distance: f64) -> Self {
        Self::InvalidParameter(format!("distance {distance} must be positive"))
    }

    pub fn invalid_cell_size(cell_size: usize) -> Self {
        Self::InvalidParameter(format!("cell size {cell_size} must be positive"))
    }

    pub fn invalid_class_count(classes: usize) -> Self {
        Self::InvalidParameter(format!("class count {classes} must be at least 2"))
    }
}
