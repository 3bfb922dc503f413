//! Error types for the drift noise core.

use thiserror::Error;

/// Errors produced by noise field operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoiseError {
    /// A query coordinate fell below the field's lower bound, i.e. it
    /// targets already-evicted (or never-valid negative) territory.
    #[error("coordinate {t} is below the field's lower bound {lower_bound}")]
    OutOfBounds { t: f64, lower_bound: f64 },
}
