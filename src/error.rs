//! Error types for search configuration and candidate generation.

use thiserror::Error;

/// Errors raised when a search is configured with values it cannot honor.
///
/// The search itself is deterministic and performs no I/O, so every variant
/// describes a configuration mistake rather than a transient failure.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A signed edit-distance budget below zero.
    #[error("maximum edit distance must be non-negative, got {0}")]
    NegativeDistance(i64),

    /// Strict mode asked for an exact cost no dictionary word can have.
    ///
    /// No edit sequence is ever more expensive than rewriting the longer of
    /// the two strings, so a budget above `bound` cannot be met exactly.
    #[error(
        "strict distance {max_distance} can never be reached: no candidate costs more than {bound}"
    )]
    UnreachableStrictDistance {
        /// Requested exact distance
        max_distance: usize,
        /// Largest cost any dictionary word can have against the query
        bound: usize,
    },

    /// A length-normalized threshold that is negative, infinite or NaN.
    #[error("threshold must be a finite, non-negative number, got {0}")]
    InvalidThreshold(f64),

    /// An edit operation name that could not be parsed.
    #[error(
        "unknown edit operation: {0}. Valid options: standard, transposition, merge-split, repetitions"
    )]
    UnknownOperation(String),

    /// Search options could not be decoded from JSON.
    #[cfg(feature = "serialization")]
    #[error("invalid search options: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// A specialized `Result` type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
