//! Fluent construction of a [`Transducer`](super::Transducer).
//!
//! Operations default to standard Levenshtein; building fails only when no
//! dictionary was supplied.

use crate::dictionary::Dictionary;
use crate::transducer::{EditOperations, Transducer};

/// Builder for constructing a `Transducer` with a fluent API.
///
/// Operations default to standard Levenshtein; each flag can be switched on
/// separately.
///
/// # Example
///
/// ```rust
/// use levdict::prelude::*;
///
/// let dict = TrieDictionary::from_terms(["test", "testing"]);
/// let transducer = TransducerBuilder::new()
///     .dictionary(dict)
///     .transposition(true)
///     .build()
///     .unwrap();
///
/// assert!(transducer.operations().transposition);
/// ```
pub struct TransducerBuilder<D: Dictionary> {
    dictionary: Option<D>,
    operations: EditOperations,
}

/// Error type for builder validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// No dictionary was provided
    #[error("Dictionary is required. Use .dictionary() to set it.")]
    MissingDictionary,
}

impl<D: Dictionary> TransducerBuilder<D> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        TransducerBuilder {
            dictionary: None,
            operations: EditOperations::STANDARD,
        }
    }

    /// Set the dictionary to search.
    pub fn dictionary(mut self, dictionary: D) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Replace the whole operation set.
    pub fn operations(mut self, operations: EditOperations) -> Self {
        self.operations = operations;
        self
    }

    /// Enable or disable transposition.
    pub fn transposition(mut self, enabled: bool) -> Self {
        self.operations.transposition = enabled;
        self
    }

    /// Enable or disable merge and split.
    pub fn merge_split(mut self, enabled: bool) -> Self {
        self.operations.merge_split = enabled;
        self
    }

    /// Enable or disable free repetitions.
    pub fn repetitions(mut self, enabled: bool) -> Self {
        self.operations.repetitions = enabled;
        self
    }

    /// Build the `Transducer`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingDictionary`] if `.dictionary()` was
    /// never called.
    pub fn build(self) -> Result<Transducer<D>, BuilderError> {
        let dictionary = self.dictionary.ok_or(BuilderError::MissingDictionary)?;
        Ok(Transducer::new(dictionary, self.operations))
    }
}

impl<D: Dictionary> Default for TransducerBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
