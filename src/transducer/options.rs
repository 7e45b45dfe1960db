//! Search configuration and its validation.

use super::EditOperations;
use crate::error::{Result, SearchError};

/// Configuration of a single fuzzy search.
///
/// # Example
///
/// ```rust
/// use levdict::transducer::SearchOptions;
///
/// let options = SearchOptions::new(2).transposition(true).strict(true);
/// assert_eq!(options.max_distance, 2);
/// assert!(options.operations.transposition);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchOptions {
    /// Largest total cost a match may have
    pub max_distance: usize,

    /// Optional edit operations
    #[cfg_attr(feature = "serialization", serde(flatten))]
    pub operations: EditOperations,

    /// Keep only matches whose minimal cost is exactly `max_distance`
    pub strict_distance: bool,
}

impl SearchOptions {
    /// Options for a standard Levenshtein search within `max_distance`.
    pub fn new(max_distance: usize) -> Self {
        SearchOptions {
            max_distance,
            operations: EditOperations::STANDARD,
            strict_distance: false,
        }
    }

    /// Options from a signed budget, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NegativeDistance`] if `max_distance < 0`.
    pub fn try_from_signed(max_distance: i64) -> Result<Self> {
        usize::try_from(max_distance)
            .map(Self::new)
            .map_err(|_| SearchError::NegativeDistance(max_distance))
    }

    /// Load options from a JSON object.
    ///
    /// Missing fields take their defaults; operation flags sit next to
    /// `max_distance`:
    ///
    /// ```json
    /// { "max_distance": 1, "merge_split": true, "strict_distance": false }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] for malformed JSON, unknown
    /// value types or a negative `max_distance`.
    #[cfg(feature = "serialization")]
    pub fn from_json(json: &str) -> Result<Self> {
        let options = serde_json::from_str(json)?;
        Ok(options)
    }

    /// Set the maximum distance.
    pub fn max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
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

    /// Enable or disable strict-distance filtering.
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict_distance = enabled;
        self
    }

    /// Check that these options can produce a meaningful result for `query`
    /// against a dictionary whose longest term has `max_term_len` characters.
    ///
    /// Non-strict searches are always valid. A strict search needs some word
    /// to be able to cost exactly `max_distance`; since no candidate costs
    /// more than the longer of the two strings, the budget may not exceed
    /// `max(chars(query), max_term_len)`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnreachableStrictDistance`] otherwise.
    pub fn validate(&self, query: &str, max_term_len: usize) -> Result<()> {
        if !self.strict_distance {
            return Ok(());
        }

        let bound = query.chars().count().max(max_term_len);
        if self.max_distance > bound {
            debug!(
                "rejecting strict search for {:?}: distance {} exceeds bound {}",
                query, self.max_distance, bound
            );
            return Err(SearchError::UnreachableStrictDistance {
                max_distance: self.max_distance,
                bound,
            });
        }

        Ok(())
    }

    /// Cap a non-strict budget at `max(chars(query), max_term_len)`.
    ///
    /// No term costs more than rewriting the longer of the two strings, so
    /// larger budgets match exactly the same terms while building a larger
    /// automaton. Strict options are returned unchanged.
    pub fn bounded(mut self, query: &str, max_term_len: usize) -> Self {
        if self.strict_distance {
            return self;
        }

        let bound = query.chars().count().max(max_term_len);
        if self.max_distance > bound {
            trace!(
                "capping distance {} at {} for {:?}",
                self.max_distance,
                bound,
                query
            );
            self.max_distance = bound;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_setters() {
        let options = SearchOptions::new(1)
            .merge_split(true)
            .repetitions(true)
            .max_distance(3)
            .strict(true);

        assert_eq!(options.max_distance, 3);
        assert!(options.operations.merge_split);
        assert!(options.operations.repetitions);
        assert!(!options.operations.transposition);
        assert!(options.strict_distance);
    }

    #[test]
    fn test_try_from_signed() {
        assert_eq!(SearchOptions::try_from_signed(2).unwrap().max_distance, 2);
        assert!(matches!(
            SearchOptions::try_from_signed(-1),
            Err(SearchError::NegativeDistance(-1))
        ));
    }

    #[test]
    fn test_validate_non_strict_always_ok() {
        assert!(SearchOptions::new(100).validate("abc", 0).is_ok());
    }

    #[test]
    fn test_validate_strict_bound() {
        let options = SearchOptions::new(5).strict(true);
        assert!(options.validate("abc", 5).is_ok());
        assert!(options.validate("abcde", 2).is_ok());

        match options.validate("abc", 4) {
            Err(SearchError::UnreachableStrictDistance { max_distance, bound }) => {
                assert_eq!(max_distance, 5);
                assert_eq!(bound, 4);
            }
            other => panic!("expected unreachable strict distance, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_counts_characters() {
        // 3 characters, 9 bytes
        let options = SearchOptions::new(4).strict(true);
        assert!(options.validate("日本語", 0).is_err());
    }

    #[test]
    fn test_bounded_caps_large_budgets() {
        let options = SearchOptions::new(usize::MAX).transposition(true);
        let bounded = options.bounded("abc", 5);
        assert_eq!(bounded.max_distance, 5);
        assert!(bounded.operations.transposition);

        assert_eq!(SearchOptions::new(usize::MAX).bounded("日本語", 0).max_distance, 3);
        assert_eq!(SearchOptions::new(2).bounded("abc", 5).max_distance, 2);
    }

    #[test]
    fn test_bounded_leaves_strict_alone() {
        let options = SearchOptions::new(9).strict(true);
        assert_eq!(options.bounded("abc", 4), options);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_from_json() {
        let options =
            SearchOptions::from_json(r#"{"max_distance": 1, "merge_split": true}"#).unwrap();
        assert_eq!(options, SearchOptions::new(1).merge_split(true));

        let options = SearchOptions::from_json("{}").unwrap();
        assert_eq!(options, SearchOptions::default());
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_from_json_rejects_negative_distance() {
        let err = SearchOptions::from_json(r#"{"max_distance": -1}"#).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }
}
