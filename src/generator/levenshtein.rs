//! Levenshtein-based candidate generators.

use super::CandidateGenerator;
use crate::dictionary::trie::TrieDictionary;
use crate::error::{Result, SearchError};
use crate::transducer::{fuzzy_search, EditOperations, SearchOptions};
use std::collections::BTreeSet;

fn search_without_self(
    dictionary: &TrieDictionary,
    word: &str,
    options: &SearchOptions,
) -> Result<BTreeSet<String>> {
    let mut candidates = fuzzy_search(dictionary, word, options)?;
    candidates.remove(word);
    Ok(candidates)
}

/// Proposes every dictionary term within a fixed edit distance.
///
/// # Example
///
/// ```rust
/// use levdict::generator::{CandidateGenerator, LevenshteinGenerator};
///
/// let generator = LevenshteinGenerator::new(["cat", "mat", "rat", "dog"], 1);
/// let candidates = generator.candidates_for_word("rat").unwrap();
///
/// assert_eq!(candidates.len(), 2);
/// assert!(!candidates.contains("rat"));
/// ```
#[derive(Debug, Clone)]
pub struct LevenshteinGenerator {
    dictionary: TrieDictionary,
    max_distance: usize,
    operations: EditOperations,
}

impl LevenshteinGenerator {
    /// Create a generator over `terms` with budget `max_distance`
    pub fn new<I, S>(terms: I, max_distance: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_dictionary(TrieDictionary::from_terms(terms), max_distance)
    }

    /// Create a generator over an existing dictionary
    pub fn from_dictionary(dictionary: TrieDictionary, max_distance: usize) -> Self {
        LevenshteinGenerator {
            dictionary,
            max_distance,
            operations: EditOperations::STANDARD,
        }
    }

    /// Use a different set of edit operations
    pub fn with_operations(mut self, operations: EditOperations) -> Self {
        self.operations = operations;
        self
    }

    /// The fixed budget
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }
}

impl CandidateGenerator for LevenshteinGenerator {
    fn candidates_for_word(&self, word: &str) -> Result<BTreeSet<String>> {
        let options = SearchOptions::new(self.max_distance).operations(self.operations);
        search_without_self(&self.dictionary, word, &options)
    }
}

/// Proposes dictionary terms within a distance proportional to word length.
///
/// A word of `n` characters gets the budget `floor(threshold * n)`, so long
/// words tolerate more edits than short ones. With `min_distance_one` set
/// the budget is at least 1, which keeps short words from being limited to
/// exact matches.
///
/// # Example
///
/// ```rust
/// use levdict::generator::{CandidateGenerator, NormalizedLevenshteinGenerator};
///
/// let generator = NormalizedLevenshteinGenerator::new(["cat", "coast"], 0.5, false).unwrap();
///
/// assert_eq!(generator.budget("rat"), 1);
/// assert_eq!(generator.budget("coat"), 2);
/// assert!(generator.candidates_for_word("coat").unwrap().contains("coast"));
/// ```
#[derive(Debug, Clone)]
pub struct NormalizedLevenshteinGenerator {
    dictionary: TrieDictionary,
    threshold: f64,
    min_distance_one: bool,
    operations: EditOperations,
}

impl NormalizedLevenshteinGenerator {
    /// Create a generator over `terms`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidThreshold`] if `threshold` is negative,
    /// infinite or NaN.
    pub fn new<I, S>(terms: I, threshold: f64, min_distance_one: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_dictionary(TrieDictionary::from_terms(terms), threshold, min_distance_one)
    }

    /// Create a generator over an existing dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidThreshold`] if `threshold` is negative,
    /// infinite or NaN.
    pub fn from_dictionary(
        dictionary: TrieDictionary,
        threshold: f64,
        min_distance_one: bool,
    ) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(SearchError::InvalidThreshold(threshold));
        }

        Ok(NormalizedLevenshteinGenerator {
            dictionary,
            threshold,
            min_distance_one,
            operations: EditOperations::STANDARD,
        })
    }

    /// Use a different set of edit operations
    pub fn with_operations(mut self, operations: EditOperations) -> Self {
        self.operations = operations;
        self
    }

    /// Edit budget for `word`
    pub fn budget(&self, word: &str) -> usize {
        let length = word.chars().count() as f64;
        let budget = (self.threshold * length).floor() as usize;
        if self.min_distance_one {
            budget.max(1)
        } else {
            budget
        }
    }
}

impl CandidateGenerator for NormalizedLevenshteinGenerator {
    fn candidates_for_word(&self, word: &str) -> Result<BTreeSet<String>> {
        let budget = self.budget(word);
        trace!("budget for {:?}: {}", word, budget);

        let options = SearchOptions::new(budget).operations(self.operations);
        search_without_self(&self.dictionary, word, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERMS: [&str; 5] = ["cat", "mat", "hat", "dogapple", "flat"];

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_levenshtein_excludes_self() {
        let generator = LevenshteinGenerator::new(["cat", "mat"], 1);
        assert_eq!(generator.candidates_for_word("cat").unwrap(), set(&["mat"]));
    }

    #[test]
    fn test_levenshtein_with_operations() {
        let generator = LevenshteinGenerator::new(["water", "wasser"], 1)
            .with_operations(EditOperations::with_merge_split());
        assert_eq!(generator.candidates_for_word("wasser").unwrap(), set(&["water"]));
    }

    #[test]
    fn test_budget() {
        let generator = NormalizedLevenshteinGenerator::new(TERMS, 0.1, false).unwrap();
        assert_eq!(generator.budget("rat"), 0);
        assert_eq!(generator.budget(""), 0);

        let generator = NormalizedLevenshteinGenerator::new(TERMS, 0.1, true).unwrap();
        assert_eq!(generator.budget("rat"), 1);
        assert_eq!(generator.budget(""), 1);

        let generator = NormalizedLevenshteinGenerator::new(TERMS, 0.34, false).unwrap();
        assert_eq!(generator.budget("rat"), 1);

        let generator = NormalizedLevenshteinGenerator::new(TERMS, 0.7, false).unwrap();
        assert_eq!(generator.budget("rat"), 2);
    }

    #[test]
    fn test_huge_budget_saturates() {
        let generator = NormalizedLevenshteinGenerator::new(TERMS, 1e18, false).unwrap();
        assert!(generator.budget("rat") > 1_000_000);

        let generator = LevenshteinGenerator::new(TERMS, usize::MAX);
        assert_eq!(generator.candidates_for_word("rat").unwrap(), set(&TERMS));
    }

    #[test]
    fn test_budget_counts_characters() {
        let generator = NormalizedLevenshteinGenerator::new(TERMS, 0.5, false).unwrap();
        // 2 characters, 4 bytes
        assert_eq!(generator.budget("éé"), 1);
    }

    #[test]
    fn test_invalid_threshold() {
        for threshold in [-0.1, f64::NAN, f64::INFINITY] {
            let result = NormalizedLevenshteinGenerator::new(TERMS, threshold, false);
            assert!(matches!(result, Err(SearchError::InvalidThreshold(_))));
        }
    }
}
