//! Lazy query automata for approximate dictionary search.
//!
//! A [`QueryAutomaton`] encodes every string within a bounded number of edit
//! operations of a query. Searching a dictionary intersects that automaton
//! with the dictionary's own acceptor, determinizing the query side one
//! [`Frontier`] at a time, so only prefixes that can still lead to a match
//! are ever visited.
//!
//! # Terminology
//!
//! - **Position**: one NFA state, `(term_index, num_errors, marker)`
//! - **Frontier**: an epsilon-closed set of positions, i.e. one state of the
//!   lazily determinized automaton
//! - **Intersection**: a frontier paired with a dictionary node

pub mod automaton;
pub mod builder;
mod frontier;
mod intersection;
mod operations;
mod options;
mod position;
mod query;
mod symbol;

pub use automaton::QueryAutomaton;
pub use builder::{BuilderError, TransducerBuilder};
pub use frontier::Frontier;
pub use intersection::Intersection;
pub use operations::EditOperations;
pub use options::SearchOptions;
pub use position::{Marker, Position};
pub use query::{fuzzy_search, fuzzy_search_candidates, Candidate, QueryIterator, StringQueryIterator};
pub use symbol::Symbol;

use crate::dictionary::Dictionary;
use crate::error::Result;
use std::collections::BTreeSet;

/// Main transducer for approximate string matching.
///
/// The transducer combines a dictionary with a set of edit operations, and
/// builds a fresh query automaton for every query.
///
/// # Example
///
/// ```rust
/// use levdict::prelude::*;
///
/// let dict = TrieDictionary::from_terms(["test", "tset", "testing"]);
/// let transducer = Transducer::with_transposition(dict);
///
/// let mut terms: Vec<String> = transducer.query("test", 1).collect();
/// terms.sort();
/// assert_eq!(terms, vec!["test", "tset"]);
/// ```
#[derive(Clone, Debug)]
pub struct Transducer<D: Dictionary> {
    dictionary: D,
    operations: EditOperations,
}

impl<D: Dictionary> Transducer<D> {
    /// Create a new transducer with the given dictionary and operations
    pub fn new(dictionary: D, operations: EditOperations) -> Self {
        Self {
            dictionary,
            operations,
        }
    }

    /// Create a transducer with standard Levenshtein operations.
    pub fn standard(dictionary: D) -> Self {
        Self::new(dictionary, EditOperations::standard())
    }

    /// Create a transducer that also recognizes swapped adjacent characters.
    ///
    /// Only the shape where the dictionary term swaps two characters that
    /// are adjacent in the query costs 1.
    pub fn with_transposition(dictionary: D) -> Self {
        Self::new(dictionary, EditOperations::with_transposition())
    }

    /// Create a transducer with merge and split.
    ///
    /// Useful for OCR-style confusions like "w" and "uu".
    pub fn with_merge_split(dictionary: D) -> Self {
        Self::new(dictionary, EditOperations::with_merge_split())
    }

    /// Create a transducer where repeated-character runs may differ in length
    /// for free.
    pub fn with_repetitions(dictionary: D) -> Self {
        Self::new(dictionary, EditOperations::with_repetitions())
    }

    /// Get the operations used by this transducer
    pub fn operations(&self) -> EditOperations {
        self.operations
    }

    /// Get a reference to the underlying dictionary
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Extract the underlying dictionary, consuming the transducer.
    #[inline]
    pub fn into_inner(self) -> D {
        self.dictionary
    }

    fn options(&self, term: &str, max_distance: usize) -> SearchOptions {
        SearchOptions::new(max_distance)
            .operations(self.operations)
            .bounded(term, self.dictionary.max_term_len())
    }

    /// Query for terms within `max_distance` edits of `term`
    ///
    /// Returns an iterator over matching terms (strings only)
    pub fn query(&self, term: &str, max_distance: usize) -> StringQueryIterator<D::Node> {
        StringQueryIterator::new(self.dictionary.root(), term, &self.options(term, max_distance))
    }

    /// Query for terms with their edit distances
    ///
    /// Returns an iterator over `Candidate` structs holding the matching term
    /// and the minimal cost read off the automaton frontier.
    pub fn query_with_distance(&self, term: &str, max_distance: usize) -> QueryIterator<D::Node> {
        QueryIterator::new(self.dictionary.root(), term, &self.options(term, max_distance))
    }

    /// Validated search returning the set of matching terms.
    ///
    /// With `strict` set only terms whose minimal cost is exactly
    /// `max_distance` are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`SearchOptions::validate`].
    pub fn search(&self, term: &str, max_distance: usize, strict: bool) -> Result<BTreeSet<String>> {
        let options = SearchOptions::new(max_distance)
            .operations(self.operations)
            .strict(strict);
        fuzzy_search(&self.dictionary, term, &options)
    }
}
