//! Candidate generators built on the fuzzy search.
//!
//! A generator proposes spelling variants for a word: dictionary terms close
//! to it under some budget, never the word itself. Generators only use the
//! public search contract ([`fuzzy_search`](crate::transducer::fuzzy_search)),
//! so they work the same over any [`TrieDictionary`](crate::dictionary::trie::TrieDictionary).
//!
//! Batches run on the `rayon` thread pool when the `parallel` feature is
//! enabled. The dictionary is shared read-only, and each word builds its own
//! query automaton, so there is no contention between workers.

mod levenshtein;

pub use levenshtein::{LevenshteinGenerator, NormalizedLevenshteinGenerator};

use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Common interface of candidate generators.
pub trait CandidateGenerator: Sync {
    /// Spelling-variant candidates for a single word, excluding the word.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator's configuration cannot be applied
    /// to `word`.
    fn candidates_for_word(&self, word: &str) -> Result<BTreeSet<String>>;

    /// Candidates for every word of a batch, keyed by word.
    ///
    /// Duplicate words collapse into one entry. Fails with the first error
    /// any word produces.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`candidates_for_word`](Self::candidates_for_word).
    fn candidates_for_words<S>(&self, words: &[S]) -> Result<BTreeMap<String, BTreeSet<String>>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        let iter = words.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = words.iter();

        iter.map(|word| {
            let word = word.as_ref();
            self.candidates_for_word(word)
                .map(|candidates| (word.to_string(), candidates))
        })
        .collect()
    }
}
