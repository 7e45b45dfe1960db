//! # levdict
//!
//! Fuzzy dictionary search with lazily determinized edit-distance automata.
//!
//! A dictionary is compiled once into a trie. For every query a small
//! non-deterministic automaton is built that accepts all strings within `k`
//! edit operations of the query; the search walks both automata in lockstep,
//! determinizing the query side on the fly, so only dictionary prefixes that
//! can still lead to a match are visited.
//!
//! Besides insertion, deletion and substitution the automaton optionally
//! understands:
//!
//! - **transposition** of two adjacent query characters,
//! - **merge and split** (two characters read as one, or one as two),
//! - **repetitions**: runs of a repeated character may differ in length for
//!   free.
//!
//! ## Example
//!
//! ```rust
//! use levdict::prelude::*;
//!
//! let dict = TrieDictionary::from_terms(["Test", "Tst", "Tset", "Teest", "abc"]);
//!
//! let options = SearchOptions::new(1).transposition(true);
//! let matches = fuzzy_search(&dict, "Test", &options).unwrap();
//!
//! assert_eq!(
//!     matches.into_iter().collect::<Vec<_>>(),
//!     vec!["Teest", "Test", "Tset", "Tst"]
//! );
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): run generator batches on the `rayon` pool
//! - `serialization`: `serde` support for the configuration types and
//!   [`SearchOptions::from_json`](transducer::SearchOptions::from_json)
//! - `logging`: `debug`/`trace` records through the `log` facade

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod dictionary;
pub mod distance;
pub mod error;
pub mod generator;
pub mod transducer;

pub use error::{Result, SearchError};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::trie::{TrieBuilder, TrieDictionary};
    pub use crate::dictionary::{Dictionary, DictionaryNode};
    pub use crate::distance::edit_distance;
    pub use crate::error::{Result, SearchError};
    pub use crate::generator::{
        CandidateGenerator, LevenshteinGenerator, NormalizedLevenshteinGenerator,
    };
    pub use crate::transducer::{
        fuzzy_search, fuzzy_search_candidates, Candidate, EditOperations, SearchOptions,
        Transducer, TransducerBuilder,
    };
}
