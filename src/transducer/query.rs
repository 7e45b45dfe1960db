//! Lazy product search over a dictionary and a query automaton.

use super::automaton::QueryAutomaton;
use super::frontier::Frontier;
use super::{Intersection, SearchOptions};
use crate::dictionary::{Dictionary, DictionaryNode};
use crate::error::Result;
use rustc_hash::FxHashSet;
use std::collections::{BTreeSet, VecDeque};

/// Query result containing term and distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate {
    /// The matching term
    pub term: String,
    /// Minimal cost of turning the term into the query
    pub distance: usize,
}

/// Lazy iterator over matching candidates.
///
/// Walks `(frontier, node)` pairs breadth first, starting from the initial
/// frontier and the dictionary root. A pair is enqueued only if the step
/// leaves the automaton alive and the pair has not been visited, so the
/// search touches exactly the dictionary prefixes that can still lead to a
/// match.
///
/// Each matching term is yielded once, with the minimum error count among
/// the accepting positions of its frontier.
pub struct QueryIterator<N: DictionaryNode> {
    pending: VecDeque<Intersection<N>>,
    visited: FxHashSet<(Frontier, usize)>,
    automaton: QueryAutomaton,
    strict_distance: bool,
    explored: usize,
    matched: usize,
    finished: bool,
}

impl<N: DictionaryNode> QueryIterator<N> {
    /// Create a new query iterator
    pub fn new(root: N, query: &str, options: &SearchOptions) -> Self {
        let automaton = QueryAutomaton::new(query, options.max_distance, options.operations);
        Self::with_automaton(root, automaton, options.strict_distance)
    }

    /// Create a query iterator over a prebuilt automaton
    pub fn with_automaton(root: N, automaton: QueryAutomaton, strict_distance: bool) -> Self {
        let initial = Intersection::new(root, automaton.initial_frontier());

        let mut visited = FxHashSet::default();
        visited.insert(initial.key());

        let mut pending = VecDeque::new();
        pending.push_back(initial);

        Self {
            pending,
            visited,
            automaton,
            strict_distance,
            explored: 0,
            matched: 0,
            finished: false,
        }
    }

    /// Number of product states taken off the queue so far
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Advance to the next match
    fn advance(&mut self) -> Option<Candidate> {
        while let Some(intersection) = self.pending.pop_front() {
            self.explored += 1;
            self.queue_children(&intersection);

            if !intersection.is_final() {
                continue;
            }

            let Some(distance) = intersection.frontier.min_accepting_errors(&self.automaton)
            else {
                continue;
            };

            if self.strict_distance && distance != self.automaton.max_distance() {
                continue;
            }

            if let Some(term) = intersection.node.term() {
                self.matched += 1;
                return Some(Candidate {
                    term: term.to_string(),
                    distance,
                });
            }
        }

        if !self.finished {
            debug!(
                "search for {:?} explored {} product states, {} matches",
                self.automaton.query().iter().collect::<String>(),
                self.explored,
                self.matched
            );
        }
        self.finished = true;
        None
    }

    /// Queue child intersections for exploration
    fn queue_children(&mut self, intersection: &Intersection<N>) {
        for (label, child_node) in intersection.node.edges() {
            let next = self.automaton.step(&intersection.frontier, label);
            if next.is_empty() {
                continue;
            }

            let child = Intersection::new(child_node, next);
            if self.visited.insert(child.key()) {
                self.pending.push_back(child);
            }
        }
    }
}

impl<N: DictionaryNode> Iterator for QueryIterator<N> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            self.advance()
        }
    }
}

/// Lazy iterator over matching terms (strings only).
pub struct StringQueryIterator<N: DictionaryNode> {
    inner: QueryIterator<N>,
}

impl<N: DictionaryNode> StringQueryIterator<N> {
    /// Create a new string iterator
    pub fn new(root: N, query: &str, options: &SearchOptions) -> Self {
        Self {
            inner: QueryIterator::new(root, query, options),
        }
    }
}

impl<N: DictionaryNode> Iterator for StringQueryIterator<N> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|candidate| candidate.term)
    }
}

/// Find every dictionary term within `options.max_distance` of `query`.
///
/// The query itself is part of the result when it is in the dictionary.
///
/// # Errors
///
/// Returns an error if `options` fail [`SearchOptions::validate`].
///
/// # Example
///
/// ```rust
/// use levdict::prelude::*;
///
/// let dict = TrieDictionary::from_terms(["cat", "mat", "hat", "dog", "apple", "flat"]);
///
/// let matches = fuzzy_search(&dict, "rat", &SearchOptions::new(2)).unwrap();
/// assert_eq!(matches.len(), 4);
///
/// let exact = fuzzy_search(&dict, "rat", &SearchOptions::new(2).strict(true)).unwrap();
/// assert!(exact.contains("flat") && exact.len() == 1);
/// ```
pub fn fuzzy_search<D: Dictionary>(
    dictionary: &D,
    query: &str,
    options: &SearchOptions,
) -> Result<BTreeSet<String>> {
    options.validate(query, dictionary.max_term_len())?;
    let options = options.bounded(query, dictionary.max_term_len());
    Ok(StringQueryIterator::new(dictionary.root(), query, &options).collect())
}

/// Like [`fuzzy_search`], keeping each term's minimal cost.
///
/// Candidates are sorted by distance, then by term.
///
/// # Errors
///
/// Returns an error if `options` fail [`SearchOptions::validate`].
pub fn fuzzy_search_candidates<D: Dictionary>(
    dictionary: &D,
    query: &str,
    options: &SearchOptions,
) -> Result<Vec<Candidate>> {
    options.validate(query, dictionary.max_term_len())?;
    let options = options.bounded(query, dictionary.max_term_len());
    let mut candidates: Vec<Candidate> =
        QueryIterator::new(dictionary.root(), query, &options).collect();
    candidates.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.term.cmp(&b.term)));
    Ok(candidates)
}
