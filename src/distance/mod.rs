//! Reference edit distances.
//!
//! Direct dynamic-programming implementations of the cost model the query
//! automaton encodes. They are too slow to scan a dictionary with, but they
//! are exact, which makes them the yardstick for scoring single pairs and
//! for checking the automaton search.
//!
//! All functions count Unicode scalar values, not bytes.

use crate::transducer::EditOperations;
use smallvec::SmallVec;

const INFINITY: usize = usize::MAX / 2;

/// Compute the minimal cost of turning `target` into `source` under `operations`.
///
/// `source` plays the role of the query and `target` the dictionary term, so
/// `edit_distance(q, w, ops) <= k` holds exactly when a search for `q` with
/// budget `k` reports `w`. Costs:
///
/// - insertion, deletion, substitution: 1
/// - transposition: 1, when `target` holds two adjacent `source` characters
///   in swapped order
/// - merge (two `source` characters for one `target` character): 1
/// - split (one `source` character for two `target` characters): 1
/// - repetitions: runs of the same character may differ in length for free
///
/// # Example
///
/// ```rust
/// use levdict::distance::edit_distance;
/// use levdict::transducer::EditOperations;
///
/// assert_eq!(edit_distance("wasser", "water", &EditOperations::standard()), 2);
/// assert_eq!(edit_distance("wasser", "water", &EditOperations::with_merge_split()), 1);
/// assert_eq!(edit_distance("Test", "Teeesst", &EditOperations::with_repetitions()), 0);
/// ```
pub fn edit_distance(source: &str, target: &str, operations: &EditOperations) -> usize {
    let query: SmallVec<[char; 32]> = source.chars().collect();
    let word: SmallVec<[char; 32]> = target.chars().collect();

    let m = query.len();
    let n = word.len();

    // Rows i-2, i-1 and i of the main table
    let mut two_ago = vec![INFINITY; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![INFINITY; n + 1];

    // Repetition layer: cost of sitting inside a run of query[i-1]
    let mut prev_run = vec![INFINITY; n + 1];
    let mut curr_run = vec![INFINITY; n + 1];

    for i in 1..=m {
        curr_row[0] = i;
        curr_run[0] = INFINITY;

        for j in 1..=n {
            let q = query[i - 1];
            let w = word[j - 1];

            if operations.repetitions {
                let mut run = INFINITY;
                if w == q {
                    run = run.min(prev_row[j - 1]).min(curr_run[j - 1]);
                }
                if i >= 2 && query[i - 2] == q {
                    run = run.min(prev_run[j]);
                }
                curr_run[j] = run;
            }

            let cost = if q == w { 0 } else { 1 };

            let mut best = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if operations.merge_split {
                if i >= 2 {
                    best = best.min(two_ago[j - 1] + 1);
                }
                if j >= 2 {
                    best = best.min(prev_row[j - 2] + 1);
                }
            }

            if operations.transposition
                && i >= 2
                && j >= 2
                && word[j - 2] == q
                && word[j - 1] == query[i - 2]
            {
                best = best.min(two_ago[j - 2] + 1);
            }

            if operations.repetitions {
                best = best.min(curr_run[j]);
            }

            curr_row[j] = best;
        }

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
        std::mem::swap(&mut prev_run, &mut curr_run);
    }

    prev_row[n]
}

/// Compute standard Levenshtein distance between two strings.
///
/// The minimum number of single-character insertions, deletions and
/// substitutions required to transform `source` into `target`.
///
/// # Example
///
/// ```rust
/// use levdict::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("test", "test"), 0);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    edit_distance(source, target, &EditOperations::STANDARD)
}

/// Compute Levenshtein distance with adjacent transpositions.
///
/// This is the optimal string alignment distance: a swapped pair costs 1, but
/// a swapped pair is never edited again. It is not full Damerau-Levenshtein.
///
/// # Example
///
/// ```rust
/// use levdict::distance::transposition_distance;
///
/// assert_eq!(transposition_distance("ab", "ba"), 1);
/// assert_eq!(transposition_distance("test", "tset"), 1);
/// assert_eq!(transposition_distance("CA", "ABC"), 3);
/// ```
pub fn transposition_distance(source: &str, target: &str) -> usize {
    edit_distance(source, target, &EditOperations::with_transposition())
}

/// Compute Levenshtein distance with merge and split operations.
///
/// # Example
///
/// ```rust
/// use levdict::distance::merge_and_split_distance;
///
/// assert_eq!(merge_and_split_distance("wasser", "water"), 1);
/// assert_eq!(merge_and_split_distance("wasser", "uuasser"), 1);
/// ```
pub fn merge_and_split_distance(source: &str, target: &str) -> usize {
    edit_distance(source, target, &EditOperations::with_merge_split())
}
