//! Position in the query automaton.

use std::fmt;

/// Distinguishes the main error grid from the auxiliary states that the
/// optional operations need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    /// A plain grid state `(term_index, num_errors)`
    Normal,
    /// Inside a run of this repeated character
    Repetition(char),
    /// First half of a split consumed
    Split,
    /// Swapped character consumed, its partner still pending
    Transposition,
}

/// A state of the query automaton.
///
/// A position `(term_index, num_errors, marker)` says that `term_index`
/// characters of the query have been accounted for at a cost of
/// `num_errors` edit operations.
///
/// Along every transition `num_errors` never decreases. The derived ordering
/// (term_index, then num_errors, then marker) is the canonical order used to
/// key frontiers.
///
/// # Performance
///
/// Position is `Copy` so frontiers can be built and compared without
/// touching the heap for individual states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Index into the query term (characters consumed)
    pub term_index: usize,

    /// Number of accumulated edit operations
    pub num_errors: usize,

    /// Which sub-automaton this position belongs to
    pub marker: Marker,
}

impl Position {
    /// Create a new position on the main grid
    #[inline(always)]
    pub const fn new(term_index: usize, num_errors: usize) -> Self {
        Self {
            term_index,
            num_errors,
            marker: Marker::Normal,
        }
    }

    /// Create a repetition position for a run of `character`
    #[inline(always)]
    pub const fn repetition(character: char, term_index: usize, num_errors: usize) -> Self {
        Self {
            term_index,
            num_errors,
            marker: Marker::Repetition(character),
        }
    }

    /// Create a half-split position
    #[inline(always)]
    pub const fn split(term_index: usize, num_errors: usize) -> Self {
        Self {
            term_index,
            num_errors,
            marker: Marker::Split,
        }
    }

    /// Create a pending-transposition position
    #[inline(always)]
    pub const fn transposition(term_index: usize, num_errors: usize) -> Self {
        Self {
            term_index,
            num_errors,
            marker: Marker::Transposition,
        }
    }

    /// Check if this position lies on the main grid
    #[inline(always)]
    pub fn is_normal(&self) -> bool {
        self.marker == Marker::Normal
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.marker {
            Marker::Normal => write!(f, "({}, {})", self.term_index, self.num_errors),
            Marker::Repetition(c) => {
                write!(f, "rep[{:?}]({}, {})", c, self.term_index, self.num_errors)
            }
            Marker::Split => write!(f, "split({}, {})", self.term_index, self.num_errors),
            Marker::Transposition => {
                write!(f, "trans({}, {})", self.term_index, self.num_errors)
            }
        }
    }
}
