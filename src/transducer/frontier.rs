//! Sets of active query-automaton states.

use super::automaton::QueryAutomaton;
use super::Position;
use smallvec::SmallVec;
use std::fmt;

/// An epsilon-closed set of automaton positions.
///
/// Positions are kept sorted and deduplicated, so two frontiers holding the
/// same states compare and hash equal no matter how they were produced. This
/// is what lets the product search use `(Frontier, node)` as a visited key.
///
/// No subsumption is applied: a position with more errors is kept even when
/// a cheaper position covers it, so the minimum accepting cost stays exact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frontier {
    positions: SmallVec<[Position; 8]>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frontier from arbitrary positions, normalizing their order
    pub fn from_positions(positions: Vec<Position>) -> Self {
        let mut positions: SmallVec<[Position; 8]> = SmallVec::from_vec(positions);
        positions.sort_unstable();
        positions.dedup();
        Frontier { positions }
    }

    /// Sorted positions
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Iterate positions in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Check if a position is present
    pub fn contains(&self, position: &Position) -> bool {
        self.positions.binary_search(position).is_ok()
    }

    /// Check if the frontier is empty (the automaton is dead)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of positions
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Smallest error count among the accepting positions, if any
    pub fn min_accepting_errors(&self, automaton: &QueryAutomaton) -> Option<usize> {
        self.positions
            .iter()
            .filter(|position| automaton.is_accepting(position))
            .map(|position| position.num_errors)
            .min()
    }
}

impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", position)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transducer::EditOperations;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(frontier: &Frontier) -> u64 {
        let mut hasher = DefaultHasher::new();
        frontier.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_canonical_order() {
        let a = Frontier::from_positions(vec![
            Position::new(2, 1),
            Position::new(0, 0),
            Position::new(2, 1),
        ]);
        let b = Frontier::from_positions(vec![Position::new(0, 0), Position::new(2, 1)]);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.len(), 2);
        assert_eq!(a.positions()[0], Position::new(0, 0));
    }

    #[test]
    fn test_min_accepting_errors() {
        let automaton = QueryAutomaton::new("ab", 2, EditOperations::standard());
        let frontier = Frontier::from_positions(vec![
            Position::new(1, 0),
            Position::new(2, 2),
            Position::new(2, 1),
        ]);
        assert_eq!(frontier.min_accepting_errors(&automaton), Some(1));

        let frontier = Frontier::from_positions(vec![Position::new(1, 0)]);
        assert_eq!(frontier.min_accepting_errors(&automaton), None);
    }

    #[test]
    fn test_empty() {
        let frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.to_string(), "{}");
    }

    #[test]
    fn test_display() {
        let frontier = Frontier::from_positions(vec![Position::new(1, 0), Position::split(0, 0)]);
        assert_eq!(frontier.to_string(), "{split(0, 0), (1, 0)}");
    }
}
