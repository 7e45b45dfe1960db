//! Intersection of dictionary traversal and automaton frontier.

use super::frontier::Frontier;
use crate::dictionary::DictionaryNode;

/// A state of the product automaton.
///
/// Pairs the current dictionary node with the frontier the query automaton
/// reached after reading the same prefix.
#[derive(Debug, Clone)]
pub struct Intersection<N: DictionaryNode> {
    /// Current dictionary node
    pub node: N,

    /// Current query-automaton frontier
    pub frontier: Frontier,
}

impl<N: DictionaryNode> Intersection<N> {
    /// Create the root intersection
    pub fn new(node: N, frontier: Frontier) -> Self {
        Self { node, frontier }
    }

    /// Visited-set key: structural frontier plus node identity
    pub fn key(&self) -> (Frontier, usize) {
        (self.frontier.clone(), self.node.id())
    }

    /// Check if the dictionary side accepts here
    pub fn is_final(&self) -> bool {
        self.node.is_final()
    }
}
