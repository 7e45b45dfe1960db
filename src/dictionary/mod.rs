//! Dictionary abstractions for the product search.
//!
//! The search only needs to walk a dictionary character by character, so it
//! is written against the [`Dictionary`] and [`DictionaryNode`] traits rather
//! than a concrete structure. [`trie::TrieDictionary`] is the backend the
//! crate ships.

pub mod trie;

/// Core dictionary abstraction for approximate string matching.
///
/// A dictionary is a deterministic acceptor: a graph of nodes whose edges are
/// labeled with single characters, where final nodes mark complete terms.
pub trait Dictionary {
    /// The node type used for dictionary traversal
    type Node: DictionaryNode;

    /// Get the root node (the empty prefix)
    fn root(&self) -> Self::Node;

    /// Check if a term exists in the dictionary
    fn contains(&self, term: &str) -> bool {
        let mut node = self.root();
        for label in term.chars() {
            match node.transition(label) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_final()
    }

    /// Get the number of distinct terms
    fn len(&self) -> usize;

    /// Check if the dictionary is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length in characters of the longest term (0 for an empty dictionary)
    fn max_term_len(&self) -> usize;
}

/// Traversable dictionary node.
///
/// Nodes are cheap handles into an immutable structure, so they can be
/// cloned freely and moved between threads.
pub trait DictionaryNode: Clone + Send + Sync {
    /// Identifier of this node, unique within its dictionary
    fn id(&self) -> usize;

    /// Check if this node marks the end of a valid term
    fn is_final(&self) -> bool;

    /// The term spelled by the path to this node, if it is final
    fn term(&self) -> Option<&str>;

    /// Transition to a child node via the given character
    ///
    /// Returns `None` if no such transition exists
    fn transition(&self, label: char) -> Option<Self>;

    /// Iterate over all outgoing edges as (character, child_node) pairs
    fn edges(&self) -> Box<dyn Iterator<Item = (char, Self)> + '_>;

    /// Check if a specific edge exists
    fn has_edge(&self, label: char) -> bool {
        self.transition(label).is_some()
    }

    /// Get the number of outgoing edges
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
