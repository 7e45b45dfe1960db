//! Prefix-tree dictionary.
//!
//! Every distinct prefix of every term gets its own node, so the structure is
//! a tree rooted at the empty prefix. Final nodes own a copy of the term they
//! spell, which lets the product search report matches without rebuilding
//! the path that led to them.
//!
//! Nodes live in a single arena shared through an `Arc`; once built the trie
//! is immutable and can be queried from any number of threads.

use crate::dictionary::{Dictionary, DictionaryNode};
use std::sync::Arc;

/// An immutable trie dictionary for approximate string matching.
///
/// # Performance
///
/// - **Construction**: O(n) in the total number of characters
/// - **Lookup**: O(m log σ) where m is the term length and σ the fan-out
/// - **Thread-safe**: fully immutable, cloning shares the node arena
///
/// # Example
///
/// ```rust
/// use levdict::dictionary::trie::TrieDictionary;
/// use levdict::dictionary::Dictionary;
///
/// let dict = TrieDictionary::from_terms(["test", "testing", "test"]);
/// assert_eq!(dict.len(), 2);
/// assert!(dict.contains("testing"));
/// assert!(!dict.contains("tes"));
/// ```
#[derive(Clone, Debug)]
pub struct TrieDictionary {
    nodes: Arc<Vec<TrieNode>>,
    term_count: usize,
    max_term_len: usize,
}

// Edges are (label, target index), sorted by label after build
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct TrieNode {
    edges: Vec<(char, usize)>,
    term: Option<Box<str>>,
}

/// Incremental trie construction.
///
/// Terms may be inserted in any order; duplicates are ignored.
#[derive(Debug)]
pub struct TrieBuilder {
    nodes: Vec<TrieNode>,
    term_count: usize,
    max_term_len: usize,
}

impl TrieBuilder {
    /// Create a builder holding only the root node.
    pub fn new() -> Self {
        TrieBuilder {
            nodes: vec![TrieNode::default()],
            term_count: 0,
            max_term_len: 0,
        }
    }

    /// Add a term, returning `true` if it was not present yet.
    pub fn insert(&mut self, term: &str) -> bool {
        let mut node_idx = 0;
        let mut length = 0;

        for label in term.chars() {
            length += 1;
            let existing = self.nodes[node_idx]
                .edges
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, idx)| *idx);

            node_idx = match existing {
                Some(idx) => idx,
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node_idx].edges.push((label, new_idx));
                    new_idx
                }
            };
        }

        let node = &mut self.nodes[node_idx];
        if node.term.is_some() {
            return false;
        }
        node.term = Some(term.into());
        self.term_count += 1;
        self.max_term_len = self.max_term_len.max(length);
        true
    }

    /// Finish building and return the dictionary.
    pub fn build(mut self) -> TrieDictionary {
        // Sort all edges to enable binary search in transition()
        for node in &mut self.nodes {
            node.edges.sort_unstable_by_key(|(label, _)| *label);
        }

        debug!(
            "built trie with {} terms in {} nodes (longest term: {} chars)",
            self.term_count,
            self.nodes.len(),
            self.max_term_len
        );

        TrieDictionary {
            nodes: Arc::new(self.nodes),
            term_count: self.term_count,
            max_term_len: self.max_term_len,
        }
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieDictionary {
    /// Create an empty dictionary, accepting nothing.
    pub fn new() -> Self {
        TrieBuilder::new().build()
    }

    /// Create a dictionary from an iterator of terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        for term in terms {
            builder.insert(term.as_ref());
        }
        builder.build()
    }

    /// Get the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all terms in depth-first, label order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        let mut stack = vec![0usize];
        std::iter::from_fn(move || {
            while let Some(idx) = stack.pop() {
                let node = &self.nodes[idx];
                stack.extend(node.edges.iter().rev().map(|(_, child)| *child));
                if let Some(term) = node.term.as_deref() {
                    return Some(term);
                }
            }
            None
        })
    }
}

impl Default for TrieDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(terms: I) -> Self {
        Self::from_terms(terms)
    }
}

impl Dictionary for TrieDictionary {
    type Node = TrieDictionaryNode;

    fn root(&self) -> Self::Node {
        TrieDictionaryNode {
            nodes: Arc::clone(&self.nodes),
            node_idx: 0,
        }
    }

    fn len(&self) -> usize {
        self.term_count
    }

    fn max_term_len(&self) -> usize {
        self.max_term_len
    }

    /// Lookup working directly on arena indices, without creating node handles.
    fn contains(&self, term: &str) -> bool {
        let mut node_idx = 0;

        for label in term.chars() {
            let edges = &self.nodes[node_idx].edges;
            match edges.binary_search_by_key(&label, |(l, _)| *l) {
                Ok(pos) => node_idx = edges[pos].1,
                Err(_) => return false,
            }
        }

        self.nodes[node_idx].term.is_some()
    }
}

/// A node handle in the trie dictionary.
///
/// Cloning only bumps the arena's reference count.
#[derive(Clone, Debug)]
pub struct TrieDictionaryNode {
    nodes: Arc<Vec<TrieNode>>,
    node_idx: usize,
}

impl TrieDictionaryNode {
    fn child(&self, node_idx: usize) -> Self {
        TrieDictionaryNode {
            nodes: Arc::clone(&self.nodes),
            node_idx,
        }
    }
}

impl DictionaryNode for TrieDictionaryNode {
    fn id(&self) -> usize {
        self.node_idx
    }

    fn is_final(&self) -> bool {
        self.nodes[self.node_idx].term.is_some()
    }

    fn term(&self) -> Option<&str> {
        self.nodes[self.node_idx].term.as_deref()
    }

    fn transition(&self, label: char) -> Option<Self> {
        let edges = &self.nodes[self.node_idx].edges;
        edges
            .binary_search_by_key(&label, |(l, _)| *l)
            .ok()
            .map(|pos| self.child(edges[pos].1))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (char, Self)> + '_> {
        Box::new(
            self.nodes[self.node_idx]
                .edges
                .iter()
                .map(|(label, idx)| (*label, self.child(*idx))),
        )
    }

    fn edge_count(&self) -> usize {
        self.nodes[self.node_idx].edges.len()
    }
}
