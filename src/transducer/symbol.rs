//! Transition labels of the query automaton.

use std::fmt;

/// Label on a query-automaton transition.
///
/// `Any` and `Epsilon` are separate variants, so they can never be confused
/// with a character that happens to occur in a query or dictionary term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// Consumes exactly this character
    Char(char),
    /// Consumes any single character the dictionary offers
    Any,
    /// Consumes nothing
    Epsilon,
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{:?}", c),
            Symbol::Any => f.write_str("ANY"),
            Symbol::Epsilon => f.write_str("ε"),
        }
    }
}
