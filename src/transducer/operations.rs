//! Edit operations enabled on top of standard Levenshtein distance.

use crate::error::SearchError;

/// Set of optional edit operations.
///
/// Insertion, deletion and substitution are always available. Each flag adds
/// one more operation to the query automaton; flags combine freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EditOperations {
    /// Swap of two adjacent query characters, cost 1.
    ///
    /// Only the shape where the dictionary term holds the two query
    /// characters in reverse order is recognized; this is not full
    /// Damerau-Levenshtein distance.
    pub transposition: bool,

    /// Two query characters matched by one dictionary character (merge), or
    /// one query character matched by two dictionary characters (split),
    /// cost 1 each.
    ///
    /// Useful for OCR errors and historical spellings like "w" / "uu".
    pub merge_split: bool,

    /// Runs of a repeated character may differ in length at no cost.
    pub repetitions: bool,
}

impl EditOperations {
    /// Insert, delete and substitute only.
    pub const STANDARD: EditOperations = EditOperations {
        transposition: false,
        merge_split: false,
        repetitions: false,
    };

    /// Standard operations.
    pub const fn standard() -> Self {
        Self::STANDARD
    }

    /// Standard operations plus transposition.
    pub const fn with_transposition() -> Self {
        EditOperations {
            transposition: true,
            ..Self::STANDARD
        }
    }

    /// Standard operations plus merge and split.
    pub const fn with_merge_split() -> Self {
        EditOperations {
            merge_split: true,
            ..Self::STANDARD
        }
    }

    /// Standard operations plus free repetitions.
    pub const fn with_repetitions() -> Self {
        EditOperations {
            repetitions: true,
            ..Self::STANDARD
        }
    }

    /// Every supported operation.
    pub const fn all() -> Self {
        EditOperations {
            transposition: true,
            merge_split: true,
            repetitions: true,
        }
    }

    /// Check if only the standard operations are enabled
    pub fn is_standard(&self) -> bool {
        *self == Self::STANDARD
    }

    /// Names of the enabled optional operations, in canonical order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.transposition {
            names.push("transposition");
        }
        if self.merge_split {
            names.push("merge-split");
        }
        if self.repetitions {
            names.push("repetitions");
        }
        names
    }
}

impl std::fmt::Display for EditOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_standard() {
            f.write_str("standard")
        } else {
            f.write_str(&self.names().join(","))
        }
    }
}

impl std::str::FromStr for EditOperations {
    type Err = SearchError;

    /// Parse `"standard"` or a comma-separated list of operation names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut operations = EditOperations::STANDARD;

        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            match name.to_lowercase().as_str() {
                "standard" => {}
                "transposition" | "trans" => operations.transposition = true,
                "merge-split" | "merge-and-split" | "mergesplit" | "merge_split" => {
                    operations.merge_split = true
                }
                "repetitions" | "repetition" | "rep" => operations.repetitions = true,
                _ => return Err(SearchError::UnknownOperation(name.to_string())),
            }
        }

        Ok(operations)
    }
}
