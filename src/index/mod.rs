pub mod build;
pub mod entry;
pub mod list;
pub mod tree;

pub use build::{BuildSummary, build_index};
pub use entry::{IndexEntry, OccurrenceTrail};
pub use list::ListIndex;
pub use tree::TreeIndex;

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Index storage mode, chosen once when the index is created and fixed for
/// its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Unordered singly-linked chain in insertion order.
    List,
    /// Unbalanced binary search tree in key order.
    Tree,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::List => f.write_str("list"),
            Backend::Tree => f.write_str("tree"),
        }
    }
}

/// Result of a single lookup: the matching entry, if any, plus the number
/// of key comparisons the walk cost. The count is part of the return value
/// rather than index state, so per-call costs compose without resets.
#[derive(Debug)]
pub struct Lookup<'a> {
    pub entry: Option<&'a IndexEntry>,
    pub comparisons: u64,
}

/// The concordance index: every distinct word with its hit count and
/// occurrence trail, behind one of two interchangeable backends.
///
/// Both backends answer identical queries; only their comparison costs
/// differ, which is the observable the counter exposes.
#[derive(Debug)]
pub enum Index {
    List(ListIndex),
    Tree(TreeIndex),
}

impl Index {
    pub fn new(backend: Backend) -> Self {
        match backend {
            Backend::List => Index::List(ListIndex::new()),
            Backend::Tree => Index::Tree(TreeIndex::new()),
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            Index::List(_) => Backend::List,
            Index::Tree(_) => Backend::Tree,
        }
    }

    /// Insert one occurrence of `word` on 0-based `line`. Duplicate keys
    /// are the common case, not an error. Returns the comparisons spent.
    pub fn insert(&mut self, word: &str, line: u32) -> u64 {
        match self {
            Index::List(list) => list.insert(word, line),
            Index::Tree(tree) => tree.insert(word, line),
        }
    }

    pub fn lookup(&self, word: &str) -> Lookup<'_> {
        let (entry, comparisons) = match self {
            Index::List(list) => list.lookup(word),
            Index::Tree(tree) => tree.lookup(word),
        };
        Lookup { entry, comparisons }
    }

    /// Number of distinct keys inserted so far.
    pub fn unique_count(&self) -> usize {
        match self {
            Index::List(list) => list.unique_count(),
            Index::Tree(tree) => tree.unique_count(),
        }
    }

    /// Tree height (-1 when empty, 0 for a single node); `None` for the
    /// list backend, which has no meaningful height.
    pub fn height(&self) -> Option<i64> {
        match self {
            Index::List(_) => None,
            Index::Tree(tree) => Some(tree.height()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_is_fixed_at_construction() {
        assert_eq!(Index::new(Backend::List).backend(), Backend::List);
        assert_eq!(Index::new(Backend::Tree).backend(), Backend::Tree);
    }

    #[test]
    fn backends_agree_on_results_not_on_costs() {
        let words = [
            ("she", 0),
            ("sells", 0),
            ("sea", 0),
            ("shells", 0),
            ("she", 1),
            ("sells", 1),
            ("shells", 2),
        ];
        let mut list = Index::new(Backend::List);
        let mut tree = Index::new(Backend::Tree);
        for &(word, line) in &words {
            list.insert(word, line);
            tree.insert(word, line);
        }

        assert_eq!(list.unique_count(), 4);
        assert_eq!(tree.unique_count(), 4);

        for word in ["she", "sells", "sea", "shells", "beach"] {
            let from_list = list.lookup(word);
            let from_tree = tree.lookup(word);
            match (from_list.entry, from_tree.entry) {
                (Some(a), Some(b)) => {
                    assert_eq!(a.hit_count(), b.hit_count());
                    assert_eq!(a.trail().lines(), b.trail().lines());
                }
                (None, None) => {}
                _ => panic!("backends disagree on '{word}'"),
            }
        }
    }

    #[test]
    fn height_is_tree_only() {
        let list = Index::new(Backend::List);
        let mut tree = Index::new(Backend::Tree);
        assert_eq!(list.height(), None);
        assert_eq!(tree.height(), Some(-1));
        tree.insert("one", 0);
        assert_eq!(tree.height(), Some(0));
    }
}
