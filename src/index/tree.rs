use super::entry::IndexEntry;
use std::cmp::Ordering;

#[derive(Debug)]
struct TreeNode {
    entry: IndexEntry,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn new(word: &str, line: u32) -> Box<Self> {
        Box::new(Self {
            entry: IndexEntry::new(word, line),
            left: None,
            right: None,
        })
    }
}

/// Unbalanced binary search tree backend, ordered by byte-wise comparison
/// of the normalized key.
///
/// No rebalancing is ever performed: inserting words in sorted order
/// degenerates the tree into a chain with height `unique_count - 1`. That
/// is the behavior the comparison counter exists to expose, not a defect.
#[derive(Debug, Default)]
pub struct TreeIndex {
    root: Option<Box<TreeNode>>,
    unique: usize,
}

impl TreeIndex {
    pub fn new() -> Self {
        Self {
            root: None,
            unique: 0,
        }
    }

    /// Insert one occurrence of `word` on `line`. Returns the number of key
    /// comparisons the descent performed; creating the root costs zero.
    pub fn insert(&mut self, word: &str, line: u32) -> u64 {
        let mut comparisons = 0;
        let mut cursor = &mut self.root;
        loop {
            match cursor {
                None => {
                    *cursor = Some(TreeNode::new(word, line));
                    self.unique += 1;
                    return comparisons;
                }
                Some(node) => {
                    comparisons += 1;
                    match word.as_bytes().cmp(node.entry.key().as_bytes()) {
                        Ordering::Equal => {
                            node.entry.record(line);
                            return comparisons;
                        }
                        Ordering::Less => cursor = &mut node.left,
                        Ordering::Greater => cursor = &mut node.right,
                    }
                }
            }
        }
    }

    /// Find the entry for `word`, if any, with the comparison count of the
    /// descent.
    pub fn lookup(&self, word: &str) -> (Option<&IndexEntry>, u64) {
        let mut comparisons = 0;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            comparisons += 1;
            match word.as_bytes().cmp(node.entry.key().as_bytes()) {
                Ordering::Equal => return (Some(&node.entry), comparisons),
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
            }
        }
        (None, comparisons)
    }

    pub fn unique_count(&self) -> usize {
        self.unique
    }

    /// Edges on the longest root-to-leaf path: -1 for an empty tree, 0 for
    /// a single node. Structural only, never counted as comparisons.
    pub fn height(&self) -> i64 {
        Self::node_height(self.root.as_deref())
    }

    fn node_height(node: Option<&TreeNode>) -> i64 {
        match node {
            None => -1,
            Some(node) => {
                1 + Self::node_height(node.left.as_deref())
                    .max(Self::node_height(node.right.as_deref()))
            }
        }
    }
}
