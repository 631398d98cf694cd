use super::entry::IndexEntry;

/// Insertion-ordered list backend.
///
/// Entries live in one owned sequence, appended at the tail the first time
/// a key is seen, so the chain stays in first-seen order. Every insert and
/// lookup walks from the head and counts one key comparison per entry
/// visited: a key at insertion position k costs exactly k comparisons to
/// find, and a miss costs one comparison per distinct key. This O(n)
/// behavior is the baseline the tree backend is measured against.
#[derive(Debug, Default)]
pub struct ListIndex {
    entries: Vec<IndexEntry>,
}

impl ListIndex {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert one occurrence of `word` on `line`. Returns the number of key
    /// comparisons the walk performed.
    pub fn insert(&mut self, word: &str, line: u32) -> u64 {
        let mut comparisons = 0;
        for entry in &mut self.entries {
            comparisons += 1;
            if entry.key() == word {
                entry.record(line);
                return comparisons;
            }
        }
        // Not present: the failed walk compared against every entry, and
        // those comparisons stay counted.
        self.entries.push(IndexEntry::new(word, line));
        comparisons
    }

    /// Find the entry for `word`, if any, with the comparison count of the
    /// walk.
    pub fn lookup(&self, word: &str) -> (Option<&IndexEntry>, u64) {
        let mut comparisons = 0;
        for entry in &self.entries {
            comparisons += 1;
            if entry.key() == word {
                return (Some(entry), comparisons);
            }
        }
        (None, comparisons)
    }

    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }
}
