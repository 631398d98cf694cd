use crate::index::{Backend, Index};
use crate::text::{LineStore, words};
use serde::Serialize;
use std::path::PathBuf;

/// Build an index over every normalized word in the store, line by line,
/// left to right within a line. Returns the index together with the total
/// comparisons spent across all insertions.
pub fn build_index(store: &LineStore, backend: Backend) -> (Index, u64) {
    let mut index = Index::new(backend);
    let mut comparisons = 0u64;
    for (line_no, line) in store.iter().enumerate() {
        for word in words(line) {
            comparisons += index.insert(&word, line_no as u32);
        }
    }
    (index, comparisons)
}

/// What the build phase reports before queries start.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub file: PathBuf,
    pub backend: Backend,
    pub line_count: usize,
    pub unique_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_height: Option<i64>,
    pub comparisons: u64,
}

impl BuildSummary {
    pub fn new(file: PathBuf, index: &Index, store: &LineStore, comparisons: u64) -> Self {
        Self {
            file,
            backend: index.backend(),
            line_count: store.len(),
            unique_words: index.unique_count(),
            tree_height: index.height(),
            comparisons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn store(text: &str) -> LineStore {
        LineStore::from_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn indexes_words_with_their_line_numbers() {
        let store = store("The quick fox\nthe end\n");
        let (index, _) = build_index(&store, Backend::List);

        assert_eq!(index.unique_count(), 4);

        let the = index.lookup("the").entry.unwrap();
        assert_eq!(the.hit_count(), 2);
        assert_eq!(the.trail().lines(), &[0, 1]);

        let quick = index.lookup("quick").entry.unwrap();
        assert_eq!(quick.hit_count(), 1);
        assert_eq!(quick.trail().lines(), &[0]);
    }

    #[test]
    fn repeats_within_a_line_dedupe_in_the_trail() {
        let store = store("cat cat cat\n");
        let (index, _) = build_index(&store, Backend::Tree);

        let cat = index.lookup("cat").entry.unwrap();
        assert_eq!(cat.hit_count(), 3);
        assert_eq!(cat.trail().lines(), &[0]);
    }

    #[test]
    fn total_comparisons_sum_the_per_insert_counts() {
        // List backend: a=0 (new), b=1 (walk a), a=1 (found at 1),
        // c=2 (walk a,b).
        let store = store("a b a c\n");
        let (index, comparisons) = build_index(&store, Backend::List);
        assert_eq!(index.unique_count(), 3);
        assert_eq!(comparisons, 4);
    }

    #[test]
    fn empty_store_builds_an_empty_index() {
        let store = store("");
        let (index, comparisons) = build_index(&store, Backend::Tree);
        assert_eq!(index.unique_count(), 0);
        assert_eq!(index.height(), Some(-1));
        assert_eq!(comparisons, 0);
    }

    #[test]
    fn round_trip_finds_every_indexed_word() {
        let text = "What I cannot create, I do not understand\n\
                    Know how to solve every problem that has been solved\n";
        let store = store(text);
        for backend in [Backend::List, Backend::Tree] {
            let (index, _) = build_index(&store, backend);
            for (line_no, line) in store.iter().enumerate() {
                for word in words(line) {
                    let entry = index.lookup(&word).entry.unwrap();
                    assert!(entry.trail().lines().contains(&(line_no as u32)));
                }
            }
        }
    }

    #[test]
    fn summary_reflects_index_and_store() {
        let store = store("beta alpha\ngamma\n");
        let (index, comparisons) = build_index(&store, Backend::Tree);
        let summary =
            BuildSummary::new(PathBuf::from("sample.txt"), &index, &store, comparisons);

        assert_eq!(summary.backend, Backend::Tree);
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.unique_words, 3);
        assert_eq!(summary.tree_height, Some(1));
    }

    #[test]
    fn summary_serializes_without_height_for_list() {
        let store = store("alpha beta\n");
        let (index, comparisons) = build_index(&store, Backend::List);
        let summary =
            BuildSummary::new(PathBuf::from("sample.txt"), &index, &store, comparisons);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"backend\":\"list\""));
        assert!(!json.contains("tree_height"));
    }
}
