//! # CDX - Concordance Index
//!
//! CDX builds an in-memory concordance over the lines of a text file: for
//! each distinct word it records how many times the word occurs and on
//! which lines, then answers interactive lookups while counting the key
//! comparisons each operation costs.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - The dual-backend word index (insertion-ordered list vs.
//!   unbalanced binary search tree) and the build phase
//! - [`text`] - Line storage and word tokenization/normalization
//! - [`query`] - Interactive command parsing and query reports
//! - [`output`] - Terminal rendering of summaries and reports
//!
//! ## Quick Start
//!
//! ```
//! use cdx::index::{Backend, build_index};
//! use cdx::text::LineStore;
//! use std::io::Cursor;
//!
//! let store = LineStore::from_reader(Cursor::new("the quick fox\nthe end\n")).unwrap();
//! let (index, comparisons) = build_index(&store, Backend::Tree);
//!
//! let hit = index.lookup("the");
//! let entry = hit.entry.unwrap();
//! assert_eq!(entry.hit_count(), 2);
//! assert_eq!(entry.trail().lines(), &[0, 1]);
//! assert!(comparisons > 0);
//! ```
//!
//! ## Backends
//!
//! Both backends answer identical queries; only their comparison costs
//! differ. The list backend walks an insertion-ordered chain (O(n) per
//! operation) and exists as the baseline; the tree backend descends an
//! unbalanced BST (O(log n) on typical input, degenerating to O(n) on
//! sorted input, by design). The per-call comparison count returned by
//! `insert` and `lookup` is the externally observable proof of the
//! difference.

pub mod index;
pub mod output;
pub mod query;
pub mod text;
