//! Interactive query handling: parsing one line of input into a command,
//! and resolving a lookup against the line store into a printable report.

use crate::index::Index;
use crate::text::{LineStore, normalize_query};
use serde::Serialize;

/// One line of interactive input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `find <word>`: look the normalized word up in the index.
    Find(String),
    /// `quit`: end the session.
    Quit,
    /// Blank input, or `find` with nothing searchable. Silently ignored.
    Empty,
    /// Anything else.
    Invalid,
}

/// Parse one line of interactive input.
///
/// The `find` argument is normalized here with the same rules the build
/// phase uses, so `Find` always carries a key the index could contain.
/// Tokens after the first argument are ignored.
pub fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    match parts.next() {
        None => Command::Empty,
        Some("quit") => Command::Quit,
        Some("find") => match parts.next().and_then(normalize_query) {
            Some(word) => Command::Find(word),
            None => Command::Empty,
        },
        Some(_) => Command::Invalid,
    }
}

/// One matched line, ready for display: 1-based number plus original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    pub line_number: u32,
    pub text: String,
}

/// Outcome of one `find` command.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub word: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_count: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<LineMatch>,
    pub comparisons: u64,
}

/// Look `word` up and resolve its trail against the line store. An absent
/// word is a normal negative result, not an error.
pub fn run_query(index: &Index, store: &LineStore, word: &str) -> QueryReport {
    let lookup = index.lookup(word);
    match lookup.entry {
        Some(entry) => {
            let matches = entry
                .trail()
                .lines()
                .iter()
                .map(|&line| LineMatch {
                    line_number: line + 1,
                    text: store.line(line).unwrap_or("").to_string(),
                })
                .collect();
            QueryReport {
                word: word.to_string(),
                found: true,
                hit_count: Some(entry.hit_count()),
                matches,
                comparisons: lookup.comparisons,
            }
        }
        None => QueryReport {
            word: word.to_string(),
            found: false,
            hit_count: None,
            matches: Vec::new(),
            comparisons: lookup.comparisons,
        },
    }
}
