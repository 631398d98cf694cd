use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The original lines of the input, in file order, addressed 0-based.
///
/// Populated once before indexing and read-only afterwards; query results
/// borrow line text from here when rendering. Display is 1-based, handled
/// at the presentation edge, never here.
#[derive(Debug, Default)]
pub struct LineStore {
    lines: Vec<String>,
}

impl LineStore {
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read lines from any buffered source. Tests build stores from
    /// in-memory text through this.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line.context("failed to read line")?);
        }
        Ok(Self { lines })
    }

    pub fn line(&self, idx: u32) -> Option<&str> {
        self.lines.get(idx as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
