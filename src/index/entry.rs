/// Line numbers on which one word occurs, 0-based, in increasing order.
///
/// The trail is append-only and deduplicates by adjacency: appending the
/// line that was appended last is a no-op, so a word repeating within one
/// line is recorded once. Checking only the most recent entry is enough
/// because lines are indexed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceTrail {
    lines: Vec<u32>,
}

impl OccurrenceTrail {
    fn new(line: u32) -> Self {
        Self { lines: vec![line] }
    }

    fn record(&mut self, line: u32) {
        if self.lines.last() != Some(&line) {
            self.lines.push(line);
        }
    }

    /// The distinct lines this word appears on, 0-based, in order.
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The record for one distinct word: its key, how many times it was seen,
/// and the lines it was seen on.
///
/// The key is fixed at creation; every later insertion of the same key goes
/// through [`IndexEntry::record`].
#[derive(Debug, Clone)]
pub struct IndexEntry {
    key: String,
    hit_count: u64,
    trail: OccurrenceTrail,
}

impl IndexEntry {
    pub(crate) fn new(key: &str, line: u32) -> Self {
        Self {
            key: key.to_string(),
            hit_count: 1,
            trail: OccurrenceTrail::new(line),
        }
    }

    /// Record another occurrence of this entry's key. The hit count always
    /// grows; the trail only grows when the line is new.
    pub(crate) fn record(&mut self, line: u32) {
        self.hit_count += 1;
        self.trail.record(line);
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Total insertions of this key, same-line repeats included.
    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    pub fn trail(&self) -> &OccurrenceTrail {
        &self.trail
    }
}
