/// Iterate over the normalized words of a line.
///
/// A word is a maximal run of ASCII letters; every other byte separates
/// words, hyphens included, so "self-evident" yields "self" then
/// "evident". Runs are lower-cased as they are copied out, so the index
/// never observes casing.
pub fn words(line: &str) -> Words<'_> {
    Words {
        bytes: line.as_bytes(),
        pos: 0,
    }
}

/// Normalize a query argument the same way build-time tokenization does:
/// its first alphabetic run, lower-cased. `None` when the argument
/// contains no letters at all.
pub fn normalize_query(arg: &str) -> Option<String> {
    words(arg).next()
}

/// Iterator returned by [`words`]. Scans bytes; non-ASCII input is treated
/// as separators and never lands inside a word.
#[derive(Debug)]
pub struct Words<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        if self.pos == self.bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }

        let mut word = String::with_capacity(self.pos - start);
        word.extend(
            self.bytes[start..self.pos]
                .iter()
                .map(|b| b.to_ascii_lowercase() as char),
        );
        Some(word)
    }
}
