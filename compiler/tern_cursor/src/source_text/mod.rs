//! Owned program text with a line-start table.
//!
//! The interpreter is line-oriented: definitions occupy one line each and
//! the final line is the program's expression. `SourceText` joins the input
//! lines into one buffer, records where each line starts, and hands out
//! per-line [`Cursor`]s. Spans store global byte offsets into this buffer;
//! [`SourceText::position`] maps an offset back to a line/column pair for
//! rendering.

use crate::Cursor;

/// A zero-based line/column position resolved from a global byte offset.
///
/// Renderers add 1 to both fields; the language reports positions as
/// `column:line`, column first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineCol {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based byte column within the line.
    pub col: u32,
}

/// Owned program text plus the byte offset of each line start.
///
/// Construction scans for `\n` once (via `memchr`); all later lookups are
/// O(1) or a binary search over the line-start table.
#[derive(Clone, Debug)]
pub struct SourceText {
    /// The full program text, lines joined with `\n`.
    text: String,
    /// Byte offset of each line's first byte; `line_starts[0] == 0`.
    line_starts: Vec<u32>,
}

impl SourceText {
    /// Create a source from already-joined text.
    ///
    /// Text larger than `u32::MAX` bytes is not supported (offsets are
    /// `u32`, as in spans); programs here are a handful of lines.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "length is debug-asserted to fit in u32"
    )]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(
            u32::try_from(text.len()).is_ok(),
            "source text exceeds u32::MAX bytes"
        );
        let mut line_starts = Vec::with_capacity(8);
        line_starts.push(0);
        for nl in memchr::memchr_iter(b'\n', text.as_bytes()) {
            line_starts.push(nl as u32 + 1);
        }
        Self { text, line_starts }
    }

    /// Create a source from individual lines (no embedded `\n`).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self::new(text)
    }

    /// The full program text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines. Always at least 1 (the empty text is one empty line).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "one entry per line start, bounded by text length"
    )]
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Global byte offset of line `index`'s first byte.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn line_start(&self, index: u32) -> u32 {
        self.line_starts[index as usize]
    }

    /// The text of line `index`, without its trailing newline.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn line(&self, index: u32) -> &str {
        let start = self.line_starts[index as usize] as usize;
        let end = match self.line_starts.get(index as usize + 1) {
            Some(&next) => next as usize - 1,
            None => self.text.len(),
        };
        &self.text[start..end]
    }

    /// A cursor positioned at the start of line `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn cursor(&self, index: u32) -> Cursor<'_> {
        Cursor::new(self.line(index), self.line_start(index), index)
    }

    /// Resolve a global byte offset to its line and column.
    ///
    /// Offsets past the end of the text resolve to the last line with a
    /// column past that line's length; error positions sit there when a
    /// terminator check ran off the end of the final line.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "partition_point result is bounded by line_starts.len()"
    )]
    pub fn position(&self, offset: u32) -> LineCol {
        let line = self.line_starts.partition_point(|&s| s <= offset) as u32 - 1;
        LineCol {
            line,
            col: offset - self.line_starts[line as usize],
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
