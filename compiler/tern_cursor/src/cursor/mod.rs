//! Sentinel-based cursor over one line of source.
//!
//! The cursor advances through a single line byte-by-byte. End-of-line is
//! detected by the `$` sentinel: [`Cursor::current`] returns `SENTINEL` once
//! the position reaches the line length, so the grammar never needs an
//! explicit bounds check. A literal `$` inside the line is indistinguishable
//! from end-of-line: `$` is the language's line-terminator character.
//!
//! The cursor tolerates advancement past the end (a failed terminator check
//! consumes the sentinel before reporting), and keeps returning the sentinel
//! from there.

/// End-of-line sentinel byte.
///
/// Doubles as the language's line-terminator character: a definition line
/// must end with it (implicitly, at the physical end of the line), and an
/// expression encountering it reports "unexpected end of line".
pub const SENTINEL: u8 = b'$';

/// Cursor over one line of source text.
///
/// Created via [`SourceText::cursor()`](crate::SourceText::cursor). The
/// cursor is [`Copy`], so callers can snapshot positions cheaply. Positions
/// come in two flavors: [`pos()`](Self::pos) is the offset within the line,
/// [`abs_pos()`](Self::abs_pos) the global offset into the whole program
/// text (line base + within-line offset), which is what spans record.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The line's text, without its trailing newline.
    line: &'a str,
    /// Current read position (byte index into `line`); may sit one past the
    /// end after a terminator check consumed the sentinel.
    pos: u32,
    /// Global byte offset of the line's first byte.
    base: u32,
    /// Zero-based line number, for diagnostics.
    line_no: u32,
}

/// Size assertion: &str = 16 (fat pointer) + 3 * u32 = 28, padded to 32.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `line`.
    ///
    /// `base` is the line's global byte offset, `line_no` its zero-based
    /// line number. The line must not contain `\n`.
    pub(crate) fn new(line: &'a str, base: u32, line_no: u32) -> Self {
        debug_assert!(
            !line.as_bytes().contains(&b'\n'),
            "cursor line must not contain a newline"
        );
        Self {
            line,
            pos: 0,
            base,
            line_no,
        }
    }

    /// Returns the byte at the current position, or [`SENTINEL`] at or past
    /// the end of the line. Never advances.
    #[inline]
    pub fn current(&self) -> u8 {
        match self.line.as_bytes().get(self.pos as usize) {
            Some(&b) => b,
            None => SENTINEL,
        }
    }

    /// Returns [`current()`](Self::current) and then advances by one byte.
    ///
    /// Safe to call at or past the end of the line: it returns the sentinel
    /// and keeps advancing, which mirrors how a failed terminator check
    /// consumes before reporting.
    #[inline]
    pub fn bump(&mut self) -> u8 {
        let b = self.current();
        self.pos = self.pos.saturating_add(1);
        b
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos = self.pos.saturating_add(1);
    }

    /// Advance while `pred` accepts the current byte.
    ///
    /// Stops at the end of the line before `pred` ever sees the synthetic
    /// sentinel. A literal `$` in the line is passed to `pred` like any
    /// other byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.line_len() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns `true` once the position is at or past the end of the line.
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.pos >= self.line_len()
    }

    /// Current byte offset within the line.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current global byte offset (line base + within-line offset).
    #[inline]
    pub fn abs_pos(&self) -> u32 {
        self.base + self.pos
    }

    /// Zero-based line number of this cursor's line.
    #[inline]
    pub fn line_no(&self) -> u32 {
        self.line_no
    }

    /// Length of the line in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "SourceText caps program text at u32::MAX bytes"
    )]
    pub fn line_len(&self) -> u32 {
        self.line.len() as u32
    }

    /// Extract line text between two within-line offsets.
    ///
    /// `start..end` must lie inside the line. The grammar only slices runs
    /// it has just scanned with [`eat_while`](Self::eat_while) over ASCII
    /// classes, so the bounds are always valid character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.line_len(),
            "slice end {end} exceeds line length {}",
            self.line_len()
        );
        &self.line[start as usize..end as usize]
    }

    /// Extract line text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}
