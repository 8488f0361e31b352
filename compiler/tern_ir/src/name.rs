//! Interned string identifier.

use std::fmt;

/// Interned string identifier.
///
/// A compact 32-bit index into the [`StringInterner`](crate::StringInterner).
/// Identifier identity is name equality (the parser and evaluator compare
/// `Name`s, never strings), so equality and hashing are O(1) integer
/// operations.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Create from an interner index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Name(index)
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
