//! String interner for identifier storage.
//!
//! O(1) interning and lookup. The language's parse and evaluation phases are
//! single-threaded, so a single locked table is enough; the lock exists so
//! the interner can be shared by `&` between the parser, the evaluator, and
//! diagnostics rendering, all of which only need `&self` access.

use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Table of interned strings.
#[derive(Debug)]
struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        // Pre-intern the empty string at index 0 (Name::EMPTY).
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        Self {
            map,
            strings: vec![empty],
        }
    }
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Interner exceeded capacity (over 4 billion strings).
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// String interner mapping identifier text to compact [`Name`] keys.
///
/// Interned strings are leaked to obtain `'static` lifetime, so lookups
/// hand out references without copying. The table is write-once-read-many:
/// parsing interns, everything afterwards only looks up.
#[derive(Debug)]
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(InternTable::with_empty()),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned.
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s) {
                return Ok(Name::new(index));
            }
        }

        let mut guard = self.table.write();

        // Double-check after acquiring the write lock.
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::new(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;

        // Leak the string to get 'static lifetime.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);

        Ok(Name::new(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    ///
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use [`try_intern`](Self::try_intern) for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    ///
    /// Panics if `name` did not come from this interner.
    pub fn lookup(&self, name: Name) -> &str {
        let guard = self.table.read();
        guard.strings[name.index()]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if only the pre-interned empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_returns_stable_names() {
        let interner = StringInterner::new();
        let a = interner.intern("foo");
        let b = interner.intern("bar");
        let a2 = interner.intern("foo");
        assert_eq!(a, a2);
        assert_ne!(a, b);
    }

    #[test]
    fn lookup_round_trips() {
        let interner = StringInterner::new();
        let name = interner.intern("fib");
        assert_eq!(interner.lookup(name), "fib");
    }

    #[test]
    fn empty_string_is_pre_interned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
        assert!(interner.is_empty());
    }

    #[test]
    fn len_counts_distinct_strings() {
        let interner = StringInterner::new();
        interner.intern("x");
        interner.intern("y");
        interner.intern("x");
        assert_eq!(interner.len(), 3); // "", "x", "y"
        assert!(!interner.is_empty());
    }
}
