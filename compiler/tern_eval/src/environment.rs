//! Variable bindings for one call frame.
//!
//! Scoping is flat by language design: an expression sees exactly the
//! parameters of its enclosing definition, nothing else. A call therefore
//! installs a fresh frame holding the callee's parameters; there is no
//! parent chain to search and no way to observe the caller's bindings.

use rustc_hash::FxHashMap;
use tern_ir::Name;

/// One call frame's bindings (`FxHashMap` for fast hashing with `Name` keys).
///
/// The entry frame of a program is empty: the final expression line has no
/// parameters in scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: FxHashMap<Name, i64>,
}

impl Environment {
    /// The empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// A frame with room for `capacity` bindings (one per parameter).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bindings: FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher),
        }
    }

    /// Bind a parameter to its argument value.
    #[inline]
    pub fn define(&mut self, name: Name, value: i64) {
        self.bindings.insert(name, value);
    }

    /// Look up a binding.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<i64> {
        self.bindings.get(&name).copied()
    }

    /// Number of bindings in this frame.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether this frame has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
