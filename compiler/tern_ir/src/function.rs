//! Function definitions and the name tables threaded through a parse.
//!
//! Scope and arity checking happen at parse time, so the parser carries an
//! [`ArityTable`] (filled in program order, visible to later lines) and a
//! per-line [`ScopeSet`] of referenceable identifiers. The finished
//! definitions land in a [`FunctionTable`] for the evaluator.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{ExprId, Name};

/// Function definition.
///
/// Parameters are ordered, non-empty, and unique; call arguments bind to them
/// positionally.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDef {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: ExprId,
}

impl FunctionDef {
    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Name → arity, built up in program order while definitions parse.
///
/// An entry is inserted *before* the definition's body is parsed, so a body
/// may call its own function and any earlier one, but never a later one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArityTable {
    map: FxHashMap<Name, u16>,
}

impl ArityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a function's arity. Callers check for duplicates first.
    pub fn insert(&mut self, name: Name, arity: u16) {
        debug_assert!(
            !self.map.contains_key(&name),
            "duplicate arity entry for {name:?}"
        );
        self.map.insert(name, arity);
    }

    pub fn get(&self, name: Name) -> Option<u16> {
        self.map.get(&name).copied()
    }

    pub fn contains(&self, name: Name) -> bool {
        self.map.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Name → definition. Built once by the program parse, read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionTable {
    map: FxHashMap<Name, FunctionDef>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a finished definition. Callers check for duplicates first.
    pub fn insert(&mut self, def: FunctionDef) {
        debug_assert!(
            !self.map.contains_key(&def.name),
            "duplicate definition for {:?}",
            def.name
        );
        self.map.insert(def.name, def);
    }

    pub fn get(&self, name: Name) -> Option<&FunctionDef> {
        self.map.get(&name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Identifiers referenceable from the expression currently being parsed.
///
/// A definition body sees its parameters; the final expression line sees
/// nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScopeSet {
    set: FxHashSet<Name>,
}

impl ScopeSet {
    /// The empty scope (used for the program's final expression line).
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope holding exactly a definition's parameters.
    pub fn from_params(params: &[Name]) -> Self {
        Self {
            set: params.iter().copied().collect(),
        }
    }

    pub fn contains(&self, name: Name) -> bool {
        self.set.contains(&name)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
