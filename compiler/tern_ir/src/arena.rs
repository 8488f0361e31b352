//! Expression arena.
//!
//! [`ExprArena`] uses struct-of-arrays layout for cache locality (parallel
//! `kinds` and `spans` arrays indexed by [`ExprId`]). Call argument lists are
//! flattened into a single `Vec<ExprId>` addressed by [`ExprRange`], so a
//! node stays `Copy` no matter how many children it has.

use crate::{Expr, ExprId, ExprKind, ExprRange, Span};

fn to_u32(value: usize, what: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("too many {what} for u32 index"))
}

fn to_u16(value: usize, what: &str) -> u16 {
    u16::try_from(value).unwrap_or_else(|_| panic!("{what} too long for u16 length"))
}

/// Arena for expressions.
///
/// # Index Spaces
///
/// - `kinds`/`spans`: parallel arrays indexed by [`ExprId`]
/// - `expr_lists`: flat `Vec<ExprId>` indexed by [`ExprRange`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExprArena {
    /// Expression kinds (parallel with spans).
    kinds: Vec<ExprKind>,
    /// Source spans for error reporting (parallel with kinds).
    spans: Vec<Span>,
    /// Flattened expression ID lists for call arguments.
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            kinds: Vec::new(),
            spans: Vec::new(),
            expr_lists: Vec::new(),
        }
    }

    /// Create an arena pre-allocated based on source length.
    ///
    /// Heuristic: ~1 expression per 20 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 20;
        Self {
            kinds: Vec::with_capacity(estimated),
            spans: Vec::with_capacity(estimated),
            expr_lists: Vec::with_capacity(estimated),
        }
    }

    /// Allocate an expression node, returning its ID.
    pub fn push(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(expr.kind);
        self.spans.push(expr.span);
        id
    }

    /// Get the expression kind for a node.
    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    /// Get the source span for a node.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    /// Reconstruct a full `Expr` from the parallel arrays.
    pub fn get(&self, id: ExprId) -> Expr {
        Expr {
            kind: self.kinds[id.index()],
            span: self.spans[id.index()],
        }
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Allocate a contiguous range of expression IDs (for call arguments).
    pub fn push_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "expression list"))
    }

    /// Get expression IDs from a range.
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        let end = start + range.len();
        &self.expr_lists[start..end]
    }
}

impl Default for ExprArena {
    fn default() -> Self {
        Self::new()
    }
}
