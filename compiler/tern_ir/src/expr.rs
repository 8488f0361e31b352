//! Expression Types
//!
//! Core expression nodes and variants.
//!
//! # Design Notes
//! - No `Box<Expr>`, children are `ExprId(u32)` indices into the arena
//! - Contiguous arrays for cache locality

use std::fmt;

use crate::{BinOp, ExprId, ExprRange, Name, Span};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
///
/// All children are indices, not boxes. The grammar is fully parenthesized,
/// so five forms cover the whole language.
///
/// Span convention: every node's span covers its full source extent, except
/// `Binary`, whose span is the single operator character. Arithmetic faults
/// are reported against the operator, and the operand extents are recoverable
/// from the children.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// Integer literal: 42, -12345678
    Int(i64),

    /// Parameter reference inside a function body
    Ident(Name),

    /// Binary operation: `(left op right)`
    Binary {
        op: BinOp,
        left: ExprId,
        right: ExprId,
    },

    /// Conditional: `[cond]?(then):(else)`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Function call: `name(arg, ...)`
    Call { callee: Name, args: ExprRange },
}

impl fmt::Debug for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Int(n) => write!(f, "Int({n})"),
            ExprKind::Ident(n) => write!(f, "Ident({n:?})"),
            ExprKind::Binary { op, left, right } => {
                write!(f, "Binary({op:?}, {left:?}, {right:?})")
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                write!(f, "If({cond:?}, {then_branch:?}, {else_branch:?})")
            }
            ExprKind::Call { callee, args } => write!(f, "Call({callee:?}, {args:?})"),
        }
    }
}

// Size assertions to prevent accidental regressions.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Expr, ExprKind};
    crate::static_assert_size!(ExprKind, 16);
    crate::static_assert_size!(Expr, 24);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_formats_are_compact() {
        let int = ExprKind::Int(42);
        assert_eq!(format!("{int:?}"), "Int(42)");

        let binary = ExprKind::Binary {
            op: BinOp::Add,
            left: ExprId::new(0),
            right: ExprId::new(1),
        };
        assert_eq!(format!("{binary:?}"), "Binary(Add, ExprId(0), ExprId(1))");
    }

    #[test]
    fn expr_carries_span() {
        let expr = Expr::new(ExprKind::Int(7), Span::new(2, 3));
        assert_eq!(expr.span, Span::new(2, 3));
        assert_eq!(format!("{expr:?}"), "Int(7) @ 2..3");
    }
}
