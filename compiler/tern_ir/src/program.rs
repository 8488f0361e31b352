//! Parsed program.

use crate::{ExprArena, ExprId, FunctionTable};

/// A completely parsed program: every definition line plus the final
/// expression line, sharing one arena.
///
/// Scope and arity checking already happened during parsing, so the evaluator
/// can assume every name it meets resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    /// All expression nodes, definitions and entry expression alike.
    pub arena: ExprArena,
    /// Function definitions keyed by interned name.
    pub functions: FunctionTable,
    /// The final line's expression.
    pub entry: ExprId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Expr, ExprKind, Span};

    #[test]
    fn program_carries_entry_into_arena() {
        let mut arena = ExprArena::new();
        let entry = arena.push(Expr::new(ExprKind::Int(4), Span::new(0, 1)));
        let program = Program {
            arena,
            functions: FunctionTable::new(),
            entry,
        };
        assert_eq!(*program.arena.kind(program.entry), ExprKind::Int(4));
        assert!(program.functions.is_empty());
    }
}
