//! Tern IR — core data structures for the interpreter.
//!
//! This crate contains the shared types the parser produces and the
//! evaluator consumes:
//! - Spans for source locations
//! - Names for interned identifiers
//! - AST nodes (`ExprKind`, `BinOp`) and arena allocation for expressions
//! - Function definitions and the name tables threaded through a parse
//!
//! # Design Philosophy
//!
//! - **Intern everything**: identifier strings become `Name(u32)`.
//! - **Flatten everything**: no `Box<Expr>`; nodes reference each other by
//!   `ExprId(u32)` into a single arena, argument lists by `ExprRange`.
//! - The AST is a strict tree: each id is written once and referenced by
//!   exactly one parent, so a parse owns its arena outright.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod expr;
mod expr_id;
mod function;
mod interner;
mod name;
mod op;
mod program;
mod span;

pub use arena::ExprArena;
pub use expr::{Expr, ExprKind};
pub use expr_id::{ExprId, ExprRange};
pub use function::{ArityTable, FunctionDef, FunctionTable, ScopeSet};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use op::BinOp;
pub use program::Program;
pub use span::Span;
