//! Source text and character cursor for the Tern interpreter.
//!
//! Programs are line-oriented: every line is parsed independently, and the
//! language uses `$` as its end-of-line marker. [`SourceText`] owns the full
//! program text and the line-start table used to map byte offsets back to
//! line/column positions; [`Cursor`] is the per-line lookahead window the
//! parser consumes.
//!
//! This crate is standalone (no `tern_*` dependencies) so that external
//! tooling can reuse the source model without pulling in the interpreter.

mod cursor;
mod source_text;

pub use cursor::{Cursor, SENTINEL};
pub use source_text::{LineCol, SourceText};
