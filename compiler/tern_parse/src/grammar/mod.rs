//! Grammar productions.
//!
//! Split by syntactic category:
//!
//! - [`expr`]: expressions (the whole expression grammar, including calls)
//! - [`function`]: function definition lines
//!
//! Productions are methods on [`Parser`], so each file extends the same
//! state machine. Identifier scanning lives here because both categories
//! need it.

mod expr;
mod function;

use tern_diagnostic::ErrorCode;
use tern_ir::Name;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Scan an identifier: one or more ASCII letters.
    ///
    /// Does not consume anything on failure, so the error reports the
    /// non-letter character's own column.
    pub(crate) fn parse_identifier(&mut self) -> Result<Name, ParseError> {
        let start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_alphabetic());
        if self.cursor.pos() == start {
            return Err(self.err(ErrorCode::E1004, "expected identifier"));
        }
        Ok(self.interner.intern(self.cursor.slice_from(start)))
    }
}
