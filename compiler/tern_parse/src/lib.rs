//! Recursive descent parser for Tern.
//!
//! The language is line-oriented: every line but the last defines a function,
//! the last line is the program's expression. One [`Parser`] instance parses
//! one line, allocating nodes into a shared [`ExprArena`]; [`parse_program`]
//! drives the per-line parses and threads the arity table through them in
//! program order.
//!
//! Scope and arity checking happen here, during parsing: an identifier must
//! be a parameter of the enclosing definition, and a call target must already
//! have a recorded arity. A successfully parsed program therefore cannot fail
//! name resolution at evaluation time.

mod error;
mod grammar;

pub use error::ParseError;

use tern_cursor::{Cursor, SENTINEL, SourceText};
use tern_diagnostic::ErrorCode;
use tern_ir::{
    ArityTable, Expr, ExprArena, ExprId, ExprKind, FunctionTable, Program, ScopeSet, Span,
    StringInterner,
};
use tracing::debug;

/// Parser state for one line of source.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: &'a mut ExprArena,
    interner: &'a StringInterner,
}

impl<'a> Parser<'a> {
    /// Create a parser over `cursor`, allocating nodes into `arena`.
    pub fn new(cursor: Cursor<'a>, arena: &'a mut ExprArena, interner: &'a StringInterner) -> Self {
        Parser {
            cursor,
            arena,
            interner,
        }
    }

    // Cursor delegation methods.

    #[inline]
    fn current(&self) -> u8 {
        self.cursor.current()
    }

    #[inline]
    fn bump(&mut self) -> u8 {
        self.cursor.bump()
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor.advance();
    }

    #[inline]
    #[allow(dead_code)]
    fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    #[inline]
    fn abs_pos(&self) -> u32 {
        self.cursor.abs_pos()
    }

    #[inline]
    fn line_no(&self) -> u32 {
        self.cursor.line_no()
    }

    /// Allocate an expression node.
    fn push(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.push(Expr::new(kind, span))
    }

    /// Build an error at the position the cursor holds *now*.
    ///
    /// Paired with the consume-then-check style of [`expect`](Self::expect),
    /// a failed expectation reports one column past the offending character;
    /// errors raised at a lookahead report the character's own column.
    #[cold]
    fn err(&self, code: ErrorCode, message: impl Into<String>) -> ParseError {
        ParseError::new(code, message, Span::point(self.abs_pos()), self.line_no())
    }

    /// Consume one character and require it to be `expected`.
    fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        if self.bump() != expected {
            return Err(self.err(
                ErrorCode::E1003,
                format!("expected `{}`", char::from(expected)),
            ));
        }
        Ok(())
    }

    /// Consume the end-of-line sentinel, requiring the line to be over.
    ///
    /// A literal `$` satisfies this check: the sentinel character *is* the
    /// line terminator, wherever it appears.
    fn expect_eol(&mut self) -> Result<(), ParseError> {
        if self.bump() != SENTINEL {
            return Err(self.err(ErrorCode::E1003, "expected end of line"));
        }
        Ok(())
    }
}

/// Parse a complete program.
///
/// Every line but the last must be a function definition; the last line is
/// the program's expression, parsed with an empty identifier scope. The
/// first error aborts the parse. `source` must have at least one line,
/// which [`SourceText`] guarantees by construction.
pub fn parse_program(
    source: &SourceText,
    interner: &StringInterner,
) -> Result<Program, ParseError> {
    debug!(lines = source.line_count(), "parse_program");

    let mut arena = ExprArena::with_capacity(source.as_str().len());
    let mut arities = ArityTable::new();
    let mut functions = FunctionTable::new();

    let last = source.line_count() - 1;
    for line_no in 0..last {
        let mut parser = Parser::new(source.cursor(line_no), &mut arena, interner);
        let def = parser.parse_function(&mut arities)?;
        functions.insert(def);
    }

    let mut parser = Parser::new(source.cursor(last), &mut arena, interner);
    let entry = parser.parse_expression(&ScopeSet::new(), &arities)?;

    Ok(Program {
        arena,
        functions,
        entry,
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;
    use tern_ir::Name;

    use super::*;

    fn parse_source(lines: &[&str]) -> Result<(Program, StringInterner), ParseError> {
        let interner = StringInterner::new();
        let source = SourceText::from_lines(lines);
        let program = parse_program(&source, &interner)?;
        Ok((program, interner))
    }

    fn name_of(interner: &StringInterner, text: &str) -> Name {
        interner.intern(text)
    }

    // === Whole programs ===

    #[test]
    fn single_line_program_is_just_the_expression() {
        let (program, _) = parse_source(&["((1*2)+3)"]).unwrap();
        assert!(program.functions.is_empty());
        assert!(matches!(
            program.arena.kind(program.entry),
            ExprKind::Binary { .. }
        ));
    }

    #[test]
    fn definitions_accumulate_then_entry_calls_them() {
        let (program, interner) = parse_source(&[
            "f(x)={[(x>1)]?((f((x-1))+f((x-2)))):(x)}",
            "g(x)={(f(x)+f((x/2)))}",
            "g(10)",
        ])
        .unwrap();

        assert_eq!(program.functions.len(), 2);
        let g = name_of(&interner, "g");
        assert_eq!(program.functions.get(g).unwrap().arity(), 1);

        match *program.arena.kind(program.entry) {
            ExprKind::Call { callee, args } => {
                assert_eq!(callee, g);
                assert_eq!(args.len(), 1);
            }
            ref other => panic!("expected call entry, got {other:?}"),
        }
    }

    #[test]
    fn later_definitions_are_not_visible_to_earlier_bodies() {
        // Name visibility follows program order: f's body parses before g
        // has a recorded arity.
        let err = parse_source(&["f(x)={g(x)}", "g(x)={x}", "f(1)"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::E2002);
        assert_eq!(err.line, 0);
    }

    #[test]
    fn duplicate_definition_across_lines_is_rejected() {
        let err = parse_source(&["f(x)={x}", "f(y)={y}", "f(1)"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::E2003);
        assert_eq!(err.line, 1);
        // Raised right after the name is read: one past `f` on its line.
        assert_eq!(err.span, Span::point(10));
    }

    #[test]
    fn entry_line_has_empty_scope() {
        let err = parse_source(&["f(x)={x}", "x"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::E2001);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn entry_line_may_call_any_definition() {
        let (program, interner) = parse_source(&["f(x)={x}", "f(7)"]).unwrap();
        let f = name_of(&interner, "f");
        assert!(matches!(
            *program.arena.kind(program.entry),
            ExprKind::Call { callee, .. } if callee == f
        ));
    }

    #[test]
    fn lone_definition_line_parses_as_expression_and_fails() {
        // The last line is always the program's expression; a single
        // definition line reads as a call to an unknown function.
        let err = parse_source(&["f(x)={x}"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::E2002);
        assert_eq!(err.line, 0);
    }

    #[test]
    fn entry_line_tolerates_trailing_text() {
        // Definition lines must end at the sentinel; the final expression
        // line stops wherever the expression ends.
        let (program, _) = parse_source(&["(2+2)zzz"]).unwrap();
        assert!(matches!(
            program.arena.kind(program.entry),
            ExprKind::Binary { .. }
        ));
    }

    #[test]
    fn error_span_is_global_across_lines() {
        // `(2+2` on line 1: the `)` check runs off the end of the line.
        // Line 1 starts at offset 9, so the error sits at 9 + 5 = 14 and
        // must still report line 1 even though offset 14 belongs to no line
        // content.
        let err = parse_source(&["f(x)={x}", "(2+2"]).unwrap_err();
        assert_eq!(err.code, ErrorCode::E1003);
        assert_eq!(err.message, "expected `)`");
        assert_eq!(err.span, Span::point(14));
        assert_eq!(err.line, 1);
    }
}
