//! Parse error type.

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::Span;

/// Parse error with error code for rich diagnostics.
///
/// Syntax failures and the name/arity checks performed during parsing both
/// produce this type. The first error aborts the parse of the whole program.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error: a point span at the cursor position at the
    /// moment the error was raised.
    pub span: Span,
    /// Zero-based line the error was raised on.
    ///
    /// Kept separately from `span`: an error raised after a failed
    /// end-of-line check sits one byte past the line's end, which is the
    /// start offset of the *next* line. Resolving such a span against the
    /// line table alone would misattribute the error.
    pub line: u32,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span, line: u32) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            line,
        }
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, "here")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_records_all_fields() {
        let err = ParseError::new(ErrorCode::E1003, "expected `)`", Span::point(5), 0);
        assert_eq!(err.code, ErrorCode::E1003);
        assert_eq!(err.message, "expected `)`");
        assert_eq!(err.span, Span::point(5));
        assert_eq!(err.line, 0);
    }

    #[test]
    fn to_diagnostic_keeps_code_and_span() {
        let err = ParseError::new(ErrorCode::E2001, "unknown identifier `abc`", Span::point(3), 2);
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E2001);
        assert_eq!(diag.message, "unknown identifier `abc`");
        assert_eq!(diag.primary_span(), Some(Span::point(3)));
        assert!(diag.is_error());
    }
}
