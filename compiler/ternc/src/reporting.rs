//! Error rendering at the driver boundary.
//!
//! The language reports positions as `column:line`, column first, both
//! 1-based. Parse errors render on a single line; runtime faults render as
//! a three-line block. The error types keep their structured
//! [`Diagnostic`](tern_diagnostic::Diagnostic) form for other consumers;
//! these renderers produce the exact text the driver prints.

use tern_cursor::SourceText;
use tern_diagnostic::ErrorCode;
use tern_eval::EvalError;
use tern_parse::ParseError;

/// Render a parse error as `{message} at {column}:{line}`.
///
/// The error's own `line` field picks the line: an error raised at a
/// line's end sits one byte past it, which the line-start table alone
/// would attribute to the following line. Unexpected-end-of-line errors
/// have no meaningful column and render as `{message} at line {line}`.
pub fn render_parse_error(err: &ParseError, source: &SourceText) -> String {
    let line = err.line + 1;
    if err.code == ErrorCode::E1002 {
        return format!("{} at line {line}", err.message);
    }
    let col = err.span.start - source.line_start(err.line) + 1;
    format!("{} at {col}:{line}", err.message)
}

/// Render a runtime fault as a three-line block:
///
/// ```text
/// Runtime error
/// division by zero
/// At 3:1
/// ```
///
/// The position is the offending operator's. Faults without a recorded
/// span drop the `At` line; the parser span-tags every fault site, so
/// spanless faults only arise from hand-built programs.
pub fn render_eval_error(err: &EvalError, source: &SourceText) -> String {
    match err.span {
        Some(span) => {
            let pos = source.position(span.start);
            format!("Runtime error\n{err}\nAt {}:{}", pos.col + 1, pos.line + 1)
        }
        None => format!("Runtime error\n{err}"),
    }
}
