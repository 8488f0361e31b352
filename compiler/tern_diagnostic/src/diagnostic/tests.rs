use pretty_assertions::assert_eq;
use tern_ir::Span;

use super::*;

// === Builders ===

#[test]
fn error_builder_sets_code_and_severity() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("unexpected character");
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.severity, Severity::Error);
    assert!(diag.is_error());
    assert_eq!(diag.message, "unexpected character");
}

#[test]
fn warning_builder_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E1001);
    assert!(!diag.is_error());
}

#[test]
fn labels_accumulate_in_order() {
    let diag = Diagnostic::error(ErrorCode::E2003)
        .with_message("duplicate function definition")
        .with_label(Span::new(10, 13), "redefined here")
        .with_secondary_label(Span::new(0, 3), "first defined here");

    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert!(!diag.labels[1].is_primary);
}

#[test]
fn notes_accumulate() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_note("the right operand evaluated to 0")
        .with_note("comparisons produce 1 or 0");
    assert_eq!(diag.notes.len(), 2);
}

// === Primary span ===

#[test]
fn primary_span_is_first_primary_label() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_secondary_label(Span::new(0, 1), "left operand")
        .with_label(Span::point(2), "operation overflowed")
        .with_label(Span::point(9), "later primary");

    assert_eq!(diag.primary_span().unwrap(), Span::point(2));
}

#[test]
fn primary_span_is_none_without_labels() {
    let diag = Diagnostic::error(ErrorCode::E1002).with_message("unexpected end of line");
    assert_eq!(diag.primary_span(), None);
}

// === Display ===

#[test]
fn display_includes_code_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("unknown identifier `abc`")
        .with_label(Span::new(0, 3), "not in scope")
        .with_note("only function parameters are in scope");

    let rendered = diag.to_string();
    assert_eq!(
        rendered,
        "error [E2001]: unknown identifier `abc`\n  --> 0..3: not in scope\n  = note: only function parameters are in scope"
    );
}
