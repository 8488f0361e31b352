use crate::{LineCol, SourceText};
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn single_line() {
    let source = SourceText::new("(2+2)");
    assert_eq!(source.line_count(), 1);
    assert_eq!(source.line(0), "(2+2)");
    assert_eq!(source.line_start(0), 0);
}

#[test]
fn empty_text_is_one_empty_line() {
    let source = SourceText::new("");
    assert_eq!(source.line_count(), 1);
    assert_eq!(source.line(0), "");
}

#[test]
fn multi_line_offsets() {
    let source = SourceText::new("f(x)={x}\ng(10)");
    assert_eq!(source.line_count(), 2);
    assert_eq!(source.line(0), "f(x)={x}");
    assert_eq!(source.line(1), "g(10)");
    assert_eq!(source.line_start(1), 9);
}

#[test]
fn from_lines_joins_with_newline() {
    let lines = ["f(x)={x}", "f(3)"];
    let source = SourceText::from_lines(lines);
    assert_eq!(source.as_str(), "f(x)={x}\nf(3)");
    assert_eq!(source.line_count(), 2);
    assert_eq!(source.line(1), "f(3)");
}

#[test]
fn empty_lines_are_preserved() {
    let source = SourceText::new("a\n\nb");
    assert_eq!(source.line_count(), 3);
    assert_eq!(source.line(1), "");
    assert_eq!(source.line_start(1), 2);
    assert_eq!(source.line_start(2), 3);
}

// === Position Resolution ===

#[test]
fn position_on_first_line() {
    let source = SourceText::new("(2+2)");
    assert_eq!(source.position(2), LineCol { line: 0, col: 2 });
}

#[test]
fn position_on_later_lines() {
    let source = SourceText::new("ab\ncd\nef");
    assert_eq!(source.position(0), LineCol { line: 0, col: 0 });
    assert_eq!(source.position(3), LineCol { line: 1, col: 0 });
    assert_eq!(source.position(4), LineCol { line: 1, col: 1 });
    assert_eq!(source.position(7), LineCol { line: 2, col: 1 });
}

#[test]
fn position_at_line_end_belongs_to_that_line() {
    // Offset 2 is the newline terminating line 0.
    let source = SourceText::new("ab\ncd");
    assert_eq!(source.position(2), LineCol { line: 0, col: 2 });
}

#[test]
fn position_past_text_end_stays_on_last_line() {
    let source = SourceText::new("ab\ncd");
    assert_eq!(source.position(6), LineCol { line: 1, col: 3 });
}

// === Cursor Handout ===

#[test]
fn cursor_carries_line_metadata() {
    let source = SourceText::new("ab\ncd");
    let cursor = source.cursor(1);
    assert_eq!(cursor.line_no(), 1);
    assert_eq!(cursor.abs_pos(), 3);
    assert_eq!(cursor.current(), b'c');
}

// === Properties ===

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every (line, column) pair round-trips through the global offset.
        #[test]
        fn position_inverts_line_start_plus_col(
            lines in proptest::collection::vec("[a-z0-9+*/()\\[\\]?:,=<>-]{0,12}", 1..8)
        ) {
            let source = SourceText::from_lines(&lines);
            for line in 0..source.line_count() {
                let len = u32::try_from(source.line(line).len()).unwrap();
                for col in 0..=len {
                    let resolved = source.position(source.line_start(line) + col);
                    // The offset of a line's terminating newline still
                    // resolves to that line.
                    prop_assert_eq!(resolved, LineCol { line, col });
                }
            }
        }
    }
}
