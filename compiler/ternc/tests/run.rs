#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Tests use unwrap for brevity"
)]

//! End-to-end driver tests.
//!
//! Run whole programs through the same path the binary uses, checking
//! results and the exact rendered error text.

use pretty_assertions::assert_eq;
use ternc::commands::{execute_file, execute_lines, read_program};

// -- Programs that succeed --

#[test]
fn constant_expression() {
    assert_eq!(execute_lines(&["(2+2)"]), Ok(4));
}

#[test]
fn nested_arithmetic_truncates_toward_zero() {
    assert_eq!(execute_lines(&["(2+((3*4)/5))"]), Ok(4));
}

#[test]
fn negative_literal() {
    assert_eq!(execute_lines(&["-42"]), Ok(-42));
}

#[test]
fn comparison_results_are_integers() {
    assert_eq!(execute_lines(&["(2<3)"]), Ok(1));
    assert_eq!(execute_lines(&["(3<2)"]), Ok(0));
}

#[test]
fn conditional_on_a_comparison() {
    assert_eq!(execute_lines(&["[((10+20)>(20+10))]?(1):(0)"]), Ok(0));
}

#[test]
fn equality_in_a_condition() {
    assert_eq!(execute_lines(&["[(2=2)]?(7):(8)"]), Ok(7));
}

#[test]
fn definitions_feed_the_final_expression() {
    let program = [
        "f(x)={[(x>1)]?((f((x-1))+f((x-2)))):(x)}",
        "g(x)={(f(x)+f((x/2)))}",
        "g(10)",
    ];
    assert_eq!(execute_lines(&program), Ok(60));
}

#[test]
fn definitions_may_call_earlier_definitions() {
    let program = [
        "double(x)={(x*2)}",
        "quad(x)={double(double(x))}",
        "quad(5)",
    ];
    assert_eq!(execute_lines(&program), Ok(20));
}

#[test]
fn deep_recursion_completes() {
    let program = ["f(x)={[(x>0)]?(f((x-1))):(0)}", "f(20000)"];
    assert_eq!(execute_lines(&program), Ok(0));
}

// -- Parse failures --

#[test]
fn unknown_identifier_reports_column_and_line() {
    assert_eq!(
        execute_lines(&["abc"]),
        Err("unknown identifier `abc` at 4:1".to_string())
    );
}

#[test]
fn unclosed_binary_reports_past_the_line_end() {
    assert_eq!(
        execute_lines(&["(2+2"]),
        Err("expected `)` at 6:1".to_string())
    );
}

#[test]
fn unknown_operator_is_rejected() {
    assert_eq!(
        execute_lines(&["(2&2)"]),
        Err("unexpected operator `&` at 4:1".to_string())
    );
}

#[test]
fn empty_expression_line_reports_line_only() {
    assert_eq!(
        execute_lines(&[""]),
        Err("unexpected end of line at line 1".to_string())
    );
}

#[test]
fn call_with_too_few_arguments_is_a_parse_error() {
    assert_eq!(
        execute_lines(&["foo(a,b)={(a+b)}", "foo(1)"]),
        Err("expected `,` at 7:2".to_string())
    );
}

#[test]
fn call_of_an_undefined_function_is_rejected() {
    assert_eq!(
        execute_lines(&["foo(1,2)"]),
        Err("unknown function `foo` at 4:1".to_string())
    );
}

#[test]
fn malformed_definition_reports_its_own_line() {
    assert_eq!(
        execute_lines(&["f(x)=x", "1"]),
        Err("expected `{` at 7:1".to_string())
    );
}

#[test]
fn duplicate_definitions_are_rejected() {
    assert_eq!(
        execute_lines(&["f(x)={x}", "f(y)={y}", "f(1)"]),
        Err("duplicate function definition `f` at 2:2".to_string())
    );
}

#[test]
fn empty_program_is_rejected() {
    assert_eq!(
        execute_lines::<&str>(&[]),
        Err("empty program: expected an expression line".to_string())
    );
}

// -- Runtime faults --

#[test]
fn division_by_zero_renders_the_operator_position() {
    assert_eq!(
        execute_lines(&["(1/0)"]),
        Err("Runtime error\ndivision by zero\nAt 3:1".to_string())
    );
}

#[test]
fn modulo_by_zero_renders_the_operator_position() {
    assert_eq!(
        execute_lines(&["(5%0)"]),
        Err("Runtime error\nmodulo by zero\nAt 3:1".to_string())
    );
}

#[test]
fn overflow_renders_the_operation() {
    assert_eq!(
        execute_lines(&["(9223372036854775807+1)"]),
        Err("Runtime error\ninteger overflow in addition\nAt 21:1".to_string())
    );
}

#[test]
fn fault_inside_a_definition_points_into_that_line() {
    assert_eq!(
        execute_lines(&["f(x)={(x/0)}", "f(1)"]),
        Err("Runtime error\ndivision by zero\nAt 9:1".to_string())
    );
}

// -- Stdin collection --

#[test]
fn exit_line_ends_the_program() {
    let input: &[u8] = b"f(x)={(x+1)}\nf(4)\nexit\n(9+9)\n";
    let lines = read_program(input).unwrap();
    assert_eq!(lines, vec!["f(x)={(x+1)}", "f(4)"]);
    assert_eq!(execute_lines(&lines), Ok(5));
}

#[test]
fn input_without_exit_reads_to_the_end() {
    let lines = read_program(&b"(2*3)"[..]).unwrap();
    assert_eq!(lines, vec!["(2*3)"]);
    assert_eq!(execute_lines(&lines), Ok(6));
}

#[test]
fn exit_must_match_exactly() {
    // A line merely containing `exit` is program text, not a terminator.
    let lines = read_program(&b" exit\nexit\n"[..]).unwrap();
    assert_eq!(lines, vec![" exit"]);
}

// -- File mode --

#[test]
fn runs_a_program_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.tern");
    std::fs::write(&path, "f(x)={(x*x)}\nf(9)\n").unwrap();
    assert_eq!(execute_file(path.to_str().unwrap()), Ok(81));
}

#[test]
fn missing_file_reports_a_readable_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.tern");
    let path = path.to_str().unwrap();
    assert_eq!(
        execute_file(path),
        Err(format!("cannot find file '{path}'"))
    );
}
