//! The `run` command: parse and evaluate a Tern program.

use std::io::{self, BufRead};

use tern_cursor::SourceText;
use tern_eval::Interpreter;
use tern_ir::StringInterner;
use tern_parse::parse_program;
use tracing::debug;

use crate::reporting::{render_eval_error, render_parse_error};

use super::read_file;

/// Run a program from a file, printing the result or a rendered error.
///
/// The file holds one definition per line with the final line being the
/// expression to evaluate, same as stdin mode.
pub fn run_file(path: &str) {
    debug!(path, "run_file");
    finish(execute_file(path));
}

/// Run a program read from stdin until end of input or an `exit` line.
pub fn run_stdin() {
    match read_program(io::stdin().lock()) {
        Ok(lines) => finish(execute_lines(&lines)),
        Err(e) => {
            eprintln!("error reading stdin: {e}");
            std::process::exit(1);
        }
    }
}

/// Collect program lines from `input`, one per line, until end of input
/// or a line consisting exactly of `exit` (which is not part of the
/// program).
pub fn read_program(input: impl BufRead) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line == "exit" {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Read and run a program file. Split out from [`run_file`] so tests can
/// call it without exiting the process.
pub fn execute_file(path: &str) -> Result<i64, String> {
    let content = read_file(path)?;
    let lines: Vec<&str> = content.lines().collect();
    execute_lines(&lines)
}

/// Parse and evaluate a program given as lines, rendering any failure to
/// the text the driver prints.
///
/// Every line but the last defines a function; the last line is the
/// program's expression. The empty program is rejected up front instead
/// of being treated as a single empty expression line.
pub fn execute_lines<S: AsRef<str>>(lines: &[S]) -> Result<i64, String> {
    if lines.is_empty() {
        return Err("empty program: expected an expression line".to_string());
    }
    let source = SourceText::from_lines(lines);
    let interner = StringInterner::new();
    let program = parse_program(&source, &interner).map_err(|e| render_parse_error(&e, &source))?;
    Interpreter::new(&program, &interner).run().map_err(|e| render_eval_error(&e, &source))
}

/// Print the outcome: the value on stdout, or the rendered error on
/// stderr with a failing exit code.
fn finish(outcome: Result<i64, String>) {
    match outcome {
        Ok(value) => println!("{value}"),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}
