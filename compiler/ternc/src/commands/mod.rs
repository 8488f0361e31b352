//! Command handlers for the Tern CLI.
//!
//! Each submodule implements one CLI command. Shared helpers like
//! `read_file` live here in the module root.

mod run;

pub use run::{execute_file, execute_lines, read_program, run_file, run_stdin};

/// Read a file from disk, mapping failures to a user-friendly message.
fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
