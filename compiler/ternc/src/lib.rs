//! Tern interpreter driver.
//!
//! The `tern` binary reads a program from stdin or a file: every line but
//! the last defines a function, the last line is the expression to
//! evaluate. This crate holds the command handlers and the error renderers
//! behind the binary, so tests can exercise the full pipeline in-process.

pub mod commands;
pub mod reporting;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output for interpreter diagnostics.
///
/// Reads the `RUST_LOG` environment variable; when it is unset this is a
/// no-op, keeping the interpreter's own output clean. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
