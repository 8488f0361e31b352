//! Diagnostic system for structured error reporting.
//!
//! Both interpreter phases (parsing and evaluation) convert their errors into
//! a [`Diagnostic`]: an error code for searchability, a clear message, a
//! primary span, and optional context notes. The driver decides how to render
//! them; this crate never prints.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
