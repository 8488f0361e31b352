//! Tree-walking evaluator for Tern programs.
//!
//! Takes the [`Program`](tern_ir::Program) a parse produced and evaluates
//! its entry expression to a single `i64`. Because the parser resolves all
//! names, evaluation can only fault in arithmetic: division or modulo by
//! zero, or overflow (arithmetic is checked, never wrapping). Faults carry
//! the span of the operator they occurred at.

mod environment;
pub mod errors;
mod interpreter;
mod operators;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
