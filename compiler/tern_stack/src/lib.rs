//! Stack safety utilities for deep recursion.
//!
//! Both the parser and the evaluator are purely recursive: a deeply nested
//! expression, or a deeply recursive function program, nests one host stack
//! frame per level. Wrapping each recursion step in
//! [`ensure_sufficient_stack`] grows the stack on demand instead of
//! overflowing it.
//!
//! # Platform Support
//!
//! - **Native targets**: uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: no-op passthrough (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 100KB — if less than this remains, the stack is grown.
//! - **Growth size**: 1MB per growth.
//!
//! Terminating-but-deep recursion (tens of thousands of call frames) succeeds
//! under this scheme; a genuinely non-terminating recursive program still
//! exhausts memory eventually, which is a fatal condition by design rather
//! than a reportable error.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, additional stack
/// space is allocated before `f` runs. Call this at every recursion step of
/// a recursive-descent parse or a tree-walking evaluation:
///
/// ```text
/// fn eval(&self, id: ExprId, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(id, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version — call directly (WASM manages its own stack).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
