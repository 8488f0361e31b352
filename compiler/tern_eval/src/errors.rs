//! Runtime fault types.
//!
//! Name resolution happens at parse time, so the only faults a well-formed
//! program can raise are arithmetic: division by zero, modulo by zero, and
//! overflow. The undefined-name variants exist as graceful failures for
//! programs built by hand rather than by the parser.
//!
//! Factory functions (`division_by_zero()`, ...) are the construction API;
//! they populate the structured kind, and the message comes from the kind's
//! `Display`.

use std::fmt;

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::Span;

/// Result of evaluating an expression.
pub type EvalResult = Result<i64, EvalError>;

/// Typed fault category.
///
/// Carries the data needed for both the human-readable message and the
/// error code, so callers can match on the condition instead of parsing
/// message strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow { operation: String },
    UndefinedVariable { name: String },
    UndefinedFunction { name: String },
}

impl EvalErrorKind {
    /// The diagnostic code for this fault.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DivisionByZero => ErrorCode::E6001,
            Self::ModuloByZero => ErrorCode::E6002,
            Self::IntegerOverflow { .. } => ErrorCode::E6003,
            Self::UndefinedVariable { .. } => ErrorCode::E6004,
            Self::UndefinedFunction { .. } => ErrorCode::E6005,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UndefinedFunction { name } => write!(f, "undefined function: {name}"),
        }
    }
}

/// Runtime fault, optionally attributed to a source position.
///
/// Faults originate in operator application, where no position is known;
/// the evaluator attaches the operator node's span on the way out via
/// [`with_span`](EvalError::with_span).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured fault category.
    pub kind: EvalErrorKind,
    /// Position of the operator (or name) the fault is attributed to.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        Self { kind, span: None }
    }

    /// The diagnostic code for this fault.
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Attach a source span to this fault.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match self.span {
            Some(span) => diagnostic.with_label(span, "here"),
            None => diagnostic,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}
