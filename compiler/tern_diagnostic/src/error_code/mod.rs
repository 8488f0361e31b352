//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that raised it.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Syntax errors
/// - E2xxx: Name resolution errors (still raised at parse time)
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Syntax Errors (E1xxx)
    /// Unexpected character
    E1001,
    /// Unexpected end of line
    E1002,
    /// Expected a specific character
    E1003,
    /// Expected identifier
    E1004,
    /// Expected number
    E1005,
    /// Unexpected operator
    E1006,
    /// Integer literal out of range
    E1007,

    // Name Resolution Errors (E2xxx)
    /// Unknown identifier
    E2001,
    /// Unknown function
    E2002,
    /// Duplicate function definition
    E2003,
    /// Duplicate parameter
    E2004,

    // Runtime / Eval Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Modulo by zero
    E6002,
    /// Integer overflow
    E6003,
    /// Undefined variable (invariant breach: parsing checks scopes)
    E6004,
    /// Undefined function (invariant breach: parsing checks call targets)
    E6005,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    /// When adding a new variant: add it to the enum, `as_str()`, and here.
    pub const ALL: &[ErrorCode] = &[
        // Syntax
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        // Name resolution
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        // Runtime / Eval
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Syntax
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            // Name resolution
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            // Runtime / Eval
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
        }
    }

    /// Check if this is a syntax error (E1xxx range).
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
                | ErrorCode::E1007
        )
    }

    /// Check if this is a name resolution error (E2xxx range).
    pub fn is_name_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003 | ErrorCode::E2004
        )
    }

    /// Check if this is a runtime/eval error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E6001
                | ErrorCode::E6002
                | ErrorCode::E6003
                | ErrorCode::E6004
                | ErrorCode::E6005
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`],
/// so it is automatically exhaustive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
