//! Binary operators.
//!
//! The language has exactly eight, all written as a single character between
//! the operands of a parenthesized pair: five arithmetic operators and three
//! comparisons. There is no precedence — every binary operation carries its
//! own parentheses — and no other operator forms.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison (produce 1 or 0)
    Gt,
    Lt,
    Eq,
}

impl BinOp {
    /// Map an operator character to its operator, if it is one.
    ///
    /// Equality is spelled `=`: the operator position always holds exactly
    /// one character.
    #[inline]
    pub const fn from_char(c: u8) -> Option<Self> {
        match c {
            b'+' => Some(Self::Add),
            b'-' => Some(Self::Sub),
            b'*' => Some(Self::Mul),
            b'/' => Some(Self::Div),
            b'%' => Some(Self::Mod),
            b'>' => Some(Self::Gt),
            b'<' => Some(Self::Lt),
            b'=' => Some(Self::Eq),
            _ => None,
        }
    }

    /// The single-character source spelling of this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Eq => "=",
        }
    }

    /// Returns `true` for the comparison operators (the ones producing 1/0).
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Gt | Self::Lt | Self::Eq)
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_symbol())
    }
}
