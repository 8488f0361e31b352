//! Binary operator implementations.
//!
//! Every value is an `i64`, so dispatch is a single match on the operator.
//! Arithmetic is checked: overflow is a fault, not a wrap. Comparisons
//! produce `1` or `0`; the language has no boolean type.

use tern_ir::BinOp;

use crate::errors::{division_by_zero, integer_overflow, modulo_by_zero, EvalResult};

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.ok_or_else(|| integer_overflow(op_name))
}

/// Apply a binary operator to two values.
///
/// The returned fault carries no span; the evaluator attributes it to the
/// operator node on the way out.
pub fn evaluate_binary(left: i64, right: i64, op: BinOp) -> EvalResult {
    match op {
        BinOp::Add => checked_arith(left.checked_add(right), "addition"),
        BinOp::Sub => checked_arith(left.checked_sub(right), "subtraction"),
        BinOp::Mul => checked_arith(left.checked_mul(right), "multiplication"),
        // checked_div/checked_rem also cover i64::MIN / -1, which overflows.
        BinOp::Div => {
            if right == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(left.checked_div(right), "division")
            }
        }
        BinOp::Mod => {
            if right == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(left.checked_rem(right), "remainder")
            }
        }
        BinOp::Gt => Ok(i64::from(left > right)),
        BinOp::Lt => Ok(i64::from(left < right)),
        BinOp::Eq => Ok(i64::from(left == right)),
    }
}
