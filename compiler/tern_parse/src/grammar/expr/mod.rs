//! Expression grammar.
//!
//! One byte of lookahead decides every production:
//!
//! - a digit or `-` starts an integer literal
//! - `[` starts a conditional
//! - `(` starts a binary operation
//! - a letter starts an identifier or a call
//!
//! There is no precedence climbing: binary operations are always fully
//! parenthesized, so each production knows its shape from the first byte.
//! Whitespace is never skipped; a space is just an unexpected character.

use tern_cursor::SENTINEL;
use tern_diagnostic::ErrorCode;
use tern_ir::{ArityTable, BinOp, ExprId, ExprKind, ScopeSet, Span};
use tern_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one expression.
    ///
    /// `scope` holds the identifiers allowed to appear (the enclosing
    /// definition's parameters; empty on the program's entry line) and
    /// `arities` the functions allowed to be called. Name resolution is
    /// part of parsing, so both checks fail here, not at evaluation.
    pub fn parse_expression(
        &mut self,
        scope: &ScopeSet,
        arities: &ArityTable,
    ) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(scope, arities))
    }

    fn parse_expression_inner(
        &mut self,
        scope: &ScopeSet,
        arities: &ArityTable,
    ) -> Result<ExprId, ParseError> {
        match self.current() {
            b'-' | b'0'..=b'9' => {
                trace!("parse_expression -> IntLiteral");
                self.parse_int_literal()
            }
            b'[' => {
                trace!("parse_expression -> Conditional");
                self.parse_conditional(scope, arities)
            }
            b'(' => {
                trace!("parse_expression -> Binary");
                self.parse_binary(scope, arities)
            }
            c if c.is_ascii_alphabetic() => {
                trace!("parse_expression -> IdentOrCall");
                self.parse_ident_or_call(scope, arities)
            }
            SENTINEL => Err(self.err(ErrorCode::E1002, "unexpected end of line")),
            c => Err(self.err(
                ErrorCode::E1001,
                format!("unexpected character `{}`", char::from(c)),
            )),
        }
    }

    /// Parse an integer literal, optionally preceded by `-`.
    ///
    /// Digits accumulate into the negative range, so `-9223372036854775808`
    /// (`i64::MIN`, which has no positive counterpart) still parses. A
    /// literal outside `i64` reports "integer literal out of range".
    fn parse_int_literal(&mut self) -> Result<ExprId, ParseError> {
        let start = self.abs_pos();
        let negative = self.current() == b'-';
        if negative {
            self.advance();
        }
        if !self.current().is_ascii_digit() {
            return Err(self.err(ErrorCode::E1005, "expected number"));
        }

        let mut value: i64 = 0;
        while self.current().is_ascii_digit() {
            let digit = i64::from(self.bump() - b'0');
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_sub(digit))
                .ok_or_else(|| self.err(ErrorCode::E1007, "integer literal out of range"))?;
        }
        if !negative {
            value = value
                .checked_neg()
                .ok_or_else(|| self.err(ErrorCode::E1007, "integer literal out of range"))?;
        }

        let span = Span::new(start, self.abs_pos());
        Ok(self.push(ExprKind::Int(value), span))
    }

    /// Parse `[cond]?(then):(else)`.
    fn parse_conditional(
        &mut self,
        scope: &ScopeSet,
        arities: &ArityTable,
    ) -> Result<ExprId, ParseError> {
        let start = self.abs_pos();
        self.advance(); // [
        let cond = self.parse_expression(scope, arities)?;
        self.expect(b']')?;
        self.expect(b'?')?;
        self.expect(b'(')?;
        let then_branch = self.parse_expression(scope, arities)?;
        self.expect(b')')?;
        self.expect(b':')?;
        self.expect(b'(')?;
        let else_branch = self.parse_expression(scope, arities)?;
        self.expect(b')')?;

        let span = Span::new(start, self.abs_pos());
        Ok(self.push(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// Parse `(left op right)`.
    ///
    /// The node records the operator character's position as its span; a
    /// runtime fault in the operation is attributed there.
    fn parse_binary(
        &mut self,
        scope: &ScopeSet,
        arities: &ArityTable,
    ) -> Result<ExprId, ParseError> {
        self.advance(); // (
        let left = self.parse_expression(scope, arities)?;

        let op_span = Span::point(self.abs_pos());
        let c = self.bump();
        let Some(op) = BinOp::from_char(c) else {
            return Err(self.err(
                ErrorCode::E1006,
                format!("unexpected operator `{}`", char::from(c)),
            ));
        };

        let right = self.parse_expression(scope, arities)?;
        self.expect(b')')?;
        Ok(self.push(ExprKind::Binary { op, left, right }, op_span))
    }

    /// Parse an identifier, then a call if `(` follows.
    ///
    /// The callee's arity is looked up before `(` is consumed, so an
    /// unknown-function error lands on the `(` itself. Argument count is
    /// driven by the recorded arity: after each argument but the last, a
    /// `,` is required, so a call with too few arguments fails on the `)`
    /// where a `,` was expected.
    fn parse_ident_or_call(
        &mut self,
        scope: &ScopeSet,
        arities: &ArityTable,
    ) -> Result<ExprId, ParseError> {
        let start = self.abs_pos();
        let name = self.parse_identifier()?;

        if self.current() != b'(' {
            if !scope.contains(name) {
                return Err(self.err(
                    ErrorCode::E2001,
                    format!("unknown identifier `{}`", self.interner.lookup(name)),
                ));
            }
            let span = Span::new(start, self.abs_pos());
            return Ok(self.push(ExprKind::Ident(name), span));
        }

        let Some(arity) = arities.get(name) else {
            return Err(self.err(
                ErrorCode::E2002,
                format!("unknown function `{}`", self.interner.lookup(name)),
            ));
        };
        self.advance(); // (

        // Definitions always have at least one parameter, so the first
        // argument is unconditional.
        let mut args = Vec::with_capacity(usize::from(arity));
        args.push(self.parse_expression(scope, arities)?);
        for _ in 1..arity {
            self.expect(b',')?;
            args.push(self.parse_expression(scope, arities)?);
        }
        self.expect(b')')?;

        let span = Span::new(start, self.abs_pos());
        let args = self.arena.push_expr_list(&args);
        Ok(self.push(ExprKind::Call { callee: name, args }, span))
    }
}
