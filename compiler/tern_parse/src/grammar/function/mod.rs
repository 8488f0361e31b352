//! Function definition grammar: `name(param,...)={body}`.

use tern_diagnostic::ErrorCode;
use tern_ir::{ArityTable, FunctionDef, Name, ScopeSet};
use tracing::debug;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one definition line.
    ///
    /// The definition's arity is recorded in `arities` before its body
    /// parses. Visibility therefore follows program order: a body may call
    /// its own function (recursion) and any earlier definition, but never a
    /// later one.
    pub fn parse_function(&mut self, arities: &mut ArityTable) -> Result<FunctionDef, ParseError> {
        let name = self.parse_identifier()?;
        if arities.contains(name) {
            return Err(self.err(
                ErrorCode::E2003,
                format!(
                    "duplicate function definition `{}`",
                    self.interner.lookup(name)
                ),
            ));
        }
        debug!(name = self.interner.lookup(name), "parse_function");

        self.expect(b'(')?;
        // The first parameter is unconditional; the grammar has no
        // zero-parameter definitions.
        let mut params = vec![self.parse_parameter(&[])?];
        while self.current() == b',' {
            self.advance();
            let param = self.parse_parameter(&params)?;
            params.push(param);
        }
        self.expect(b')')?;
        self.expect(b'=')?;
        self.expect(b'{')?;

        let arity = u16::try_from(params.len())
            .unwrap_or_else(|_| panic!("parameter list too long for u16 arity"));
        arities.insert(name, arity);

        let scope = ScopeSet::from_params(&params);
        let body = self.parse_expression(&scope, arities)?;

        self.expect(b'}')?;
        self.expect_eol()?;

        Ok(FunctionDef { name, params, body })
    }

    /// Scan one parameter name and reject a repeat of one already `seen`.
    fn parse_parameter(&mut self, seen: &[Name]) -> Result<Name, ParseError> {
        let param = self.parse_identifier()?;
        if seen.contains(&param) {
            return Err(self.err(
                ErrorCode::E2004,
                format!("duplicate parameter `{}`", self.interner.lookup(param)),
            ));
        }
        Ok(param)
    }
}
