//! Tree-walking evaluation over the expression arena.

use tern_ir::{ExprArena, ExprId, ExprKind, ExprRange, FunctionTable, Name, Program, StringInterner};
use tern_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::environment::Environment;
use crate::errors::{undefined_function, undefined_variable, EvalResult};
use crate::operators::evaluate_binary;

/// Evaluator for one parsed program.
///
/// Borrows the program and interner; evaluation itself allocates only call
/// frames. All recursion (nested expressions and language-level calls)
/// funnels through [`eval`](Interpreter::eval), which grows the stack ahead
/// of deep descent, so recursive programs are bounded by memory rather than
/// the thread's stack size.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    functions: &'a FunctionTable,
    entry: ExprId,
    interner: &'a StringInterner,
}

impl<'a> Interpreter<'a> {
    pub fn new(program: &'a Program, interner: &'a StringInterner) -> Self {
        Interpreter {
            arena: &program.arena,
            functions: &program.functions,
            entry: program.entry,
            interner,
        }
    }

    /// Evaluate the program's entry expression in an empty frame.
    pub fn run(&self) -> EvalResult {
        debug!(
            nodes = self.arena.len(),
            functions = self.functions.len(),
            "run"
        );
        self.eval(self.entry, &Environment::new())
    }

    /// Evaluate one expression in the given frame.
    pub fn eval(&self, id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&self, id: ExprId, env: &Environment) -> EvalResult {
        match *self.arena.kind(id) {
            ExprKind::Int(value) => Ok(value),
            ExprKind::Ident(name) => match env.lookup(name) {
                Some(value) => Ok(value),
                // Unreachable through the parser, which scope-checks every
                // identifier; graceful failure for hand-built programs.
                None => Err(
                    undefined_variable(self.interner.lookup(name)).with_span(self.arena.span(id))
                ),
            },
            ExprKind::Binary { op, left, right } => {
                // Both operands evaluate before the operator applies, even
                // for comparisons.
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(left, right, op).map_err(|e| e.with_span(self.arena.span(id)))
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                // Nonzero selects `then`; the other branch never evaluates.
                let cond = self.eval(cond, env)?;
                self.eval(if cond == 0 { else_branch } else { then_branch }, env)
            }
            ExprKind::Call { callee, args } => self.eval_call(id, callee, args, env),
        }
    }

    fn eval_call(
        &self,
        id: ExprId,
        callee: Name,
        args: ExprRange,
        env: &Environment,
    ) -> EvalResult {
        let Some(def) = self.functions.get(callee) else {
            // Unreachable through the parser (call targets resolve during
            // the parse); graceful failure for hand-built programs.
            return Err(
                undefined_function(self.interner.lookup(callee)).with_span(self.arena.span(id))
            );
        };
        trace!(callee = self.interner.lookup(callee), "eval_call");

        // Arguments evaluate left to right in the caller's frame, then bind
        // positionally into a fresh frame for the body. The body sees only
        // its parameters.
        let arg_ids = self.arena.get_expr_list(args);
        let mut frame = Environment::with_capacity(arg_ids.len());
        for (&param, &arg) in def.params.iter().zip(arg_ids) {
            let value = self.eval(arg, env)?;
            frame.define(param, value);
        }
        self.eval(def.body, &frame)
    }
}
