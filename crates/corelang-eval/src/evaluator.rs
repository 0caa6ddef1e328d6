//! Core expression evaluator.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use crate::operators::{apply_binary, apply_unary};
use crate::value::{Closure, Value};
use corelang_types::ast::*;
use std::collections::BTreeMap;

/// The core evaluator — walks AST nodes and produces Values.
///
/// Evaluation recurses once per nested expression and once per call, with no
/// depth limit of its own: a deep enough tree or a non-terminating program
/// exhausts the host stack rather than raising an `EvalError`.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    /// Global function table. `None` outside program mode.
    functions: Option<BTreeMap<String, Closure>>,
}

impl Evaluator {
    /// Create an evaluator for standalone expressions.
    pub fn new() -> Self {
        Self { functions: None }
    }

    /// Create an evaluator whose function table holds `program`'s definitions.
    ///
    /// Each definition closes over the empty environment; names resolve
    /// through the table at call time, so definitions may be mutually
    /// recursive. A later definition replaces an earlier one of the same name.
    pub fn with_program(program: &Program) -> Self {
        let functions = program
            .functions
            .iter()
            .map(|def| {
                let closure =
                    Closure::new(def.params.clone(), def.body.clone(), Environment::empty());
                (def.name.clone(), closure)
            })
            .collect();
        Self {
            functions: Some(functions),
        }
    }

    /// Look up a function in the global table.
    pub fn function(&self, name: &str) -> Option<&Closure> {
        self.functions.as_ref()?.get(name)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expression evaluation
    // ══════════════════════════════════════════════════════════════════════

    /// Evaluate an expression to a Value in `env`.
    pub fn eval_expr(&self, env: &Environment, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Var(name) => self.eval_var(env, name),
            Expr::Int(n) => Ok(Value::Integer(*n)),
            Expr::Bool(b) => Ok(Value::Boolean(*b)),

            Expr::Unary { op, operand } => {
                let v = self.eval_expr(env, operand)?;
                apply_unary(*op, v)
            }
            Expr::Binary { op, left, right } => {
                let lv = self.eval_expr(env, left)?;
                let rv = self.eval_expr(env, right)?;
                apply_binary(*op, lv, rv)
            }

            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => self.eval_if(env, condition, then_branch, else_branch),
            Expr::Let { name, value, body } => {
                let v = self.eval_expr(env, value)?;
                self.eval_expr(&env.extend(name.as_str(), v), body)
            }

            Expr::Fun { params, body } => {
                tracing::trace!(arity = params.len(), "closure created");
                Ok(Value::Closure(Closure::new(
                    params.clone(),
                    body.clone(),
                    env.clone(),
                )))
            }
            Expr::Call { callee, args } => self.eval_call(env, callee, args),
        }
    }

    fn eval_var(&self, env: &Environment, name: &str) -> EvalResult<Value> {
        if let Some(v) = env.get(name) {
            return Ok(v.clone());
        }
        self.function(name)
            .map(|f| Value::Closure(f.clone()))
            .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))
    }

    fn eval_if(
        &self,
        env: &Environment,
        condition: &Expr,
        then_branch: &Expr,
        else_branch: &Expr,
    ) -> EvalResult<Value> {
        let cond = self.eval_expr(env, condition)?;
        match cond.as_boolean() {
            Some(true) => self.eval_expr(env, then_branch),
            Some(false) => self.eval_expr(env, else_branch),
            None => Err(EvalError::type_error(format!(
                "if condition must be bool, got {}",
                cond.type_name()
            ))),
        }
    }

    /// Evaluate `callee(args)`: callee first, then arguments left to right.
    fn eval_call(&self, env: &Environment, callee: &Expr, args: &[Expr]) -> EvalResult<Value> {
        let f = match callee {
            Expr::Var(name) => self.eval_callee_name(env, name)?,
            _ => self.eval_expr(env, callee)?,
        };
        let mut arg_vals = Vec::with_capacity(args.len());
        for arg in args {
            arg_vals.push(self.eval_expr(env, arg)?);
        }
        self.apply(f, arg_vals)
    }

    /// Resolve a named callee: lexical scope, then the function table.
    fn eval_callee_name(&self, env: &Environment, name: &str) -> EvalResult<Value> {
        let in_table_mode = self.functions.is_some();
        if in_table_mode && !env.contains(name) && self.function(name).is_none() {
            return Err(EvalError::UndefinedFunction(name.to_string()));
        }
        self.eval_var(env, name)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Entry points
// ══════════════════════════════════════════════════════════════════════════════

/// Evaluate a standalone expression in the empty environment.
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    evaluate_in(&Environment::empty(), expr)
}

/// Evaluate a standalone expression in `env`.
pub fn evaluate_in(env: &Environment, expr: &Expr) -> EvalResult<Value> {
    Evaluator::new().eval_expr(env, expr)
}

/// Evaluate a program's main expression with its function table installed.
#[tracing::instrument(level = "trace", skip_all, fields(functions = program.functions.len()))]
pub fn evaluate_program(program: &Program) -> EvalResult<Value> {
    Evaluator::with_program(program).eval_expr(&Environment::empty(), &program.main)
}
