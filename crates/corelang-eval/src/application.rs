//! Function application and arity resolution.
//!
//! A call never fails just because the argument count differs from the
//! parameter count:
//! - fewer arguments than parameters yields a closure over the rest (currying)
//! - more arguments than parameters applies the body's result to the rest
//!
//! Only calling a non-function is an error.

use crate::error::{EvalError, EvalResult};
use crate::evaluator::Evaluator;
use crate::value::{Closure, Value};

impl Evaluator {
    /// Apply a function value to already-evaluated arguments.
    #[tracing::instrument(level = "trace", skip_all, fields(args = args.len()))]
    pub fn apply(&self, callee: Value, args: Vec<Value>) -> EvalResult<Value> {
        let mut callee = callee;
        let mut args = args.into_iter();

        loop {
            let closure = match callee {
                Value::Closure(c) => c,
                other => {
                    return Err(EvalError::type_error(format!(
                        "attempt to call a non-function ({})",
                        other.type_name()
                    )));
                }
            };
            let Closure { params, body, env } = closure;

            let supplied = args.len();
            if supplied < params.len() {
                tracing::trace!(arity = params.len(), supplied, "partial application");
                let mut bound = params;
                let rest = bound.split_off(supplied);
                let env = env.extend_all(bound.into_iter().zip(args));
                return Ok(Value::Closure(Closure::new(rest, body, env)));
            }

            let env = env.extend_all(params.into_iter().zip(args.by_ref()));
            let result = self.eval_expr(&env, &body)?;
            if args.len() == 0 {
                return Ok(result);
            }

            tracing::trace!(remaining = args.len(), "applying result to extra arguments");
            if !matches!(result, Value::Closure(_)) {
                return Err(EvalError::type_error(format!(
                    "attempt to call a non-function ({}) with {} extra argument(s)",
                    result.type_name(),
                    args.len()
                )));
            }
            callee = result;
        }
    }
}
