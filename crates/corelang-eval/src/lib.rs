//! Core tree-walking evaluator.
//!
//! Evaluates Core expressions with strict, call-by-value semantics over a
//! persistent environment. Functions are closures with lexical scope; calls
//! with too few arguments curry and calls with too many chain onto the
//! result.

mod application;
pub mod env;
pub mod error;
pub mod evaluator;
pub mod operators;
pub mod value;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, evaluate_in, evaluate_program, Evaluator};
pub use operators::{apply_binary, apply_unary};
pub use value::{Closure, Value};
