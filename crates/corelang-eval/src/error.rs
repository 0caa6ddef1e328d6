//! Runtime error types for the Core evaluator.

use thiserror::Error;

/// Evaluation error. Every variant aborts the whole evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable reference with no binding in scope.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// A call to a name missing from the global function table.
    #[error("undefined function: {0}")]
    UndefinedFunction(String),

    /// Operator or application used on operands of the wrong shape.
    #[error("type error: {0}")]
    TypeError(String),

    /// `/` or `mod` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer result outside the machine integer range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(String),
}

impl EvalError {
    pub(crate) fn type_error(msg: impl Into<String>) -> Self {
        Self::TypeError(msg.into())
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
