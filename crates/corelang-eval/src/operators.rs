//! Unary and binary operator semantics.
//!
//! Both operands are already evaluated when these run; `and`/`or` do not
//! short-circuit. Integer arithmetic is checked, so overflow and zero
//! divisors surface as errors instead of host traps.

use crate::error::{EvalError, EvalResult};
use crate::value::Value;
use corelang_types::{BinOp, UnaryOp};

/// Apply a unary operator to an evaluated operand.
pub fn apply_unary(op: UnaryOp, value: Value) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOp::Neg, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| EvalError::ArithmeticOverflow(format!("-({n})"))),
        (UnaryOp::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        (op, v) => Err(EvalError::type_error(format!(
            "cannot apply '{op}' to {}",
            v.type_name()
        ))),
    }
}

/// Apply a binary operator to two evaluated operands.
pub fn apply_binary(op: BinOp, left: Value, right: Value) -> EvalResult<Value> {
    match (op, &left, &right) {
        (_, Value::Integer(a), Value::Integer(b)) if op.is_arithmetic() => {
            eval_arith(op, *a, *b).map(Value::Integer)
        }
        (_, Value::Integer(a), Value::Integer(b)) if op.is_relational() => {
            Ok(Value::Boolean(eval_comparison(op, *a, *b)))
        }
        (BinOp::And, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a && *b)),
        (BinOp::Or, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a || *b)),
        (BinOp::Eq | BinOp::Ne, Value::Integer(_), Value::Integer(_))
        | (BinOp::Eq | BinOp::Ne, Value::Boolean(_), Value::Boolean(_)) => {
            let same = left == right;
            Ok(Value::Boolean(if op == BinOp::Eq { same } else { !same }))
        }
        _ => Err(EvalError::type_error(format!(
            "cannot apply '{op}' to {} and {}",
            left.type_name(),
            right.type_name()
        ))),
    }
}

fn eval_arith(op: BinOp, a: i64, b: i64) -> EvalResult<i64> {
    if matches!(op, BinOp::Div | BinOp::Mod) && b == 0 {
        return Err(EvalError::DivisionByZero);
    }
    let result = match op {
        BinOp::Add => a.checked_add(b),
        BinOp::Sub => a.checked_sub(b),
        BinOp::Mul => a.checked_mul(b),
        BinOp::Div => a.checked_div(b),
        // Truncated remainder always fits; MIN mod -1 is 0.
        BinOp::Mod => Some(a.wrapping_rem(b)),
        _ => unreachable!("'{op}' is not arithmetic"),
    };
    result.ok_or_else(|| EvalError::ArithmeticOverflow(format!("{a} {op} {b}")))
}

fn eval_comparison(op: BinOp, a: i64, b: i64) -> bool {
    match op {
        BinOp::Lt => a < b,
        BinOp::Le => a <= b,
        BinOp::Gt => a > b,
        BinOp::Ge => a >= b,
        _ => unreachable!("'{op}' is not relational"),
    }
}
