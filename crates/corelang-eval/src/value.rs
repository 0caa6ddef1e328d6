//! Runtime values.

use crate::env::Environment;
use corelang_types::Expr;
use std::fmt;
use std::sync::Arc;

/// A value produced by evaluation.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Closure(Closure),
}

/// A function value: parameters, body, and the environment captured where
/// the function literal was evaluated.
#[derive(Debug, Clone)]
pub struct Closure {
    pub params: Vec<String>,
    pub body: Arc<Expr>,
    pub env: Environment,
}

impl Closure {
    pub fn new(params: Vec<String>, body: Arc<Expr>, env: Environment) -> Self {
        Self { params, body, env }
    }

    /// Number of parameters still to be supplied.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Value {
    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Boolean(_) => "bool",
            Self::Closure(_) => "function",
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&Closure> {
        match self {
            Self::Closure(c) => Some(c),
            _ => None,
        }
    }
}

/// Integers and booleans compare structurally. Closures are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Closure(c) => write!(f, "<fun/{}>", c.arity()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Closure> for Value {
    fn from(c: Closure) -> Self {
        Self::Closure(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Value {
        Value::Closure(Closure::new(
            vec!["x".into()],
            Arc::new(Expr::var("x")),
            Environment::empty(),
        ))
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(identity().to_string(), "<fun/1>");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(1).type_name(), "int");
        assert_eq!(Value::from(false).type_name(), "bool");
        assert_eq!(identity().type_name(), "function");
    }

    #[test]
    fn test_equality_by_variant() {
        assert_eq!(Value::Integer(3), Value::Integer(3));
        assert_ne!(Value::Integer(1), Value::Boolean(true));
        let f = identity();
        assert_ne!(f, f.clone());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Integer(7).as_boolean(), None);
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(identity().as_closure().map(Closure::arity), Some(1));
    }
}
