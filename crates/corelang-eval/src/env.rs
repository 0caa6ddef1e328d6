//! Persistent variable environment for the Core evaluator.

use crate::error::{EvalError, EvalResult};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// One link in the binding chain.
struct Binding {
    name: String,
    value: Value,
    next: Option<Arc<Binding>>,
}

/// Immutable identifier → value mapping.
///
/// Extension allocates one link and shares the rest of the chain, so an
/// environment captured by a closure is never affected by later bindings.
/// Lookups walk from the newest binding outward, which gives shadowing.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Arc<Binding>>,
}

impl Environment {
    /// The environment with no bindings.
    pub fn empty() -> Self {
        Self { head: None }
    }

    /// Return a new environment where `name` maps to `value`.
    pub fn extend(&self, name: impl Into<String>, value: Value) -> Self {
        Self {
            head: Some(Arc::new(Binding {
                name: name.into(),
                value,
                next: self.head.clone(),
            })),
        }
    }

    /// Extend with each pair in order; later pairs shadow earlier ones.
    pub fn extend_all<I, S>(&self, bindings: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        bindings
            .into_iter()
            .fold(self.clone(), |env, (name, value)| env.extend(name, value))
    }

    /// Look up a variable, failing with `UnboundVariable`.
    pub fn lookup(&self, name: &str) -> EvalResult<&Value> {
        self.get(name)
            .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))
    }

    /// Look up a variable, searching from the newest binding outward.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.links()
            .find(|b| b.name == name)
            .map(|b| &b.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Visible identifiers, newest first, each reported once.
    pub fn names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for b in self.links() {
            if !seen.contains(&b.name.as_str()) {
                seen.push(&b.name);
            }
        }
        seen
    }

    fn links(&self) -> impl Iterator<Item = &Binding> {
        std::iter::successors(self.head.as_deref(), |b| b.next.as_deref())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may hold closures with their own environments; names keep
        // the output bounded.
        f.debug_set().entries(self.names()).finish()
    }
}

impl Drop for Environment {
    fn drop(&mut self) {
        // Unlink uniquely-owned tails iteratively so a long chain does not
        // recurse once per binding on drop.
        let mut next = self.head.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut binding) => next = binding.next.take(),
                Err(_) => break,
            }
        }
    }
}
