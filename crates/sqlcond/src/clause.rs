//! Immutable clause produced by one builder call.

use crate::value::Value;
use std::sync::Arc;

/// A condition fragment with its aligned, already-flattened argument list.
///
/// The template contains exactly `args().len()` generic `?` tokens. Clauses are
/// shared through [`Arc`] between clones of a condition and are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause(Arc<ClauseInner>);

#[derive(Debug, PartialEq)]
struct ClauseInner {
    template: String,
    args: Vec<Value>,
}

impl Clause {
    pub(crate) fn new(template: String, args: Vec<Value>) -> Self {
        Clause(Arc::new(ClauseInner { template, args }))
    }

    /// Template with generic `?` tokens.
    pub fn template(&self) -> &str {
        &self.0.template
    }

    /// Flattened scalar arguments, in token order.
    pub fn args(&self) -> &[Value] {
        &self.0.args
    }

    /// Whether two clauses share the same allocation.
    pub fn ptr_eq(&self, other: &Clause) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
