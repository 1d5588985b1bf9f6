//! Shared recursive traversal.
//!
//! All three generators walk the same shape: classify a value, dispatch on its
//! kind, recurse into children with path tracking. The walk lives here once
//! (classification, the pointer-style path, and the depth guard) and each
//! generator supplies the output side as a [`Visitor`].

use serde_json::{Map, Value};

use crate::error::Error;
use crate::kind::{ValueKind, classify};

/// Upper bound on structural nesting. JSON input is always acyclic, so this
/// exists purely to bound stack usage on adversarially deep documents.
pub const MAX_DEPTH: usize = 1000;

/// Per-kind callbacks. Visitors drive their own recursion through
/// [`Walk::descend`] + [`Walk::visit`], so each one keeps its distinct output
/// shape while the dispatch stays shared.
pub trait Visitor {
    type Output;

    fn on_scalar(
        &mut self,
        walk: &Walk,
        kind: ValueKind,
        value: &Value,
    ) -> Result<Self::Output, Error>;

    fn on_array(&mut self, walk: &Walk, items: &[Value]) -> Result<Self::Output, Error>;

    fn on_object(
        &mut self,
        walk: &Walk,
        entries: &Map<String, Value>,
    ) -> Result<Self::Output, Error>;
}

/// Cursor into the document: current depth plus a `#/...` path used in error
/// messages.
#[derive(Debug, Clone)]
pub struct Walk {
    depth: usize,
    path: String,
}

impl Walk {
    pub fn root() -> Self {
        Self { depth: 0, path: "#".to_string() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Step into a child slot, enforcing the depth guard.
    pub fn descend(&self, segment: &str) -> Result<Walk, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::DepthExceeded {
                limit: MAX_DEPTH,
                path: format!("{}/{segment}", self.path),
            });
        }
        Ok(Walk {
            depth: self.depth + 1,
            path: format!("{}/{segment}", self.path),
        })
    }

    /// Classify `value` and dispatch to the matching visitor callback.
    pub fn visit<V: Visitor>(&self, value: &Value, visitor: &mut V) -> Result<V::Output, Error> {
        match value {
            Value::Array(items) => visitor.on_array(self, items),
            Value::Object(entries) => visitor.on_object(self, entries),
            scalar => visitor.on_scalar(self, classify(scalar), scalar),
        }
    }
}
