//! Opaque vertex identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// An opaque vertex identifier.
///
/// Identifiers are compared as text, so `"7"` and `"07"` are distinct vertices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    /// Creates a vertex identifier from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
