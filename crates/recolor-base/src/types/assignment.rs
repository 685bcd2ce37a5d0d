//! Color assignments.

use super::{Color, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The final color of every vertex, in the order vertices were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    entries: Vec<(VertexId, Color)>,
}

impl Assignment {
    /// Creates an assignment from ordered `(vertex, color)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (VertexId, Color)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the pairs in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[(VertexId, Color)] {
        &self.entries
    }

    /// Looks up the color of a vertex.
    ///
    /// Linear scan; build [`Assignment::to_map`] for repeated lookups.
    pub fn get(&self, vertex: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(id, _)| id.as_str() == vertex)
            .map(|&(_, color)| color)
    }

    /// Builds a lookup table keyed by vertex.
    #[must_use]
    pub fn to_map(&self) -> HashMap<&str, Color> {
        self.entries
            .iter()
            .map(|(id, color)| (id.as_str(), *color))
            .collect()
    }

    /// Returns the number of assigned vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the assignment is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One `<vertex_id> -> <color>` line per vertex.
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, color) in &self.entries {
            writeln!(f, "{vertex} -> {color}")?;
        }
        Ok(())
    }
}
