//! Constraint records.

use super::{Color, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One edge of the input graph together with the original colors of its
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintRecord {
    pub vertex1: VertexId,
    pub vertex2: VertexId,
    pub color1: Color,
    pub color2: Color,
}

impl ConstraintRecord {
    /// Creates a record.
    pub fn new(
        vertex1: impl Into<VertexId>,
        vertex2: impl Into<VertexId>,
        color1: Color,
        color2: Color,
    ) -> Self {
        Self {
            vertex1: vertex1.into(),
            vertex2: vertex2.into(),
            color1,
            color2,
        }
    }

    /// Returns whether both endpoints name the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.vertex1 == self.vertex2
    }
}

impl fmt::Display for ConstraintRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.vertex1, self.vertex2, self.color1, self.color2
        )
    }
}
