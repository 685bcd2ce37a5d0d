//! Independent check of an assignment against the constraint records.
//!
//! Shares nothing with the solving pipeline: it only reads records and the
//! produced vertex → color mapping.

use recolor_base::{Assignment, Color, ConstraintRecord, VertexId};
use std::collections::HashSet;
use thiserror::Error;

/// The first broken rule found by [`verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A vertex of the input has no color.
    #[error("vertex {0} is not assigned a color")]
    Unassigned(VertexId),

    /// The assignment names a vertex that does not occur in the input.
    #[error("vertex {0} does not occur in the input")]
    UnknownVertex(VertexId),

    /// The assignment lists a vertex more than once.
    #[error("vertex {0} is assigned more than once")]
    DuplicateVertex(VertexId),

    /// A vertex was assigned its original color.
    #[error("vertex {vertex} kept its original color {color} (record {record})")]
    KeptOriginal {
        vertex: VertexId,
        color: Color,
        record: ConstraintRecord,
    },

    /// Both endpoints of an edge got the same color.
    #[error("adjacent vertices {vertex1} and {vertex2} are both {color}")]
    SameColor {
        vertex1: VertexId,
        vertex2: VertexId,
        color: Color,
    },
}

/// Checks that every record's endpoints are recolored and differ.
pub fn verify(records: &[ConstraintRecord], assignment: &Assignment) -> Result<(), Violation> {
    let mut listed: HashSet<&str> = HashSet::with_capacity(assignment.len());
    for (id, _) in assignment.entries() {
        if !listed.insert(id.as_str()) {
            return Err(Violation::DuplicateVertex(id.clone()));
        }
    }

    let colors = assignment.to_map();
    let mut seen: HashSet<&str> = HashSet::new();

    for record in records {
        let color1 = lookup(&colors, &record.vertex1)?;
        let color2 = lookup(&colors, &record.vertex2)?;
        seen.insert(record.vertex1.as_str());
        seen.insert(record.vertex2.as_str());

        if color1 == record.color1 {
            return Err(Violation::KeptOriginal {
                vertex: record.vertex1.clone(),
                color: color1,
                record: record.clone(),
            });
        }
        if color2 == record.color2 {
            return Err(Violation::KeptOriginal {
                vertex: record.vertex2.clone(),
                color: color2,
                record: record.clone(),
            });
        }
        if color1 == color2 {
            return Err(Violation::SameColor {
                vertex1: record.vertex1.clone(),
                vertex2: record.vertex2.clone(),
                color: color1,
            });
        }
    }

    if let Some((extra, _)) = assignment
        .entries()
        .iter()
        .find(|(id, _)| !seen.contains(id.as_str()))
    {
        return Err(Violation::UnknownVertex(extra.clone()));
    }
    Ok(())
}

fn lookup(
    colors: &std::collections::HashMap<&str, Color>,
    vertex: &VertexId,
) -> Result<Color, Violation> {
    colors
        .get(vertex.as_str())
        .copied()
        .ok_or_else(|| Violation::Unassigned(vertex.clone()))
}
