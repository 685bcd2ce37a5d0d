//! Assignment text: `<vertex_id> -> <color>` lines, or a single
//! unsatisfiability message.

use recolor_base::{Assignment, Color, Error, Result, VertexId};
use std::io::{BufRead, BufReader, Read, Write};

/// The line written instead of an assignment when no recoloring exists.
pub const UNSATISFIABLE_MESSAGE: &str = "It is impossible to color this graph";

const ARROW: &str = " -> ";

/// Writes an assignment, or [`UNSATISFIABLE_MESSAGE`] for `None`.
pub fn write_output<W: Write>(mut writer: W, assignment: Option<&Assignment>) -> Result<()> {
    match assignment {
        Some(assignment) => write!(writer, "{assignment}")?,
        None => writeln!(writer, "{UNSATISFIABLE_MESSAGE}")?,
    }
    writer.flush()?;
    Ok(())
}

/// Parses solver output. Returns `None` for the unsatisfiability message.
pub fn parse_output<R: Read>(reader: R) -> Result<Option<Assignment>> {
    let mut entries = Vec::new();

    for (number, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == UNSATISFIABLE_MESSAGE {
            if !entries.is_empty() {
                return Err(Error::Serialization(format!(
                    "line {}: unsatisfiability message after assignment lines",
                    number + 1
                )));
            }
            return Ok(None);
        }

        let (vertex, color) = line.split_once(ARROW).ok_or_else(|| {
            Error::Serialization(format!("line {}: expected `<vertex> -> <color>`", number + 1))
        })?;
        let color: Color = color
            .parse()
            .map_err(|e| Error::Serialization(format!("line {}: {e}", number + 1)))?;
        entries.push((VertexId::from(vertex.trim()), color));
    }

    Ok(Some(Assignment::new(entries)))
}
