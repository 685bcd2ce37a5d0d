//! Vocabulary types for the recoloring problem.
//!
//! - [`Color`] → one of exactly three colors
//! - [`VertexId`] → opaque vertex identifier
//! - [`ConstraintRecord`] → one edge together with its endpoints' original colors
//! - [`Assignment`] → the final color of every vertex, in first-seen order

mod assignment;
mod color;
mod record;
mod vertex;

pub use assignment::Assignment;
pub use color::{Color, ParseColorError};
pub use record::ConstraintRecord;
pub use vertex::VertexId;
