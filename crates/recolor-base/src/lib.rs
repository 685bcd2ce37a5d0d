//! # recolor-base
//!
//! Core types shared by every Recolor crate.
//!
//! - **Colors**: the closed three-color vocabulary
//! - **Records**: constraint records `(vertex1, vertex2, color1, color2)`
//! - **Assignments**: the vertex → color mapping a solve produces
//! - **Error Types**: unified error handling across the workspace

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Assignment, Color, ConstraintRecord, VertexId};
