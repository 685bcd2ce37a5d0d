//! # recolor-format
//!
//! Reading and writing the data a solve consumes and produces.
//!
//! Supports:
//! - **Constraint CSV**: `vertex1,vertex2,color1,color2` rows, header optional
//! - **Assignment text**: one `<vertex_id> -> <color>` line per vertex
//! - **Generator**: random instances with a known valid recoloring

pub mod assignment;
pub mod csv_records;
pub mod generator;

pub use assignment::{parse_output, write_output, UNSATISFIABLE_MESSAGE};
pub use csv_records::{read_records, write_records, RecordReader, HEADER};
pub use generator::{generate, GeneratedInstance, GeneratorConfig};
