//! # recolor-core
//!
//! Decides whether a three-colored graph can be recolored so that every vertex
//! changes color and adjacent vertices end up different.
//!
//! Each vertex keeps two candidate colors, so the problem is a 2-SAT instance:
//! - Implication graph over literals, two per vertex
//! - Iterative Kosaraju: finish order, then component labels on the transpose
//! - Assignment read off the component order
//!
//! # Example
//!
//! ```
//! use recolor_base::{Color, ConstraintRecord};
//! use recolor_core::{solve_records, SolveResult};
//!
//! let records = vec![ConstraintRecord::new("1", "2", Color::Red, Color::Red)];
//! match solve_records(records).unwrap() {
//!     SolveResult::Sat(assignment) => print!("{assignment}"),
//!     SolveResult::Unsat => println!("It is impossible to color this graph"),
//! }
//! ```

pub mod builder;
pub mod components;
pub mod decider;
pub mod finish_order;
pub mod literal_store;
pub mod solver;
pub mod verify;

pub use builder::ImplicationGraphBuilder;
pub use literal_store::{LiteralId, LiteralStore};
pub use solver::{solve_records, SolveResult, Solver, SolverConfig, SolverStats};
pub use verify::{verify, Violation};
