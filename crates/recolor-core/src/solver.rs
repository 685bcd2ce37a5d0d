//! Recoloring solver: builds the implication graph, runs both Kosaraju passes
//! and decides every vertex.

use crate::builder::ImplicationGraphBuilder;
use crate::components::label_components;
use crate::decider::decide;
use crate::finish_order::assign_finish_order;
use crate::verify::verify;
use recolor_base::{Assignment, ConstraintRecord, Error, Result};
use std::time::{Duration, Instant};

/// The outcome of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// Every vertex recolored, in first-seen order.
    Sat(Assignment),
    /// No valid recoloring exists.
    Unsat,
}

impl SolveResult {
    /// Returns whether a recoloring was found.
    #[must_use]
    pub fn is_sat(&self) -> bool {
        matches!(self, Self::Sat(_))
    }

    /// Returns the assignment, if any.
    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Sat(assignment) => Some(assignment),
            Self::Unsat => None,
        }
    }
}

/// Configuration for the solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Re-check a produced assignment against every record before returning it.
    pub verify: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            verify: cfg!(debug_assertions),
        }
    }
}

/// Solver statistics.
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    /// Number of records consumed.
    pub records: u64,
    /// Number of distinct vertices.
    pub vertices: usize,
    /// Number of literals (two per vertex).
    pub literals: usize,
    /// Number of implication edges.
    pub implications: usize,
    /// Number of strongly connected components.
    pub components: u32,
    /// Time spent in the two passes and the decision.
    pub elapsed: Duration,
}

/// Collects constraint records, then solves them once.
#[derive(Debug, Default)]
pub struct Solver {
    builder: ImplicationGraphBuilder,
    /// Kept for verification only.
    records: Vec<ConstraintRecord>,
    config: SolverConfig,
    /// First rejected record. The store may hold half of it, so the solver
    /// refuses all further work.
    failure: Option<Error>,
}

impl Solver {
    /// Creates a new solver with default configuration.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Creates a new solver with custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            builder: ImplicationGraphBuilder::new(),
            records: Vec::new(),
            config,
            failure: None,
        }
    }

    /// Adds a constraint record.
    ///
    /// After a failure every later `add_record` and `solve` returns the same
    /// error.
    pub fn add_record(&mut self, record: ConstraintRecord) -> Result<()> {
        if let Some(failure) = &self.failure {
            return Err(replay(failure));
        }
        if let Err(err) = self.builder.add_record(&record) {
            self.failure = Some(replay(&err));
            return Err(err);
        }
        if self.config.verify {
            self.records.push(record);
        }
        Ok(())
    }

    /// Adds every record of a stream, stopping at the first failure.
    pub fn add_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = ConstraintRecord>,
    {
        for record in records {
            self.add_record(record)?;
        }
        Ok(())
    }

    /// Solves the collected records.
    pub fn solve(self) -> Result<SolveResult> {
        self.solve_with_stats().map(|(result, _)| result)
    }

    /// Solves the collected records and reports statistics.
    pub fn solve_with_stats(self) -> Result<(SolveResult, SolverStats)> {
        if let Some(failure) = self.failure {
            return Err(failure);
        }
        let records = self.builder.record_count();
        let mut store = self.builder.finish();

        let start = Instant::now();
        let order = assign_finish_order(&mut store);
        let components = label_components(&mut store, &order);
        let result = decide(&store);
        let elapsed = start.elapsed();

        let stats = SolverStats {
            records,
            vertices: store.vertex_count(),
            literals: store.literal_count(),
            implications: store.implication_count(),
            components,
            elapsed,
        };
        tracing::debug!(
            components,
            sat = result.is_sat(),
            elapsed_us = elapsed.as_micros() as u64,
            "Solve finished"
        );

        if let SolveResult::Sat(assignment) = &result {
            if self.config.verify {
                verify(&self.records, assignment)
                    .map_err(|violation| Error::Internal(violation.to_string()))?;
            }
        }

        Ok((result, stats))
    }
}

fn replay(err: &Error) -> Error {
    match err {
        Error::MalformedRecord {
            position,
            record,
            reason,
        } => Error::MalformedRecord {
            position: *position,
            record: record.clone(),
            reason: reason.clone(),
        },
        Error::InvalidArgument(msg) => Error::InvalidArgument(msg.clone()),
        other => Error::Internal(other.to_string()),
    }
}

/// Solves a stream of records with the default configuration.
pub fn solve_records<I>(records: I) -> Result<SolveResult>
where
    I: IntoIterator<Item = ConstraintRecord>,
{
    let mut solver = Solver::new();
    solver.add_records(records)?;
    solver.solve()
}
