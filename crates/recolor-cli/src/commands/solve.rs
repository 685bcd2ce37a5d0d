//! Solve command.

use super::{open_input, open_output};
use clap::Args;
use recolor_core::{SolveResult, Solver, SolverConfig, SolverStats};
use recolor_format::{write_output, RecordReader};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Args)]
pub struct SolveArgs {
    /// Constraint CSV (`-` for stdin)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file for the assignment (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Re-check the assignment against every record before writing it
    #[arg(long)]
    pub verify: bool,
}

/// Streams records from `reader` into a solver and solves them.
pub(crate) fn solve_reader<R: Read>(
    reader: R,
    verify: bool,
) -> recolor_base::Result<(SolveResult, SolverStats)> {
    let mut solver = Solver::with_config(SolverConfig {
        verify: verify || SolverConfig::default().verify,
    });
    for record in RecordReader::new(reader) {
        solver.add_record(record?)?;
    }
    solver.solve_with_stats()
}

pub(crate) fn solve_path(path: &Path, verify: bool) -> anyhow::Result<(SolveResult, SolverStats)> {
    let reader = open_input(path)?;
    Ok(solve_reader(reader, verify)?)
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    tracing::info!("Loading records from {:?}", args.input);

    let start = Instant::now();
    let (result, stats) = solve_path(&args.input, args.verify)?;
    let elapsed = start.elapsed();

    tracing::info!(
        "Graph: {} records, {} vertices, {} implications, {} components",
        stats.records,
        stats.vertices,
        stats.implications,
        stats.components
    );
    match &result {
        SolveResult::Sat(assignment) => tracing::info!("Recolored {} vertices", assignment.len()),
        SolveResult::Unsat => tracing::info!("No valid recoloring"),
    }

    let out = open_output(args.output.as_deref())?;
    write_output(out, result.assignment())?;

    tracing::info!("Solved in {:?}", elapsed);
    Ok(())
}
