//! Check command.

use super::open_input;
use clap::Args;
use recolor_core::verify;
use recolor_format::{parse_output, read_records};
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Constraint CSV the assignment was produced from
    #[arg(required = true)]
    pub graph: PathBuf,

    /// Solver output to check
    #[arg(required = true)]
    pub assignment: PathBuf,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let records = read_records(open_input(&args.graph)?)?;
    let Some(assignment) = parse_output(open_input(&args.assignment)?)? else {
        println!("No assignment to check: output reports the graph cannot be recolored");
        return Ok(());
    };

    tracing::info!(
        "Checking {} vertices against {} records",
        assignment.len(),
        records.len()
    );
    verify(&records, &assignment).map_err(|violation| anyhow::anyhow!("{violation}"))?;

    println!("OK");
    Ok(())
}
