//! Generate command.

use super::open_output;
use crate::config::CliConfig;
use clap::Args;
use recolor_format::{generate, write_output, write_records, GeneratorConfig};
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of vertices (config `max_vertices` if omitted)
    #[arg(short = 'n', long)]
    pub vertices: Option<usize>,

    /// Probability of each admissible edge
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output CSV (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the hidden valid recoloring to this file
    #[arg(long)]
    pub witness: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, config: &CliConfig) -> anyhow::Result<()> {
    let generator = GeneratorConfig {
        vertices: args.vertices.unwrap_or(config.max_vertices),
        edge_probability: args.probability.unwrap_or(config.edge_probability),
        seed: args.seed.unwrap_or_else(rand::random),
    };
    tracing::info!(
        "Generating {} vertices, p = {}, seed = {}",
        generator.vertices,
        generator.edge_probability,
        generator.seed
    );

    let instance = generate(&generator)?;
    write_records(open_output(args.output.as_deref())?, &instance.records)?;
    if let Some(path) = &args.witness {
        write_output(open_output(Some(path))?, Some(&instance.witness))?;
    }

    tracing::info!("Wrote {} records", instance.records.len());
    Ok(())
}
