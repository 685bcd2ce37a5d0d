//! Stress command: generate, solve and check random instances until one
//! fails or the iteration budget runs out.

use crate::config::CliConfig;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recolor_base::ConstraintRecord;
use recolor_core::{verify, SolveResult, Solver, SolverConfig};
use recolor_format::{generate, GeneratorConfig};
use std::time::{Duration, Instant};

#[derive(Args)]
pub struct StressArgs {
    /// Number of instances to try
    #[arg(short, long, default_value_t = 100)]
    pub iterations: usize,

    /// Largest vertex count to draw (config `max_vertices` if omitted)
    #[arg(long)]
    pub max_vertices: Option<usize>,

    /// Probability of each admissible edge
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// Base RNG seed (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Slowest solve seen.
#[derive(Debug, Default)]
struct Slowest {
    edges: usize,
    elapsed: Duration,
}

/// Solves `records`, timing graph construction together with the passes.
fn timed_solve(records: &[ConstraintRecord]) -> anyhow::Result<(SolveResult, Duration)> {
    let start = Instant::now();
    let mut solver = Solver::with_config(SolverConfig { verify: false });
    solver.add_records(records.iter().cloned())?;
    let result = solver.solve()?;
    Ok((result, start.elapsed()))
}

pub fn run(args: StressArgs, config: &CliConfig) -> anyhow::Result<()> {
    let max_vertices = args.max_vertices.unwrap_or(config.max_vertices).max(1);
    let edge_probability = args.probability.unwrap_or(config.edge_probability);
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(
        "Stress run: {} iterations, up to {} vertices, seed {}",
        args.iterations,
        max_vertices,
        seed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut slowest = Slowest::default();

    for iteration in 0..args.iterations {
        let generator = GeneratorConfig {
            vertices: rng.gen_range(1..=max_vertices),
            edge_probability,
            seed: rng.gen(),
        };
        let instance = generate(&generator)?;

        let (result, elapsed) = timed_solve(&instance.records)?;

        if elapsed > slowest.elapsed {
            slowest = Slowest {
                edges: instance.records.len(),
                elapsed,
            };
        }

        match result {
            SolveResult::Unsat => anyhow::bail!(
                "iteration {iteration}: satisfiable instance reported unsatisfiable \
                 ({} vertices, seed {})",
                generator.vertices,
                generator.seed
            ),
            SolveResult::Sat(assignment) => {
                verify(&instance.records, &assignment).map_err(|violation| {
                    anyhow::anyhow!(
                        "iteration {iteration}: {violation} ({} vertices, seed {})",
                        generator.vertices,
                        generator.seed
                    )
                })?;
            }
        }
        tracing::debug!(iteration, edges = instance.records.len(), ?elapsed, "Instance passed");
    }

    println!("{} -> {:.6}", slowest.edges, slowest.elapsed.as_secs_f64());
    println!("{}", args.iterations);
    Ok(())
}
