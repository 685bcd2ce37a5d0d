//! Recolor CLI - recolor three-colored graphs from the command line.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recolor")]
#[command(author, version, about = "Three-color graph recoloring via 2-SAT", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor the graph described by a constraint CSV
    Solve(commands::solve::SolveArgs),
    /// Check an assignment against a constraint CSV
    Check(commands::check::CheckArgs),
    /// Generate a random satisfiable instance
    Generate(commands::generate::GenerateArgs),
    /// Generate, solve and check random instances repeatedly
    Stress(commands::stress::StressArgs),
    /// Solve every CSV file in a directory
    Batch(commands::batch::BatchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::load()?;
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Solve(args) => commands::solve::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Generate(args) => commands::generate::run(args, &config),
        Commands::Stress(args) => commands::stress::run(args, &config),
        Commands::Batch(args) => commands::batch::run(args, &config),
    }
}
