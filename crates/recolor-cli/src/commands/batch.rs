//! Batch command: solve every CSV file in a directory.

use super::solve::solve_path;
use crate::config::CliConfig;
use clap::Args;
use rayon::prelude::*;
use recolor_core::SolveResult;
use recolor_format::write_output;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input directory containing constraint CSV files
    #[arg(long)]
    pub input_dir: PathBuf,

    /// Output directory for results
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Number of parallel workers (0 = auto, config `workers` if omitted)
    #[arg(long)]
    pub workers: Option<usize>,
}

#[derive(Debug, Serialize)]
struct BatchResult {
    file: String,
    status: String,
    time_ms: u128,
    records: u64,
    vertices: usize,
    implications: usize,
    components: u32,
}

pub fn run(args: BatchArgs, config: &CliConfig) -> anyhow::Result<()> {
    tracing::info!("Starting batch processing from {:?}", args.input_dir);

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir)?;
    }

    let files = collect_inputs(&args.input_dir)?;
    tracing::info!("Found {} files to process", files.len());

    let workers = args.workers.or(config.workers).unwrap_or(0);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;

    let failures = pool.install(|| {
        files
            .par_iter()
            .filter(|file_path| {
                match process_file(file_path, &args.input_dir, &args.output_dir) {
                    Ok(()) => false,
                    Err(e) => {
                        tracing::error!("Failed to process {:?}: {:#}", file_path, e);
                        true
                    }
                }
            })
            .count()
    });

    tracing::info!("Batch processing complete");
    if failures > 0 {
        anyhow::bail!("{failures} of {} files failed", files.len());
    }
    Ok(())
}

fn collect_inputs(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path.to_owned());
        }
    }
    Ok(files)
}

/// Output path for `input` with the given extension, mirroring its location
/// below `input_dir` so equal file names in different subdirectories do not
/// collide.
fn output_path(input: &Path, input_dir: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let relative = match input.strip_prefix(input_dir) {
        Ok(relative) => relative.to_owned(),
        Err(_) => PathBuf::from(input.file_name().unwrap_or_default()),
    };
    output_dir.join(relative).with_extension(extension)
}

fn process_file(path: &Path, input_dir: &Path, output_dir: &Path) -> anyhow::Result<()> {
    let start = Instant::now();
    let relative = path
        .strip_prefix(input_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();

    tracing::info!("Processing {}", relative);

    let (result, stats) = solve_path(path, false)?;
    let duration = start.elapsed();

    let status_str = match result {
        SolveResult::Sat(_) => "SAT",
        SolveResult::Unsat => "UNSAT",
    };

    let assignment_file = output_path(path, input_dir, output_dir, "txt");
    if let Some(parent) = assignment_file.parent() {
        fs::create_dir_all(parent)?;
    }
    write_output(fs::File::create(&assignment_file)?, result.assignment())?;

    let batch_result = BatchResult {
        file: relative.clone(),
        status: status_str.to_string(),
        time_ms: duration.as_millis(),
        records: stats.records,
        vertices: stats.vertices,
        implications: stats.implications,
        components: stats.components,
    };
    let result_file = output_path(path, input_dir, output_dir, "json");
    let f = fs::File::create(result_file)?;
    serde_json::to_writer_pretty(f, &batch_result)?;

    tracing::info!(
        "Finished {} [{}] in {}ms",
        relative,
        status_str,
        duration.as_millis()
    );
    Ok(())
}
