//! `linebench compare`: time the worker pool against the sequential baseline

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::BenchConfig;
use crate::fixture::write_test_file;
use crate::report::{BenchContext, Comparison, TimingReporter, parse_worker_count};
use crate::workload::HashChainWorkload;

#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// Worker count for the pool (default: bench.workers, 0 there means one per CPU)
    #[arg(short, long, value_name = "COUNT", value_parser = parse_worker_count)]
    pub workers: Option<usize>,

    /// Input file (default: bench.file)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write a fresh test file before measuring
    #[arg(long)]
    pub generate: bool,

    /// Lines to write with --generate (default: fixture.lines)
    #[arg(long, requires = "generate")]
    pub lines: Option<usize>,

    /// SHA-256 rounds per line (default: workload.hash_rounds)
    #[arg(long)]
    pub hash_rounds: Option<usize>,

    /// Float accumulation steps per line (default: workload.float_iterations)
    #[arg(long)]
    pub float_iterations: Option<usize>,
}

pub fn execute(args: CompareArgs, config: &BenchConfig, output: &Output) -> Result<()> {
    // --workers text was already validated by clap, before config was loaded
    let workers = args.workers.unwrap_or_else(|| config.effective_workers());

    let path = args.file.unwrap_or_else(|| config.bench.file.clone());

    if args.generate {
        let lines = args.lines.unwrap_or(config.fixture.lines);
        write_test_file(&path, lines)
            .with_context(|| format!("Failed to generate {}", path.display()))?;
        output.info(&format!("Generated {} lines in {}", lines, path.display()));
    }

    let workload = HashChainWorkload::new(
        args.hash_rounds.unwrap_or(config.workload.hash_rounds),
        args.float_iterations
            .unwrap_or(config.workload.float_iterations),
    );

    output.verbose(&format!(
        "Comparing {} workers against sequential on {}",
        workers.max(1),
        path.display()
    ));

    let ctx = BenchContext::new(&path, workers, workload);
    let comparison = TimingReporter::run(&ctx)
        .with_context(|| format!("Failed to measure {}", path.display()))?;

    print_breakdown(&comparison, &workload, output);
    println!("{comparison}");

    Ok(())
}

fn print_breakdown(comparison: &Comparison, workload: &HashChainWorkload, output: &Output) {
    output.header("Run details");
    output.key_value("File", &comparison.path.display().to_string());
    output.key_value("Lines", &comparison.lines.to_string());
    output.key_value("Workers", &comparison.workers().to_string());
    output.key_value("Hash rounds", &workload.hash_rounds.to_string());
    output.key_value("Float iterations", &workload.float_iterations.to_string());
    output.key_value(
        "Async",
        &format!("{:.4}s", comparison.async_sample.seconds()),
    );
    output.key_value("Sync", &format!("{:.4}s", comparison.sync_sample.seconds()));
    if comparison.speedup.guarded {
        output.key_value("Speedup", "async run below 1ms, pinned to 1.00x");
    }
}
