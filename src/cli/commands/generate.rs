//! `linebench generate`: write a test input file

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::BenchConfig;
use crate::fixture::write_test_file;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// File to write (default: bench.file)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Number of lines (default: fixture.lines)
    #[arg(short, long)]
    pub lines: Option<usize>,
}

pub fn execute(args: GenerateArgs, config: &BenchConfig, output: &Output) -> Result<()> {
    let path = args.file.unwrap_or_else(|| config.bench.file.clone());
    let lines = args.lines.unwrap_or(config.fixture.lines);

    write_test_file(&path, lines)
        .with_context(|| format!("Failed to generate {}", path.display()))?;

    output.success(&format!("Wrote {} lines to {}", lines, path.display()));
    Ok(())
}
