//! Command-line interface for linebench
//!
//! Parses arguments with clap, sets up logging, loads the layered
//! configuration and dispatches to the command implementations.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

use crate::config::BenchConfig;

/// linebench - sequential vs worker-pool throughput on a CPU-bound per-line workload
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Time the worker pool against the sequential baseline
    Compare(commands::compare::CompareArgs),
    /// Write a test input file
    Generate(commands::generate::GenerateArgs),
    /// Configuration management
    Config(commands::config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);

        let Some(command) = self.command else {
            // Show help when no command is provided
            Cli::command().print_help()?;
            return Ok(());
        };

        let config = BenchConfig::load_with_custom_config(self.config.as_deref())?;

        match command {
            Commands::Compare(args) => commands::compare::execute(args, &config, &output),
            Commands::Generate(args) => commands::generate::execute(args, &config, &output),
            Commands::Config(args) => commands::config::execute(args, &config, &output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Logs go to stderr so the summary line on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
