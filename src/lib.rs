//! # linebench
//!
//! Measures how much a fixed pool of worker threads speeds up a CPU-bound,
//! per-line transformation compared with running it sequentially.
//!
//! ## Pipeline
//!
//! - [`lines`]: load an ordered sequence of lines from a file
//! - [`workload`]: the deterministic per-line CPU cost (uppercase, SHA-256 chain, float loop)
//! - [`parallel`]: the sequential baseline and the channel-fed worker pool
//! - [`report`]: time both modes and derive the speedup
//!
//! ## Quick Start
//!
//! ```bash
//! linebench generate --lines 1000
//! linebench compare --workers 4
//! # Async: 0.4123s | Sync: 1.5880s | Speedup: 3.85x
//! ```
//!
//! ## Library use
//!
//! ```rust,no_run
//! use linebench::report::run_comparison;
//! use linebench::workload::HashChainWorkload;
//! use std::path::Path;
//!
//! let comparison = run_comparison("4", Path::new("test.txt"), HashChainWorkload::default())?;
//! println!("{comparison}");
//! # Ok::<(), linebench::BenchError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fixture;
pub mod lines;
pub mod parallel;
pub mod report;
pub mod workload;

pub use cli::{Cli, Output};
pub use config::BenchConfig;
pub use error::{BenchError, BenchResult};

