//! Timing reporter
//!
//! Loads the input once, times a worker-pool run and a sequential run over the
//! same lines, and folds both into a [`Comparison`] whose `Display` output is
//! the one-line summary:
//!
//! ```text
//! Async: 0.4123s | Sync: 1.5880s | Speedup: 3.85x
//! ```
//!
//! Failures are propagated as [`BenchError`]; a run that could not be
//! measured never shows up as a near-zero duration.

pub mod timing;

pub use timing::{MIN_MEASURABLE, Speedup, TimingSample};

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{BenchError, BenchResult};
use crate::lines::load_lines;
use crate::parallel::ExecutionStrategy;
use crate::workload::{HashChainWorkload, Workload};

/// Everything one comparison run needs, passed explicitly
#[derive(Debug, Clone)]
pub struct BenchContext<W = HashChainWorkload> {
    /// Input file, one job per line
    pub path: PathBuf,
    /// Requested pool size; zero is floored to one by the pool
    pub workers: usize,
    pub workload: W,
}

impl<W: Workload> BenchContext<W> {
    pub fn new(path: impl Into<PathBuf>, workers: usize, workload: W) -> Self {
        Self {
            path: path.into(),
            workers,
            workload,
        }
    }
}

/// Outcome of timing both execution modes over one input
#[derive(Debug, Clone)]
pub struct Comparison {
    pub path: PathBuf,
    pub lines: usize,
    pub async_sample: TimingSample,
    pub sync_sample: TimingSample,
    pub speedup: Speedup,
}

impl Comparison {
    /// Workers used by the async run
    pub fn workers(&self) -> usize {
        match self.async_sample.mode {
            ExecutionStrategy::Parallel { workers } => workers.max(1),
            ExecutionStrategy::Sequential => 1,
        }
    }

    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Async: {:.4}s | Sync: {:.4}s | Speedup: {}",
            self.async_sample.seconds(),
            self.sync_sample.seconds(),
            self.speedup
        )
    }
}

/// Runs both modes and measures them
pub struct TimingReporter;

impl TimingReporter {
    pub fn run<W: Workload>(ctx: &BenchContext<W>) -> BenchResult<Comparison> {
        let lines = load_lines(&ctx.path)?;
        info!("Loaded {} lines from {}", lines.len(), ctx.path.display());

        let parallel = ExecutionStrategy::Parallel {
            workers: ctx.workers,
        };
        info!("Timing {} run", parallel);
        let (async_sample, stats) =
            TimingSample::measure(parallel, || parallel.execute(&lines, &ctx.workload))?;
        info!(
            "Async run: {} jobs on {} workers in {:.4}s",
            stats.jobs,
            stats.workers,
            async_sample.seconds()
        );

        let sequential = ExecutionStrategy::Sequential;
        info!("Timing {} run", sequential);
        let (sync_sample, stats) =
            TimingSample::measure(sequential, || sequential.execute(&lines, &ctx.workload))?;
        info!(
            "Sync run: {} jobs in {:.4}s",
            stats.jobs,
            sync_sample.seconds()
        );

        let speedup = Speedup::between(sync_sample.elapsed, async_sample.elapsed);
        if speedup.guarded {
            warn!(
                "Async run took {:?}, below the {:?} floor; reporting speedup as 1.00x",
                async_sample.elapsed, MIN_MEASURABLE
            );
        }

        Ok(Comparison {
            path: ctx.path.clone(),
            lines: lines.len(),
            async_sample,
            sync_sample,
            speedup,
        })
    }
}

/// Turn worker-count text into a count.
///
/// Surrounding whitespace is ignored. Non-numeric and negative values are
/// [`BenchError::InvalidConfiguration`]; zero is accepted and floored to one
/// worker by the pool.
pub fn parse_worker_count(text: &str) -> BenchResult<usize> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|e: std::num::ParseIntError| BenchError::InvalidConfiguration {
            value: text.to_owned(),
            reason: e.to_string(),
        })?;

    usize::try_from(value).map_err(|_| BenchError::InvalidConfiguration {
        value: text.to_owned(),
        reason: "worker count must be non-negative".to_owned(),
    })
}

/// Entry point for callers that hold the worker count as text.
///
/// The count is validated before the input file is opened.
pub fn run_comparison<W: Workload>(
    workers_text: &str,
    path: &Path,
    workload: W,
) -> BenchResult<Comparison> {
    let workers = parse_worker_count(workers_text)?;
    TimingReporter::run(&BenchContext::new(path, workers, workload))
}
