use crossbeam::channel::{Receiver, Sender, bounded};
use std::fmt;
use tracing::{debug, trace};

use crate::error::{BenchError, BenchResult};
use crate::lines::Line;
use crate::workload::Workload;

/// A line on its way through the job queue
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    pub line: &'a Line,
}

/// What a finished run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolStats {
    /// Number of execution units that took part
    pub workers: usize,
    /// Total jobs processed
    pub jobs: usize,
    /// Jobs processed by each worker, indexed by worker id
    pub per_worker: Vec<usize>,
}

/// Fixed-size pool of worker threads fed by a bounded job queue
pub struct WorkerPool {
    workers: usize,
}

/// Context for a worker thread to avoid too many function parameters
struct WorkerContext<'scope, 'env, W: ?Sized> {
    worker_id: usize,
    job_rx: Receiver<Job<'env>>,
    workload: &'scope W,
}

impl WorkerPool {
    /// Pool with `requested` workers; zero is floored to one.
    pub fn new(requested: usize) -> Self {
        Self {
            workers: requested.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Process every line exactly once across the pool.
    ///
    /// Lines are enqueued in index order and the queue is closed once the
    /// last one is in; workers drain it and exit on disconnection. Returns
    /// only after every worker has been joined. Completion order across
    /// lines is not specified.
    pub fn execute<W>(&self, lines: &[Line], workload: &W) -> BenchResult<PoolStats>
    where
        W: Workload + ?Sized,
    {
        // Capacity covers every line so the producer never blocks
        let (job_tx, job_rx): (Sender<Job<'_>>, Receiver<Job<'_>>) =
            bounded(lines.len().max(1));

        debug!(
            "Starting worker pool: {} workers, {} jobs",
            self.workers,
            lines.len()
        );

        let per_worker = crossbeam::thread::scope(|s| -> BenchResult<Vec<usize>> {
            let handles: Vec<_> = (0..self.workers)
                .map(|worker_id| {
                    let ctx = WorkerContext {
                        worker_id,
                        job_rx: job_rx.clone(),
                        workload,
                    };
                    s.spawn(move |_| Self::worker_thread(ctx))
                })
                .collect();

            // Workers hold their own clones
            drop(job_rx);

            for line in lines {
                job_tx
                    .send(Job { line })
                    .map_err(|_| BenchError::WorkerPanicked)?;
            }
            // Close the queue: this is the only end-of-work signal
            drop(job_tx);

            handles
                .into_iter()
                .map(|handle| handle.join().map_err(|_| BenchError::WorkerPanicked))
                .collect()
        })
        .map_err(|_| BenchError::WorkerPanicked)??;

        let jobs = per_worker.iter().sum();
        debug!("Worker pool finished: {} jobs across {} workers", jobs, self.workers);

        Ok(PoolStats {
            workers: self.workers,
            jobs,
            per_worker,
        })
    }

    fn worker_thread<W>(ctx: WorkerContext<'_, '_, W>) -> usize
    where
        W: Workload + ?Sized,
    {
        let mut processed = 0;
        while let Ok(job) = ctx.job_rx.recv() {
            ctx.workload.process(job.line);
            processed += 1;
        }
        trace!("worker-{} drained queue after {} jobs", ctx.worker_id, processed);
        processed
    }
}

/// Single-threaded baseline
pub struct SequentialExecutor;

impl SequentialExecutor {
    /// Process lines strictly in index order on the calling thread.
    pub fn execute<W>(lines: &[Line], workload: &W) -> PoolStats
    where
        W: Workload + ?Sized,
    {
        for line in lines {
            workload.process(line);
        }

        PoolStats {
            workers: 1,
            jobs: lines.len(),
            per_worker: vec![lines.len()],
        }
    }
}

/// Execution strategy enum for choosing between parallel and sequential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    Sequential,
    Parallel { workers: usize },
}

impl ExecutionStrategy {
    pub fn execute<W>(&self, lines: &[Line], workload: &W) -> BenchResult<PoolStats>
    where
        W: Workload + ?Sized,
    {
        match self {
            ExecutionStrategy::Sequential => Ok(SequentialExecutor::execute(lines, workload)),
            ExecutionStrategy::Parallel { workers } => {
                WorkerPool::new(*workers).execute(lines, workload)
            }
        }
    }

    /// Worker count to use when none is configured: one per logical CPU.
    pub fn available_workers() -> usize {
        num_cpus::get().max(1)
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStrategy::Sequential => write!(f, "sequential"),
            ExecutionStrategy::Parallel { workers } => {
                write!(f, "parallel ({} workers)", (*workers).max(1))
            }
        }
    }
}
