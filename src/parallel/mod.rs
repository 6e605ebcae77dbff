//! Execution strategies over a sequence of lines
//!
//! This module owns the job-distribution engine: a fixed-size worker pool
//! fed through a bounded crossbeam channel, and the sequential baseline it is
//! measured against.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐  Job(&Line)  ┌─────────────┐
//! │  Producer  │─────────────▶│  Job Queue  │──┬──▶ worker-0 ─┐
//! │ (caller)   │  in index    │  bounded(L) │  ├──▶ worker-1 ─┤ join
//! └────────────┘  order, then └─────────────┘  └──▶ worker-N ─┘──▶ PoolStats
//!                 drop(tx)
//! ```
//!
//! Workers exit when the queue is both closed and drained. Closing the queue
//! by dropping the last sender is the only completion signal; there are no
//! sentinel jobs.
//!
//! ## What This Module Does NOT Do:
//! - Collect per-line results (the workload's output is discarded)
//! - Preserve completion order under concurrency
//! - Size the pool from the workload
//!
//! # Example Usage
//!
//! ```rust
//! use linebench::lines::{Line, from_strings};
//! use linebench::parallel::{ExecutionStrategy, WorkerPool};
//!
//! let lines = from_strings(["a", "b", "c"]);
//! let workload = |_line: &Line| {};
//!
//! let stats = WorkerPool::new(2).execute(&lines, &workload).unwrap();
//! assert_eq!(stats.jobs, 3);
//!
//! let stats = ExecutionStrategy::Sequential.execute(&lines, &workload).unwrap();
//! assert_eq!(stats.jobs, 3);
//! ```

pub mod core;

pub use self::core::{ExecutionStrategy, Job, PoolStats, SequentialExecutor, WorkerPool};
