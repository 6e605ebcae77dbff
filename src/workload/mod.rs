//! Per-line CPU workload
//!
//! Executors only see the [`Workload`] trait, so the expensive hash chain can
//! be swapped for a counting or recording stand-in in tests without touching
//! scheduling code.
//!
//! # Example
//!
//! ```rust
//! use linebench::lines::Line;
//! use linebench::workload::{HashChainWorkload, Workload};
//!
//! let workload = HashChainWorkload::new(10, 1_000);
//! workload.process(&Line::new(0, "hello"));
//! ```

pub mod hash_chain;

pub use hash_chain::{
    DEFAULT_FLOAT_ITERATIONS, DEFAULT_HASH_ROUNDS, HashChainWorkload, WorkloadOutput,
    float_accumulate, hash_chain_with, sha256_hex,
};

use crate::lines::Line;

/// A deterministic transformation applied to one line.
///
/// Implementations must not touch shared mutable state: the worker pool calls
/// `process` from several threads at once with no locking around it.
pub trait Workload: Send + Sync {
    fn process(&self, line: &Line);
}

impl<F> Workload for F
where
    F: Fn(&Line) + Send + Sync,
{
    fn process(&self, line: &Line) {
        self(line)
    }
}
