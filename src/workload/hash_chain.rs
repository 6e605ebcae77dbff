use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::hint::black_box;

use super::Workload;
use crate::lines::Line;

/// SHA-256 rounds per line
pub const DEFAULT_HASH_ROUNDS: usize = 500;
/// Floating-point accumulation steps per line
pub const DEFAULT_FLOAT_ITERATIONS: usize = 50_000;

/// Hex-encoded SHA-256 of `input` (64 lowercase characters).
pub fn sha256_hex(input: &[u8]) -> String {
    hex::encode(Sha256::digest(input))
}

/// Feed `seed` through `digest` `rounds` times, each round hashing the
/// previous round's output.
///
/// Zero rounds returns the seed unchanged.
pub fn hash_chain_with<D>(seed: &str, rounds: usize, digest: D) -> String
where
    D: Fn(&[u8]) -> String,
{
    let mut current = seed.to_owned();
    for _ in 0..rounds {
        current = digest(current.as_bytes());
    }
    current
}

/// Fixed-length `sum += i * 1.5` loop. Cost is independent of any input.
pub fn float_accumulate(iterations: usize) -> f64 {
    let mut sum = 0.0_f64;
    for i in 0..iterations {
        sum += black_box(i as f64) * 1.5;
    }
    sum
}

/// Values produced while processing one line. Only tests look at these.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadOutput {
    /// Tip of the hash chain
    pub digest: String,
    /// Result of the float loop
    pub accumulator: f64,
}

/// Uppercase, SHA-256 chain, float loop.
///
/// Every line costs roughly the same regardless of its length because the
/// float loop dominates and the chain works on fixed-width hex after the
/// first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashChainWorkload {
    pub hash_rounds: usize,
    pub float_iterations: usize,
}

impl Default for HashChainWorkload {
    fn default() -> Self {
        Self {
            hash_rounds: DEFAULT_HASH_ROUNDS,
            float_iterations: DEFAULT_FLOAT_ITERATIONS,
        }
    }
}

impl HashChainWorkload {
    pub fn new(hash_rounds: usize, float_iterations: usize) -> Self {
        Self {
            hash_rounds,
            float_iterations,
        }
    }

    /// Run the full transformation and hand back what it produced.
    pub fn compute(&self, text: &str) -> WorkloadOutput {
        let upper = text.to_uppercase();
        let digest = hash_chain_with(&upper, self.hash_rounds, sha256_hex);
        let accumulator = float_accumulate(self.float_iterations);
        WorkloadOutput {
            digest,
            accumulator,
        }
    }
}

impl Workload for HashChainWorkload {
    fn process(&self, line: &Line) {
        black_box(self.compute(&line.content));
    }
}
