use std::fmt;
use std::time::{Duration, Instant};

use crate::error::BenchResult;
use crate::parallel::ExecutionStrategy;

/// Async runs shorter than this are too short to divide by
pub const MIN_MEASURABLE: Duration = Duration::from_millis(1);

/// Wall-clock measurement of one execution mode
#[derive(Debug, Clone, Copy)]
pub struct TimingSample {
    pub mode: ExecutionStrategy,
    pub elapsed: Duration,
}

impl TimingSample {
    /// Time `f`, keeping its value. A failed run yields no sample.
    pub fn measure<T, F>(mode: ExecutionStrategy, f: F) -> BenchResult<(Self, T)>
    where
        F: FnOnce() -> BenchResult<T>,
    {
        let started = Instant::now();
        let value = f()?;
        let elapsed = started.elapsed();
        Ok((Self { mode, elapsed }, value))
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Ratio of sequential to concurrent elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speedup {
    pub ratio: f64,
    /// True when the async run was below [`MIN_MEASURABLE`] and the ratio
    /// was pinned to 1.0 instead of being computed
    pub guarded: bool,
}

impl Speedup {
    pub fn between(sync_elapsed: Duration, async_elapsed: Duration) -> Self {
        if async_elapsed < MIN_MEASURABLE {
            return Self {
                ratio: 1.0,
                guarded: true,
            };
        }

        Self {
            ratio: sync_elapsed.as_secs_f64() / async_elapsed.as_secs_f64(),
            guarded: false,
        }
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}x", self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speedup_ratio() {
        let speedup = Speedup::between(Duration::from_millis(400), Duration::from_millis(100));
        assert!(!speedup.guarded);
        assert!((speedup.ratio - 4.0).abs() < 1e-9);
        assert_eq!(speedup.to_string(), "4.00x");
    }

    #[test]
    fn test_speedup_slower_than_sync() {
        let speedup = Speedup::between(Duration::from_millis(50), Duration::from_millis(200));
        assert_eq!(speedup.to_string(), "0.25x");
    }

    #[test]
    fn test_speedup_guard_on_zero_async_time() {
        let speedup = Speedup::between(Duration::from_millis(3), Duration::ZERO);
        assert!(speedup.guarded);
        assert_eq!(speedup.ratio, 1.0);
        assert!(speedup.ratio.is_finite());
    }

    #[test]
    fn test_speedup_guard_boundary() {
        let below = Speedup::between(Duration::from_millis(5), Duration::from_micros(999));
        assert!(below.guarded);

        let at = Speedup::between(Duration::from_millis(5), MIN_MEASURABLE);
        assert!(!at.guarded);
        assert!((at.ratio - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_measure_records_elapsed() {
        let (sample, value) = TimingSample::measure(ExecutionStrategy::Sequential, || {
            std::thread::sleep(Duration::from_millis(5));
            Ok(42)
        })
        .unwrap();

        assert_eq!(value, 42);
        assert_eq!(sample.mode, ExecutionStrategy::Sequential);
        assert!(sample.elapsed >= Duration::from_millis(5));
        assert!(sample.seconds() > 0.0);
    }

    #[test]
    fn test_measure_propagates_failure() {
        let result: BenchResult<(TimingSample, ())> =
            TimingSample::measure(ExecutionStrategy::Sequential, || {
                Err(crate::error::BenchError::WorkerPanicked)
            });
        assert!(result.is_err());
    }
}
