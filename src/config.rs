use crate::error::BenchError;
use crate::fixture::DEFAULT_BATCH_SIZE;
use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

pub const DEFAULT_ITERATIONS: u64 = 10_000;
pub const DEFAULT_WARMUP_ITERATIONS: u64 = 3;
/// Upper bound on a single calibration round of a [`Budget::Time`] run.
pub const MAX_CALIBRATED_ITERATIONS: u64 = 1_000_000_000;

/// What bounds a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// Exactly this many timed iterations.
    Iterations(u64),
    /// Double the iteration count each round until a round lasts this long.
    Time(Duration),
}

impl Budget {
    pub fn validate(&self) -> Result<(), BenchError> {
        match self {
            Budget::Iterations(0) => Err(BenchError::InvalidBudget(
                "iteration count must be at least 1".to_owned(),
            )),
            Budget::Time(d) if d.is_zero() => Err(BenchError::InvalidBudget(
                "time budget must be non-zero".to_owned(),
            )),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub budget: Budget,
    pub warmup_iterations: u64,
    pub workers: NonZeroUsize,
    pub batch_size: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            budget: Budget::Iterations(DEFAULT_ITERATIONS),
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            workers: thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl RunnerConfig {
    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_iterations(self, iterations: u64) -> Self {
        self.with_budget(Budget::Iterations(iterations))
    }

    pub fn with_warmup(mut self, warmup_iterations: u64) -> Self {
        self.warmup_iterations = warmup_iterations;
        self
    }

    pub fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_budgets() {
        assert!(Budget::Iterations(0).validate().is_err());
        assert!(Budget::Time(Duration::ZERO).validate().is_err());
        assert!(Budget::Iterations(1).validate().is_ok());
        assert!(Budget::Time(Duration::from_millis(1)).validate().is_ok());
    }

    #[test]
    fn builders_should_override_defaults() {
        let config = RunnerConfig::default()
            .with_iterations(7)
            .with_warmup(0)
            .with_workers(NonZeroUsize::new(2).unwrap())
            .with_batch_size(10);
        assert_eq!(config.budget, Budget::Iterations(7));
        assert_eq!(config.warmup_iterations, 0);
        assert_eq!(config.workers.get(), 2);
        assert_eq!(config.batch_size, 10);
    }
}
