//! Drives one scenario against one codec.
//!
//! A run moves `Idle -> Running -> {Completed | Aborted}`. The first
//! unexpected outcome aborts it and no partial measurement is produced:
//! one miscompare invalidates the whole timing sample.

use crate::codec::{Codec, Payload, Target};
use crate::config::{Budget, RunnerConfig, MAX_CALIBRATED_ITERATIONS};
use crate::error::BenchError;
use crate::fixture::{make_batch, make_malformed, make_record, Record};
use crate::measurement::Measurement;
use crate::scenario::{ExecutionMode, ScenarioKind};
use std::hint::black_box;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Aborted,
}

/// Inputs for a single run. Read-only once built, shared by all workers.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub record: Record,
    pub batch: Vec<Record>,
    pub malformed: Vec<u8>,
}

impl Fixtures {
    pub fn new(batch_size: usize) -> Self {
        Self {
            record: make_record(),
            batch: make_batch(batch_size),
            malformed: make_malformed(),
        }
    }
}

struct Sample {
    elapsed: Duration,
    bytes_per_op: usize,
    worker_iterations: Vec<u64>,
}

pub struct BenchmarkRun<'a> {
    scenario: ScenarioKind,
    codec: &'a dyn Codec,
    config: &'a RunnerConfig,
    state: RunState,
}

impl<'a> BenchmarkRun<'a> {
    pub fn new(scenario: ScenarioKind, codec: &'a dyn Codec, config: &'a RunnerConfig) -> Self {
        Self {
            scenario,
            codec,
            config,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Executes the run. Calling it again on a finished run is rejected.
    pub fn execute(&mut self) -> Result<Measurement, BenchError> {
        if self.state != RunState::Idle {
            return Err(BenchError::AlreadyExecuted);
        }
        self.config.budget.validate()?;

        self.state = RunState::Running;
        info!(
            "Starting {} on {} with budget {:?}",
            self.scenario,
            self.codec.name(),
            self.config.budget
        );

        match self.measure() {
            Ok(measurement) => {
                self.state = RunState::Completed;
                info!(
                    "Completed {} on {}: {} iterations in {:?}",
                    self.scenario,
                    self.codec.name(),
                    measurement.iterations,
                    measurement.elapsed
                );
                Ok(measurement)
            }
            Err(e) => {
                self.state = RunState::Aborted;
                error!("Aborted {} on {}: {e}", self.scenario, self.codec.name());
                Err(e)
            }
        }
    }

    fn measure(&self) -> Result<Measurement, BenchError> {
        let fixtures = Fixtures::new(self.config.batch_size);
        self.verify(&fixtures)?;
        for i in 0..self.config.warmup_iterations {
            self.cycle(&fixtures, i)?;
        }

        let (iterations, sample) = match self.config.budget {
            Budget::Iterations(n) => (n, self.timed(&fixtures, n)?),
            Budget::Time(target) => self.calibrate(&fixtures, target)?,
        };

        let errors = match self.scenario.mode() {
            ExecutionMode::ErrorPath => iterations,
            _ => 0,
        };
        Ok(Measurement {
            scenario: self.scenario,
            codec: self.codec.name(),
            iterations,
            elapsed: sample.elapsed,
            errors,
            bytes_per_op: sample.bytes_per_op,
            worker_iterations: sample.worker_iterations,
        })
    }

    /// Untimed round trip whose decoded value must equal the fixture.
    fn verify(&self, fixtures: &Fixtures) -> Result<(), BenchError> {
        let matches = match self.scenario {
            ScenarioKind::Basic | ScenarioKind::Parallel => {
                let bytes = self.encode(Payload::Record(&fixtures.record), 0)?;
                let mut decoded = Record::default();
                self.decode(&bytes, Target::Record(&mut decoded), 0)?;
                decoded == fixtures.record
            }
            ScenarioKind::Large => {
                let bytes = self.encode(Payload::Batch(&fixtures.batch), 0)?;
                let mut decoded = Vec::new();
                self.decode(&bytes, Target::Batch(&mut decoded), 0)?;
                decoded == fixtures.batch
            }
            ScenarioKind::InvalidInput => return Ok(()),
        };
        if !matches {
            return Err(BenchError::RoundTripMismatch {
                scenario: self.scenario,
                iteration: 0,
            });
        }
        Ok(())
    }

    /// Doubles the iteration count until one round lasts at least `target`.
    fn calibrate(&self, fixtures: &Fixtures, target: Duration) -> Result<(u64, Sample), BenchError> {
        let mut n = 1;
        loop {
            let sample = self.timed(fixtures, n)?;
            debug!(
                "Calibration round for {} on {}: {n} iterations in {:?}",
                self.scenario,
                self.codec.name(),
                sample.elapsed
            );
            if sample.elapsed >= target || n >= MAX_CALIBRATED_ITERATIONS {
                return Ok((n, sample));
            }
            n = n.saturating_mul(2).min(MAX_CALIBRATED_ITERATIONS);
        }
    }

    fn timed(&self, fixtures: &Fixtures, iterations: u64) -> Result<Sample, BenchError> {
        match self.scenario.mode() {
            ExecutionMode::Parallel => self.timed_parallel(fixtures, iterations),
            ExecutionMode::Sequential | ExecutionMode::ErrorPath => {
                let mut bytes_per_op = 0;
                let start = Instant::now();
                for i in 0..iterations {
                    bytes_per_op = self.cycle(fixtures, i)?;
                }
                Ok(Sample {
                    elapsed: start.elapsed(),
                    bytes_per_op,
                    worker_iterations: vec![iterations],
                })
            }
        }
    }

    fn timed_parallel(&self, fixtures: &Fixtures, iterations: u64) -> Result<Sample, BenchError> {
        let shares = partition(iterations, self.config.workers.get());
        let aborted = AtomicBool::new(false);

        let start = Instant::now();
        let results: Vec<Result<(u64, usize), BenchError>> = thread::scope(|scope| {
            let mut offset = 0;
            let mut handles = Vec::with_capacity(shares.len());
            for &share in &shares {
                let first = offset;
                offset += share;
                let aborted = &aborted;
                handles.push(scope.spawn(move || {
                    let mut bytes_per_op = 0;
                    let mut done = 0;
                    for i in first..first + share {
                        if aborted.load(Ordering::Relaxed) {
                            break;
                        }
                        match self.cycle(fixtures, i) {
                            Ok(bytes) => bytes_per_op = bytes,
                            Err(e) => {
                                aborted.store(true, Ordering::Relaxed);
                                return Err(e);
                            }
                        }
                        done += 1;
                    }
                    Ok((done, bytes_per_op))
                }));
            }
            handles
                .into_iter()
                .enumerate()
                .map(|(worker, handle)| {
                    handle
                        .join()
                        .unwrap_or(Err(BenchError::WorkerPanicked(worker)))
                })
                .collect()
        });
        let elapsed = start.elapsed();

        let mut worker_iterations = Vec::with_capacity(results.len());
        let mut bytes_per_op = 0;
        for result in results {
            let (done, bytes) = result?;
            worker_iterations.push(done);
            bytes_per_op = bytes_per_op.max(bytes);
        }
        Ok(Sample {
            elapsed,
            bytes_per_op,
            worker_iterations,
        })
    }

    /// One unit of work. Returns the number of payload bytes it processed.
    fn cycle(&self, fixtures: &Fixtures, iteration: u64) -> Result<usize, BenchError> {
        match self.scenario {
            ScenarioKind::Basic | ScenarioKind::Parallel => {
                let bytes = self.encode(Payload::Record(&fixtures.record), iteration)?;
                let mut decoded = Record::default();
                self.decode(&bytes, Target::Record(&mut decoded), iteration)?;
                black_box(&decoded);
                Ok(bytes.len())
            }
            ScenarioKind::Large => {
                let bytes = self.encode(Payload::Batch(&fixtures.batch), iteration)?;
                let mut decoded = Vec::new();
                self.decode(&bytes, Target::Batch(&mut decoded), iteration)?;
                black_box(&decoded);
                Ok(bytes.len())
            }
            ScenarioKind::InvalidInput => {
                let mut decoded = Record::default();
                match self
                    .codec
                    .decode(&fixtures.malformed, Target::Record(&mut decoded))
                {
                    Ok(()) => Err(BenchError::UnexpectedDecodeSuccess {
                        scenario: self.scenario,
                        iteration,
                    }),
                    Err(e) => {
                        black_box(e);
                        Ok(fixtures.malformed.len())
                    }
                }
            }
        }
    }

    fn encode(&self, payload: Payload<'_>, iteration: u64) -> Result<Vec<u8>, BenchError> {
        self.codec
            .encode(payload)
            .map_err(|source| BenchError::EncodeFailure {
                scenario: self.scenario,
                iteration,
                source,
            })
    }

    fn decode(&self, bytes: &[u8], target: Target<'_>, iteration: u64) -> Result<(), BenchError> {
        self.codec
            .decode(bytes, target)
            .map_err(|source| BenchError::UnexpectedDecodeFailure {
                scenario: self.scenario,
                iteration,
                source,
            })
    }
}

/// Runs `scenario` against `codec` from a fresh [`BenchmarkRun`].
pub fn run(
    scenario: ScenarioKind,
    codec: &dyn Codec,
    config: &RunnerConfig,
) -> Result<Measurement, BenchError> {
    BenchmarkRun::new(scenario, codec, config).execute()
}

/// Chunked split of `iterations` over `workers`: the first
/// `iterations % workers` workers take one extra iteration.
pub fn partition(iterations: u64, workers: usize) -> Vec<u64> {
    let workers = workers.max(1) as u64;
    let base = iterations / workers;
    let extra = iterations % workers;
    (0..workers)
        .map(|w| base + u64::from(w < extra))
        .collect()
}
