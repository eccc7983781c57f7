use crate::scenario::ScenarioKind;
use std::time::Duration;

/// Timing and outcome of one completed (scenario, codec) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub scenario: ScenarioKind,
    pub codec: &'static str,
    pub iterations: u64,
    pub elapsed: Duration,
    /// Decode errors observed. Only the error path expects any.
    pub errors: u64,
    /// Size of the encoded payload, or of the malformed input on the error path.
    pub bytes_per_op: usize,
    /// Iterations executed by each worker, one entry for sequential runs.
    pub worker_iterations: Vec<u64>,
}

impl Measurement {
    pub fn ns_per_op(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }

    pub fn throughput_bytes_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        (self.bytes_per_op as u64 * self.iterations) as f64 / secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(iterations: u64, elapsed: Duration) -> Measurement {
        Measurement {
            scenario: ScenarioKind::Basic,
            codec: "serde_json",
            iterations,
            elapsed,
            errors: 0,
            bytes_per_op: 100,
            worker_iterations: vec![iterations],
        }
    }

    #[test]
    fn should_compute_per_op_time_and_throughput() {
        let m = measurement(1000, Duration::from_millis(1));
        assert_eq!(m.ns_per_op(), 1000.0);
        assert_eq!(m.throughput_bytes_per_sec(), 100_000_000.0);
    }

    #[test]
    fn should_not_divide_by_zero() {
        let m = measurement(0, Duration::ZERO);
        assert_eq!(m.ns_per_op(), 0.0);
        assert_eq!(m.throughput_bytes_per_sec(), 0.0);
    }
}
