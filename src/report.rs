use crate::error::BenchError;
use crate::measurement::Measurement;
use crate::registry::ReportEntry;
use crate::scenario::ScenarioKind;
use human_repr::{HumanCount, HumanDuration, HumanThroughput};
use std::fmt::{self, Display, Formatter};

/// Results of a full registry run, in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn get(&self, scenario: ScenarioKind, codec: &str) -> Option<&Result<Measurement, BenchError>> {
        self.entries
            .iter()
            .find(|e| e.scenario == scenario && e.codec == codec)
            .map(|e| &e.outcome)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.outcome.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<14} {:<11} {:>10} {:>10} {:>10} {:>12} {:>8}  status",
            "scenario", "codec", "iterations", "elapsed", "per op", "throughput", "errors"
        )?;
        for entry in &self.entries {
            match &entry.outcome {
                Ok(m) => writeln!(
                    f,
                    "{:<14} {:<11} {:>10} {:>10} {:>10} {:>12} {:>8}  ok",
                    m.scenario.name(),
                    m.codec,
                    m.iterations.human_count_bare().to_string(),
                    m.elapsed.as_secs_f64().human_duration().to_string(),
                    (m.ns_per_op() / 1e9).human_duration().to_string(),
                    m.throughput_bytes_per_sec()
                        .human_throughput_bytes()
                        .to_string(),
                    m.errors
                )?,
                Err(e) => writeln!(
                    f,
                    "{:<14} {:<11} {:>10} {:>10} {:>10} {:>12} {:>8}  FAILED: {e}",
                    entry.scenario.name(),
                    entry.codec,
                    "-",
                    "-",
                    "-",
                    "-",
                    "-"
                )?,
            }
        }
        Ok(())
    }
}
