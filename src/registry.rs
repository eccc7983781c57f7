//! The (scenario x codec) cross product, run in declaration order.

use crate::codec::{default_codecs, Codec};
use crate::config::RunnerConfig;
use crate::error::BenchError;
use crate::measurement::Measurement;
use crate::report::Report;
use crate::runner;
use crate::scenario::{ScenarioDescriptor, ScenarioKind};
use tracing::{info, warn};

/// Outcome of one (scenario, codec) pair. Aborted runs carry the error.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub scenario: ScenarioKind,
    pub codec: &'static str,
    pub outcome: Result<Measurement, BenchError>,
}

pub struct ScenarioRegistry {
    config: RunnerConfig,
    scenarios: Vec<ScenarioKind>,
    codecs: Vec<Box<dyn Codec>>,
}

impl ScenarioRegistry {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            scenarios: Vec::new(),
            codecs: Vec::new(),
        }
    }

    /// Every scenario against the serde_json, simd-json and sonic-rs adapters.
    pub fn with_defaults(config: RunnerConfig) -> Self {
        let mut registry = Self::new(config);
        for scenario in ScenarioKind::ALL {
            registry.register_scenario(scenario);
        }
        for codec in default_codecs() {
            registry.register_codec(codec);
        }
        registry
    }

    /// Registers a scenario once; repeats are ignored.
    pub fn register_scenario(&mut self, scenario: ScenarioKind) -> &mut Self {
        if !self.scenarios.contains(&scenario) {
            self.scenarios.push(scenario);
        }
        self
    }

    pub fn register_codec(&mut self, codec: Box<dyn Codec>) -> &mut Self {
        if self.codecs.iter().any(|c| c.name() == codec.name()) {
            warn!("Codec {} is already registered, skipping", codec.name());
            return self;
        }
        self.codecs.push(codec);
        self
    }

    pub fn list_scenarios(&self) -> Vec<ScenarioDescriptor> {
        self.scenarios.iter().map(|s| s.descriptor()).collect()
    }

    pub fn codec_names(&self) -> Vec<&'static str> {
        self.codecs.iter().map(|c| c.name()).collect()
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs every pair. An aborted pair is recorded and the rest still run.
    pub fn run_all(&self) -> Report {
        info!(
            "Running {} scenarios against {} codecs",
            self.scenarios.len(),
            self.codecs.len()
        );
        let mut entries = Vec::with_capacity(self.scenarios.len() * self.codecs.len());
        for &scenario in &self.scenarios {
            for codec in &self.codecs {
                entries.push(ReportEntry {
                    scenario,
                    codec: codec.name(),
                    outcome: runner::run(scenario, codec.as_ref(), &self.config),
                });
            }
        }
        Report::new(entries)
    }
}
