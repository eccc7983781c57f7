//! Comparative encode/decode benchmark for Rust JSON libraries.
//!
//! A [`ScenarioRegistry`] runs each registered [`ScenarioKind`] against each
//! registered [`Codec`] and collects a [`Measurement`] per pair into a
//! [`Report`].

pub mod codec;
pub mod config;
pub mod error;
pub mod fixture;
pub mod measurement;
pub mod registry;
pub mod report;
pub mod runner;
pub mod scenario;

pub use codec::{Codec, Payload, Target};
pub use config::{Budget, RunnerConfig};
pub use error::{BenchError, CodecError};
pub use fixture::Record;
pub use measurement::Measurement;
pub use registry::{ReportEntry, ScenarioRegistry};
pub use report::Report;
pub use runner::{run, BenchmarkRun, RunState};
pub use scenario::{ExecutionMode, ScenarioDescriptor, ScenarioKind};
