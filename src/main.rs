//! JSON codec benchmark: serde_json vs simd-json vs sonic-rs
//! Basic, large-batch, parallel and invalid-input workloads.

use json_codec_bench::{RunnerConfig, ScenarioRegistry};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn main() -> ExitCode {
    Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();

    let config = RunnerConfig::default();
    let registry = ScenarioRegistry::with_defaults(config);

    println!("=================================================================");
    println!("Rust JSON Codecs - encode/decode Benchmark");
    println!("=================================================================");
    for scenario in registry.list_scenarios() {
        println!("  {:<14} {}", scenario.name, scenario.description);
    }
    println!(
        "Codecs: {}, workers: {}, batch size: {}, budget: {:?}",
        registry.codec_names().join(", "),
        registry.config().workers,
        registry.config().batch_size,
        registry.config().budget
    );
    println!("-----------------------------------------------------------------");

    info!("Starting the benchmarks...");
    let report = registry.run_all();
    info!("Finished the benchmarks.");

    println!("{report}");

    if report.is_success() {
        return ExitCode::SUCCESS;
    }
    for failure in report.failures() {
        if let Err(e) = &failure.outcome {
            error!("{} on {} failed: {e}", failure.scenario, failure.codec);
        }
    }
    ExitCode::FAILURE
}
