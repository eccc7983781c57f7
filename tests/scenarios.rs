use json_codec_bench::codec::default_codecs;
use json_codec_bench::fixture::{make_malformed, make_record};
use json_codec_bench::{
    run, Budget, Payload, Record, RunnerConfig, ScenarioKind, ScenarioRegistry, Target,
};
use std::num::NonZeroUsize;

fn config() -> RunnerConfig {
    RunnerConfig::default()
        .with_iterations(64)
        .with_warmup(2)
        .with_workers(NonZeroUsize::new(3).unwrap())
        .with_batch_size(100)
}

#[test]
fn every_codec_should_reproduce_the_four_fields() {
    let record = make_record();
    for codec in default_codecs() {
        let bytes = codec.encode(Payload::Record(&record)).unwrap();
        let mut decoded = Record::default();
        codec.decode(&bytes, Target::Record(&mut decoded)).unwrap();
        assert_eq!(decoded.first_string, "12345", "{}", codec.name());
        assert_eq!(decoded.second_string, "67890", "{}", codec.name());
        assert_eq!(decoded.first_integer, 12345, "{}", codec.name());
        assert_eq!(decoded.second_integer, 67890, "{}", codec.name());
    }
}

#[test]
fn every_codec_should_fail_on_string_in_integer_field() {
    let malformed = make_malformed();
    for codec in default_codecs() {
        let mut decoded = Record::default();
        assert!(
            codec
                .decode(&malformed, Target::Record(&mut decoded))
                .is_err(),
            "{} decoded malformed input",
            codec.name()
        );
    }
}

#[test]
fn full_run_should_pass_every_pair() {
    let registry = ScenarioRegistry::with_defaults(config());
    let report = registry.run_all();

    assert_eq!(report.entries().len(), 4 * 3);
    assert!(report.is_success(), "{report}");
    for entry in report.entries() {
        let measurement = entry.outcome.as_ref().unwrap();
        assert_eq!(measurement.iterations, 64);
        assert_eq!(measurement.worker_iterations.iter().sum::<u64>(), 64);
        match entry.scenario {
            ScenarioKind::InvalidInput => assert_eq!(measurement.errors, 64),
            _ => assert_eq!(measurement.errors, 0),
        }
    }
}

#[test]
fn full_run_should_keep_declaration_order() {
    let registry = ScenarioRegistry::with_defaults(config().with_iterations(2));
    let first: Vec<_> = registry
        .run_all()
        .entries()
        .iter()
        .map(|e| (e.scenario, e.codec))
        .collect();
    let second: Vec<_> = registry
        .run_all()
        .entries()
        .iter()
        .map(|e| (e.scenario, e.codec))
        .collect();
    assert_eq!(first, second);
    assert_eq!(first[0], (ScenarioKind::Basic, "serde_json"));
    assert_eq!(first[11], (ScenarioKind::InvalidInput, "sonic-rs"));
}

#[test]
fn parallel_scenario_should_split_work_across_workers() {
    for codec in default_codecs() {
        let measurement = run(ScenarioKind::Parallel, codec.as_ref(), &config()).unwrap();
        assert_eq!(measurement.worker_iterations, vec![22, 21, 21]);
    }
}

#[test]
fn large_scenario_should_report_batch_payload_size() {
    for codec in default_codecs() {
        let basic = run(ScenarioKind::Basic, codec.as_ref(), &config()).unwrap();
        let large = run(ScenarioKind::Large, codec.as_ref(), &config()).unwrap();
        assert!(large.bytes_per_op > basic.bytes_per_op * 100);
    }
}

#[test]
fn time_budget_should_produce_a_passing_measurement() {
    let config = config().with_budget(Budget::Time(std::time::Duration::from_millis(2)));
    for codec in default_codecs() {
        let measurement = run(ScenarioKind::InvalidInput, codec.as_ref(), &config).unwrap();
        assert!(measurement.iterations >= 1);
        assert_eq!(measurement.errors, measurement.iterations);
    }
}
