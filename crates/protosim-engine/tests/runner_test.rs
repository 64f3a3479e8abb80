use protosim_core::config::CohortConfig;
use protosim_core::errors::ConfigError;
use protosim_core::models::{ProtocolStep, SimulationParams};
use protosim_engine::{IterationRunner, ProtocolCatalog, SimRng};

const BUILTIN: &str = "template-crispr-plasmid-prep-v1";

fn builtin_steps() -> Vec<ProtocolStep> {
    ProtocolCatalog::with_builtins().lookup(BUILTIN).unwrap().to_vec()
}

#[test]
fn counts_always_sum_to_cohort_size() {
    let runner = IterationRunner::default();
    let steps = builtin_steps();
    let mut rng = SimRng::seeded(42);
    for n in [0, 1, 2, 10, 37, 100] {
        let result = runner.run_iteration(&steps, n, &SimulationParams::default(), &mut rng);
        assert_eq!(result.success_count + result.failure_count, n);
        assert_eq!(result.cohort_size(), n);
        assert_eq!(result.steps.len(), 6);
    }
}

#[test]
fn empty_cohort_is_all_zero() {
    let runner = IterationRunner::default();
    let result = runner.run_iteration(
        &builtin_steps(),
        0,
        &SimulationParams::default(),
        &mut SimRng::seeded(1),
    );
    assert_eq!(result.success_count, 0);
    assert_eq!(result.failure_count, 0);
    assert_eq!(result.final_yield_mg, 0.0);
    assert_eq!(result.final_quality, 0.0);
    assert_eq!(result.total_cost, 0.0);
    assert!(result.duration_minutes >= 0.0);
}

#[test]
fn steps_run_back_to_back() {
    let runner = IterationRunner::default();
    let result = runner.run_iteration(
        &builtin_steps(),
        10,
        &SimulationParams::default(),
        &mut SimRng::seeded(9),
    );

    let mut clock = 0.0;
    for step in &result.steps {
        assert_eq!(step.start_time, clock);
        assert_eq!(step.end_time, step.start_time + step.duration);
        clock = step.end_time;
    }
    assert_eq!(result.duration_minutes, clock);
}

#[test]
fn total_cost_is_sum_of_step_costs() {
    let runner = IterationRunner::default();
    let result = runner.run_iteration(
        &builtin_steps(),
        25,
        &SimulationParams::default(),
        &mut SimRng::seeded(11),
    );
    let summed: f64 = result.steps.iter().map(|s| s.cost).sum();
    assert!((result.total_cost - summed).abs() < 1e-9);
}

#[test]
fn deterministic_template_has_exact_totals() {
    let steps = vec![
        ProtocolStep::new("A", 10.0, 0.0, 1.0, 2.0),
        ProtocolStep::new("B", 20.0, 0.0, 1.0, 3.0),
    ];
    let runner = IterationRunner::default();
    let result = runner.run_iteration(&steps, 4, &SimulationParams::default(), &mut SimRng::seeded(0));

    assert_eq!(result.duration_minutes, 30.0);
    assert_eq!(result.total_cost, 4.0 * 2.0 + 4.0 * 3.0);
    assert_eq!(result.success_count, 4);
    assert!((result.final_yield_mg - 100.0 * 0.95 * 0.95).abs() < 1e-9);
    assert!((result.final_quality - 0.98 * 0.98).abs() < 1e-12);
}

#[test]
fn all_failed_gives_zero_final_yield() {
    let steps = vec![ProtocolStep::new("Doomed", 10.0, 0.0, 0.0, 5.0)];
    let runner = IterationRunner::default();
    let result = runner.run_iteration(&steps, 8, &SimulationParams::default(), &mut SimRng::seeded(0));
    assert_eq!(result.success_count, 0);
    assert_eq!(result.failure_count, 8);
    assert_eq!(result.final_yield_mg, 0.0);
    assert_eq!(result.total_cost, 0.0);
}

#[test]
fn cohort_uses_params_then_configured_defaults() {
    let runner = IterationRunner::default();
    let cohort = runner.new_cohort(3, &SimulationParams::default().with_initial_yield(40.0));
    assert_eq!(cohort.len(), 3);
    assert_eq!(cohort[2].sample_id, "sample-3");
    assert!(cohort.iter().all(|s| s.yield_mg == 40.0 && s.volume_ml == 50.0));

    let defaults = CohortConfig {
        initial_yield: Some(10.0),
        initial_volume: Some(2.0),
    };
    let runner = IterationRunner::default().with_cohort_defaults(&defaults).unwrap();
    let cohort = runner.new_cohort(1, &SimulationParams::default());
    assert_eq!(cohort[0].yield_mg, 10.0);
    assert_eq!(cohort[0].volume_ml, 2.0);
}

#[test]
fn invalid_cohort_defaults_are_rejected() {
    let negative_yield = CohortConfig {
        initial_yield: Some(-5.0),
        ..Default::default()
    };
    let err = IterationRunner::default()
        .with_cohort_defaults(&negative_yield)
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "defaults.initial_yield"));

    let infinite_volume = CohortConfig {
        initial_volume: Some(f64::INFINITY),
        ..Default::default()
    };
    assert!(IterationRunner::default()
        .with_cohort_defaults(&infinite_volume)
        .is_err());
}
