use protosim_core::models::{ProtocolStep, Sample, SimulationParams};
use protosim_engine::{IterationRunner, MonteCarloAggregator, ProtocolCatalog, SimRng, StepExecutor};
use proptest::prelude::*;

const BUILTIN: &str = "template-crispr-plasmid-prep-v1";

fn arb_step() -> impl Strategy<Value = ProtocolStep> {
    (0.0f64..300.0, 0.0f64..60.0, 0.0f64..=1.0, 0.0f64..20.0).prop_map(
        |(duration, std_dev, success_rate, cost)| {
            ProtocolStep::new("step", duration, std_dev, success_rate, cost)
                .with_reagent("buffer", 1.0)
        },
    )
}

fn arb_template() -> impl Strategy<Value = Vec<ProtocolStep>> {
    prop::collection::vec(arb_step(), 1..8)
}

// ── Cohort accounting ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn success_plus_failure_is_cohort_size(
        steps in arb_template(),
        n in 0usize..60,
        seed in any::<u64>(),
    ) {
        let runner = IterationRunner::default();
        let result = runner.run_iteration(&steps, n, &SimulationParams::default(), &mut SimRng::seeded(seed));
        prop_assert_eq!(result.success_count + result.failure_count, n);
        prop_assert_eq!(result.steps.len(), steps.len());
    }

    #[test]
    fn total_cost_counts_only_survivors(
        steps in arb_template(),
        n in 0usize..60,
        seed in any::<u64>(),
    ) {
        let executor = StepExecutor::new();
        let mut cohort: Vec<Sample> = (0..n).map(|i| Sample::new(i, 100.0, 50.0)).collect();
        let mut rng = SimRng::seeded(seed);
        let mut expected = 0.0;
        for step in &steps {
            let outcome = executor.execute(step, &mut cohort, &mut rng);
            let survivors = cohort.iter().filter(|s| s.is_active()).count();
            prop_assert_eq!(outcome.cost, step.cost_per_sample * survivors as f64);
            expected += outcome.cost;
        }

        let runner = IterationRunner::default();
        let result = runner.run_iteration(&steps, n, &SimulationParams::default(), &mut SimRng::seeded(seed));
        prop_assert!((result.total_cost - expected).abs() < 1e-6);
        prop_assert!(result.total_cost >= 0.0);
        prop_assert!(result.duration_minutes >= 0.0);
    }
}

// ── Monotone sample state ────────────────────────────────────────────────

proptest! {
    #[test]
    fn yield_and_quality_never_increase(
        steps in arb_template(),
        n in 1usize..40,
        seed in any::<u64>(),
    ) {
        let executor = StepExecutor::new();
        let mut cohort: Vec<Sample> = (0..n).map(|i| Sample::new(i, 100.0, 50.0)).collect();
        let mut rng = SimRng::seeded(seed);

        for step in &steps {
            let before = cohort.clone();
            executor.execute(step, &mut cohort, &mut rng);
            for (old, new) in before.iter().zip(&cohort) {
                prop_assert!(new.yield_mg <= old.yield_mg);
                prop_assert!(new.quality_factor <= old.quality_factor);
                prop_assert!(new.quality_factor > 0.0);
                // Failed never comes back.
                if !old.is_active() {
                    prop_assert!(!new.is_active());
                }
            }
        }
    }
}

// ── Aggregation ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn seeded_simulations_are_reproducible(
        seed in any::<u64>(),
        n in 1usize..20,
        runs in 1usize..10,
    ) {
        let params = SimulationParams::default();
        let a = MonteCarloAggregator::new(Some(seed)).run_simulation(BUILTIN, n, runs, &params).unwrap();
        let b = MonteCarloAggregator::new(Some(seed)).run_simulation(BUILTIN, n, runs, &params).unwrap();
        prop_assert_eq!(&a.runs, &b.runs);
        prop_assert_eq!(&a.aggregated_metrics, &b.aggregated_metrics);
    }

    #[test]
    fn metrics_stay_within_bounds(
        seed in any::<u64>(),
        n in 1usize..20,
        runs in 1usize..10,
    ) {
        let result = MonteCarloAggregator::new(Some(seed))
            .run_simulation(BUILTIN, n, runs, &SimulationParams::default())
            .unwrap();
        let m = &result.aggregated_metrics;
        prop_assert!((0.0..=100.0).contains(&m.avg_success_rate));
        prop_assert!(m.min_duration_minutes <= m.avg_duration_minutes + 1e-9);
        prop_assert!(m.avg_duration_minutes <= m.max_duration_minutes + 1e-9);
        prop_assert!(m.min_cost <= m.avg_cost + 1e-9);
        prop_assert!(m.avg_cost <= m.max_cost + 1e-9);
        prop_assert!(m.std_dev_duration >= 0.0);
        prop_assert!(m.std_dev_cost >= 0.0);
        prop_assert_eq!(m.overall_success_count + m.overall_failure_count, n * runs);
        if runs == 1 {
            prop_assert_eq!(m.std_dev_duration, 0.0);
            prop_assert_eq!(m.std_dev_cost, 0.0);
        }
    }
}

#[test]
fn catalog_lookup_is_stable() {
    let catalog = ProtocolCatalog::with_builtins();
    let first = catalog.lookup(BUILTIN).unwrap().to_vec();
    for _ in 0..10 {
        assert_eq!(catalog.lookup(BUILTIN).unwrap(), first.as_slice());
    }
}
