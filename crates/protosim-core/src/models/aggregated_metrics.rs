use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Cross-run statistics for one simulation request.
///
/// Standard deviations are population (not Bessel-corrected).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregatedMetrics {
    pub avg_duration_minutes: f64,
    pub min_duration_minutes: f64,
    pub max_duration_minutes: f64,
    pub std_dev_duration: f64,
    pub avg_cost: f64,
    pub min_cost: f64,
    pub max_cost: f64,
    pub std_dev_cost: f64,
    pub avg_final_yield_mg: f64,
    /// Percentage in [0, 100] of all samples across all runs that survived.
    pub avg_success_rate: f64,
    pub overall_success_count: usize,
    pub overall_failure_count: usize,
    /// Nominal reagent draw of one run, summed over the template's steps.
    pub nominal_reagent_usage: BTreeMap<String, f64>,
}
