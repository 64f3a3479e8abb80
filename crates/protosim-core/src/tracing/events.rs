//! Structured log events for simulation milestones.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the start of a simulation request.
pub fn simulation_started(
    sim_id: &str,
    template_id: &str,
    num_samples: usize,
    num_runs: usize,
    execution_mode: &str,
) {
    ::tracing::info!(
        event = "simulation_started",
        sim_id = %sim_id,
        template_id = %template_id,
        num_samples = num_samples,
        num_runs = num_runs,
        execution_mode = %execution_mode,
        "simulation started"
    );
}

/// Log the completion of a simulation request.
pub fn simulation_completed(sim_id: &str, avg_success_rate: f64, elapsed_ms: u128) {
    ::tracing::info!(
        event = "simulation_completed",
        sim_id = %sim_id,
        avg_success_rate = avg_success_rate,
        elapsed_ms = elapsed_ms as u64,
        "simulation completed"
    );
}

/// Log a template substitution under the fallback policy.
pub fn template_fallback(requested: &str, resolved: &str) {
    ::tracing::warn!(
        event = "template_fallback",
        requested = %requested,
        resolved = %resolved,
        "unknown template, using fallback"
    );
}

/// Log one finished iteration.
pub fn iteration_completed(run_index: usize, success_count: usize, failure_count: usize, total_cost: f64) {
    ::tracing::debug!(
        event = "iteration_completed",
        run_index = run_index,
        success_count = success_count,
        failure_count = failure_count,
        total_cost = total_cost,
        "iteration completed"
    );
}

/// Log a rejected simulation request.
pub fn simulation_rejected(template_id: &str, code: &str, reason: &str) {
    ::tracing::warn!(
        event = "simulation_rejected",
        template_id = %template_id,
        code = %code,
        reason = %reason,
        "simulation rejected"
    );
}
