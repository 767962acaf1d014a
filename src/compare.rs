//! Policy comparison harness.
//!
//! Runs one workload through every evaluated (policy, quantum)
//! configuration and labels the resulting metrics for reporting. The
//! configurations are fully independent: each `simulate` call owns all
//! of its working state, so no state leaks between runs.

use serde::Serialize;

use crate::engine::{simulate, Metrics};
use crate::models::{Policy, Process, Tick};
use crate::validation::SimulationError;

/// One labeled simulation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRun {
    /// Row label, e.g. `FCFS` or `RR_Q10`.
    pub label: String,
    /// Metrics of the completed run.
    pub metrics: Metrics,
}

/// Evaluates every policy over one workload.
///
/// FCFS, SJF-NP, and SJF-P run once each; Round Robin runs once per
/// quantum in `quanta`, labeled `RR_Q{q}`. Results are returned in
/// evaluation order.
///
/// # Errors
/// Fails on the first structural input violation; configurations are
/// never partially evaluated on bad input (the non-quantum policies
/// share all preconditions, and each RR quantum is validated before
/// its run).
pub fn compare_policies(
    processes: &[Process],
    core_count: usize,
    quanta: &[Tick],
) -> Result<Vec<PolicyRun>, SimulationError> {
    let mut runs = Vec::with_capacity(3 + quanta.len());

    for policy in [Policy::Fcfs, Policy::SjfNonPreemptive, Policy::SjfPreemptive] {
        runs.push(PolicyRun {
            label: policy.name().to_string(),
            metrics: simulate(processes, core_count, policy, 0)?,
        });
    }

    for &quantum in quanta {
        runs.push(PolicyRun {
            label: format!("RR_Q{quantum}"),
            metrics: simulate(processes, core_count, Policy::RoundRobin, quantum)?,
        });
    }

    Ok(runs)
}
