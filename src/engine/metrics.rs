//! Run quality metrics.
//!
//! Reduces the raw timing facts of a completed simulation run into
//! seven summary statistics. The reduction is a pure function: identical
//! facts always yield bit-identical metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(finish − arrival − burst) |
//! | Avg Turnaround | mean(finish − arrival) |
//! | Avg Response | mean(first dispatch − arrival) |
//! | Throughput | processes / final clock |
//! | CPU Utilization | busy core-ticks / (cores × final clock) |
//! | Context Switches | dispatches + preemptions + completions + quantum expiries |
//! | Fairness | Jain's index over waiting times |
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness"

use serde::{Deserialize, Serialize};

use crate::models::Tick;

/// Timing facts for one completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessFacts {
    /// Arrival tick.
    pub arrival: Tick,
    /// Total burst length.
    pub burst: Tick,
    /// Tick at which the process first held a core.
    pub first_dispatch: Tick,
    /// Tick at which the process completed.
    pub finish: Tick,
}

impl ProcessFacts {
    /// Turnaround time: finish − arrival.
    pub fn turnaround(&self) -> Tick {
        self.finish - self.arrival
    }

    /// Waiting time: turnaround − burst.
    pub fn waiting(&self) -> Tick {
        self.turnaround() - self.burst
    }

    /// Response time: first dispatch − arrival.
    pub fn response(&self) -> Tick {
        self.first_dispatch - self.arrival
    }
}

/// Raw output of a completed simulation run.
///
/// Everything the metric reduction needs; nothing engine-internal
/// (ready queues, core slots) leaks out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFacts {
    /// Per-process timing facts, in workload order.
    pub processes: Vec<ProcessFacts>,
    /// Number of identical cores simulated.
    pub core_count: usize,
    /// Clock value when the last process finished.
    pub final_clock: Tick,
    /// Total core-ticks spent executing (idle ticks excluded).
    pub busy_ticks: u64,
    /// Context switches across all four trigger kinds.
    pub context_switches: u64,
}

/// Summary statistics of one simulation run.
///
/// Immutable once produced; the reporting sink consumes these records
/// without ever touching engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean waiting time in ticks.
    pub avg_waiting: f64,
    /// Mean turnaround time in ticks.
    pub avg_turnaround: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Fraction of core-ticks spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Mean response time in ticks.
    pub avg_response: f64,
    /// Total context switches.
    pub context_switches: u64,
    /// Jain's fairness index over waiting times (0.0..1.0].
    pub fairness: f64,
}

impl Metrics {
    /// Computes metrics from the facts of a completed run.
    ///
    /// The engine guarantees `final_clock > 0` (every burst is at least
    /// one tick) and a non-empty process list, so the divisions here
    /// are well-defined. The only degenerate case left is all-equal
    /// waiting times, handled inside [`jain_fairness`].
    pub fn from_facts(facts: &RunFacts) -> Self {
        let n = facts.processes.len() as f64;

        let mut sum_waiting = 0.0;
        let mut sum_turnaround = 0.0;
        let mut sum_response = 0.0;
        for p in &facts.processes {
            sum_waiting += p.waiting() as f64;
            sum_turnaround += p.turnaround() as f64;
            sum_response += p.response() as f64;
        }

        let waits: Vec<f64> = facts.processes.iter().map(|p| p.waiting() as f64).collect();

        Self {
            avg_waiting: sum_waiting / n,
            avg_turnaround: sum_turnaround / n,
            throughput: n / facts.final_clock as f64,
            cpu_utilization: facts.busy_ticks as f64
                / (facts.core_count as f64 * facts.final_clock as f64),
            avg_response: sum_response / n,
            context_switches: facts.context_switches,
            fairness: jain_fairness(&waits),
        }
    }
}

/// Jain's fairness index: (Σw)² / (N·Σw²).
///
/// 1.0 means perfect equality. When Σw² = 0 every value is zero and the
/// textbook formula degenerates to 0/0; all-equal values are perfectly
/// fair, so the index is defined as 1.0 there.
pub fn jain_fairness(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    let sum_sq: f64 = values.iter().map(|v| v * v).sum();
    if sum_sq == 0.0 {
        1.0
    } else {
        (sum * sum) / (values.len() as f64 * sum_sq)
    }
}
