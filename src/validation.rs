//! Input validation for simulation runs.
//!
//! Checks structural integrity of a workload and configuration before
//! simulation starts. A violation is fatal to that invocation and is
//! reported exactly once as a typed error; there is nothing transient
//! to retry. Detects:
//! - Empty workloads
//! - Zero core counts
//! - Zero quanta under Round Robin
//! - Zero-length bursts
//! - Arrivals not sorted in non-decreasing order

use crate::models::{Policy, Process, Tick};

/// A structural input error detected before simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationError {
    /// Error category.
    pub kind: SimulationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of structural input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationErrorKind {
    /// The process set is empty.
    EmptyWorkload,
    /// The core count is zero.
    ZeroCores,
    /// Round Robin was requested with a zero quantum.
    ZeroQuantum,
    /// A process has a zero-length burst.
    ZeroBurst,
    /// Arrival times are not in non-decreasing order.
    UnsortedArrivals,
}

impl SimulationError {
    fn new(kind: SimulationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SimulationError {}

/// Validates a workload and configuration for one simulation run.
///
/// Checks:
/// 1. The process set is non-empty
/// 2. At least one core
/// 3. Quantum > 0 when the policy is Round Robin
/// 4. Every burst is at least one tick
/// 5. Arrivals are non-decreasing (the engine's admission pointer only
///    moves forward and cannot re-admit out-of-order arrivals)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err` with the first violation found.
pub fn validate_input(
    processes: &[Process],
    core_count: usize,
    policy: Policy,
    quantum: Tick,
) -> Result<(), SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::new(
            SimulationErrorKind::EmptyWorkload,
            "workload contains no processes",
        ));
    }

    if core_count == 0 {
        return Err(SimulationError::new(
            SimulationErrorKind::ZeroCores,
            "core count must be at least 1",
        ));
    }

    if policy.uses_quantum() && quantum == 0 {
        return Err(SimulationError::new(
            SimulationErrorKind::ZeroQuantum,
            "Round Robin requires a quantum of at least 1 tick",
        ));
    }

    for p in processes {
        if p.burst == 0 {
            return Err(SimulationError::new(
                SimulationErrorKind::ZeroBurst,
                format!("process {} has a zero-length burst", p.pid),
            ));
        }
    }

    for (i, pair) in processes.windows(2).enumerate() {
        if pair[1].arrival < pair[0].arrival {
            return Err(SimulationError::new(
                SimulationErrorKind::UnsortedArrivals,
                format!(
                    "arrival at position {} precedes its predecessor ({} < {})",
                    i + 1,
                    pair[1].arrival,
                    pair[0].arrival
                ),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procs(specs: &[(u64, u64)]) -> Vec<Process> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst))| Process::new(i as u32, arrival, burst))
            .collect()
    }

    #[test]
    fn test_valid_input() {
        let p = procs(&[(0, 5), (2, 3), (2, 1)]);
        assert!(validate_input(&p, 2, Policy::Fcfs, 0).is_ok());
        assert!(validate_input(&p, 1, Policy::RoundRobin, 10).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        let err = validate_input(&[], 4, Policy::Fcfs, 10).unwrap_err();
        assert_eq!(err.kind, SimulationErrorKind::EmptyWorkload);
    }

    #[test]
    fn test_zero_cores() {
        let p = procs(&[(0, 5)]);
        let err = validate_input(&p, 0, Policy::Fcfs, 10).unwrap_err();
        assert_eq!(err.kind, SimulationErrorKind::ZeroCores);
    }

    #[test]
    fn test_zero_quantum_only_matters_for_rr() {
        let p = procs(&[(0, 5)]);
        let err = validate_input(&p, 1, Policy::RoundRobin, 0).unwrap_err();
        assert_eq!(err.kind, SimulationErrorKind::ZeroQuantum);
        // Other policies ignore the quantum entirely.
        assert!(validate_input(&p, 1, Policy::SjfPreemptive, 0).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let p = procs(&[(0, 5), (1, 0)]);
        let err = validate_input(&p, 1, Policy::Fcfs, 0).unwrap_err();
        assert_eq!(err.kind, SimulationErrorKind::ZeroBurst);
        assert!(err.message.contains("process 1"));
    }

    #[test]
    fn test_unsorted_arrivals() {
        let p = procs(&[(5, 1), (3, 1)]);
        let err = validate_input(&p, 1, Policy::Fcfs, 0).unwrap_err();
        assert_eq!(err.kind, SimulationErrorKind::UnsortedArrivals);
    }

    #[test]
    fn test_equal_arrivals_are_sorted() {
        let p = procs(&[(4, 1), (4, 2), (4, 3)]);
        assert!(validate_input(&p, 1, Policy::Fcfs, 0).is_ok());
    }
}
