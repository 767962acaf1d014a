//! Process model.
//!
//! A process is a single atomic CPU burst: its arrival tick and burst
//! length are known entirely at arrival time. There are no I/O phases,
//! priorities, or multi-burst jobs.

use serde::{Deserialize, Serialize};

/// Discrete simulation time unit.
///
/// The simulation clock is a monotonically non-decreasing tick counter;
/// every burst, arrival, and quantum is expressed in ticks.
pub type Tick = u64;

/// Process identifier.
pub type ProcessId = u32;

/// A synthetic process to be scheduled.
///
/// Immutable: created once by the workload generator and never mutated.
/// All mutable bookkeeping (remaining burst, dispatch and finish ticks)
/// lives inside a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: ProcessId,
    /// Arrival tick.
    pub arrival: Tick,
    /// Total CPU burst length in ticks.
    pub burst: Tick,
}

impl Process {
    /// Creates a new process.
    pub fn new(pid: ProcessId, arrival: Tick, burst: Tick) -> Self {
        Self {
            pid,
            arrival,
            burst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new(3, 10, 25);
        assert_eq!(p.pid, 3);
        assert_eq!(p.arrival, 10);
        assert_eq!(p.burst, 25);
    }

    #[test]
    fn test_process_serde_roundtrip() {
        let p = Process::new(0, 0, 1);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
