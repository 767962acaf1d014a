//! Synthetic workload generation.
//!
//! Produces a fixed set of processes with uniformly sampled arrival
//! times and burst lengths. The random source is an explicit generator
//! instance passed in by the caller, never process-wide shared state,
//! so simulation runs stay independent of generation order and a seeded
//! generator reproduces the same workload exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId, Tick};

/// Parameters for synthetic workload generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Arrival times are sampled uniformly from `0..=max_arrival`.
    pub max_arrival: Tick,
    /// Burst lengths are sampled uniformly from `1..=max_burst`.
    pub max_burst: Tick,
}

impl WorkloadConfig {
    /// Creates a config with the default sampling ranges
    /// (arrivals up to 1000, bursts up to 200).
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            max_arrival: 1000,
            max_burst: 200,
        }
    }

    /// Sets the maximum arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the maximum burst length.
    pub fn with_max_burst(mut self, max_burst: Tick) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Generates a workload sorted by arrival time.
    ///
    /// The sort is stable: processes arriving at the same tick keep
    /// their generation order, which the engine relies on for FIFO
    /// tie-breaking.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let mut processes: Vec<Process> = (0..self.process_count)
            .map(|i| {
                Process::new(
                    i as ProcessId,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
            })
            .collect();
        processes.sort_by_key(|p| p.arrival);
        processes
    }
}
