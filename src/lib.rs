//! Discrete-time CPU scheduling policy simulator.
//!
//! Evaluates FCFS, SJF (non-preemptive and preemptive/SRTF), and Round
//! Robin by simulating, tick by tick, how a fixed synthetic workload is
//! dispatched across multiple identical cores, then reduces each run
//! into seven comparative metrics.
//!
//! # Modules
//!
//! - **`models`**: Immutable domain types — `Process`, `Policy`
//! - **`engine`**: The core — tick-loop simulation, ready-queue
//!   ordering, and the metric reduction
//! - **`workload`**: Seeded synthetic workload generation
//! - **`compare`**: Runs every (policy, quantum) configuration over a
//!   workload
//! - **`report`**: CSV table writer and the chart-rendering sink
//! - **`validation`**: Structural input checks (empty workloads, zero
//!   cores, zero quanta)
//!
//! # Example
//!
//! ```
//! use tick_sched::compare::compare_policies;
//! use tick_sched::workload::WorkloadConfig;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let workload = WorkloadConfig::new(20).generate(&mut rng);
//! let runs = compare_policies(&workload, 4, &[10, 5, 20]).unwrap();
//! assert_eq!(runs.len(), 6);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness"

pub mod compare;
pub mod engine;
pub mod models;
pub mod report;
pub mod validation;
pub mod workload;

pub use compare::{compare_policies, PolicyRun};
pub use engine::{simulate, Metrics};
pub use models::{Policy, Process, ProcessId, Tick};
pub use validation::{SimulationError, SimulationErrorKind};
pub use workload::WorkloadConfig;
