//! The scheduling engine and its metric reduction.
//!
//! One indivisible unit: `sim` runs the discrete-time loop and emits
//! raw per-process timing facts, `metrics` reduces those facts into
//! seven summary statistics, and `ready` provides the waiting-order
//! abstraction shared by all four policies.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Jain, Chiu & Hawe (1984), "A Quantitative Measure of Fairness and
//!   Discrimination for Resource Allocation in Shared Computer Systems"

mod metrics;
mod ready;
mod sim;

pub use metrics::{jain_fairness, Metrics, ProcessFacts, RunFacts};
pub use ready::{ReadyOrdering, ReadyQueue};
pub use sim::simulate;
