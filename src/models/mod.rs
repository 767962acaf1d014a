//! Simulation domain models.
//!
//! Immutable input types for the scheduling engine. All mutable
//! per-run state (remaining bursts, core slots, the ready queue) is
//! private to `engine` and lives only for one `simulate` call.

mod policy;
mod process;

pub use policy::Policy;
pub use process::{Process, ProcessId, Tick};
