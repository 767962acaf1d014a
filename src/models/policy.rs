//! Scheduling policy selection.
//!
//! A closed enum over the four evaluated policies. The engine branches
//! on the tag once per phase; no string comparison happens inside the
//! tick loop, and `match` keeps the policy set exhaustively checked.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A CPU scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come First-Served: non-preemptive, FIFO dispatch order.
    Fcfs,
    /// Shortest Job First, non-preemptive: dispatch the waiting process
    /// with the smallest remaining burst; never evict a running one.
    SjfNonPreemptive,
    /// Shortest Remaining Time First: SJF with preemption whenever a
    /// waiting process has strictly less remaining work than a running one.
    SjfPreemptive,
    /// Round Robin: FIFO dispatch with a fixed time quantum per grant.
    RoundRobin,
}

impl Policy {
    /// All policies, in canonical evaluation order.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::SjfNonPreemptive,
        Policy::SjfPreemptive,
        Policy::RoundRobin,
    ];

    /// Short policy name used in report tables.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::SjfNonPreemptive => "SJF-NP",
            Policy::SjfPreemptive => "SJF-P",
            Policy::RoundRobin => "RR",
        }
    }

    /// Whether the policy may evict a running process before completion.
    ///
    /// Round Robin expires quanta rather than preempting on comparison,
    /// so only SJF-P answers true here.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::SjfPreemptive)
    }

    /// Whether the policy consumes the quantum parameter.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Fcfs.name(), "FCFS");
        assert_eq!(Policy::SjfNonPreemptive.name(), "SJF-NP");
        assert_eq!(Policy::SjfPreemptive.name(), "SJF-P");
        assert_eq!(Policy::RoundRobin.name(), "RR");
    }

    #[test]
    fn test_policy_flags() {
        for policy in Policy::ALL {
            assert_eq!(policy.is_preemptive(), policy == Policy::SjfPreemptive);
            assert_eq!(policy.uses_quantum(), policy == Policy::RoundRobin);
        }
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(Policy::SjfPreemptive.to_string(), "SJF-P");
    }
}
