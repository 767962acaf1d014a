//! Discrete-time scheduling engine.
//!
//! Owns the tick loop: admission of arriving processes, per-policy
//! preemption and dispatch, one tick of execution per busy core, and
//! clock advancement. Single-threaded and synchronous; every invocation
//! owns all of its working state and shares nothing with other runs.
//!
//! # Tick phases
//!
//! 1. Admit every process whose arrival ≤ clock into the ready queue.
//! 2. Preemption check (SJF-P only): evict a running process when a
//!    waiting one has strictly less remaining work.
//! 3. Dispatch the next ready process onto each idle core.
//! 4. Execute one tick on every busy core.
//! 5. Advance the clock: +1, or jump to the next arrival when no core
//!    executed and unadmitted work remains.
//!
//! Cores are always scanned in ascending index order. That order is
//! load-bearing for deterministic context-switch counts and dispatch
//! tie-breaking when several cores free up in the same tick.

use crate::models::{Policy, Process, Tick};
use crate::validation::{validate_input, SimulationError};

use super::metrics::{Metrics, ProcessFacts, RunFacts};
use super::ready::{ReadyOrdering, ReadyQueue};

/// Mutable per-process bookkeeping, owned by one run.
#[derive(Debug)]
struct ProcessRun {
    /// Ticks of burst still to execute.
    remaining: Tick,
    /// Tick of the first-ever dispatch; `None` until started.
    first_dispatch: Option<Tick>,
    /// Completion tick; set exactly once, when remaining hits 0.
    finish: Option<Tick>,
}

/// One simulated core: idle, or executing a process slot.
#[derive(Debug)]
struct CoreSlot {
    /// Index into the arrival-sorted workload, if busy.
    current: Option<usize>,
    /// Ticks left in the current quantum (Round Robin only).
    quantum_left: Tick,
}

/// Simulates one (policy, quantum) configuration over a workload.
///
/// `processes` must be sorted by arrival ascending; the engine advances
/// a single forward admission pointer. `quantum` is consumed only by
/// Round Robin and may be 0 for the other policies.
///
/// # Errors
/// Returns a [`SimulationError`] for structural input violations
/// (empty workload, zero cores, zero RR quantum, zero burst, unsorted
/// arrivals). Validation runs once, before any state is built.
///
/// # Example
/// ```
/// use tick_sched::engine::simulate;
/// use tick_sched::models::{Policy, Process};
///
/// let workload = vec![Process::new(0, 0, 5), Process::new(1, 1, 3)];
/// let metrics = simulate(&workload, 1, Policy::Fcfs, 0).unwrap();
/// assert!(metrics.cpu_utilization > 0.0);
/// ```
pub fn simulate(
    processes: &[Process],
    core_count: usize,
    policy: Policy,
    quantum: Tick,
) -> Result<Metrics, SimulationError> {
    validate_input(processes, core_count, policy, quantum)?;
    let facts = Simulation::new(processes, core_count, policy, quantum).run();
    Ok(Metrics::from_facts(&facts))
}

/// Working state of one simulation run.
///
/// Created at the start of a `simulate` call and discarded at its end.
struct Simulation<'a> {
    processes: &'a [Process],
    policy: Policy,
    quantum: Tick,
    clock: Tick,
    runs: Vec<ProcessRun>,
    cores: Vec<CoreSlot>,
    ready: ReadyQueue,
    /// Forward admission pointer into the arrival-sorted workload.
    next_arrival: usize,
    completed: usize,
    context_switches: u64,
    busy_ticks: u64,
}

impl<'a> Simulation<'a> {
    fn new(processes: &'a [Process], core_count: usize, policy: Policy, quantum: Tick) -> Self {
        let ordering = match policy {
            Policy::Fcfs | Policy::RoundRobin => ReadyOrdering::Fifo,
            Policy::SjfNonPreemptive | Policy::SjfPreemptive => ReadyOrdering::ShortestRemaining,
        };

        Self {
            processes,
            policy,
            quantum,
            clock: 0,
            runs: processes
                .iter()
                .map(|p| ProcessRun {
                    remaining: p.burst,
                    first_dispatch: None,
                    finish: None,
                })
                .collect(),
            cores: (0..core_count)
                .map(|_| CoreSlot {
                    current: None,
                    quantum_left: quantum,
                })
                .collect(),
            ready: ReadyQueue::new(ordering),
            next_arrival: 0,
            completed: 0,
            context_switches: 0,
            busy_ticks: 0,
        }
    }

    /// Runs the tick loop to completion and returns the raw facts.
    fn run(mut self) -> RunFacts {
        while self.completed < self.processes.len() {
            self.admit();
            if self.policy.is_preemptive() {
                self.preempt();
            }
            self.dispatch();
            let executed = self.execute();
            self.advance_clock(executed);
        }

        let processes = self
            .processes
            .iter()
            .zip(&self.runs)
            .map(|(p, run)| ProcessFacts {
                arrival: p.arrival,
                burst: p.burst,
                first_dispatch: run
                    .first_dispatch
                    .expect("completed process was dispatched at least once"),
                finish: run.finish.expect("loop exits only when every process finished"),
            })
            .collect();

        RunFacts {
            processes,
            core_count: self.cores.len(),
            final_clock: self.clock,
            busy_ticks: self.busy_ticks,
            context_switches: self.context_switches,
        }
    }

    /// Moves every process with arrival ≤ clock into the ready queue,
    /// in arrival order.
    fn admit(&mut self) {
        while self.next_arrival < self.processes.len()
            && self.processes[self.next_arrival].arrival <= self.clock
        {
            let slot = self.next_arrival;
            self.ready.push(slot, self.runs[slot].remaining);
            self.next_arrival += 1;
        }
    }

    /// SJF-P eviction: a running process yields its core when a waiting
    /// one has strictly less remaining work. Strict inequality only;
    /// equal remainings never swap, so equally-short jobs cannot
    /// livelock each other.
    fn preempt(&mut self) {
        for c in 0..self.cores.len() {
            let Some(slot) = self.cores[c].current else {
                continue;
            };
            let Some(best) = self.ready.peek_remaining() else {
                break;
            };
            if best < self.runs[slot].remaining {
                self.ready.push(slot, self.runs[slot].remaining);
                self.cores[c].current = None;
                self.cores[c].quantum_left = self.quantum;
                self.context_switches += 1;
            }
        }
    }

    /// Assigns the next ready process to each idle core, recording the
    /// first-dispatch tick on a process's first-ever grant.
    fn dispatch(&mut self) {
        for c in 0..self.cores.len() {
            if self.cores[c].current.is_some() {
                continue;
            }
            let Some(slot) = self.ready.pop() else {
                break;
            };
            self.cores[c].current = Some(slot);
            self.cores[c].quantum_left = self.quantum;
            self.context_switches += 1;
            if self.runs[slot].first_dispatch.is_none() {
                self.runs[slot].first_dispatch = Some(self.clock);
            }
        }
    }

    /// Executes one tick on every busy core. Returns whether any core
    /// executed work this tick.
    fn execute(&mut self) -> bool {
        let mut executed = false;
        for c in 0..self.cores.len() {
            let Some(slot) = self.cores[c].current else {
                continue;
            };
            executed = true;
            self.runs[slot].remaining -= 1;
            self.busy_ticks += 1;

            if self.runs[slot].remaining == 0 {
                self.runs[slot].finish = Some(self.clock + 1);
                self.completed += 1;
                self.cores[c].current = None;
                self.context_switches += 1;
            } else if self.policy == Policy::RoundRobin {
                self.cores[c].quantum_left -= 1;
                if self.cores[c].quantum_left == 0 {
                    // Quantum expired: back to the tail of the queue.
                    self.ready.push(slot, self.runs[slot].remaining);
                    self.cores[c].current = None;
                    self.context_switches += 1;
                }
            }
        }
        executed
    }

    /// Advances the clock by one busy tick, or jumps it to the next
    /// arrival when every core sat idle and unadmitted work remains.
    ///
    /// The jump only happens with *all* cores idle. Idle cores alongside
    /// busy ones advance tick by tick; cores cannot jump ahead
    /// individually.
    fn advance_clock(&mut self, executed: bool) {
        if !executed && self.next_arrival < self.processes.len() {
            self.clock = self.processes[self.next_arrival].arrival;
        } else {
            self.clock += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::SimulationErrorKind;

    fn procs(specs: &[(u64, u64)]) -> Vec<Process> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst))| Process::new(i as u32, arrival, burst))
            .collect()
    }

    /// Runs the engine and returns the raw facts instead of metrics,
    /// for tests that inspect per-process timing.
    fn run_facts(
        specs: &[(u64, u64)],
        core_count: usize,
        policy: Policy,
        quantum: Tick,
    ) -> RunFacts {
        let processes = procs(specs);
        validate_input(&processes, core_count, policy, quantum).unwrap();
        Simulation::new(&processes, core_count, policy, quantum).run()
    }

    #[test]
    fn test_single_process_fcfs() {
        let facts = run_facts(&[(0, 5)], 1, Policy::Fcfs, 0);
        let p = facts.processes[0];
        assert_eq!(p.first_dispatch, 0);
        assert_eq!(p.finish, 5);
        assert_eq!(p.waiting(), 0);
        assert_eq!(facts.final_clock, 5);
        assert_eq!(facts.busy_ticks, 5);
        // One dispatch, one completion.
        assert_eq!(facts.context_switches, 2);
    }

    #[test]
    fn test_fcfs_is_fifo_stable_on_same_tick() {
        // All ready at tick 0; dispatch must match arrival order even
        // though later processes are shorter.
        let facts = run_facts(&[(0, 5), (0, 1), (0, 2)], 1, Policy::Fcfs, 0);
        let first: Vec<Tick> = facts.processes.iter().map(|p| p.first_dispatch).collect();
        assert_eq!(first, vec![0, 5, 6]);
    }

    #[test]
    fn test_sjf_np_orders_by_burst_but_never_evicts() {
        // P0 (burst 10) starts first; once running it must finish even
        // though P1 (burst 1) arrives immediately after.
        let facts = run_facts(&[(0, 10), (1, 1), (1, 4)], 1, Policy::SjfNonPreemptive, 0);
        assert_eq!(facts.processes[0].finish, 10);
        // Shorter job dispatched before the longer one after P0 ends.
        assert_eq!(facts.processes[1].first_dispatch, 10);
        assert_eq!(facts.processes[2].first_dispatch, 11);
        // Exactly one dispatch and one completion per process: no
        // preemption-triggered switches under SJF-NP.
        assert_eq!(facts.context_switches, 2 * 3);
    }

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        // A arrives at 0 with burst 10; B arrives at 3 with burst 2.
        // B preempts A at tick 3, completes at 5; A resumes and
        // finishes at 12.
        let facts = run_facts(&[(0, 10), (3, 2)], 1, Policy::SjfPreemptive, 0);
        let a = facts.processes[0];
        let b = facts.processes[1];
        assert_eq!(b.first_dispatch, 3);
        assert_eq!(b.finish, 5);
        assert_eq!(a.first_dispatch, 0);
        assert_eq!(a.finish, 12);
        // Dispatch A, evict A, dispatch B, complete B, re-dispatch A,
        // complete A.
        assert_eq!(facts.context_switches, 6);
    }

    #[test]
    fn test_srtf_equal_remaining_does_not_preempt() {
        // B arrives with the same remaining as A has left; strict
        // inequality means A keeps the core.
        let facts = run_facts(&[(0, 6), (2, 4)], 1, Policy::SjfPreemptive, 0);
        assert_eq!(facts.processes[0].finish, 6);
        assert_eq!(facts.processes[1].first_dispatch, 6);
        assert_eq!(facts.context_switches, 4);
    }

    #[test]
    fn test_round_robin_quantum_trace() {
        // q=5, one core, P1 burst 12 and P2 burst 4 both at tick 0.
        // P1 runs [0,5), P2 runs [5,9) and completes, P1 runs [9,14),
        // then [14,16) and completes.
        let facts = run_facts(&[(0, 12), (0, 4)], 1, Policy::RoundRobin, 5);
        let p1 = facts.processes[0];
        let p2 = facts.processes[1];
        assert_eq!(p1.first_dispatch, 0);
        assert_eq!(p2.first_dispatch, 5);
        assert_eq!(p2.finish, 9);
        assert_eq!(p1.finish, 16);
        assert_eq!(facts.final_clock, 16);
        assert_eq!(facts.busy_ticks, 16);
        // Dispatches P1,P2,P1,P1 = 4; quantum expiries at ticks 4 and
        // 13 = 2; completions = 2.
        assert_eq!(facts.context_switches, 8);
    }

    #[test]
    fn test_round_robin_completion_within_quantum_has_no_expiry() {
        let facts = run_facts(&[(0, 3)], 1, Policy::RoundRobin, 5);
        assert_eq!(facts.processes[0].finish, 3);
        assert_eq!(facts.context_switches, 2);
    }

    #[test]
    fn test_clock_jumps_over_idle_gap() {
        // Nothing arrives until tick 100; the clock must jump there
        // instead of ticking through the gap, and the gap must not be
        // counted busy.
        let facts = run_facts(&[(100, 5)], 1, Policy::Fcfs, 0);
        let p = facts.processes[0];
        assert_eq!(p.first_dispatch, 100);
        assert_eq!(p.finish, 105);
        assert_eq!(p.response(), 0);
        assert_eq!(facts.busy_ticks, 5);
        assert_eq!(facts.final_clock, 105);
    }

    #[test]
    fn test_gap_between_processes_jumps_too() {
        let facts = run_facts(&[(0, 2), (50, 2)], 1, Policy::Fcfs, 0);
        assert_eq!(facts.processes[0].finish, 2);
        assert_eq!(facts.processes[1].first_dispatch, 50);
        assert_eq!(facts.processes[1].finish, 52);
        assert_eq!(facts.busy_ticks, 4);
    }

    #[test]
    fn test_idle_cores_tick_alongside_busy_ones() {
        // Core 0 runs P0 from tick 0; core 1 sits idle until P1
        // arrives at tick 2. Idle ticks must not count as busy, and
        // core 1 must not jump ahead to the arrival.
        let facts = run_facts(&[(0, 4), (2, 1)], 2, Policy::Fcfs, 0);
        let p0 = facts.processes[0];
        let p1 = facts.processes[1];
        assert_eq!(p0.first_dispatch, 0);
        assert_eq!(p0.finish, 4);
        assert_eq!(p1.first_dispatch, 2);
        assert_eq!(p1.finish, 3);
        assert_eq!(facts.final_clock, 4);
        // 5 busy core-ticks over 2 cores × 4 ticks.
        assert_eq!(facts.busy_ticks, 5);
        let m = Metrics::from_facts(&facts);
        assert!((m.cpu_utilization - 5.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_multi_core_dispatch_prefers_lowest_index() {
        // Two cores free at tick 0 with two ready processes: core 0
        // takes the first, core 1 the second, deterministically.
        let facts = run_facts(&[(0, 2), (0, 2)], 2, Policy::Fcfs, 0);
        assert_eq!(facts.processes[0].first_dispatch, 0);
        assert_eq!(facts.processes[1].first_dispatch, 0);
        assert_eq!(facts.final_clock, 2);
    }

    #[test]
    fn test_all_policies_complete_every_process() {
        let specs: Vec<(u64, u64)> = vec![(0, 7), (1, 3), (4, 9), (4, 1), (12, 5), (20, 2)];
        for policy in Policy::ALL {
            for &cores in &[1usize, 2, 4] {
                let facts = run_facts(&specs, cores, policy, 3);
                assert_eq!(facts.processes.len(), specs.len());
                for p in &facts.processes {
                    // Waiting = finish - arrival - burst never underflows.
                    assert!(p.finish >= p.arrival + p.burst);
                    assert!(p.first_dispatch >= p.arrival);
                }
            }
        }
    }

    #[test]
    fn test_metrics_bounds_across_policies() {
        let specs: Vec<(u64, u64)> = vec![(0, 4), (2, 8), (3, 1), (9, 6)];
        for policy in Policy::ALL {
            let processes = procs(&specs);
            let m = simulate(&processes, 2, policy, 4).unwrap();
            assert!(m.cpu_utilization > 0.0 && m.cpu_utilization <= 1.0);
            assert!(m.throughput > 0.0);
            assert!(m.avg_waiting >= 0.0);
            assert!(m.fairness > 0.0 && m.fairness <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_repeated_runs_are_bit_identical() {
        let processes = procs(&[(0, 9), (1, 2), (3, 6), (3, 6), (10, 4)]);
        for policy in Policy::ALL {
            let a = simulate(&processes, 3, policy, 5).unwrap();
            let b = simulate(&processes, 3, policy, 5).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_fairness_one_when_no_process_waits() {
        // Enough cores that nobody ever waits.
        let processes = procs(&[(0, 5), (0, 3), (0, 8)]);
        let m = simulate(&processes, 3, Policy::Fcfs, 0).unwrap();
        assert!((m.avg_waiting - 0.0).abs() < 1e-12);
        assert_eq!(m.fairness, 1.0);
    }

    #[test]
    fn test_precondition_errors_are_typed() {
        let processes = procs(&[(0, 5)]);
        assert_eq!(
            simulate(&[], 1, Policy::Fcfs, 0).unwrap_err().kind,
            SimulationErrorKind::EmptyWorkload
        );
        assert_eq!(
            simulate(&processes, 0, Policy::Fcfs, 0).unwrap_err().kind,
            SimulationErrorKind::ZeroCores
        );
        assert_eq!(
            simulate(&processes, 1, Policy::RoundRobin, 0)
                .unwrap_err()
                .kind,
            SimulationErrorKind::ZeroQuantum
        );
    }

    #[test]
    fn test_more_cores_than_processes() {
        let facts = run_facts(&[(0, 3)], 8, Policy::RoundRobin, 2);
        assert_eq!(facts.processes[0].finish, 3);
        assert_eq!(facts.busy_ticks, 3);
    }
}
