//! Ready queue: processes waiting for a core.
//!
//! One container abstraction over the two waiting orders the policies
//! need, selected at construction. This keeps admission and dispatch
//! code identical across all four policies.
//!
//! # Ordering
//!
//! - `Fifo` — insertion order (FCFS and Round Robin).
//! - `ShortestRemaining` — ascending remaining burst (both SJF
//!   variants), ties broken by insertion order. The remaining burst is
//!   captured at insertion time; a waiting process's remaining never
//!   changes while queued, so the captured key stays accurate.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::models::Tick;

/// Ordering discipline of a [`ReadyQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyOrdering {
    /// First-in first-out.
    Fifo,
    /// Ascending remaining burst, stable on ties.
    ShortestRemaining,
}

/// Queue of process slots (indices into the arrival-sorted workload)
/// waiting for a core.
#[derive(Debug)]
pub enum ReadyQueue {
    /// FIFO backing for FCFS and Round Robin.
    Fifo(VecDeque<usize>),
    /// Min-heap keyed by (remaining, insertion sequence) for SJF.
    ShortestRemaining {
        heap: BinaryHeap<Reverse<(Tick, u64, usize)>>,
        /// Monotonic insertion counter; makes heap order stable.
        seq: u64,
    },
}

impl ReadyQueue {
    /// Creates an empty queue with the given ordering.
    pub fn new(ordering: ReadyOrdering) -> Self {
        match ordering {
            ReadyOrdering::Fifo => Self::Fifo(VecDeque::new()),
            ReadyOrdering::ShortestRemaining => Self::ShortestRemaining {
                heap: BinaryHeap::new(),
                seq: 0,
            },
        }
    }

    /// Enqueues a process slot with its current remaining burst.
    ///
    /// FIFO ignores `remaining`; the SJF heap keys on it.
    pub fn push(&mut self, slot: usize, remaining: Tick) {
        match self {
            Self::Fifo(queue) => queue.push_back(slot),
            Self::ShortestRemaining { heap, seq } => {
                heap.push(Reverse((remaining, *seq, slot)));
                *seq += 1;
            }
        }
    }

    /// Removes and returns the next slot per the queue's ordering.
    pub fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::ShortestRemaining { heap, .. } => {
                heap.pop().map(|Reverse((_, _, slot))| slot)
            }
        }
    }

    /// Remaining burst of the best-ranked waiting process, if any.
    ///
    /// Only meaningful for `ShortestRemaining`; for FIFO there is no
    /// remaining-based ranking and this returns `None`.
    pub fn peek_remaining(&self) -> Option<Tick> {
        match self {
            Self::Fifo(_) => None,
            Self::ShortestRemaining { heap, .. } => {
                heap.peek().map(|Reverse((remaining, _, _))| *remaining)
            }
        }
    }

    /// Whether the queue holds no waiting processes.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Fifo(queue) => queue.is_empty(),
            Self::ShortestRemaining { heap, .. } => heap.is_empty(),
        }
    }

    /// Number of waiting processes.
    pub fn len(&self) -> usize {
        match self {
            Self::Fifo(queue) => queue.len(),
            Self::ShortestRemaining { heap, .. } => heap.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = ReadyQueue::new(ReadyOrdering::Fifo);
        q.push(2, 99);
        q.push(0, 1);
        q.push(1, 50);
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(0));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_shortest_remaining_order() {
        let mut q = ReadyQueue::new(ReadyOrdering::ShortestRemaining);
        q.push(0, 10);
        q.push(1, 3);
        q.push(2, 7);
        assert_eq!(q.peek_remaining(), Some(3));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(0));
        assert!(q.is_empty());
    }

    #[test]
    fn test_ties_are_fifo_stable() {
        let mut q = ReadyQueue::new(ReadyOrdering::ShortestRemaining);
        q.push(5, 4);
        q.push(3, 4);
        q.push(9, 4);
        assert_eq!(q.pop(), Some(5));
        assert_eq!(q.pop(), Some(3));
        assert_eq!(q.pop(), Some(9));
    }

    #[test]
    fn test_stability_survives_interleaved_pops() {
        let mut q = ReadyQueue::new(ReadyOrdering::ShortestRemaining);
        q.push(0, 2);
        q.push(1, 5);
        assert_eq!(q.pop(), Some(0));
        q.push(2, 5);
        // Slot 1 was inserted before slot 2 with the same key.
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), Some(2));
    }

    #[test]
    fn test_fifo_peek_remaining_is_none() {
        let mut q = ReadyQueue::new(ReadyOrdering::Fifo);
        q.push(0, 7);
        assert_eq!(q.peek_remaining(), None);
    }
}
