//! Quantum-bounded round-robin ordering.
//!
//! One arrival-sorted pass: every entry whose burst exceeds the quantum
//! is truncated and its remainder appended to the end of the queue, in
//! discovery order. Remainders are never re-interleaved with later
//! original processes; they run after the full initial pass. This is a
//! simplification of textbook round-robin, preserved deliberately.

use std::collections::VecDeque;

use super::OrderingPolicy;
use crate::error::ScheduleError;
use crate::models::{Process, Segment};

/// Round-robin ordering with a fixed quantum.
///
/// # Errors
/// `order` fails with `InvalidInput` when `quantum <= 0`.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Maximum contiguous execution time granted per segment.
    pub quantum: i64,
}

impl RoundRobin {
    /// Creates a round-robin policy with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }
}

impl OrderingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "ROUNDROBIN"
    }

    fn order(&self, table: &[Process]) -> Result<Vec<Segment>, ScheduleError> {
        if self.quantum <= 0 {
            return Err(ScheduleError::invalid_input(format!(
                "round-robin quantum must be positive, got {}",
                self.quantum
            )));
        }

        let mut by_arrival: Vec<Segment> = table.iter().map(Segment::from).collect();
        by_arrival.sort_by_key(|s| s.arrival);

        // Explicit work queue: settled segments never change again;
        // remainders rejoin the pending queue at the back, so a remainder
        // larger than the quantum is split again when the scan reaches it.
        let mut settled = Vec::with_capacity(by_arrival.len());
        let mut pending: VecDeque<Segment> = by_arrival.into();

        while let Some(segment) = pending.pop_front() {
            if segment.burst > self.quantum {
                let (head, remainder) = segment.split_at(self.quantum);
                settled.push(head);
                pending.push_back(remainder);
            } else {
                settled.push(segment);
            }
        }

        Ok(settled)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Vec<Process> {
        vec![
            Process::new(1, 5),
            Process::new(2, 3).with_arrival(1),
            Process::new(3, 8).with_arrival(2),
            Process::new(4, 6).with_arrival(3),
        ]
    }

    fn ids(segments: &[Segment]) -> Vec<i64> {
        segments.iter().map(|s| s.process_id).collect()
    }

    fn bursts(segments: &[Segment]) -> Vec<i64> {
        segments.iter().map(|s| s.burst).collect()
    }

    #[test]
    fn test_remainders_queue_after_initial_pass() {
        let ordering = RoundRobin::new(4).order(&sample_table()).unwrap();
        // Initial pass truncated to the quantum, remainders in discovery order.
        assert_eq!(ids(&ordering), vec![1, 2, 3, 4, 1, 3, 4]);
        assert_eq!(bursts(&ordering), vec![4, 3, 4, 4, 1, 4, 2]);
    }

    #[test]
    fn test_work_conserving() {
        let table = sample_table();
        let total: i64 = table.iter().map(|p| p.burst).sum();
        let ordering = RoundRobin::new(4).order(&table).unwrap();
        let emitted: i64 = ordering.iter().map(|s| s.burst).sum();
        assert_eq!(emitted, total);
    }

    #[test]
    fn test_no_segment_exceeds_quantum() {
        let ordering = RoundRobin::new(4).order(&sample_table()).unwrap();
        assert!(ordering.iter().all(|s| s.burst <= 4));
    }

    #[test]
    fn test_remainder_split_again() {
        // Burst 10 with quantum 4 → 4, 4, 2.
        let ordering = RoundRobin::new(4).order(&[Process::new(1, 10)]).unwrap();
        assert_eq!(bursts(&ordering), vec![4, 4, 2]);
        assert_eq!(ids(&ordering), vec![1, 1, 1]);
    }

    #[test]
    fn test_sorts_by_arrival_first() {
        let table = vec![
            Process::new(1, 2).with_arrival(5),
            Process::new(2, 2).with_arrival(0),
        ];
        let ordering = RoundRobin::new(4).order(&table).unwrap();
        assert_eq!(ids(&ordering), vec![2, 1]);
    }

    #[test]
    fn test_remainder_keeps_arrival() {
        let table = vec![Process::new(1, 9).with_arrival(2)];
        let ordering = RoundRobin::new(4).order(&table).unwrap();
        assert!(ordering.iter().all(|s| s.arrival == 2));
    }

    #[test]
    fn test_invalid_quantum() {
        let table = sample_table();
        let err = RoundRobin::new(0).order(&table).unwrap_err();
        assert!(err.message.contains("quantum"));
        assert!(RoundRobin::new(-3).order(&table).is_err());
    }

    #[test]
    fn test_empty_table() {
        assert!(RoundRobin::new(4).order(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_does_not_mutate_table() {
        let table = sample_table();
        let before = table.clone();
        RoundRobin::new(4).order(&table).unwrap();
        assert_eq!(table, before);
    }
}
