//! Comparator-based ordering policies.
//!
//! These three policies never split a process: each emits exactly one
//! segment per table entry. Ties are broken by original relative order
//! (stable sorts throughout).

use super::OrderingPolicy;
use crate::error::ScheduleError;
use crate::models::{Process, Segment};

fn as_segments(table: &[Process]) -> Vec<Segment> {
    table.iter().map(Segment::from).collect()
}

// ======================== FCFS ========================

/// First-come-first-served.
///
/// No reordering: the table's natural order is taken as arrival order.
/// Callers wanting strict arrival-order semantics supply the table
/// already sorted by arrival.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl OrderingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn order(&self, table: &[Process]) -> Result<Vec<Segment>, ScheduleError> {
        Ok(as_segments(table))
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

// ======================== SJF ========================

/// Shortest-job-first, non-preemptive.
///
/// The first entry stays in place (it is already in service); the
/// remaining entries are stable-sorted by ascending burst length.
/// Models a scheduler that commits to the running job and only reorders
/// the waiting queue.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl OrderingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn order(&self, table: &[Process]) -> Result<Vec<Segment>, ScheduleError> {
        let mut segments = as_segments(table);
        if segments.len() > 1 {
            segments[1..].sort_by_key(|s| s.burst);
        }
        Ok(segments)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

// ======================== Priority ========================

/// Non-preemptive priority ordering.
///
/// Stable-sorts the whole table by ascending priority value
/// (lower value = higher precedence).
#[derive(Debug, Clone, Copy)]
pub struct PriorityOrder;

impl OrderingPolicy for PriorityOrder {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn order(&self, table: &[Process]) -> Result<Vec<Segment>, ScheduleError> {
        let mut indexed: Vec<(i32, Segment)> = table
            .iter()
            .map(|p| (p.priority, Segment::from(p)))
            .collect();
        indexed.sort_by_key(|(priority, _)| *priority);
        Ok(indexed.into_iter().map(|(_, s)| s).collect())
    }

    fn description(&self) -> &'static str {
        "Ascending Priority Value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Vec<Process> {
        vec![
            Process::new(1, 5).with_priority(2),
            Process::new(2, 3).with_arrival(1).with_priority(1),
            Process::new(3, 8).with_arrival(2).with_priority(3),
            Process::new(4, 6).with_arrival(3).with_priority(4),
        ]
    }

    fn ids(segments: &[Segment]) -> Vec<i64> {
        segments.iter().map(|s| s.process_id).collect()
    }

    #[test]
    fn test_fcfs_preserves_order() {
        let table = sample_table();
        let ordering = Fcfs.order(&table).unwrap();
        assert_eq!(ids(&ordering), vec![1, 2, 3, 4]);
        // Table untouched
        assert_eq!(table[0].burst, 5);
    }

    #[test]
    fn test_sjf_pins_head() {
        let table = sample_table();
        let ordering = Sjf.order(&table).unwrap();
        // Head fixed at process 1; rest sorted by burst: 2(3), 4(6), 3(8)
        assert_eq!(ids(&ordering), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_sjf_stable_on_ties() {
        let table = vec![
            Process::new(1, 5),
            Process::new(2, 4),
            Process::new(3, 4),
            Process::new(4, 2),
        ];
        let ordering = Sjf.order(&table).unwrap();
        // 2 and 3 tie on burst → original relative order kept
        assert_eq!(ids(&ordering), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_sjf_single_entry() {
        let table = vec![Process::new(1, 5)];
        let ordering = Sjf.order(&table).unwrap();
        assert_eq!(ids(&ordering), vec![1]);
    }

    #[test]
    fn test_priority_sorts_all() {
        let table = sample_table();
        let ordering = PriorityOrder.order(&table).unwrap();
        // Priorities 2,1,3,4 → sorted ascending
        assert_eq!(ids(&ordering), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_priority_stable_on_ties() {
        let table = vec![
            Process::new(1, 5).with_priority(1),
            Process::new(2, 3).with_priority(1),
            Process::new(3, 8).with_priority(0),
        ];
        let ordering = PriorityOrder.order(&table).unwrap();
        assert_eq!(ids(&ordering), vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_table_orders_empty() {
        assert!(Fcfs.order(&[]).unwrap().is_empty());
        assert!(Sjf.order(&[]).unwrap().is_empty());
        assert!(PriorityOrder.order(&[]).unwrap().is_empty());
    }
}
