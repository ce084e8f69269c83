//! Process descriptor model.
//!
//! A process is a unit of batch work with an arrival time, a CPU burst
//! length, and a priority. The table of processes is read once per run
//! and is immutable thereafter; policies operate on private copies.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process descriptor.
///
/// One descriptor per original process. Preemptive policies derive
/// additional execution segments from a descriptor but never mutate it.
///
/// # Time Representation
/// Arrival and burst are integer time units relative to a simulation
/// epoch (t=0). The consumer defines the unit (ticks, ms, seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: i64,
    /// Arrival time (>= 0).
    pub arrival: i64,
    /// Total CPU burst length (> 0).
    pub burst: i64,
    /// Scheduling priority (lower value = higher precedence).
    pub priority: i32,
}

impl Process {
    /// Creates a new process arriving at t=0 with zero priority.
    pub fn new(id: i64, burst: i64) -> Self {
        Self {
            id,
            arrival: 0,
            burst,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the priority (lower = higher precedence).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(1, 5).with_arrival(2).with_priority(3);
        assert_eq!(p.id, 1);
        assert_eq!(p.arrival, 2);
        assert_eq!(p.burst, 5);
        assert_eq!(p.priority, 3);
    }

    #[test]
    fn test_process_defaults() {
        let p = Process::new(7, 10);
        assert_eq!(p.arrival, 0);
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn test_process_serde() {
        let p = Process::new(1, 5).with_arrival(2).with_priority(3);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
