//! Per-segment timing record.
//!
//! One record per segment processed, in processing order. Together the
//! records form the Gantt timeline of a run.
//!
//! # Invariants
//! - `turnaround = completion - arrival`
//! - `waiting = turnaround - burst`
//! where `arrival`/`burst` belong to the originating segment.

use serde::{Deserialize, Serialize};

/// Timing of one executed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingRecord {
    /// Id of the source process.
    pub process_id: i64,
    /// Simulated clock value when the segment finished.
    pub completion: i64,
    /// Completion time minus arrival time.
    pub turnaround: i64,
    /// Turnaround time minus burst time.
    pub waiting: i64,
}

impl TimingRecord {
    /// Creates a timing record.
    pub fn new(process_id: i64, completion: i64, turnaround: i64, waiting: i64) -> Self {
        Self {
            process_id,
            completion,
            turnaround,
            waiting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_record_fields() {
        let r = TimingRecord::new(1, 5, 5, 0);
        assert_eq!(r.process_id, 1);
        assert_eq!(r.completion, 5);
        assert_eq!(r.turnaround, 5);
        assert_eq!(r.waiting, 0);
    }
}
