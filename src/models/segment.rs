//! Execution segment model.
//!
//! A segment is a (possibly partial) unit of a process's execution.
//! Non-preemptive policies emit one segment per process; SRPT and
//! round-robin may split a process into several segments, all carrying
//! the source process's id and arrival time.

use serde::{Deserialize, Serialize};

use super::Process;

/// A unit of execution produced by an ordering policy.
///
/// Segments preserve `process_id` so downstream aggregation can attribute
/// completion to the original process. Timing is computed per segment:
/// each segment is its own line in the Gantt timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Id of the source process.
    pub process_id: i64,
    /// Arrival time inherited from the source process.
    pub arrival: i64,
    /// Burst length of this segment (> 0).
    pub burst: i64,
}

impl Segment {
    /// Creates a segment.
    pub fn new(process_id: i64, arrival: i64, burst: i64) -> Self {
        Self {
            process_id,
            arrival,
            burst,
        }
    }

    /// Splits this segment into a prefix of length `len` and a suffix
    /// holding the remaining work. Both halves keep the source id and
    /// arrival time.
    ///
    /// # Panics
    /// Debug-asserts `0 < len < burst`; callers check the bound first.
    pub fn split_at(&self, len: i64) -> (Segment, Segment) {
        debug_assert!(len > 0 && len < self.burst);
        (
            Segment::new(self.process_id, self.arrival, len),
            Segment::new(self.process_id, self.arrival, self.burst - len),
        )
    }
}

impl From<&Process> for Segment {
    fn from(p: &Process) -> Self {
        Segment::new(p.id, p.arrival, p.burst)
    }
}
