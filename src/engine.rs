//! Policy-agnostic scheduling engine.
//!
//! Reduces an execution-ordered sequence of segments, left to right,
//! into per-segment timing records. Segments run back-to-back starting
//! at time 0: arrival gaps never insert idle time and only affect
//! turnaround and waiting, matching non-idling batch semantics.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use crate::error::ScheduleError;
use crate::models::{Process, Segment, TimingRecord};
use crate::policies::OrderingPolicy;

/// Left-to-right Gantt reduction over an ordered segment sequence.
///
/// The engine owns no state across calls; every invocation is independent
/// and deterministic given the ordering.
///
/// # Example
///
/// ```
/// use cpu_sched::engine::SchedulingEngine;
/// use cpu_sched::models::Process;
/// use cpu_sched::policies::Fcfs;
///
/// let table = vec![Process::new(1, 5), Process::new(2, 3).with_arrival(1)];
/// let gantt = SchedulingEngine::new().run(&Fcfs, &table).unwrap();
/// assert_eq!(gantt[0].completion, 5);
/// assert_eq!(gantt[1].completion, 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchedulingEngine;

impl SchedulingEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Reduces an ordering into timing records.
    ///
    /// For each segment: `completion += burst`,
    /// `turnaround = completion - arrival`, `waiting = turnaround - burst`.
    /// Output length equals input length and completion is non-decreasing.
    ///
    /// # Errors
    /// `InvalidInput` when the ordering is empty.
    pub fn reduce(&self, ordering: &[Segment]) -> Result<Vec<TimingRecord>, ScheduleError> {
        if ordering.is_empty() {
            return Err(ScheduleError::invalid_input("empty ordering"));
        }

        let mut gantt = Vec::with_capacity(ordering.len());
        let mut completion: i64 = 0;

        for segment in ordering {
            completion += segment.burst;
            let turnaround = completion - segment.arrival;
            let waiting = turnaround - segment.burst;
            gantt.push(TimingRecord::new(
                segment.process_id,
                completion,
                turnaround,
                waiting,
            ));
        }

        Ok(gantt)
    }

    /// Orders the table with the given policy, then reduces the result.
    pub fn run(
        &self,
        policy: &dyn OrderingPolicy,
        table: &[Process],
    ) -> Result<Vec<TimingRecord>, ScheduleError> {
        let ordering = policy.order(table)?;
        self.reduce(&ordering)
    }
}

impl Default for SchedulingEngine {
    fn default() -> Self {
        Self::new()
    }
}
