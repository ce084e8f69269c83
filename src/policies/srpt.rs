//! Shortest-remaining-processing-time with single-point preemption.
//!
//! Preemption is evaluated once, at the arrival of the second process;
//! later arrivals never trigger a re-evaluation. This is deliberately
//! not continuous-time SRPT.
//!
//! # Algorithm
//!
//! 1. Stable-sort by arrival; pop the earliest entry (`initial`) and note
//!    the arrival of the new head (`next_arrival`).
//! 2. Stable-sort the remainder by burst.
//! 3. If `initial` arrived at t=0 and would still be running at
//!    `next_arrival`, split it into a prefix (work done before the next
//!    arrival) and a suffix (remaining work). Re-sort the suffix into the
//!    burst-sorted remainder; the preemption is realized only when the
//!    suffix's remaining work is the new shortest. Otherwise `initial`
//!    runs to completion unsplit.

use super::OrderingPolicy;
use crate::error::ScheduleError;
use crate::models::{Process, Segment};

/// Shortest-remaining-processing-time ordering.
#[derive(Debug, Clone, Copy)]
pub struct Srpt;

impl OrderingPolicy for Srpt {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn order(&self, table: &[Process]) -> Result<Vec<Segment>, ScheduleError> {
        let mut by_arrival: Vec<Segment> = table.iter().map(Segment::from).collect();
        by_arrival.sort_by_key(|s| s.arrival);

        let mut queue = by_arrival.into_iter();
        let initial = match queue.next() {
            Some(s) => s,
            None => return Ok(Vec::new()),
        };
        let mut remaining: Vec<Segment> = queue.collect();
        if remaining.is_empty() {
            // Nothing ever arrives to preempt a lone process.
            return Ok(vec![initial]);
        }

        let next_arrival = remaining[0].arrival;
        remaining.sort_by_key(|s| s.burst);

        // A zero next_arrival means the second process was already present
        // at t=0; there is no prefix to run, so no preemption point exists.
        if initial.arrival == 0 && next_arrival > 0 && initial.burst > next_arrival {
            let (prefix, suffix) = initial.split_at(next_arrival);
            let mut candidates = Vec::with_capacity(remaining.len() + 1);
            candidates.push(suffix);
            candidates.extend(remaining.iter().copied());
            candidates.sort_by_key(|s| s.burst);

            if candidates[0].process_id == initial.process_id {
                let mut ordering = Vec::with_capacity(candidates.len() + 1);
                ordering.push(prefix);
                ordering.extend(candidates);
                return Ok(ordering);
            }
        }

        let mut ordering = Vec::with_capacity(remaining.len() + 1);
        ordering.push(initial);
        ordering.extend(remaining);
        Ok(ordering)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}
