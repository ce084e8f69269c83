//! Ordering policies for the scheduling engine.
//!
//! A policy turns the process table into an execution-ordered sequence of
//! segments. Non-preemptive policies reinterpret each process as a single
//! segment; SRPT and round-robin may split a process into several.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::policies::{OrderingPolicy, Sjf};
//!
//! let table = vec![
//!     Process::new(1, 5),
//!     Process::new(2, 3).with_arrival(1),
//! ];
//! let ordering = Sjf.order(&table).unwrap();
//! assert_eq!(ordering[0].process_id, 1);
//! ```
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod round_robin;
mod simple;
mod srpt;

pub use round_robin::RoundRobin;
pub use simple::{Fcfs, PriorityOrder, Sjf};
pub use srpt::Srpt;

use crate::error::ScheduleError;
use crate::models::{Process, Segment};
use std::fmt::Debug;

/// An ordering policy over a process table.
///
/// # Contract
/// `order` must not mutate the caller's table and must return a sequence
/// of segments covering every unit of burst time exactly once across all
/// source processes (a permutation, or a refinement for splitting policies).
pub trait OrderingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SRPT").
    fn name(&self) -> &'static str;

    /// Orders the table into execution segments.
    fn order(&self, table: &[Process]) -> Result<Vec<Segment>, ScheduleError>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Policy selection by name, for callers dispatching on user input.
///
/// Round-robin carries its quantum; all other variants are parameterless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// First-come-first-served.
    Fcfs,
    /// Shortest-job-first (non-preemptive).
    Sjf,
    /// Shortest-remaining-processing-time (single-point preemption).
    Srpt,
    /// Ascending priority value (non-preemptive).
    Priority,
    /// Quantum-bounded round-robin.
    RoundRobin {
        /// Maximum contiguous execution time per segment.
        quantum: i64,
    },
}

impl PolicyKind {
    /// Resolves a policy by name. Round-robin requires a quantum.
    ///
    /// Recognized names (case-insensitive): `FCFS`, `SJF`, `SRPT`,
    /// `PRIORITY`, `ROUNDROBIN`.
    pub fn from_name(name: &str, quantum: Option<i64>) -> Result<Self, ScheduleError> {
        match name.to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SJF" => Ok(Self::Sjf),
            "SRPT" => Ok(Self::Srpt),
            "PRIORITY" => Ok(Self::Priority),
            "ROUNDROBIN" => {
                let quantum = quantum.ok_or_else(|| {
                    ScheduleError::invalid_input("round-robin requires a quantum")
                })?;
                Ok(Self::RoundRobin { quantum })
            }
            other => Err(ScheduleError::invalid_input(format!(
                "unknown policy '{other}'"
            ))),
        }
    }

    /// Orders the table with the selected policy.
    pub fn order(&self, table: &[Process]) -> Result<Vec<Segment>, ScheduleError> {
        match *self {
            Self::Fcfs => Fcfs.order(table),
            Self::Sjf => Sjf.order(table),
            Self::Srpt => Srpt.order(table),
            Self::Priority => PriorityOrder.order(table),
            Self::RoundRobin { quantum } => RoundRobin::new(quantum).order(table),
        }
    }
}
