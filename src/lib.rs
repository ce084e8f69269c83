//! Batch CPU scheduling simulator.
//!
//! Models classic CPU scheduling disciplines over a fixed batch of
//! process descriptors and reports completion, turnaround, and waiting
//! times per execution segment, plus aggregate averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Segment`, `TimingRecord`
//! - **`policies`**: The five ordering disciplines — FCFS, SJF, SRPT,
//!   priority, round-robin — behind the `OrderingPolicy` trait
//! - **`engine`**: Left-to-right Gantt reduction over an ordering
//! - **`metrics`**: Average completion/turnaround/waiting
//! - **`report`**: Fixed-width Gantt table rendering
//! - **`ingest`**: Tab-delimited table parsing
//! - **`validation`**: Structural table checks
//!
//! # Architecture
//!
//! `Process` table → `OrderingPolicy::order()` → `SchedulingEngine::reduce()`
//! → timing sequence → `TimingSummary` / `report`. Everything is
//! single-threaded and purely functional over immutable input: policies
//! work on private copies and the engine holds no state across calls.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod error;
pub mod ingest;
pub mod metrics;
pub mod models;
pub mod policies;
pub mod report;
pub mod validation;
