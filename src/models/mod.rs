//! Scheduling domain models.
//!
//! Core data types for the batch CPU scheduling simulator: the immutable
//! process descriptor, the execution segment emitted by ordering policies,
//! and the per-segment timing record produced by the engine.

mod process;
mod segment;
mod timing;

pub use process::Process;
pub use segment::Segment;
pub use timing::TimingRecord;
