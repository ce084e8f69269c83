//! Aggregate timing metrics.
//!
//! Computes the three standard averages over a run's Gantt timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Completion | mean(completion) |
//! | Avg Turnaround | mean(turnaround) |
//! | Avg Waiting | mean(waiting) |

use serde::{Deserialize, Serialize};

use crate::models::TimingRecord;

/// Mean completion, turnaround, and waiting time of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Mean completion time.
    pub avg_completion: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
}

impl TimingSummary {
    /// Computes averages over a timing sequence.
    ///
    /// An empty sequence yields a zeroed summary. The engine rejects
    /// empty orderings, so a successful run never produces one.
    pub fn calculate(gantt: &[TimingRecord]) -> Self {
        if gantt.is_empty() {
            return Self {
                avg_completion: 0.0,
                avg_turnaround: 0.0,
                avg_waiting: 0.0,
            };
        }

        let count = gantt.len() as f64;
        let completion: i64 = gantt.iter().map(|r| r.completion).sum();
        let turnaround: i64 = gantt.iter().map(|r| r.turnaround).sum();
        let waiting: i64 = gantt.iter().map(|r| r.waiting).sum();

        Self {
            avg_completion: completion as f64 / count,
            avg_turnaround: turnaround as f64 / count,
            avg_waiting: waiting as f64 / count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_basic() {
        let gantt = vec![
            TimingRecord::new(1, 5, 5, 0),
            TimingRecord::new(2, 8, 7, 4),
        ];
        let summary = TimingSummary::calculate(&gantt);
        assert!((summary.avg_completion - 6.5).abs() < 1e-10);
        assert!((summary.avg_turnaround - 6.0).abs() < 1e-10);
        assert!((summary.avg_waiting - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_single_record() {
        let gantt = vec![TimingRecord::new(1, 5, 5, 0)];
        let summary = TimingSummary::calculate(&gantt);
        assert!((summary.avg_completion - 5.0).abs() < 1e-10);
        assert!((summary.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let summary = TimingSummary::calculate(&[]);
        assert_eq!(summary.avg_completion, 0.0);
        assert_eq!(summary.avg_turnaround, 0.0);
        assert_eq!(summary.avg_waiting, 0.0);
    }
}
