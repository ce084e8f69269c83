//! Tabular Gantt report rendering.
//!
//! Renders a run's timeline and its averages into a fixed-width table.
//! Pure string building: terminal handling is the caller's concern.

use crate::metrics::TimingSummary;
use crate::models::TimingRecord;

const COLUMNS: [&str; 4] = ["Process", "Completion", "Turnaround", "Waiting"];
const WIDTH: usize = 14;

/// Renders the Gantt timeline plus the three averages.
///
/// One row per timing record, in processing order.
pub fn render_gantt(gantt: &[TimingRecord]) -> String {
    let mut out = String::new();

    for column in COLUMNS {
        out.push_str(&format!("{column:<w$}", w = WIDTH));
    }
    out.push('\n');

    for record in gantt {
        out.push_str(&format!(
            "{:<w$}{:<w$}{:<w$}{:<w$}\n",
            record.process_id,
            record.completion,
            record.turnaround,
            record.waiting,
            w = WIDTH
        ));
    }

    let summary = TimingSummary::calculate(gantt);
    out.push_str(&format!(
        "\nAverage Completion Time: {:.2}\nAverage Turnaround Time: {:.2}\nAverage Waiting Time: {:.2}\n",
        summary.avg_completion, summary.avg_turnaround, summary.avg_waiting
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows_and_averages() {
        let gantt = vec![
            TimingRecord::new(1, 5, 5, 0),
            TimingRecord::new(2, 8, 7, 4),
        ];
        let report = render_gantt(&gantt);

        let lines: Vec<&str> = report.lines().collect();
        assert!(lines[0].starts_with("Process"));
        assert!(lines[1].starts_with("1"));
        assert!(lines[2].starts_with("2"));
        assert!(report.contains("Average Completion Time: 6.50"));
        assert!(report.contains("Average Turnaround Time: 6.00"));
        assert!(report.contains("Average Waiting Time: 2.00"));
    }

    #[test]
    fn test_render_preserves_processing_order() {
        let gantt = vec![
            TimingRecord::new(3, 2, 2, 0),
            TimingRecord::new(1, 4, 4, 2),
        ];
        let report = render_gantt(&gantt);
        let body: Vec<&str> = report.lines().skip(1).take(2).collect();
        assert!(body[0].starts_with("3"));
        assert!(body[1].starts_with("1"));
    }
}
