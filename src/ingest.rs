//! Tab-delimited process table ingestion.
//!
//! Each row carries exactly four integer fields in the order
//! `(id, arrival, burst, priority)`. An optional header row may be
//! skipped, and empty fields from repeated tabs are ignored.
//!
//! The core never parses text itself; it receives the already-validated
//! table this module produces.

use crate::error::ScheduleError;
use crate::models::Process;

/// Parses a tab-delimited process table.
///
/// # Errors
/// - `InvalidInput` when the source is empty or a field is not an integer.
/// - `ValidationMismatch` when a row does not have exactly four fields.
///
/// # Example
///
/// ```
/// use cpu_sched::ingest::parse_table;
///
/// let src = "Process\tArrival\tBurst\tPriority\n1\t0\t5\t2\n2\t1\t3\t1\n";
/// let table = parse_table(src, true).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[0].burst, 5);
/// ```
pub fn parse_table(src: &str, has_header: bool) -> Result<Vec<Process>, ScheduleError> {
    // Only truly empty lines are skipped; a whitespace- or tab-only row
    // still counts as a row and fails the four-field check below.
    let mut rows: Vec<(usize, Vec<&str>)> = src
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            let fields: Vec<&str> = line.split('\t').filter(|f| !f.trim().is_empty()).collect();
            (line_no + 1, fields)
        })
        .collect();

    if rows.is_empty() {
        return Err(ScheduleError::invalid_input("source is empty"));
    }

    if has_header {
        rows.remove(0);
    }

    let mut table = Vec::with_capacity(rows.len());
    for (line_no, fields) in rows {
        if fields.len() != 4 {
            return Err(ScheduleError::mismatch(format!(
                "row {line_no} has {} fields, expected 4",
                fields.len()
            )));
        }

        let parsed: Result<Vec<i64>, _> = fields.iter().map(|f| f.trim().parse::<i64>()).collect();
        let values = parsed.map_err(|_| {
            ScheduleError::invalid_input(format!("row {line_no} contains a non-integer field"))
        })?;

        table.push(
            Process::new(values[0], values[2])
                .with_arrival(values[1])
                .with_priority(values[3] as i32),
        );
    }

    Ok(table)
}
