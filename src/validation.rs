//! Structural validation of process tables.
//!
//! Checks the integrity of an ingested table before it is handed to a
//! policy. Detects:
//! - Empty tables
//! - Duplicate process IDs
//! - Non-positive burst lengths
//! - Negative arrival times

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The table has no processes.
    EmptyTable,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has a burst length of zero or less.
    NonPositiveBurst,
    /// A process has a negative arrival time.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process table.
///
/// Checks:
/// 1. The table is non-empty
/// 2. No duplicate process IDs
/// 3. Every burst length is positive
/// 4. Every arrival time is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_table(table: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if table.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTable,
            "process table is empty",
        ));
    }

    let mut seen = HashSet::new();
    for process in table {
        if !seen.insert(process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }

        if process.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst {}",
                    process.id, process.burst
                ),
            ));
        }

        if process.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival {}",
                    process.id, process.arrival
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
