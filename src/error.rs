//! Error taxonomy for scheduling runs.
//!
//! All failures are fail-fast: the policies and the engine operate on
//! already-validated data and either produce a complete result or return
//! a descriptive error. There is no partial-result mode.

use std::fmt;

/// A scheduling error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleError {
    /// Error category.
    pub kind: ScheduleErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of scheduling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleErrorKind {
    /// Empty process table, malformed source data, or a non-positive
    /// round-robin quantum. Surfaced immediately; never retried.
    InvalidInput,
    /// A source row with a field count other than four.
    ValidationMismatch,
}

impl ScheduleError {
    /// Creates an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: ScheduleErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    /// Creates a `ValidationMismatch` error.
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self {
            kind: ScheduleErrorKind::ValidationMismatch,
            message: message.into(),
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ScheduleErrorKind::InvalidInput => write!(f, "invalid input: {}", self.message),
            ScheduleErrorKind::ValidationMismatch => {
                write!(f, "validation mismatch: {}", self.message)
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = ScheduleError::invalid_input("empty process table");
        assert_eq!(e.to_string(), "invalid input: empty process table");
        assert_eq!(e.kind, ScheduleErrorKind::InvalidInput);

        let e = ScheduleError::mismatch("row 3 has 5 fields, expected 4");
        assert!(e.to_string().starts_with("validation mismatch:"));
    }
}
