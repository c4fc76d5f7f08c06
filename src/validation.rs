//! Input validation for scheduling runs.
//!
//! Checks structural integrity of a process set before any discipline
//! runs. Detects:
//! - Empty process sets (averages and throughput would be undefined)
//! - Duplicate process ids
//! - Zero ids (ids are positive)
//! - Zero burst durations (a process must need some CPU)
//!
//! The schedulers themselves assume validated input and only re-check
//! the degenerate empty set.

use std::collections::HashSet;

use crate::models::ProcessSpec;

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
    /// The process set is empty.
    EmptyProcessSet,
    /// Two processes share the same id.
    DuplicateId,
    /// A process id is zero.
    ZeroId,
    /// A process has a zero burst duration.
    ZeroBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set prior to scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "no processes to schedule",
        )]);
    }

    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroId,
                "process id must be positive",
            ));
        }
        if !seen_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process id: {}", p.id),
            ));
        }
        if p.burst_duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("process {} has zero burst duration", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(1, 5, 0),
            ProcessSpec::new(2, 3, 1).with_priority(2),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![ProcessSpec::new(1, 5, 0), ProcessSpec::new(1, 3, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_id() {
        let processes = vec![ProcessSpec::new(0, 5, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroId));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![ProcessSpec::new(1, 0, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![ProcessSpec::new(0, 0, 0), ProcessSpec::new(0, 2, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
