//! Input validation and the simulation error taxonomy.
//!
//! Checks the structural integrity of a workload before any executor runs.
//! Detects:
//! - Empty workloads (the averages would be undefined)
//! - Negative arrival times and non-positive burst times
//! - Duplicate process ids
//! - Non-positive round-robin quanta
//!
//! Every failure is detected synchronously and returned as a value; a
//! request either fully succeeds or fails entirely, and executors never see
//! an invalid workload.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The workload contains no processes.
    EmptyWorkload,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative service time.
    NonPositiveBurst,
    /// Two processes share the same id.
    DuplicateId,
    /// The round-robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a workload's structural integrity.
///
/// Checks:
/// 1. The workload is non-empty
/// 2. No process has a negative arrival time
/// 3. Every process has a positive burst time
/// 4. No two processes share an id
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "workload contains no processes",
        ));
    }

    let mut ids = HashSet::new();
    for proc in processes {
        if !ids.insert(proc.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process id: {}", proc.id),
            ));
        }
        if proc.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("process '{}' arrives at {}", proc.id, proc.arrival),
            ));
        }
        if proc.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("process '{}' has burst {}", proc.id, proc.burst),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round-robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("time quantum must be positive, got {quantum}"),
        )])
    }
}

/// Error returned by the simulation entry points.
///
/// All variants are produced synchronously and returned as values; the
/// transport boundary maps each to a client-error response.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The workload or quantum failed validation.
    InvalidInput(Vec<ValidationError>),
    /// The policy selector names no known policy. Carries the rejected
    /// selector.
    UnsupportedPolicy(String),
    /// A process lacks a field the chosen policy requires.
    MissingField {
        /// Id of the first offending process.
        pid: String,
        /// Name of the missing field.
        field: &'static str,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "invalid input: {}", messages.join("; "))
            }
            SimulationError::UnsupportedPolicy(selector) => {
                write!(f, "unsupported policy selector '{selector}'")
            }
            SimulationError::MissingField { pid, field } => {
                write!(f, "process '{pid}' is missing required field '{field}'")
            }
        }
    }
}

impl Error for SimulationError {}
