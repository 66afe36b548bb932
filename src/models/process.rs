//! Process (workload) model.
//!
//! A process is the unit of work submitted to the simulator: it becomes
//! runnable at its arrival time and needs a fixed amount of CPU service.
//! Workloads are fully known up front; nothing arrives while a simulation
//! runs.

use serde::{Deserialize, Serialize};

/// A CPU-bound process to be scheduled.
///
/// Input records are immutable for the duration of one simulation call.
/// Executors never assume the workload is sorted by arrival; construction
/// order matters only as the round-robin scan order and as the tie-break
/// for SJF/priority selection.
///
/// # Time Representation
/// `arrival` and `burst` are abstract integer time units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier, echoed back verbatim in results.
    pub id: String,
    /// Time unit at which the process becomes runnable. Non-negative.
    pub arrival: i64,
    /// Total CPU service time required. Positive.
    pub burst: i64,
    /// Scheduling priority (lower value = higher priority). Required by
    /// the priority policy, ignored by the others.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process record.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority (lower = scheduled first).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let proc = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(proc.id, "P1");
        assert_eq!(proc.arrival, 3);
        assert_eq!(proc.burst, 7);
        assert_eq!(proc.priority, Some(2));
    }

    #[test]
    fn test_priority_defaults_to_none() {
        let proc = Process::new("P1", 0, 1);
        assert_eq!(proc.priority, None);
    }

    #[test]
    fn test_priority_absent_from_wire_when_unset() {
        let json = serde_json::to_value(Process::new("P1", 0, 4)).unwrap();
        assert!(json.get("priority").is_none());

        let parsed: Process = serde_json::from_str(r#"{"id":"P2","arrival":1,"burst":2}"#).unwrap();
        assert_eq!(parsed.priority, None);
    }
}
