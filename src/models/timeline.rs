//! Execution timeline and per-process result records.
//!
//! A finished simulation is a [`SimulationResult`]: the Gantt segments in
//! execution order, one [`ProcessDetail`] per input process, and the two
//! workload averages. Output field names follow the established wire
//! contract (`waitingTime`, `averageWaitingTime`, ...), so a transport
//! adapter can serialize results without reshaping them.

use serde::{Deserialize, Serialize};

use super::Process;

/// One contiguous interval during which a process occupies the CPU.
///
/// Under FCFS, SJF, and priority scheduling a process owns exactly one
/// segment; under round-robin it owns one segment per quantum slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Owning process identifier.
    pub pid: String,
    /// Inclusive start time. Never earlier than the owner's arrival.
    pub start: i64,
    /// Exclusive end time. Always greater than `start`.
    pub end: i64,
}

impl GanttSegment {
    /// Creates a new segment.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Segment length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Per-process outcome of one simulation.
///
/// Exactly one detail record exists per input process, no matter how many
/// Gantt segments the process produced. The input `priority` is echoed
/// whenever the workload supplied one, under every policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDetail {
    /// Process identifier, echoed from the input.
    pub pid: String,
    /// Arrival time, echoed from the input.
    pub arrival: i64,
    /// Burst time, echoed from the input.
    pub burst: i64,
    /// Priority, echoed from the input when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Time spent runnable but not running: `completion - arrival - burst`.
    pub waiting_time: i64,
    /// Total time from arrival to completion: `waiting_time + burst`.
    pub turnaround_time: i64,
}

impl ProcessDetail {
    /// Builds the detail record for `process` given its waiting time.
    pub(crate) fn from_process(process: &Process, waiting_time: i64) -> Self {
        Self {
            pid: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            waiting_time,
            turnaround_time: waiting_time + process.burst,
        }
    }
}

/// Complete outcome of running one policy over one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Gantt segments in execution order.
    pub gantt: Vec<GanttSegment>,
    /// One record per input process. FCFS, SJF, and priority emit details
    /// in execution order; round-robin in original input order.
    pub details: Vec<ProcessDetail>,
    /// Arithmetic mean of the per-process waiting times.
    pub average_waiting_time: f64,
    /// Arithmetic mean of the per-process turnaround times.
    pub average_turnaround_time: f64,
}

impl SimulationResult {
    /// Assembles a result from a finished timeline, computing the averages.
    ///
    /// Callers guarantee a non-empty workload; an empty `details` yields
    /// zero averages rather than NaN.
    pub(crate) fn from_parts(gantt: Vec<GanttSegment>, details: Vec<ProcessDetail>) -> Self {
        let (total_waiting, total_turnaround) = details.iter().fold((0i64, 0i64), |(w, t), d| {
            (w + d.waiting_time, t + d.turnaround_time)
        });
        let (average_waiting_time, average_turnaround_time) = if details.is_empty() {
            (0.0, 0.0)
        } else {
            let count = details.len() as f64;
            (
                total_waiting as f64 / count,
                total_turnaround as f64 / count,
            )
        };

        Self {
            gantt,
            details,
            average_waiting_time,
            average_turnaround_time,
        }
    }

    /// Completion time of the last segment (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.gantt.iter().map(|seg| seg.end).max().unwrap_or(0)
    }

    /// All segments owned by a process, in execution order.
    pub fn segments_for(&self, pid: &str) -> Vec<&GanttSegment> {
        self.gantt.iter().filter(|seg| seg.pid == pid).collect()
    }

    /// The detail record for a process.
    pub fn detail_for(&self, pid: &str) -> Option<&ProcessDetail> {
        self.details.iter().find(|detail| detail.pid == pid)
    }

    /// Total CPU time granted to a process (sum of its segment durations).
    ///
    /// Equals the process burst once the simulation has finished.
    pub fn service_time(&self, pid: &str) -> i64 {
        self.segments_for(pid).iter().map(|seg| seg.duration()).sum()
    }

    /// Number of processes in the result.
    pub fn process_count(&self) -> usize {
        self.details.len()
    }
}
