//! Scheduling policies.
//!
//! Each policy consumes a validated workload and produces a complete
//! [`SimulationResult`](crate::models::SimulationResult): a Gantt timeline,
//! one detail record per process, and the two workload averages. Executors
//! are pure functions over immutable input; nothing is shared between runs.
//!
//! # Selection Convention
//! The non-preemptive selecting policies (SJF, priority) pick among eligible
//! processes by an integer key where **lower wins**; ties keep the first
//! process in original input order.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

pub(crate) mod fcfs;
pub(crate) mod priority;
pub(crate) mod round_robin;
pub(crate) mod sjf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{GanttSegment, Process, ProcessDetail, SimulationResult};
use crate::validation::SimulationError;

/// The four supported scheduling policies.
///
/// Variants are listed in comparator evaluation order. On the wire a policy
/// is its lowercase selector: `fcfs`, `sjf`, `rr`, or `priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-come-first-served.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Round-robin with a fixed time quantum, preemptive.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Priority scheduling, non-preemptive (lower value = higher priority).
    Priority,
}

/// Fixed order in which the comparator evaluates policies.
///
/// Ties on average waiting time are broken by this order: the first policy
/// reaching the minimum wins.
pub const EVALUATION_ORDER: [Policy; 4] = [
    Policy::Fcfs,
    Policy::Sjf,
    Policy::RoundRobin,
    Policy::Priority,
];

impl Policy {
    /// The wire selector for this policy.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::RoundRobin => "rr",
            Policy::Priority => "priority",
        }
    }

    /// Human-readable policy name.
    pub fn description(self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come-First-Served",
            Policy::Sjf => "Shortest-Job-First (non-preemptive)",
            Policy::RoundRobin => "Round-Robin (preemptive)",
            Policy::Priority => "Priority (non-preemptive)",
        }
    }

    /// Whether this policy needs a `priority` on every process.
    pub fn requires_priority(self) -> bool {
        matches!(self, Policy::Priority)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    /// Parses a policy selector. Unknown selectors are rejected, never
    /// defaulted to an algorithm.
    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "rr" => Ok(Policy::RoundRobin),
            "priority" => Ok(Policy::Priority),
            other => Err(SimulationError::UnsupportedPolicy(other.to_string())),
        }
    }
}

/// Runs a non-preemptive selecting policy over the workload.
///
/// Repeatedly picks, among processes that have arrived and not yet run, the
/// one with the smallest `key`; ties keep the earliest process in input
/// order. When nothing is eligible the clock jumps to the next arrival.
/// The pick then runs its full burst without preemption.
pub(crate) fn run_nonpreemptive<K>(processes: &[Process], key: K) -> SimulationResult
where
    K: Fn(&Process) -> i64,
{
    let mut scheduled = vec![false; processes.len()];
    let mut gantt = Vec::with_capacity(processes.len());
    let mut details = Vec::with_capacity(processes.len());
    let mut time = 0i64;
    let mut done = 0;

    while done < processes.len() {
        let idx = match select_next(processes, &scheduled, time, &key) {
            Some(idx) => idx,
            None => {
                // Nothing has arrived; the CPU idles until the next arrival.
                if let Some(next) = next_arrival(processes, &scheduled) {
                    time = time.max(next);
                }
                continue;
            }
        };

        let proc = &processes[idx];
        let waiting = time - proc.arrival;
        gantt.push(GanttSegment::new(&proc.id, time, time + proc.burst));
        details.push(ProcessDetail::from_process(proc, waiting));
        time += proc.burst;
        scheduled[idx] = true;
        done += 1;
    }

    SimulationResult::from_parts(gantt, details)
}

/// Index of the eligible process with the smallest key, if any.
///
/// A strict comparison keeps the first minimum found, preserving the
/// input-order tie-break.
fn select_next<K>(processes: &[Process], scheduled: &[bool], time: i64, key: &K) -> Option<usize>
where
    K: Fn(&Process) -> i64,
{
    let mut best: Option<(usize, i64)> = None;
    for (idx, proc) in processes.iter().enumerate() {
        if scheduled[idx] || proc.arrival > time {
            continue;
        }
        let score = key(proc);
        if best.map_or(true, |(_, current)| score < current) {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Earliest arrival among not-yet-scheduled processes.
fn next_arrival(processes: &[Process], scheduled: &[bool]) -> Option<i64> {
    processes
        .iter()
        .zip(scheduled)
        .filter(|(_, &done)| !done)
        .map(|(proc, _)| proc.arrival)
        .min()
}
