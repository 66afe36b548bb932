//! Policy comparator.
//!
//! Runs every policy over one workload and selects the one with the lowest
//! average waiting time. The evaluation order is fixed
//! ([`EVALUATION_ORDER`]) so tie-breaking is deterministic.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine;
use crate::models::{Process, SimulationResult};
use crate::policy::{Policy, EVALUATION_ORDER};
use crate::validation::SimulationError;

/// Per-policy container with one fixed field per policy.
///
/// Field order matches the comparator evaluation order, which also fixes
/// the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerPolicy<T> {
    /// First-come-first-served entry.
    pub fcfs: T,
    /// Shortest-job-first entry.
    pub sjf: T,
    /// Round-robin entry.
    pub rr: T,
    /// Priority entry.
    pub priority: T,
}

impl<T> PerPolicy<T> {
    /// The entry for `policy`.
    pub fn get(&self, policy: Policy) -> &T {
        match policy {
            Policy::Fcfs => &self.fcfs,
            Policy::Sjf => &self.sjf,
            Policy::RoundRobin => &self.rr,
            Policy::Priority => &self.priority,
        }
    }

    /// Entries in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Policy, &T)> + '_ {
        EVALUATION_ORDER
            .into_iter()
            .map(move |policy| (policy, self.get(policy)))
    }
}

/// Outcome of running every policy over one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyComparison {
    /// Full simulation result per policy.
    pub results: PerPolicy<SimulationResult>,
    /// Policy with the lowest average waiting time; ties go to the earlier
    /// policy in evaluation order.
    pub best_policy: Policy,
    /// Average waiting time per policy.
    pub average_waiting_times: PerPolicy<f64>,
}

/// Runs all four policies over the workload and picks the best.
///
/// The workload must carry a priority on every process (the priority
/// executor always runs here) and the quantum must be positive.
///
/// # Example
/// ```
/// use cpusched::models::Process;
/// use cpusched::policy::Policy;
/// use cpusched::sim::compare;
///
/// let workload = vec![
///     Process::new("1", 0, 6).with_priority(1),
///     Process::new("2", 0, 2).with_priority(2),
/// ];
/// let comparison = compare(&workload, 2).unwrap();
/// assert_eq!(comparison.best_policy, Policy::Sjf);
/// ```
pub fn compare(processes: &[Process], quantum: i64) -> Result<PolicyComparison, SimulationError> {
    engine::validate(processes, Some(quantum), true)?;

    let results = PerPolicy {
        fcfs: engine::run_policy(processes, Policy::Fcfs, quantum),
        sjf: engine::run_policy(processes, Policy::Sjf, quantum),
        rr: engine::run_policy(processes, Policy::RoundRobin, quantum),
        priority: engine::run_policy(processes, Policy::Priority, quantum),
    };
    let average_waiting_times = PerPolicy {
        fcfs: results.fcfs.average_waiting_time,
        sjf: results.sjf.average_waiting_time,
        rr: results.rr.average_waiting_time,
        priority: results.priority.average_waiting_time,
    };

    // A strict comparison keeps the earlier policy on exact ties.
    let mut best_policy = EVALUATION_ORDER[0];
    for &policy in &EVALUATION_ORDER[1..] {
        if average_waiting_times.get(policy) < average_waiting_times.get(best_policy) {
            best_policy = policy;
        }
    }

    debug!(best = best_policy.name(), "policy comparison finished");

    Ok(PolicyComparison {
        results,
        best_policy,
        average_waiting_times,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workload() -> Vec<Process> {
        vec![
            Process::new("1", 0, 5).with_priority(2),
            Process::new("2", 1, 3).with_priority(1),
            Process::new("3", 2, 8).with_priority(3),
        ]
    }

    #[test]
    fn test_compare_reports_every_policy() {
        let comparison = compare(&sample_workload(), 2).unwrap();
        for (_, result) in comparison.results.iter() {
            assert_eq!(result.process_count(), 3);
        }
    }

    #[test]
    fn test_tie_goes_to_earliest_in_evaluation_order() {
        // On this workload FCFS, SJF, and priority all produce an average
        // waiting time of 10/3 while round-robin is worse; FCFS wins the
        // three-way tie by evaluation order.
        let comparison = compare(&sample_workload(), 2).unwrap();
        let expected = 10.0 / 3.0;
        assert!((comparison.average_waiting_times.fcfs - expected).abs() < 1e-10);
        assert!((comparison.average_waiting_times.sjf - expected).abs() < 1e-10);
        assert!((comparison.average_waiting_times.priority - expected).abs() < 1e-10);
        assert!(comparison.average_waiting_times.rr > expected);
        assert_eq!(comparison.best_policy, Policy::Fcfs);
    }

    #[test]
    fn test_sjf_wins_over_tied_priority() {
        // Everything arrives at t=0: SJF and priority tie at 11/3 and beat
        // FCFS and round-robin; SJF is earlier in evaluation order.
        let workload = vec![
            Process::new("1", 0, 5).with_priority(2),
            Process::new("2", 0, 3).with_priority(1),
            Process::new("3", 0, 8).with_priority(3),
        ];
        let comparison = compare(&workload, 2).unwrap();
        assert!(
            (comparison.average_waiting_times.sjf - comparison.average_waiting_times.priority)
                .abs()
                < 1e-10
        );
        assert_eq!(comparison.best_policy, Policy::Sjf);
    }

    #[test]
    fn test_best_matches_reported_averages() {
        let comparison = compare(&sample_workload(), 3).unwrap();
        let best = *comparison.average_waiting_times.get(comparison.best_policy);
        for (_, &avg) in comparison.average_waiting_times.iter() {
            assert!(best <= avg);
        }
    }

    #[test]
    fn test_compare_requires_priorities() {
        let workload = vec![Process::new("1", 0, 5)];
        let err = compare(&workload, 2).unwrap_err();
        assert!(matches!(err, SimulationError::MissingField { .. }));
    }

    #[test]
    fn test_compare_validates_quantum_and_workload() {
        assert!(matches!(
            compare(&sample_workload(), 0).unwrap_err(),
            SimulationError::InvalidInput(_)
        ));
        assert!(matches!(
            compare(&[], 2).unwrap_err(),
            SimulationError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(compare(&sample_workload(), 2).unwrap()).unwrap();
        assert_eq!(json["bestPolicy"], "fcfs");
        for key in ["fcfs", "sjf", "rr", "priority"] {
            assert!(json["results"][key]["averageWaitingTime"].is_number());
            assert!(json["averageWaitingTimes"][key].is_number());
        }
        // Priority-policy details carry the echoed priority on the wire.
        assert!(json["results"]["priority"]["details"][0]["priority"].is_number());
    }
}
