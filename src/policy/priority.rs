//! Priority executor (non-preemptive).

use super::run_nonpreemptive;
use crate::models::{Process, SimulationResult};

/// Runs non-preemptive priority scheduling over the workload.
///
/// Among arrived processes the lowest priority value goes next; ties keep
/// the earliest process in input order. Presence of `priority` on every
/// process is checked by validation before this runs; a missing value
/// sorts last instead of panicking.
pub(crate) fn run(processes: &[Process]) -> SimulationResult {
    run_nonpreemptive(processes, |proc| {
        proc.priority.map_or(i64::from(i32::MAX), i64::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttSegment;

    #[test]
    fn test_priority_basic() {
        let workload = vec![
            Process::new("1", 0, 5).with_priority(2),
            Process::new("2", 0, 3).with_priority(1),
            Process::new("3", 0, 8).with_priority(3),
        ];
        let result = run(&workload);

        let order: Vec<&str> = result.gantt.iter().map(|s| s.pid.as_str()).collect();
        assert_eq!(order, vec!["2", "1", "3"]);
        assert_eq!(result.detail_for("1").unwrap().waiting_time, 3);
        assert_eq!(result.detail_for("2").unwrap().waiting_time, 0);
        assert_eq!(result.detail_for("3").unwrap().waiting_time, 8);
        assert_eq!(result.detail_for("1").unwrap().turnaround_time, 8);
        assert_eq!(result.detail_for("2").unwrap().turnaround_time, 3);
        assert_eq!(result.detail_for("3").unwrap().turnaround_time, 16);
        assert!((result.average_waiting_time - 11.0 / 3.0).abs() < 1e-10);
        assert!((result.average_turnaround_time - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_priority_details_carry_priority() {
        let workload = vec![
            Process::new("1", 0, 2).with_priority(5),
            Process::new("2", 0, 2).with_priority(4),
        ];
        let result = run(&workload);
        assert_eq!(result.detail_for("1").unwrap().priority, Some(5));
        assert_eq!(result.detail_for("2").unwrap().priority, Some(4));
    }

    #[test]
    fn test_priority_ignores_not_yet_arrived() {
        // The highest-priority process arrives last; it cannot preempt and
        // must wait for the running process to finish.
        let workload = vec![
            Process::new("low", 0, 6).with_priority(9),
            Process::new("high", 1, 2).with_priority(0),
        ];
        let result = run(&workload);
        assert_eq!(
            result.gantt,
            vec![
                GanttSegment::new("low", 0, 6),
                GanttSegment::new("high", 6, 8),
            ]
        );
    }

    #[test]
    fn test_priority_equal_values_keep_input_order() {
        let workload = vec![
            Process::new("B", 0, 1).with_priority(1),
            Process::new("A", 0, 1).with_priority(1),
        ];
        let result = run(&workload);
        assert_eq!(result.gantt[0].pid, "B");
    }
}
