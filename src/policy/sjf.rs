//! Shortest-job-first executor (non-preemptive).

use super::run_nonpreemptive;
use crate::models::{Process, SimulationResult};

/// Runs non-preemptive SJF over the workload.
///
/// Among arrived processes the smallest burst goes next; ties keep the
/// earliest process in input order. Once picked, a process runs to
/// completion.
pub(crate) fn run(processes: &[Process]) -> SimulationResult {
    run_nonpreemptive(processes, |proc| proc.burst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttSegment;

    #[test]
    fn test_sjf_basic() {
        let workload = vec![
            Process::new("1", 0, 7),
            Process::new("2", 2, 4),
            Process::new("3", 4, 1),
            Process::new("4", 5, 4),
        ];
        let result = run(&workload);

        assert_eq!(
            result.gantt,
            vec![
                GanttSegment::new("1", 0, 7),
                GanttSegment::new("3", 7, 8),
                GanttSegment::new("2", 8, 12),
                GanttSegment::new("4", 12, 16),
            ]
        );
        assert_eq!(result.detail_for("1").unwrap().waiting_time, 0);
        assert_eq!(result.detail_for("2").unwrap().waiting_time, 6);
        assert_eq!(result.detail_for("3").unwrap().waiting_time, 3);
        assert_eq!(result.detail_for("4").unwrap().waiting_time, 7);
        assert_eq!(result.detail_for("2").unwrap().turnaround_time, 10);
        assert!((result.average_waiting_time - 4.0).abs() < 1e-10);
        assert!((result.average_turnaround_time - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_equal_bursts_keep_input_order() {
        let workload = vec![
            Process::new("B", 0, 3),
            Process::new("A", 0, 3),
        ];
        let result = run(&workload);
        assert_eq!(result.gantt[0].pid, "B");
        assert_eq!(result.gantt[1].pid, "A");
    }

    #[test]
    fn test_sjf_jumps_over_arrival_gap() {
        let workload = vec![Process::new("1", 3, 2), Process::new("2", 9, 1)];
        let result = run(&workload);
        assert_eq!(
            result.gantt,
            vec![GanttSegment::new("1", 3, 5), GanttSegment::new("2", 9, 10)]
        );
        assert!((result.average_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_picks_shortest_among_arrived_only() {
        // The 1-unit job has not arrived at t=0; the 6-unit job must not
        // wait for it.
        let workload = vec![Process::new("long", 0, 6), Process::new("short", 1, 1)];
        let result = run(&workload);
        assert_eq!(result.gantt[0].pid, "long");
        assert_eq!(result.detail_for("short").unwrap().waiting_time, 5);
    }
}
