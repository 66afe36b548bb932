//! First-come-first-served executor.

use crate::models::{GanttSegment, Process, ProcessDetail, SimulationResult};

/// Runs FCFS over the workload.
///
/// Processes run in arrival order; the sort is stable, so processes arriving
/// at the same time keep their original relative order. The clock skips any
/// gap before the next arrival.
pub(crate) fn run(processes: &[Process]) -> SimulationResult {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|proc| proc.arrival);

    let mut gantt = Vec::with_capacity(order.len());
    let mut details = Vec::with_capacity(order.len());
    let mut time = 0i64;

    for proc in order {
        time = time.max(proc.arrival);
        let waiting = time - proc.arrival;
        gantt.push(GanttSegment::new(&proc.id, time, time + proc.burst));
        details.push(ProcessDetail::from_process(proc, waiting));
        time += proc.burst;
    }

    SimulationResult::from_parts(gantt, details)
}
