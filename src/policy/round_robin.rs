//! Round-robin executor (preemptive, fixed quantum).
//!
//! Each scheduling pass scans the workload in original input order rather
//! than maintaining an arrival-ordered ready queue: a process that becomes
//! runnable behind the scan cursor is first serviced on the next pass, and
//! the relative service order within a pass never changes. The scan order
//! is observable in the emitted timeline and is part of this executor's
//! contract.

use crate::models::{GanttSegment, Process, ProcessDetail, SimulationResult};

/// Runs round-robin over the workload with the given quantum.
///
/// The quantum is validated positive upstream. Details are emitted in
/// original input order; waiting time is recorded when a process finishes,
/// as `completion - arrival - burst`, which nets out every earlier slice.
pub(crate) fn run(processes: &[Process], quantum: i64) -> SimulationResult {
    let mut remaining: Vec<i64> = processes.iter().map(|proc| proc.burst).collect();
    let mut waiting = vec![0i64; processes.len()];
    let mut gantt = Vec::new();
    let mut time = 0i64;

    while remaining.iter().any(|&rem| rem > 0) {
        let mut dispatched = false;
        for (idx, proc) in processes.iter().enumerate() {
            if remaining[idx] == 0 || proc.arrival > time {
                continue;
            }
            dispatched = true;
            let slice = remaining[idx].min(quantum);
            gantt.push(GanttSegment::new(&proc.id, time, time + slice));
            time += slice;
            remaining[idx] -= slice;
            if remaining[idx] == 0 {
                waiting[idx] = time - proc.arrival - proc.burst;
            }
        }
        if !dispatched {
            // A whole pass found nothing runnable; jump to the next arrival
            // among unfinished processes.
            let next = processes
                .iter()
                .zip(&remaining)
                .filter(|(_, &rem)| rem > 0)
                .map(|(proc, _)| proc.arrival)
                .min();
            if let Some(next) = next {
                time = time.max(next);
            }
        }
    }

    let details = processes
        .iter()
        .zip(&waiting)
        .map(|(proc, &wait)| ProcessDetail::from_process(proc, wait))
        .collect();

    SimulationResult::from_parts(gantt, details)
}
