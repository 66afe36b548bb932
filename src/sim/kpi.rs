//! Timeline quality metrics.
//!
//! Derived measurements over a finished [`SimulationResult`] timeline:
//! makespan, CPU busy/idle split, and utilization. These supplement the
//! per-workload averages already carried by the result itself.

use serde::{Deserialize, Serialize};

use crate::models::SimulationResult;

/// Aggregate timeline measurements for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineKpi {
    /// Completion time of the last segment.
    pub makespan: i64,
    /// Time units the CPU spent executing processes.
    pub busy_time: i64,
    /// Time units the CPU sat idle waiting for arrivals (measured from t=0).
    pub idle_time: i64,
    /// `busy_time / makespan`, in `0.0..=1.0`. Zero for an empty timeline.
    pub cpu_utilization: f64,
}

impl TimelineKpi {
    /// Computes KPIs from a finished simulation.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.makespan();
        let busy_time: i64 = result.gantt.iter().map(|seg| seg.duration()).sum();
        let idle_time = makespan - busy_time;
        let cpu_utilization = if makespan > 0 {
            busy_time as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            makespan,
            busy_time,
            idle_time,
            cpu_utilization,
        }
    }
}
