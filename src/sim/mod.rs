//! Simulation entry points, comparator, and timeline KPIs.
//!
//! [`simulate`] runs one policy over one workload; [`compare`] runs all
//! four policies and reports the one with the lowest average waiting time.
//! [`TimelineKpi`] derives aggregate measurements from a finished result.

mod compare;
mod engine;
mod kpi;

pub use compare::{compare, PerPolicy, PolicyComparison};
pub use engine::{simulate, SimulationRequest, DEFAULT_QUANTUM};
pub use kpi::TimelineKpi;
