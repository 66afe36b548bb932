//! Simulation domain models.
//!
//! Input and output records for one simulation run. Inputs are read-only
//! for the duration of a run; outputs are built once by an executor and
//! never mutated afterwards. Nothing survives across calls.

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{GanttSegment, ProcessDetail, SimulationResult};
