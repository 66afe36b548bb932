//! Deterministic CPU scheduling simulator.
//!
//! Computes, for a workload of CPU-bound processes known fully in advance,
//! the execution timeline and performance statistics produced by four
//! classic scheduling policies: first-come-first-served, non-preemptive
//! shortest-job-first, non-preemptive priority, and preemptive round-robin
//! with a fixed time quantum. A comparator runs all four over one workload
//! and reports the policy with the lowest average waiting time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `GanttSegment`, `ProcessDetail`,
//!   `SimulationResult`
//! - **`policy`**: The four policy executors and the `Policy` selector
//! - **`sim`**: Entry points — `simulate`, `compare`, timeline KPIs
//! - **`validation`**: Input integrity checks and the error taxonomy
//!
//! # Example
//!
//! ```
//! use cpusched::models::Process;
//! use cpusched::policy::Policy;
//! use cpusched::sim::{simulate, SimulationRequest};
//!
//! let workload = vec![
//!     Process::new("1", 0, 5),
//!     Process::new("2", 1, 3),
//!     Process::new("3", 2, 8),
//! ];
//! let request = SimulationRequest::new(workload, Policy::Fcfs);
//! let result = simulate(&request).unwrap();
//! assert_eq!(result.makespan(), 16);
//! assert_eq!(result.average_waiting_time, 10.0 / 3.0);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod policy;
pub mod sim;
pub mod validation;
