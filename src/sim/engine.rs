//! Single-policy simulation entry point.

use tracing::debug;

use crate::models::{Process, SimulationResult};
use crate::policy::{fcfs, priority, round_robin, sjf, Policy};
use crate::validation::{self, SimulationError};

/// Quantum used when a round-robin request does not specify one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Input container for a single-policy simulation.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// Workload to schedule.
    pub processes: Vec<Process>,
    /// Policy to apply.
    pub policy: Policy,
    /// Round-robin time quantum; ignored by the other policies.
    pub quantum: i64,
}

impl SimulationRequest {
    /// Creates a request with the default quantum.
    pub fn new(processes: Vec<Process>, policy: Policy) -> Self {
        Self {
            processes,
            policy,
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the round-robin time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }
}

/// Runs one policy over one workload.
///
/// The workload is validated first: structural problems are reported as
/// [`SimulationError::InvalidInput`], and a priority request over processes
/// without priorities as [`SimulationError::MissingField`]. No partial
/// result is produced on failure.
///
/// # Example
/// ```
/// use cpusched::models::Process;
/// use cpusched::policy::Policy;
/// use cpusched::sim::{simulate, SimulationRequest};
///
/// let workload = vec![Process::new("1", 0, 5), Process::new("2", 1, 3)];
/// let request = SimulationRequest::new(workload, Policy::RoundRobin).with_quantum(2);
/// let result = simulate(&request).unwrap();
/// assert_eq!(result.makespan(), 8);
/// ```
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    let quantum = (request.policy == Policy::RoundRobin).then_some(request.quantum);
    validate(&request.processes, quantum, request.policy.requires_priority())?;

    debug!(
        policy = request.policy.name(),
        processes = request.processes.len(),
        "running simulation"
    );
    Ok(run_policy(
        &request.processes,
        request.policy,
        request.quantum,
    ))
}

/// Dispatches to the matching executor. Callers validate first.
pub(crate) fn run_policy(processes: &[Process], policy: Policy, quantum: i64) -> SimulationResult {
    match policy {
        Policy::Fcfs => fcfs::run(processes),
        Policy::Sjf => sjf::run(processes),
        Policy::RoundRobin => round_robin::run(processes, quantum),
        Policy::Priority => priority::run(processes),
    }
}

/// Shared request validation for [`simulate`] and the comparator.
///
/// `quantum` is checked when present; `needs_priority` additionally demands
/// a priority on every process. Structural errors take precedence over the
/// missing-field check.
pub(crate) fn validate(
    processes: &[Process],
    quantum: Option<i64>,
    needs_priority: bool,
) -> Result<(), SimulationError> {
    let mut errors = match validation::validate_workload(processes) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };
    if let Some(quantum) = quantum {
        if let Err(quantum_errors) = validation::validate_quantum(quantum) {
            errors.extend(quantum_errors);
        }
    }
    if !errors.is_empty() {
        return Err(SimulationError::InvalidInput(errors));
    }

    if needs_priority {
        if let Some(proc) = processes.iter().find(|proc| proc.priority.is_none()) {
            return Err(SimulationError::MissingField {
                pid: proc.id.clone(),
                field: "priority",
            });
        }
    }
    Ok(())
}
