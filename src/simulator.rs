//! Simulation orchestrator.
//!
//! Owns the canonical process list and hands every algorithm its own fresh
//! copy, so no run can observe another run's mutations. Results are keyed
//! by [`AlgorithmKind`] and iterate in canonical order
//! (`fcfs`, `sjf`, `round_robin`, `priority`).

use std::collections::BTreeMap;

use tracing::info;

use crate::config::DEFAULT_TIME_QUANTUM;
use crate::error::SchedResult;
use crate::models::{Process, ResultRecord};
use crate::scheduler::{round_robin, AlgorithmKind};

/// Results of [`Simulator::run_all`], keyed by algorithm.
///
/// Serializes as a JSON object keyed `"fcfs"`, `"sjf"`, `"round_robin"`,
/// `"priority"`.
pub type SimulationResults = BTreeMap<AlgorithmKind, ResultRecord>;

/// Runs scheduling algorithms over a fixed process set.
///
/// # Example
///
/// ```
/// use cpu_sched::{Process, Simulator};
///
/// let sim = Simulator::new(vec![
///     Process::new("P1", 0, 5, 1),
///     Process::new("P2", 0, 3, 1),
/// ]);
/// let results = sim.run_all(3).unwrap();
/// assert_eq!(results.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    processes: Vec<Process>,
}

impl Simulator {
    /// Creates a simulator over `processes`.
    ///
    /// Any simulation state on the inputs is discarded.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes: processes.iter().map(Process::fresh).collect(),
        }
    }

    /// The canonical process list, in caller order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Fresh copies of the canonical list for one algorithm run.
    fn working_set(&self) -> Vec<Process> {
        self.processes.iter().map(Process::fresh).collect()
    }

    /// First Come First Served.
    pub fn fcfs(&self) -> SchedResult<ResultRecord> {
        self.run(AlgorithmKind::Fcfs, DEFAULT_TIME_QUANTUM)
    }

    /// Shortest Job First.
    pub fn sjf(&self) -> SchedResult<ResultRecord> {
        self.run(AlgorithmKind::Sjf, DEFAULT_TIME_QUANTUM)
    }

    /// Round Robin with the given quantum.
    pub fn round_robin(&self, time_quantum: i64) -> SchedResult<ResultRecord> {
        self.run(AlgorithmKind::RoundRobin, time_quantum)
    }

    /// Non-preemptive priority scheduling.
    pub fn priority_scheduling(&self) -> SchedResult<ResultRecord> {
        self.run(AlgorithmKind::Priority, DEFAULT_TIME_QUANTUM)
    }

    /// Runs a single algorithm.
    pub fn run(&self, kind: AlgorithmKind, time_quantum: i64) -> SchedResult<ResultRecord> {
        kind.execute(self.working_set(), time_quantum)
    }

    /// Runs every algorithm.
    ///
    /// # Errors
    /// Fails before any simulation if `time_quantum <= 0`.
    pub fn run_all(&self, time_quantum: i64) -> SchedResult<SimulationResults> {
        round_robin::validate_quantum(time_quantum)?;
        info!(
            processes = self.processes.len(),
            time_quantum, "running all algorithms"
        );

        AlgorithmKind::ALL
            .into_iter()
            .map(|kind| Ok((kind, self.run(kind, time_quantum)?)))
            .collect()
    }
}

impl From<Vec<Process>> for Simulator {
    fn from(processes: Vec<Process>) -> Self {
        Self::new(processes)
    }
}
