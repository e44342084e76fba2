//! Process table: the process-management boundary.
//!
//! Unlike the engine, the table enforces PID uniqueness: adding a process
//! whose PID already exists is rejected.

use tracing::debug;

use crate::error::{SchedError, SchedResult};
use crate::models::Process;
use crate::simulator::Simulator;

/// Ordered collection of processes with unique PIDs.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table, rejecting the first duplicate PID.
    pub fn from_processes(processes: impl IntoIterator<Item = Process>) -> SchedResult<Self> {
        let mut table = Self::new();
        for p in processes {
            table.insert(p)?;
        }
        Ok(table)
    }

    /// Adds a process built from its inputs.
    pub fn add(
        &mut self,
        pid: impl Into<String>,
        arrival_time: u64,
        burst_time: u64,
        priority: i32,
    ) -> SchedResult<()> {
        self.insert(Process::new(pid, arrival_time, burst_time, priority))
    }

    /// Adds a process.
    ///
    /// # Errors
    /// [`SchedError::DuplicatePid`] if the PID is already present.
    pub fn insert(&mut self, process: Process) -> SchedResult<()> {
        if self.contains(&process.pid) {
            return Err(SchedError::DuplicatePid(process.pid));
        }
        debug!(pid = %process.pid, "process added");
        self.processes.push(process.fresh());
        Ok(())
    }

    /// Removes and returns the process with `pid`.
    pub fn remove(&mut self, pid: &str) -> Option<Process> {
        let idx = self.processes.iter().position(|p| p.pid == pid)?;
        debug!(pid, "process removed");
        Some(self.processes.remove(idx))
    }

    /// Looks up a process by PID.
    pub fn get(&self, pid: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Looks up a process by PID, failing if absent.
    pub fn require(&self, pid: &str) -> SchedResult<&Process> {
        self.get(pid)
            .ok_or_else(|| SchedError::ProcessNotFound(pid.to_string()))
    }

    /// Whether a process with `pid` exists.
    pub fn contains(&self, pid: &str) -> bool {
        self.get(pid).is_some()
    }

    /// Removes all processes.
    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// All processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Builds a simulator over the current processes.
    pub fn simulator(&self) -> Simulator {
        Simulator::new(self.processes.clone())
    }
}
