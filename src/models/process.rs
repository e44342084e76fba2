//! Process model.
//!
//! A process is one schedulable unit of work: immutable inputs (arrival,
//! burst, priority) plus the scheduling outputs an algorithm fills in as it
//! runs.
//!
//! # Time Representation
//! All times are abstract integer time units relative to t=0.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Outputs (`finish_time`, `turnaround_time`, `waiting_time`) stay zero until
/// the process completes. `remaining_time` starts at `burst_time` and is only
/// decremented by preemptive algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier, unique within a run.
    pub pid: String,
    /// Time unit the process becomes runnable.
    pub arrival_time: u64,
    /// Total CPU time required.
    pub burst_time: u64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// CPU time still owed to the process.
    pub remaining_time: u64,
    /// Completion time.
    pub finish_time: u64,
    /// `finish_time - arrival_time`.
    pub turnaround_time: u64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: u64,
}

impl Process {
    /// Creates a process with zeroed outputs.
    pub fn new(pid: impl Into<String>, arrival_time: u64, burst_time: u64, priority: i32) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            finish_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: u64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time (and resets the remaining time to match).
    pub fn with_burst(mut self, burst_time: u64) -> Self {
        self.burst_time = burst_time;
        self.remaining_time = burst_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Fresh copy with the same inputs and all simulation state reset.
    ///
    /// Unlike `Clone`, this never carries over outputs of a previous run.
    pub fn fresh(&self) -> Self {
        Self::new(
            self.pid.clone(),
            self.arrival_time,
            self.burst_time,
            self.priority,
        )
    }

    /// Records completion at `finish_time` and derives turnaround and waiting.
    pub fn complete_at(&mut self, finish_time: u64) {
        self.remaining_time = 0;
        self.finish_time = finish_time;
        self.turnaround_time = finish_time.saturating_sub(self.arrival_time);
        self.waiting_time = self.turnaround_time.saturating_sub(self.burst_time);
    }

    /// Whether the process has no CPU time left.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Plain-data snapshot of inputs and outputs.
    pub fn snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            pid: self.pid.clone(),
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
            finish_time: self.finish_time,
            turnaround_time: self.turnaround_time,
            waiting_time: self.waiting_time,
        }
    }
}

/// Per-process row of a result record.
///
/// Detached from the live `Process` so results outlive the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    pub pid: String,
    pub arrival_time: u64,
    pub burst_time: u64,
    pub priority: i32,
    pub finish_time: u64,
    pub turnaround_time: u64,
    pub waiting_time: u64,
}
