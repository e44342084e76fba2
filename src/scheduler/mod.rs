//! CPU scheduling algorithms and result formatting.
//!
//! Four classic uniprocessor policies, each a function from a working copy
//! of the process set to a [`ResultRecord`]:
//!
//! | Algorithm | Preemptive | Selection key |
//! |-----------|-----------|---------------|
//! | FCFS | no | (arrival, pid) |
//! | SJF | no | (burst, arrival, pid) |
//! | Round Robin | yes, fixed quantum | FIFO queue, arrivals before re-queue |
//! | Priority | no | (priority, arrival, pid) |
//!
//! [`AlgorithmKind`] is the closed set of algorithms, dispatched by `match`.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod fcfs;
mod kpi;
mod nonpreemptive;
pub mod priority;
pub mod round_robin;
pub mod sjf;

pub use kpi::format_results;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{SchedError, SchedResult};
use crate::models::{Process, ResultRecord};

/// The scheduling algorithms this crate simulates.
///
/// Declaration order is the canonical result order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// First Come First Served.
    Fcfs,
    /// Shortest Job First.
    Sjf,
    /// Round Robin with a fixed quantum.
    RoundRobin,
    /// Non-preemptive priority scheduling.
    Priority,
}

impl AlgorithmKind {
    /// All algorithms, in canonical order.
    pub const ALL: [AlgorithmKind; 4] = [Self::Fcfs, Self::Sjf, Self::RoundRobin, Self::Priority];

    /// Stable identifier ("fcfs", "sjf", "round_robin", "priority").
    pub fn id(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin => "round_robin",
            Self::Priority => "priority",
        }
    }

    /// Short label for comparisons.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "RR",
            Self::Priority => "Priority",
        }
    }

    /// Display name as it appears in result records.
    pub fn display_name(&self, time_quantum: i64) -> String {
        match self {
            Self::Fcfs => fcfs::NAME.to_string(),
            Self::Sjf => sjf::NAME.to_string(),
            Self::RoundRobin => round_robin::name(time_quantum),
            Self::Priority => priority::NAME.to_string(),
        }
    }

    /// Whether running processes can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Runs this algorithm on `processes`, consuming them.
    ///
    /// `time_quantum` is only read by Round Robin.
    ///
    /// # Errors
    /// [`SchedError::TimeOverflow`] if the schedule could run past
    /// `u64::MAX`, and [`SchedError::InvalidTimeQuantum`] for Round Robin
    /// with `time_quantum <= 0`.
    pub fn execute(&self, processes: Vec<Process>, time_quantum: i64) -> SchedResult<ResultRecord> {
        time_horizon(&processes)?;
        let count = processes.len();
        let record = match self {
            Self::Fcfs => fcfs::schedule(processes),
            Self::Sjf => sjf::schedule(processes),
            Self::RoundRobin => round_robin::schedule(processes, time_quantum)?,
            Self::Priority => priority::schedule(processes),
        };
        info!(
            algorithm = %record.algorithm,
            processes = count,
            makespan = record.makespan(),
            cpu_utilization = record.metrics.cpu_utilization,
            "simulation complete"
        );
        Ok(record)
    }
}

/// Upper bound on every clock value any algorithm reaches: the latest
/// arrival plus the total burst.
///
/// No algorithm idles past the latest arrival, and busy time never exceeds
/// the total burst.
pub fn time_horizon(processes: &[Process]) -> SchedResult<u64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
        .ok_or(SchedError::TimeOverflow)
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == needle)
            .ok_or_else(|| SchedError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.id().parse::<AlgorithmKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.id());
        }
        assert_eq!(" SJF ".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Sjf);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "lottery".parse::<AlgorithmKind>().unwrap_err();
        assert!(matches!(err, SchedError::UnknownAlgorithm(ref s) if s == "lottery"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(AlgorithmKind::Fcfs.display_name(3), "FCFS");
        assert_eq!(AlgorithmKind::Sjf.display_name(3), "SJF");
        assert_eq!(AlgorithmKind::RoundRobin.display_name(4), "Round Robin (TQ=4)");
        assert_eq!(AlgorithmKind::Priority.display_name(3), "Priority Scheduling");
    }

    #[test]
    fn test_execute_dispatch() {
        let ps = vec![Process::new("P1", 0, 5, 2), Process::new("P2", 0, 3, 1)];
        let r = AlgorithmKind::Sjf.execute(ps.clone(), 3).unwrap();
        assert_eq!(r.gantt_chart[0].pid, "P2");

        let r = AlgorithmKind::Fcfs.execute(ps.clone(), 0).unwrap();
        assert_eq!(r.gantt_chart[0].pid, "P1");

        assert!(AlgorithmKind::RoundRobin.execute(ps, 0).is_err());
    }

    #[test]
    fn test_time_horizon() {
        let ps = vec![Process::new("P1", 0, 8, 3), Process::new("P2", 5, 4, 1)];
        assert_eq!(time_horizon(&ps).unwrap(), 17);
        assert_eq!(time_horizon(&[]).unwrap(), 0);
    }

    #[test]
    fn test_execute_rejects_overflowing_horizon() {
        let ps = vec![
            Process::new("P1", 0, 2, 1),
            Process::new("P2", u64::MAX - 1, 5, 1),
        ];
        for kind in AlgorithmKind::ALL {
            let err = kind.execute(ps.clone(), 3).unwrap_err();
            assert!(matches!(err, SchedError::TimeOverflow));
        }
        let edge = vec![Process::new("P1", u64::MAX - 5, 5, 1)];
        let r = AlgorithmKind::RoundRobin.execute(edge, 2).unwrap();
        assert_eq!(r.makespan(), u64::MAX);
    }

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&AlgorithmKind::RoundRobin).unwrap();
        assert_eq!(json, "\"round_robin\"");
        assert!(AlgorithmKind::RoundRobin.is_preemptive());
        assert!(!AlgorithmKind::Priority.is_preemptive());
    }
}
