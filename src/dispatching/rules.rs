//! Built-in selection rules.

use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::pid::{pid_key, PidKey};

/// Composite ordering key. Field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SelectionKey {
    /// Rule-specific criterion (arrival, burst, or priority).
    pub primary: i128,
    /// Earlier arrival wins ties on the primary criterion.
    pub arrival: u64,
    /// Final tie-breaker.
    pub pid: PidKey,
}

/// How the next process is chosen among candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionRule {
    /// First come, first served.
    ArrivalOrder,
    /// Shortest burst time first.
    ShortestBurst,
    /// Lowest priority number first.
    HighestPriority,
}

impl SelectionRule {
    /// Rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArrivalOrder => "FIFO",
            Self::ShortestBurst => "SPT",
            Self::HighestPriority => "PRIORITY",
        }
    }

    /// Ordering key of `process` under this rule.
    pub fn key(&self, process: &Process) -> SelectionKey {
        let primary = match self {
            Self::ArrivalOrder => i128::from(process.arrival_time),
            Self::ShortestBurst => i128::from(process.burst_time),
            Self::HighestPriority => i128::from(process.priority),
        };
        SelectionKey {
            primary,
            arrival: process.arrival_time,
            pid: pid_key(&process.pid),
        }
    }
}
