//! Result record model.
//!
//! The single contract consumed by presentation layers: one record per
//! algorithm, identical in shape across all four algorithms and free of any
//! presentation metadata.

use serde::{Deserialize, Serialize};

use super::{ProcessSnapshot, Segment};

/// Summary statistics for one algorithm run.
///
/// All values are rounded to two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Busy share of elapsed time, in percent (0..=100).
    pub cpu_utilization: f64,
}

/// Output of one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Algorithm display name (e.g. "Round Robin (TQ=3)").
    pub algorithm: String,
    /// Timeline segments in time order.
    pub gantt_chart: Vec<Segment>,
    /// Per-process rows sorted by PID key.
    pub processes: Vec<ProcessSnapshot>,
    /// Aggregate metrics.
    pub metrics: Metrics,
}

impl ResultRecord {
    /// Finds the row for `pid`.
    pub fn process(&self, pid: &str) -> Option<&ProcessSnapshot> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// End of the last segment (0 for an empty timeline).
    pub fn makespan(&self) -> u64 {
        self.gantt_chart.last().map(|s| s.end).unwrap_or(0)
    }

    /// Segments as `(pid, start, end)` tuples, convenient for comparisons.
    pub fn timeline_tuples(&self) -> Vec<(&str, u64, u64)> {
        self.gantt_chart
            .iter()
            .map(|s| (s.pid.as_str(), s.start, s.end))
            .collect()
    }
}
