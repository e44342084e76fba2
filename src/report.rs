//! Plain-text rendering of result records.
//!
//! ```text
//! --- Scheduling Algorithm: FCFS ---
//! Gantt Chart: [0]--P1--[8]--P2--[12]
//!
//! Process    | Finish Time  | Turnaround Time  | Waiting Time
//! ------------------------------------------------------------
//! P1         | 8            | 8                | 0
//! ...
//! ```

use std::fmt::Write as _;

use crate::comparison::Comparison;
use crate::models::{ResultRecord, Segment};
use crate::simulator::SimulationResults;

/// Compact Gantt string: `[t0]--pid1--[t1]--pid2--[t2]`.
///
/// An empty timeline renders as `[0]`.
pub fn gantt_string(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        let _ = write!(out, "[{}]--{}--", seg.start, seg.pid);
    }
    let end = segments.last().map(|s| s.end).unwrap_or(0);
    let _ = write!(out, "[{end}]");
    out
}

/// Fixed-width PID / finish / turnaround / waiting table.
pub fn process_table(record: &ResultRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} | {:<12} | {:<16} | {:<12}",
        "Process", "Finish Time", "Turnaround Time", "Waiting Time"
    );
    let _ = writeln!(out, "{}", "-".repeat(60));
    for p in &record.processes {
        let _ = writeln!(
            out,
            "{:<10} | {:<12} | {:<16} | {:<12}",
            p.pid, p.finish_time, p.turnaround_time, p.waiting_time
        );
    }
    out
}

/// Full report for one algorithm.
pub fn render_record(record: &ResultRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Scheduling Algorithm: {} ---", record.algorithm);
    let _ = writeln!(out, "Gantt Chart: {}", gantt_string(&record.gantt_chart));
    let _ = writeln!(out);
    out.push_str(&process_table(record));
    let m = &record.metrics;
    let _ = writeln!(out, "\nAverage Turnaround Time: {:?}", m.avg_turnaround_time);
    let _ = writeln!(out, "Average Waiting Time: {:?}", m.avg_waiting_time);
    let _ = writeln!(out, "CPU Utilization: {:?}%", m.cpu_utilization);
    out
}

/// Reports for every algorithm in canonical order.
pub fn render_results(results: &SimulationResults) -> String {
    results.values().map(render_record).collect()
}

/// Best-algorithm summary.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Best Algorithm Analysis ---");
    let _ = writeln!(
        out,
        "Best Average Turnaround Time: {} ({:.2} time units)",
        comparison.best_turnaround.algorithm.short_name(),
        comparison.best_turnaround.value
    );
    let _ = writeln!(
        out,
        "Best Average Waiting Time: {} ({:.2} time units)",
        comparison.best_waiting.algorithm.short_name(),
        comparison.best_waiting.value
    );
    let _ = writeln!(
        out,
        "Best CPU Utilization: {} ({:.2}%)",
        comparison.best_utilization.algorithm.short_name(),
        comparison.best_utilization.value
    );
    if let Some((winner, wins)) = comparison.overall_winner() {
        let _ = writeln!(
            out,
            "Overall Best: {} (wins {wins} out of 3 categories)",
            winner.short_name()
        );
    }
    out
}
