//! Priority Scheduling (non-preemptive).
//!
//! Same control flow as SJF; the dispatched process is the arrived one with
//! the lowest priority number, then earliest arrival, then PID key.

use super::kpi::format_results;
use super::nonpreemptive;
use crate::dispatching::SelectionRule;
use crate::models::{Process, ResultRecord};

/// Display name.
pub const NAME: &str = "Priority Scheduling";

/// Runs non-preemptive priority scheduling over `processes`.
pub fn schedule(mut processes: Vec<Process>) -> ResultRecord {
    let timeline = nonpreemptive::run(SelectionRule::HighestPriority, &mut processes);
    let total_time = timeline.now();
    let total_idle = timeline.idle_time();
    format_results(NAME, &processes, timeline.into_segments(), total_time, total_idle)
}
