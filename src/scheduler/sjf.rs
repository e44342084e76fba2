//! Shortest Job First (non-preemptive).
//!
//! At every decision point, dispatch the arrived process with the shortest
//! burst; ties go to earlier arrival, then PID key. A running job is never
//! interrupted, even if a shorter one arrives mid-execution.
//!
//! # Reference
//! Smith (1956), shortest processing time is optimal for mean flow time on a
//! single machine when all jobs are available.

use super::kpi::format_results;
use super::nonpreemptive;
use crate::dispatching::SelectionRule;
use crate::models::{Process, ResultRecord};

/// Display name.
pub const NAME: &str = "SJF";

/// Runs SJF over `processes`.
pub fn schedule(mut processes: Vec<Process>) -> ResultRecord {
    let timeline = nonpreemptive::run(SelectionRule::ShortestBurst, &mut processes);
    let total_time = timeline.now();
    let total_idle = timeline.idle_time();
    format_results(NAME, &processes, timeline.into_segments(), total_time, total_idle)
}
