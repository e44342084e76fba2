//! First Come First Served (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Sort by (arrival, pid key).
//! 2. Walk the sorted list; idle until each arrival if the CPU is ahead of it.
//! 3. Run every process to completion in sorted order.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use tracing::debug;

use super::kpi::format_results;
use crate::dispatching::{sort_by_rule, SelectionRule};
use crate::models::{Process, ResultRecord, Timeline};

/// Display name.
pub const NAME: &str = "FCFS";

/// Runs FCFS over `processes`.
pub fn schedule(mut processes: Vec<Process>) -> ResultRecord {
    sort_by_rule(SelectionRule::ArrivalOrder, &mut processes);
    let mut timeline = Timeline::new();

    for proc in processes.iter_mut() {
        if timeline.now() < proc.arrival_time {
            debug!(from = timeline.now(), to = proc.arrival_time, "cpu idle");
            timeline.idle_until(proc.arrival_time);
        }
        let finish = timeline.run(&proc.pid, proc.burst_time);
        proc.complete_at(finish);
    }

    let total_time = timeline.now();
    let total_idle = timeline.idle_time();
    format_results(NAME, &processes, timeline.into_segments(), total_time, total_idle)
}
