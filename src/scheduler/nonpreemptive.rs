//! Shared discrete-event loop for non-preemptive selection algorithms.
//!
//! # Algorithm
//!
//! Repeat until every process has completed:
//! 1. Collect processes with `arrival <= now` that have not completed.
//! 2. If none, idle until the earliest pending arrival.
//! 3. Otherwise dispatch the minimum under the selection rule and run it
//!    to completion.
//!
//! Completion is tracked by index, so duplicate PIDs each run exactly once.
//!
//! # Complexity
//! O(n²): each of n dispatches scans all processes.

use tracing::debug;

use crate::dispatching::{select_next, SelectionRule};
use crate::models::{Process, Timeline};

/// Runs the loop, mutating `processes` and returning the timeline.
pub(crate) fn run(rule: SelectionRule, processes: &mut [Process]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut completed = vec![false; processes.len()];
    let mut remaining = processes.len();

    while remaining > 0 {
        let now = timeline.now();
        let ready = (0..processes.len())
            .filter(|&i| !completed[i] && processes[i].arrival_time <= now);

        let Some(next) = select_next(rule, processes, ready) else {
            let next_arrival = processes
                .iter()
                .zip(&completed)
                .filter(|&(_, &done)| !done)
                .map(|(p, _)| p.arrival_time)
                .min();
            match next_arrival {
                Some(arrival) => {
                    debug!(from = now, to = arrival, "cpu idle");
                    timeline.idle_until(arrival);
                }
                None => break,
            }
            continue;
        };

        let proc = &mut processes[next];
        debug!(rule = rule.name(), pid = %proc.pid, at = now, "dispatch");
        let finish = timeline.run(&proc.pid, proc.burst_time);
        proc.complete_at(finish);
        completed[next] = true;
        remaining -= 1;
    }

    timeline
}
