//! Dispatching rules: which ready process runs next.
//!
//! Every algorithm orders processes with a lexicographic key whose last
//! component is the PID key, so decisions are deterministic for any input.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `ArrivalOrder` | (arrival, pid) | FCFS, Round Robin admission |
//! | `ShortestBurst` | (burst, arrival, pid) | SJF |
//! | `HighestPriority` | (priority, arrival, pid) | Priority |
//!
//! # Score Convention
//! **Lower key = dispatched first.**
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod rules;

pub use rules::{SelectionKey, SelectionRule};

use crate::models::Process;

/// Index of the process in `candidates` that `rule` dispatches first.
///
/// `candidates` are indices into `processes`. Returns `None` when empty.
pub fn select_next(
    rule: SelectionRule,
    processes: &[Process],
    candidates: impl IntoIterator<Item = usize>,
) -> Option<usize> {
    candidates
        .into_iter()
        .min_by_key(|&i| rule.key(&processes[i]))
}

/// Sorts `processes` in place by `rule`.
///
/// Stable, so processes with identical keys keep their input order.
pub fn sort_by_rule(rule: SelectionRule, processes: &mut [Process]) {
    processes.sort_by_cached_key(|p| rule.key(p));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 8, 3),
            Process::new("P2", 1, 4, 1),
            Process::new("P3", 2, 9, 4),
            Process::new("P4", 3, 5, 2),
        ]
    }

    #[test]
    fn test_select_shortest_burst() {
        let ps = sample();
        let next = select_next(SelectionRule::ShortestBurst, &ps, [0, 2, 3]);
        assert_eq!(next, Some(3)); // P4, burst 5
    }

    #[test]
    fn test_select_highest_priority() {
        let ps = sample();
        let next = select_next(SelectionRule::HighestPriority, &ps, 0..4);
        assert_eq!(next, Some(1)); // P2, priority 1
    }

    #[test]
    fn test_select_empty() {
        let ps = sample();
        assert_eq!(
            select_next(SelectionRule::ShortestBurst, &ps, std::iter::empty()),
            None
        );
    }

    #[test]
    fn test_sort_arrival_order() {
        let mut ps = vec![
            Process::new("P10", 0, 1, 0),
            Process::new("P3", 2, 1, 0),
            Process::new("P2", 0, 1, 0),
        ];
        sort_by_rule(SelectionRule::ArrivalOrder, &mut ps);
        let pids: Vec<&str> = ps.iter().map(|p| p.pid.as_str()).collect();
        assert_eq!(pids, vec!["P2", "P10", "P3"]);
    }
}
