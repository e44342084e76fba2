//! Round Robin (preemptive, fixed time quantum).
//!
//! # Algorithm
//!
//! State: a FIFO ready queue and a pending list sorted by (arrival, pid key).
//!
//! 1. Admit every pending process with `arrival <= now`, in sorted order.
//! 2. If the ready queue is empty, idle until the next arrival.
//! 3. Pop the front and run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived by the new clock, **then** re-queue the
//!    preempted process if it still has work. A process arriving exactly at
//!    quantum expiry is therefore queued ahead of the one just preempted.
//! 5. A process whose remaining time hits 0 completes at the new clock.
//!
//! The quantum is validated before any state is built; a non-positive
//! quantum would make zero-length slices and never terminate.

use std::collections::VecDeque;

use tracing::debug;

use super::kpi::format_results;
use crate::dispatching::{sort_by_rule, SelectionRule};
use crate::error::{SchedError, SchedResult};
use crate::models::{Process, ResultRecord, Timeline};

/// Display name for a given quantum.
pub fn name(time_quantum: i64) -> String {
    format!("Round Robin (TQ={time_quantum})")
}

/// Checks that `time_quantum` is positive.
pub fn validate_quantum(time_quantum: i64) -> SchedResult<u64> {
    u64::try_from(time_quantum)
        .ok()
        .filter(|&q| q > 0)
        .ok_or(SchedError::InvalidTimeQuantum(time_quantum))
}

/// Runs Round Robin over `processes` with the given quantum.
///
/// # Errors
/// [`SchedError::InvalidTimeQuantum`] if `time_quantum <= 0`.
pub fn schedule(mut processes: Vec<Process>, time_quantum: i64) -> SchedResult<ResultRecord> {
    let quantum = validate_quantum(time_quantum)?;

    sort_by_rule(SelectionRule::ArrivalOrder, &mut processes);
    let total = processes.len();
    let mut pending: VecDeque<usize> = (0..total).collect();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(total);
    let mut completed = 0;
    let mut timeline = Timeline::new();

    while completed < total {
        admit(&processes, &mut pending, &mut ready, timeline.now());

        let Some(idx) = ready.pop_front() else {
            match pending.front() {
                Some(&next) => {
                    let arrival = processes[next].arrival_time;
                    debug!(from = timeline.now(), to = arrival, "cpu idle");
                    timeline.idle_until(arrival);
                }
                None => break,
            }
            continue;
        };

        let proc = &mut processes[idx];
        let slice = quantum.min(proc.remaining_time);
        debug!(pid = %proc.pid, at = timeline.now(), slice, "dispatch");
        let now = timeline.run(&proc.pid, slice);
        proc.remaining_time -= slice;
        let finished = proc.is_finished();

        // New arrivals go ahead of the preempted process.
        admit(&processes, &mut pending, &mut ready, now);

        if finished {
            processes[idx].complete_at(now);
            completed += 1;
        } else {
            ready.push_back(idx);
        }
    }

    let total_time = timeline.now();
    let total_idle = timeline.idle_time();
    Ok(format_results(
        name(time_quantum),
        &processes,
        timeline.into_segments(),
        total_time,
        total_idle,
    ))
}

/// Moves arrived processes from the front of `pending` to the back of `ready`.
///
/// `pending` is sorted by arrival, so arrived processes form a prefix.
fn admit(
    processes: &[Process],
    pending: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    now: u64,
) {
    while let Some(&next) = pending.front() {
        if processes[next].arrival_time > now {
            break;
        }
        pending.pop_front();
        ready.push_back(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 8, 3),
            Process::new("P2", 1, 4, 1),
            Process::new("P3", 2, 9, 4),
            Process::new("P4", 3, 5, 2),
        ]
    }

    #[test]
    fn test_rr_sample_workload() {
        let r = schedule(sample(), 3).unwrap();
        assert_eq!(
            r.timeline_tuples(),
            vec![
                ("P1", 0, 3),
                ("P2", 3, 6),
                ("P3", 6, 9),
                ("P4", 9, 12),
                ("P1", 12, 15),
                ("P2", 15, 16),
                ("P3", 16, 19),
                ("P4", 19, 21),
                ("P1", 21, 23),
                ("P3", 23, 26),
            ]
        );
        assert_eq!(r.algorithm, "Round Robin (TQ=3)");
        assert!((r.metrics.avg_turnaround_time - 20.0).abs() < 1e-10);
        assert!((r.metrics.avg_waiting_time - 13.5).abs() < 1e-10);

        let p1 = r.process("P1").unwrap();
        assert_eq!((p1.finish_time, p1.turnaround_time, p1.waiting_time), (23, 23, 15));
    }

    #[test]
    fn test_rr_arrival_at_expiry_goes_first() {
        // P2 arrives at t=2, exactly when P1's slice expires
        let ps = vec![Process::new("P1", 0, 4, 1), Process::new("P2", 2, 3, 1)];
        let r = schedule(ps, 2).unwrap();
        assert_eq!(
            r.timeline_tuples(),
            vec![("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 6), ("P2", 6, 7)]
        );
    }

    #[test]
    fn test_rr_same_arrival_pid_order() {
        let ps = vec![Process::new("P1", 0, 5, 1), Process::new("P2", 0, 3, 1)];
        let r = schedule(ps, 3).unwrap();
        assert_eq!(
            r.timeline_tuples(),
            vec![("P1", 0, 3), ("P2", 3, 6), ("P1", 6, 8)]
        );
    }

    #[test]
    fn test_rr_idle_gap() {
        let ps = vec![Process::new("P1", 5, 2, 1)];
        let r = schedule(ps, 3).unwrap();
        assert_eq!(r.timeline_tuples(), vec![("IDLE", 0, 5), ("P1", 5, 7)]);
        assert!((r.metrics.cpu_utilization - 28.57).abs() < 1e-10);
    }

    #[test]
    fn test_rr_slices_bounded_by_quantum() {
        let r = schedule(sample(), 2).unwrap();
        for seg in r.gantt_chart.iter().filter(|s| !s.is_idle()) {
            assert!(seg.duration() <= 2);
        }
        for p in &r.processes {
            let ran: u64 = r
                .gantt_chart
                .iter()
                .filter(|s| s.pid == p.pid)
                .map(|s| s.duration())
                .sum();
            assert_eq!(ran, p.burst_time);
        }
    }

    #[test]
    fn test_rr_zero_burst() {
        let ps = vec![Process::new("P1", 0, 0, 1), Process::new("P2", 0, 0, 1)];
        let r = schedule(ps, 3).unwrap();
        assert_eq!(r.timeline_tuples(), vec![("P1", 0, 0), ("P2", 0, 0)]);
        assert!((r.metrics.cpu_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_rr_invalid_quantum() {
        for q in [0, -1, i64::MIN] {
            let err = schedule(sample(), q).unwrap_err();
            assert!(matches!(err, SchedError::InvalidTimeQuantum(v) if v == q));
        }
    }

    #[test]
    fn test_rr_invalid_quantum_empty_input() {
        assert!(schedule(Vec::new(), 0).is_err());
        let r = schedule(Vec::new(), 1).unwrap();
        assert!(r.gantt_chart.is_empty());
    }

    #[test]
    fn test_validate_quantum() {
        assert_eq!(validate_quantum(4).unwrap(), 4);
        assert!(validate_quantum(0).is_err());
    }
}
