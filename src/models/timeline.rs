//! Timeline (Gantt sequence) model.
//!
//! A timeline is the ordered list of intervals the CPU spent either running
//! a process or idling. Segments are contiguous: each segment starts where
//! the previous one ended, beginning at t=0.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// PID recorded for intervals where the CPU executed nothing.
pub const IDLE_PID: &str = "IDLE";

/// One interval of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that ran, or [`IDLE_PID`].
    pub pid: String,
    /// Start time (inclusive).
    pub start: u64,
    /// End time (exclusive).
    pub end: u64,
}

impl Segment {
    /// Creates an execution segment.
    pub fn new(pid: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: u64, end: u64) -> Self {
        Self::new(IDLE_PID, start, end)
    }

    /// Whether the CPU was idle during this segment.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pid == IDLE_PID
    }

    /// Segment length.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// Timeline builder and query helper.
///
/// Tracks the simulation clock alongside the segments so that every push
/// stays contiguous by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
    idle_time: u64,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current end of the timeline (the simulation clock).
    #[inline]
    pub fn now(&self) -> u64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Idles the CPU until `until`. No-op when `until` is not in the future.
    pub fn idle_until(&mut self, until: u64) {
        let start = self.now();
        if until <= start {
            return;
        }
        self.idle_time += until - start;
        self.segments.push(Segment::idle(start, until));
    }

    /// Runs `pid` for `duration` units from the current clock.
    ///
    /// Returns the new clock value. The clock saturates at `u64::MAX`;
    /// callers bound the horizon up front with
    /// [`time_horizon`](crate::scheduler::time_horizon).
    pub fn run(&mut self, pid: &str, duration: u64) -> u64 {
        let start = self.now();
        let end = start.saturating_add(duration);
        self.segments.push(Segment::new(pid, start, end));
        end
    }

    /// Total idle time recorded.
    #[inline]
    pub fn idle_time(&self) -> u64 {
        self.idle_time
    }

    /// Time spent executing processes.
    pub fn busy_time(&self) -> u64 {
        self.now() - self.idle_time
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consumes the timeline, returning its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Execution segments belonging to `pid`.
    pub fn segments_for(&self, pid: &str) -> Vec<&Segment> {
        self.segments.iter().filter(|s| s.pid == pid).collect()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Whether `segments` start at 0 and each one begins where the last ended.
pub fn is_contiguous(segments: &[Segment]) -> bool {
    let mut clock = 0;
    for s in segments {
        if s.start != clock || s.end < s.start {
            return false;
        }
        clock = s.end;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.run("P1", 3);
        t.idle_until(5);
        t.run("P2", 2);
        t.run("P1", 4);
        t
    }

    #[test]
    fn test_timeline_now() {
        let t = sample_timeline();
        assert_eq!(t.now(), 11);
        assert_eq!(Timeline::new().now(), 0);
    }

    #[test]
    fn test_idle_accounting() {
        let t = sample_timeline();
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.busy_time(), 9);
        assert!(t.segments()[1].is_idle());
        assert_eq!(t.segments()[1], Segment::idle(3, 5));
    }

    #[test]
    fn test_idle_until_past_is_noop() {
        let mut t = Timeline::new();
        t.run("P1", 4);
        t.idle_until(4);
        t.idle_until(2);
        assert_eq!(t.len(), 1);
        assert_eq!(t.idle_time(), 0);
    }

    #[test]
    fn test_segments_for() {
        let t = sample_timeline();
        let p1 = t.segments_for("P1");
        assert_eq!(p1.len(), 2);
        assert_eq!(p1.iter().map(|s| s.duration()).sum::<u64>(), 7);
        assert!(t.segments_for("P9").is_empty());
    }

    #[test]
    fn test_contiguity() {
        let t = sample_timeline();
        assert!(is_contiguous(t.segments()));

        let gap = vec![Segment::new("P1", 0, 2), Segment::new("P2", 3, 4)];
        assert!(!is_contiguous(&gap));

        let late_start = vec![Segment::new("P1", 1, 2)];
        assert!(!is_contiguous(&late_start));

        assert!(is_contiguous(&[]));
    }

    #[test]
    fn test_run_saturates_at_max() {
        let mut t = Timeline::new();
        t.idle_until(u64::MAX - 1);
        assert_eq!(t.run("P1", 5), u64::MAX);
        assert!(is_contiguous(t.segments()));
    }

    #[test]
    fn test_zero_length_run() {
        let mut t = Timeline::new();
        t.run("P1", 0);
        t.run("P2", 0);
        assert_eq!(t.now(), 0);
        assert!(is_contiguous(t.segments()));
    }
}
