//! Workload files and generators.
//!
//! # File Format
//!
//! One process per line, comma-separated:
//!
//! ```text
//! # pid,arrival_time,burst_time,priority
//! P1,0,8,3
//! P2,1,4,1
//! ```
//!
//! Fields are trimmed. Blank lines and lines starting with `#` are ignored.
//! Lines with fewer than four fields are skipped; fields past the fourth
//! are ignored. A non-integer numeric field fails the whole load.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::error::{SchedError, SchedResult};
use crate::models::Process;

/// Parses workload text.
pub fn parse_workload(text: &str) -> SchedResult<Vec<Process>> {
    let mut processes = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 4 {
            warn!(line = line_no, content = line, "skipping malformed workload line");
            continue;
        }

        processes.push(Process::new(
            fields[0],
            parse_field(fields[1], "arrival time", line_no)?,
            parse_field(fields[2], "burst time", line_no)?,
            parse_field(fields[3], "priority", line_no)?,
        ));
    }

    debug!(count = processes.len(), "workload parsed");
    Ok(processes)
}

fn parse_field<T: std::str::FromStr>(raw: &str, what: &str, line: usize) -> SchedResult<T> {
    raw.parse().map_err(|_| SchedError::Parse {
        line,
        message: format!("invalid {what} '{raw}'"),
    })
}

/// Reads and parses a workload file.
pub fn load_workload(path: impl AsRef<Path>) -> SchedResult<Vec<Process>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SchedError::io(path, e))?;
    parse_workload(&text)
}

/// Renders processes in workload file format.
pub fn render_workload(processes: &[Process]) -> String {
    let mut out = String::new();
    for p in processes {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{},{},{},{}",
            p.pid, p.arrival_time, p.burst_time, p.priority
        );
    }
    out
}

/// Writes processes to a workload file.
pub fn save_workload(path: impl AsRef<Path>, processes: &[Process]) -> SchedResult<()> {
    let path = path.as_ref();
    fs::write(path, render_workload(processes)).map_err(|e| SchedError::io(path, e))
}

/// The four-process sample workload.
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 8, 3),
        Process::new("P2", 1, 4, 1),
        Process::new("P3", 2, 9, 4),
        Process::new("P4", 3, 5, 2),
    ]
}

/// Seeded random workload generator.
///
/// # Example
///
/// ```
/// use cpu_sched::workload::WorkloadGenerator;
///
/// let a = WorkloadGenerator::new(7).generate(5);
/// let b = WorkloadGenerator::new(7).generate(5);
/// assert_eq!(a, b);
/// assert_eq!(a[4].pid, "P5");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    max_arrival: u64,
    max_burst: u64,
    max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator with default bounds (arrival ≤ 10, burst ≤ 10,
    /// priority ≤ 5).
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: u64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest burst (at least 1).
    pub fn with_max_burst(mut self, max_burst: u64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest priority number (at least 1).
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(1);
        self
    }

    /// Generates `count` processes named `P1..Pcount`.
    pub fn generate(&self, count: usize) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                    rng.random_range(1..=self.max_priority),
                )
            })
            .collect()
    }
}
