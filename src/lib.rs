//! Uniprocessor CPU scheduling simulator.
//!
//! Simulates classic scheduling policies over a fixed, known-in-advance set
//! of processes and reports a Gantt timeline plus turnaround, waiting, and
//! utilization metrics for each.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Segment`, `Timeline`,
//!   `ResultRecord`, `Metrics`
//! - **`scheduler`**: FCFS, SJF, Round Robin, Priority, and the results formatter
//! - **`dispatching`**: Selection rules and their tie-breaking keys
//! - **`simulator`**: Orchestrator that runs algorithms on isolated copies
//! - **`comparison`**: Best-algorithm analysis across a full run
//! - **`registry`**: Process table with unique PIDs
//! - **`workload`**: Text workload files and seeded random workloads
//! - **`report`**: Plain-text rendering
//! - **`validation`**: Boundary input checks (duplicate / empty PIDs)
//!
//! # Example
//!
//! ```
//! use cpu_sched::{AlgorithmKind, Process, Simulator};
//!
//! let sim = Simulator::new(vec![
//!     Process::new("P1", 0, 5, 1),
//!     Process::new("P2", 0, 3, 1),
//! ]);
//! let results = sim.run_all(3).unwrap();
//! let sjf = &results[&AlgorithmKind::Sjf];
//! assert_eq!(sjf.gantt_chart[0].pid, "P2");
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod comparison;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod pid;
pub mod registry;
pub mod report;
pub mod scheduler;
pub mod simulator;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use config::{OutputFormat, SimulationConfig, DEFAULT_TIME_QUANTUM};
pub use error::{SchedError, SchedResult};
pub use models::{Metrics, Process, ProcessSnapshot, ResultRecord, Segment, Timeline, IDLE_PID};
pub use scheduler::AlgorithmKind;
pub use simulator::{SimulationResults, Simulator};
