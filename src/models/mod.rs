//! Scheduling domain models.
//!
//! Plain data types shared by every algorithm: the process being scheduled,
//! the timeline an algorithm produces, and the result record handed to
//! presentation layers.
//!
//! # Lifecycle
//!
//! | Stage | Type |
//! |-------|------|
//! | Input | `Process` (outputs zeroed) |
//! | Simulation | `Process` (mutated in place) + `Timeline` |
//! | Output | `ResultRecord` holding `ProcessSnapshot`s and `Segment`s |

mod process;
mod result;
mod timeline;

pub use process::{Process, ProcessSnapshot};
pub use result::{Metrics, ResultRecord};
pub use timeline::{is_contiguous, Segment, Timeline, IDLE_PID};
