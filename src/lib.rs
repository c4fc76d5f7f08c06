//! CPU-scheduling simulator.
//!
//! Simulates four classic scheduling disciplines over a fixed set of
//! processes described by arrival time, burst duration, and priority,
//! and reports per-process waiting/turnaround/completion times, run
//! averages, throughput, and a Gantt-style execution timeline.
//!
//! # Modules
//!
//! - **`models`**: domain types — [`ProcessSpec`], [`ProcessResult`],
//!   [`TimelineSegment`], [`RunSummary`], [`ScheduleOutcome`]
//! - **`scheduler`**: the four disciplines — [`Fcfs`], [`Sjf`],
//!   [`Priority`], [`RoundRobin`] — behind the [`Scheduler`] trait
//! - **`validation`**: structural input checks (empty set, duplicate
//!   ids, zero bursts)
//! - **`input`**: record-oriented loader (`id, burst, arrival[, priority]`)
//! - **`report`**: banner, Gantt timeline, and table rendering
//!
//! # Architecture
//!
//! The disciplines are the core and are pure: each run consumes an
//! immutable slice of specs and produces an independent outcome, so
//! callers may run any number of disciplines over the same input in
//! any order. Parsing and rendering are thin collaborators around
//! that core.
//!
//! # Example
//!
//! ```
//! use cpu_sched::{ProcessSpec, RoundRobin, Scheduler};
//!
//! let processes = vec![ProcessSpec::new(1, 10, 0), ProcessSpec::new(2, 5, 0)];
//! let outcome = RoundRobin::new().run(&processes).unwrap();
//! assert_eq!(outcome.result_for(2).unwrap().completion_time, 10);
//! assert_eq!(outcome.result_for(1).unwrap().completion_time, 15);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use models::{ProcessResult, ProcessSpec, RunSummary, ScheduleOutcome, TimelineSegment};
pub use scheduler::{Fcfs, Priority, RoundRobin, ScheduleError, Scheduler, Sjf};
