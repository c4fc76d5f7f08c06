//! Scheduling domain models.
//!
//! Core data types shared by every discipline: the immutable process
//! descriptor fed into a run, and the output contract every run
//! produces (per-process results, Gantt timeline, aggregate summary).
//!
//! # Time Representation
//! All times are unitless discrete ticks relative to t=0.

mod outcome;
mod process;

pub use outcome::{ProcessResult, RunSummary, ScheduleOutcome, TimelineSegment};
pub use process::ProcessSpec;
