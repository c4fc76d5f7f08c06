//! Schedule outcome (solution) model.
//!
//! A completed run of any discipline produces the same three artifacts:
//! per-process timing results (in input order), a Gantt-style timeline
//! (in execution order), and an aggregate summary. Preemptive
//! disciplines may list the same process in several non-contiguous
//! timeline segments.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::ProcessSpec;

/// Per-process timing produced by one scheduler run.
///
/// Invariants (upheld by [`ProcessResult::new`]):
/// `turnaround_time = burst_duration + waiting_time` and
/// `completion_time = arrival_time + turnaround_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: u32,
    /// Scheduling priority (copied from the input spec).
    pub priority: i64,
    /// Required CPU time (copied from the input spec).
    pub burst_duration: u64,
    /// Arrival time (copied from the input spec).
    pub arrival_time: u64,
    /// Time spent ready but not executing.
    pub waiting_time: u64,
    /// Time from arrival to completion.
    pub turnaround_time: u64,
    /// Absolute time at which the process finished.
    pub completion_time: u64,
}

impl ProcessResult {
    /// Builds a result row from a spec and its computed waiting time.
    ///
    /// Turnaround and completion are derived here so the row invariants
    /// hold by construction.
    pub fn new(spec: &ProcessSpec, waiting_time: u64) -> Self {
        let turnaround_time = spec.burst_duration + waiting_time;
        Self {
            id: spec.id,
            priority: spec.priority,
            burst_duration: spec.burst_duration,
            arrival_time: spec.arrival_time,
            waiting_time,
            turnaround_time,
            completion_time: spec.arrival_time + turnaround_time,
        }
    }
}

/// One interval of a Gantt timeline: `process_id` held the CPU from
/// `start` to `stop` (`stop >= start`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Process that was executing.
    pub process_id: u32,
    /// Interval start (ticks).
    pub start: u64,
    /// Interval end (ticks).
    pub stop: u64,
}

impl TimelineSegment {
    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.stop - self.start
    }
}

/// Aggregate metrics for one scheduler run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Mean waiting time across all processes.
    pub average_waiting_time: f64,
    /// Mean turnaround time across all processes.
    pub average_turnaround_time: f64,
    /// Completed processes per tick, measured against the last
    /// completion time in the run.
    pub throughput: f64,
}

/// Everything a scheduler run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// One row per input process, index-aligned with the input order
    /// (not execution order).
    pub results: Vec<ProcessResult>,
    /// Gantt timeline in execution order.
    pub timeline: Vec<TimelineSegment>,
    /// Aggregate metrics.
    pub summary: RunSummary,
}

impl ScheduleOutcome {
    /// Finds the result row for a process id.
    pub fn result_for(&self, id: u32) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Returns all timeline segments for a process id, in execution order.
    pub fn segments_for(&self, id: u32) -> Vec<&TimelineSegment> {
        self.timeline
            .iter()
            .filter(|s| s.process_id == id)
            .collect()
    }

    /// Latest completion time observed in the run.
    pub fn last_completion_time(&self) -> u64 {
        self.results
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Number of scheduled processes.
    pub fn process_count(&self) -> usize {
        self.results.len()
    }
}
