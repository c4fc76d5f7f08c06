//! CPU-scheduling disciplines.
//!
//! Four sibling algorithms sharing one output contract:
//!
//! - [`Fcfs`]: first-come, first-serve (non-preemptive, one pass)
//! - [`Sjf`]: shortest-remaining-time-first (preemptive, unit ticks)
//! - [`Priority`]: preemptive priority, shortest-burst tie-break
//! - [`RoundRobin`]: fixed-quantum time slicing over a FIFO ready queue
//!
//! Each run is a pure function of its input slice: schedulers never
//! mutate the specs and keep all derived state (remaining burst, queue
//! marks) in run-local tables, so the same slice can be handed to every
//! discipline in any order.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use sjf::Sjf;

use std::error::Error;
use std::fmt;

use crate::models::{ProcessResult, ProcessSpec, RunSummary, ScheduleOutcome};

/// Errors a scheduling run can signal before simulation begins.
///
/// Scheduling itself is total: once a run starts it always produces a
/// complete outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No processes were supplied; averages and throughput would be
    /// undefined.
    EmptyProcessSet,
    /// A round-robin quantum of zero was requested.
    InvalidQuantum { value: u64 },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::EmptyProcessSet => {
                write!(f, "cannot schedule an empty process set")
            }
            ScheduleError::InvalidQuantum { value } => {
                write!(f, "round-robin quantum must be positive, got {value}")
            }
        }
    }
}

impl Error for ScheduleError {}

/// A scheduling discipline.
///
/// Implementations simulate one complete run over the given processes
/// and return results in input order, the timeline in execution order,
/// and the aggregate summary.
pub trait Scheduler {
    /// Discipline name, used as the report title.
    fn name(&self) -> &'static str;

    /// Simulates one run over `processes`.
    ///
    /// The input is assumed validated (see [`crate::validation`]);
    /// the only error signalled here is the degenerate empty set.
    fn run(&self, processes: &[ProcessSpec]) -> Result<ScheduleOutcome, ScheduleError>;
}

/// Rejects the degenerate empty input before any bookkeeping starts.
pub(crate) fn ensure_nonempty(processes: &[ProcessSpec]) -> Result<(), ScheduleError> {
    if processes.is_empty() {
        Err(ScheduleError::EmptyProcessSet)
    } else {
        Ok(())
    }
}

/// Builds the shared half of the output contract from per-process
/// waiting times.
///
/// `waiting_times` is index-aligned with `processes`. Result rows are
/// derived per the row invariants, totals are accumulated, and the
/// summary divides by the (already verified non-zero) process count.
pub(crate) fn collect_results(
    processes: &[ProcessSpec],
    waiting_times: &[u64],
) -> (Vec<ProcessResult>, RunSummary) {
    debug_assert_eq!(processes.len(), waiting_times.len());

    let mut total_wait: u64 = 0;
    let mut total_turnaround: u64 = 0;
    let mut last_completion: u64 = 0;

    let results: Vec<ProcessResult> = processes
        .iter()
        .zip(waiting_times)
        .map(|(spec, &waiting)| {
            let row = ProcessResult::new(spec, waiting);
            total_wait += row.waiting_time;
            total_turnaround += row.turnaround_time;
            last_completion = last_completion.max(row.completion_time);
            row
        })
        .collect();

    let count = results.len() as f64;
    let summary = RunSummary {
        average_waiting_time: total_wait as f64 / count,
        average_turnaround_time: total_turnaround as f64 / count,
        throughput: count / last_completion as f64,
    };

    (results, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(1, 6, 0).with_priority(3),
            ProcessSpec::new(2, 2, 1).with_priority(1),
            ProcessSpec::new(3, 8, 2).with_priority(2),
            ProcessSpec::new(4, 3, 4).with_priority(1),
        ]
    }

    fn all_schedulers() -> Vec<Box<dyn Scheduler>> {
        vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(Priority),
            Box::new(RoundRobin::new()),
        ]
    }

    #[test]
    fn test_conservation_across_disciplines() {
        // sum(turnaround) == sum(waiting) + sum(burst) for every discipline.
        let processes = workload();
        let total_burst: u64 = processes.iter().map(|p| p.burst_duration).sum();

        for scheduler in all_schedulers() {
            let outcome = scheduler.run(&processes).unwrap();
            let total_wait: u64 = outcome.results.iter().map(|r| r.waiting_time).sum();
            let total_turnaround: u64 = outcome.results.iter().map(|r| r.turnaround_time).sum();
            assert_eq!(
                total_turnaround,
                total_wait + total_burst,
                "conservation violated by {}",
                scheduler.name()
            );
        }
    }

    #[test]
    fn test_row_invariants_across_disciplines() {
        let processes = workload();
        for scheduler in all_schedulers() {
            let outcome = scheduler.run(&processes).unwrap();
            assert_eq!(outcome.process_count(), processes.len());
            for row in &outcome.results {
                assert_eq!(row.turnaround_time, row.burst_duration + row.waiting_time);
                assert_eq!(row.completion_time, row.arrival_time + row.turnaround_time);
            }
        }
    }

    #[test]
    fn test_results_follow_input_order() {
        let processes = workload();
        for scheduler in all_schedulers() {
            let outcome = scheduler.run(&processes).unwrap();
            let ids: Vec<u32> = outcome.results.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![1, 2, 3, 4], "order violated by {}", scheduler.name());
        }
    }

    #[test]
    fn test_empty_set_rejected() {
        for scheduler in all_schedulers() {
            assert_eq!(
                scheduler.run(&[]).unwrap_err(),
                ScheduleError::EmptyProcessSet
            );
        }
    }

    #[test]
    fn test_specs_not_consumed_between_runs() {
        // Running every discipline over the same slice must be
        // reproducible: a second run yields identical outcomes.
        let processes = workload();
        for scheduler in all_schedulers() {
            let first = scheduler.run(&processes).unwrap();
            let second = scheduler.run(&processes).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_collect_results_summary() {
        let processes = vec![ProcessSpec::new(1, 5, 0), ProcessSpec::new(2, 3, 1)];
        let (results, summary) = collect_results(&processes, &[0, 4]);
        assert_eq!(results[1].completion_time, 8);
        assert!((summary.average_waiting_time - 2.0).abs() < 1e-10);
        assert!((summary.average_turnaround_time - 6.0).abs() < 1e-10);
        assert!((summary.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_error_display() {
        assert!(ScheduleError::EmptyProcessSet.to_string().contains("empty"));
        assert!(ScheduleError::InvalidQuantum { value: 0 }
            .to_string()
            .contains("quantum"));
    }
}
