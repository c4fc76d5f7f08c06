//! First-come, first-serve.
//!
//! # Algorithm
//!
//! One pass over the input slice, which is assumed sorted by arrival
//! time (the discipline does not re-sort). Each process waits for the
//! cumulative burst of everything serviced before it:
//! `waiting = max(0, service_so_far - arrival)`. One timeline segment
//! per process, back to back.
//!
//! # Complexity
//! O(n).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use crate::models::{ProcessSpec, ScheduleOutcome, TimelineSegment};

use super::{collect_results, ensure_nonempty, ScheduleError, Scheduler};

/// Non-preemptive arrival-order scheduling.
///
/// # Example
///
/// ```
/// use cpu_sched::{Fcfs, ProcessSpec, Scheduler};
///
/// let processes = vec![ProcessSpec::new(1, 5, 0), ProcessSpec::new(2, 3, 1)];
/// let outcome = Fcfs.run(&processes).unwrap();
/// assert_eq!(outcome.results[0].waiting_time, 0);
/// assert_eq!(outcome.results[1].waiting_time, 4);
/// assert_eq!(outcome.results[1].completion_time, 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "First-come, first-serve"
    }

    fn run(&self, processes: &[ProcessSpec]) -> Result<ScheduleOutcome, ScheduleError> {
        ensure_nonempty(processes)?;

        let mut service_time: u64 = 0;
        let mut waiting_times = Vec::with_capacity(processes.len());
        let mut timeline = Vec::with_capacity(processes.len());

        for spec in processes {
            let waiting = service_time.saturating_sub(spec.arrival_time);
            let start = spec.arrival_time + waiting;
            service_time += spec.burst_duration;

            waiting_times.push(waiting);
            timeline.push(TimelineSegment {
                process_id: spec.id,
                start,
                stop: service_time,
            });
        }

        let (results, summary) = collect_results(processes, &waiting_times);
        Ok(ScheduleOutcome {
            results,
            timeline,
            summary,
        })
    }
}
