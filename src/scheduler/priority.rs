//! Preemptive priority scheduling with shortest-burst tie-break.
//!
//! # Algorithm
//!
//! The same unit-tick state machine as shortest-job-first, with a
//! different selection criterion: the eligible process with the lowest
//! priority value runs; a newly arrived lower-value process preempts
//! immediately. Among equal priorities the smaller total burst wins,
//! and exact ties keep the currently selected candidate.
//!
//! Waiting time is clamped to zero on completion, matching the
//! turnaround bookkeeping of the tick machine under simultaneous
//! equal-priority arrivals.
//!
//! # Complexity
//! O(n * max_burst) ticks, O(n) scan per tick.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use crate::models::{ProcessSpec, ScheduleOutcome, TimelineSegment};

use super::{collect_results, ensure_nonempty, ScheduleError, Scheduler};

/// Preemptive lowest-priority-value-first scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl Scheduler for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn run(&self, processes: &[ProcessSpec]) -> Result<ScheduleOutcome, ScheduleError> {
        ensure_nonempty(processes)?;

        let n = processes.len();
        let mut remaining: Vec<u64> = processes.iter().map(|p| p.burst_duration).collect();
        let mut waiting_times = vec![0u64; n];
        let mut timeline = Vec::new();

        let mut now: u64 = 0;
        let mut completed = 0;
        let mut selected: Option<usize> = None;
        let mut segment_start: u64 = 0;

        while completed < n {
            let mut pick = selected;
            for (i, spec) in processes.iter().enumerate() {
                if spec.arrival_time <= now && remaining[i] > 0 {
                    pick = match pick {
                        None => Some(i),
                        Some(p) if spec.priority < processes[p].priority => Some(i),
                        Some(p)
                            if spec.priority == processes[p].priority
                                && spec.burst_duration < processes[p].burst_duration =>
                        {
                            Some(i)
                        }
                        other => other,
                    };
                }
            }

            let Some(idx) = pick else {
                now += 1;
                continue;
            };

            remaining[idx] -= 1;
            if remaining[idx] == 0 {
                completed += 1;
                selected = None;

                let completion_tick = now + 1;
                waiting_times[idx] = completion_tick
                    .saturating_sub(processes[idx].burst_duration + processes[idx].arrival_time);

                timeline.push(TimelineSegment {
                    process_id: processes[idx].id,
                    start: segment_start,
                    stop: completion_tick,
                });
                segment_start = completion_tick;
            } else {
                selected = Some(idx);
            }
            now += 1;
        }

        let (results, summary) = collect_results(processes, &waiting_times);
        Ok(ScheduleOutcome {
            results,
            timeline,
            summary,
        })
    }
}
