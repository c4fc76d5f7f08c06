//! Shortest-job-first (preemptive shortest-remaining-time-first).
//!
//! # Algorithm
//!
//! A discrete state machine advancing one tick at a time. At each tick
//! the eligible process (arrived, burst remaining) with the minimum
//! remaining time runs for one unit; a newly eligible process preempts
//! only when its remaining time is strictly smaller than the running
//! process's, so ties favor continuity. Ticks with no eligible process
//! are idle.
//!
//! A process's result row is recorded the tick its remaining time hits
//! zero; one timeline segment per completion, bounded by the previous
//! completion boundary.
//!
//! # Complexity
//! O(n * max_burst) ticks, O(n) scan per tick.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::{ProcessSpec, ScheduleOutcome, TimelineSegment};

use super::{collect_results, ensure_nonempty, ScheduleError, Scheduler};

/// Preemptive shortest-remaining-time-first scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "Shortest-job-first"
    }

    fn run(&self, processes: &[ProcessSpec]) -> Result<ScheduleOutcome, ScheduleError> {
        ensure_nonempty(processes)?;

        let n = processes.len();
        let mut remaining: Vec<u64> = processes.iter().map(|p| p.burst_duration).collect();
        let mut waiting_times = vec![0u64; n];
        let mut timeline = Vec::new();

        let mut now: u64 = 0;
        let mut completed = 0;
        let mut running: Option<usize> = None;
        let mut segment_start: u64 = 0;

        while completed < n {
            // Seeded with the running process so equal remaining times
            // never cause a switch.
            let mut pick = running;
            for (i, spec) in processes.iter().enumerate() {
                if spec.arrival_time <= now && remaining[i] > 0 {
                    pick = match pick {
                        Some(p) if remaining[i] >= remaining[p] => Some(p),
                        _ => Some(i),
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
                running = None;

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
                running = Some(idx);
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
