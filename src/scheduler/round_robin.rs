//! Round-robin scheduling.
//!
//! # Algorithm
//!
//! Fixed-quantum time slicing over a FIFO ready queue of input
//! positions. Each dispatch consumes a full quantum or the remaining
//! burst, whichever is smaller. After a dispatch, processes that have
//! arrived in the meantime join the tail *before* the just-run process
//! re-joins — new arrivals take priority over a re-queue, and that
//! ordering is load-bearing for fairness. If the queue empties while
//! uncompleted processes remain (idle gap), the first process with
//! burst remaining is enqueued.
//!
//! One timeline segment is emitted per dispatch, partial quanta
//! included, in cumulative-service coordinates.
//!
//! # Complexity
//! O(n * max_burst / quantum) dispatches, O(n) scan per dispatch.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use crate::models::{ProcessSpec, ScheduleOutcome, TimelineSegment};

use super::{collect_results, ensure_nonempty, ScheduleError, Scheduler};

/// Time quantum used by [`RoundRobin::new`], in ticks.
pub const DEFAULT_QUANTUM: u64 = 5;

/// Fixed-quantum time-sliced scheduling.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: u64,
}

impl RoundRobin {
    /// Creates a scheduler with the default quantum of
    /// [`DEFAULT_QUANTUM`] ticks.
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Creates a scheduler with an explicit quantum.
    ///
    /// A zero quantum would never make progress and is rejected here,
    /// at configuration time.
    pub fn with_quantum(quantum: u64) -> Result<Self, ScheduleError> {
        if quantum == 0 {
            return Err(ScheduleError::InvalidQuantum { value: quantum });
        }
        Ok(Self { quantum })
    }

    /// The configured quantum in ticks.
    pub fn quantum(&self) -> u64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round-robin"
    }

    fn run(&self, processes: &[ProcessSpec]) -> Result<ScheduleOutcome, ScheduleError> {
        ensure_nonempty(processes)?;

        let n = processes.len();
        let mut remaining: Vec<u64> = processes.iter().map(|p| p.burst_duration).collect();
        let mut waiting_times = vec![0u64; n];
        let mut queued = vec![false; n];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut timeline = Vec::new();

        queued[0] = true;
        queue.push_back(0);

        let mut now: u64 = 0;
        let mut service_time: u64 = 0;
        let mut segment_start: u64 = 0;
        let mut completed = 0;

        while completed < n {
            let Some(idx) = queue.pop_front() else {
                break;
            };
            let spec = &processes[idx];

            // First dispatch: jump over the idle gap before arrival.
            if remaining[idx] == spec.burst_duration {
                now = now.max(spec.arrival_time);
            }

            if remaining[idx] > self.quantum {
                remaining[idx] -= self.quantum;
                now += self.quantum;
                service_time += self.quantum;
            } else {
                now += remaining[idx];
                service_time += remaining[idx];
                remaining[idx] = 0;
                waiting_times[idx] = now - spec.arrival_time - spec.burst_duration;
                completed += 1;
            }

            // Newly arrived processes join ahead of the re-queue below.
            for (i, other) in processes.iter().enumerate() {
                if remaining[i] > 0 && other.arrival_time <= now && !queued[i] {
                    queued[i] = true;
                    queue.push_back(i);
                }
            }

            if remaining[idx] > 0 {
                queue.push_back(idx);
            }

            // Idle gap: nothing ready yet, but work remains.
            if queue.is_empty() && completed < n {
                if let Some(i) = (0..n).find(|&i| remaining[i] > 0) {
                    queued[i] = true;
                    queue.push_back(i);
                }
            }

            timeline.push(TimelineSegment {
                process_id: spec.id,
                start: segment_start,
                stop: service_time,
            });
            segment_start = service_time;
        }

        let (results, summary) = collect_results(processes, &waiting_times);
        Ok(ScheduleOutcome {
            results,
            timeline,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantum_configuration() {
        assert_eq!(RoundRobin::new().quantum(), DEFAULT_QUANTUM);
        assert_eq!(RoundRobin::with_quantum(3).unwrap().quantum(), 3);
        assert_eq!(
            RoundRobin::with_quantum(0).unwrap_err(),
            ScheduleError::InvalidQuantum { value: 0 }
        );
    }

    #[test]
    fn test_reference_trace() {
        // P1 runs one quantum, P2 runs to completion at t=10 without
        // being preempted, P1 resumes and completes at t=15.
        let processes = vec![ProcessSpec::new(1, 10, 0), ProcessSpec::new(2, 5, 0)];
        let outcome = RoundRobin::new().run(&processes).unwrap();

        assert_eq!(outcome.result_for(2).unwrap().completion_time, 10);
        assert_eq!(outcome.result_for(2).unwrap().waiting_time, 5);
        assert_eq!(outcome.result_for(1).unwrap().completion_time, 15);
        assert_eq!(outcome.result_for(1).unwrap().waiting_time, 5);

        assert_eq!(
            outcome.timeline,
            vec![
                TimelineSegment {
                    process_id: 1,
                    start: 0,
                    stop: 5
                },
                TimelineSegment {
                    process_id: 2,
                    start: 5,
                    stop: 10
                },
                TimelineSegment {
                    process_id: 1,
                    start: 10,
                    stop: 15
                },
            ]
        );
    }

    #[test]
    fn test_preempted_process_appears_twice() {
        let processes = vec![ProcessSpec::new(1, 10, 0), ProcessSpec::new(2, 5, 0)];
        let outcome = RoundRobin::new().run(&processes).unwrap();

        let segments = outcome.segments_for(1);
        assert_eq!(segments.len(), 2);
        // Non-adjacent: P2 ran in between.
        assert_ne!(segments[0].stop, segments[1].start);
    }

    #[test]
    fn test_new_arrivals_enter_before_requeue() {
        // After P1's first quantum (t=5), P2 and P3 have arrived and
        // must run before P1's second slice.
        let processes = vec![
            ProcessSpec::new(1, 10, 0),
            ProcessSpec::new(2, 3, 1),
            ProcessSpec::new(3, 3, 2),
        ];
        let outcome = RoundRobin::new().run(&processes).unwrap();

        let order: Vec<u32> = outcome.timeline.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_idle_gap_between_arrivals() {
        let processes = vec![ProcessSpec::new(1, 2, 0), ProcessSpec::new(2, 3, 10)];
        let outcome = RoundRobin::new().run(&processes).unwrap();

        assert_eq!(outcome.result_for(1).unwrap().completion_time, 2);
        // P2 starts at its arrival, not at t=2.
        assert_eq!(outcome.result_for(2).unwrap().completion_time, 13);
        assert_eq!(outcome.result_for(2).unwrap().waiting_time, 0);
    }

    #[test]
    fn test_partial_quantum_emits_segment() {
        let processes = vec![ProcessSpec::new(1, 7, 0)];
        let outcome = RoundRobin::new().run(&processes).unwrap();

        assert_eq!(
            outcome.timeline,
            vec![
                TimelineSegment {
                    process_id: 1,
                    start: 0,
                    stop: 5
                },
                TimelineSegment {
                    process_id: 1,
                    start: 5,
                    stop: 7
                },
            ]
        );
    }

    #[test]
    fn test_smaller_quantum_round_robins_evenly() {
        let processes = vec![ProcessSpec::new(1, 4, 0), ProcessSpec::new(2, 4, 0)];
        let outcome = RoundRobin::with_quantum(2).unwrap().run(&processes).unwrap();

        let order: Vec<u32> = outcome.timeline.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![1, 2, 1, 2]);
        assert_eq!(outcome.result_for(2).unwrap().completion_time, 8);
    }
}
