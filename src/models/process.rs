//! Process (workload) model.
//!
//! A process is the unit of work submitted to a scheduling discipline:
//! it arrives at a fixed time, needs a fixed amount of CPU, and carries
//! a priority. The record is immutable during a run — schedulers keep
//! remaining-burst and start-time bookkeeping in their own per-run
//! tables, so the same slice of specs can be fed to every discipline
//! without copying or resetting fields.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// An immutable process descriptor.
///
/// # Time Representation
/// All times are unitless discrete ticks relative to t=0. The consumer
/// defines what one tick means (ms, a simulator step, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier (positive).
    pub id: u32,
    /// Total CPU time required to run to completion (ticks, > 0).
    pub burst_duration: u64,
    /// Time at which the process becomes eligible to run (ticks).
    pub arrival_time: u64,
    /// Scheduling priority (lower value = higher priority).
    pub priority: i64,
}

impl ProcessSpec {
    /// Creates a new process spec with default priority 0.
    ///
    /// Field order mirrors the input record format: id, burst, arrival.
    pub fn new(id: u32, burst_duration: u64, arrival_time: u64) -> Self {
        Self {
            id,
            burst_duration,
            arrival_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = higher priority).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let p = ProcessSpec::new(1, 5, 2);
        assert_eq!(p.id, 1);
        assert_eq!(p.burst_duration, 5);
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn test_with_priority() {
        let p = ProcessSpec::new(7, 3, 0).with_priority(-2);
        assert_eq!(p.priority, -2);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = ProcessSpec::new(4, 9, 1).with_priority(3);
        let json = serde_json::to_string(&p).unwrap();
        let back: ProcessSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
