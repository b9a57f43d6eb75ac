//! Search outcome types and per-worker statistics

use crate::partition::Partition;
use std::time::Duration;

/// What one search worker did with its partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    /// Index of the worker (and of its partition)
    pub worker_id: usize,
    /// Range of start positions this worker owned
    pub partition: Partition,
    /// Number of start positions examined before returning
    pub positions_scanned: u64,
    /// Start of the match this worker found, if it found one
    pub matched_at: Option<usize>,
    /// Whether this worker was the one that flipped the found-flag
    pub set_flag: bool,
    /// Whether the worker stopped because another worker had already matched
    pub stopped_early: bool,
}

impl WorkerReport {
    pub fn new(worker_id: usize, partition: Partition) -> Self {
        Self {
            worker_id,
            partition,
            positions_scanned: 0,
            matched_at: None,
            set_flag: false,
            stopped_early: false,
        }
    }

    /// Whether every start position in the partition was examined
    pub fn completed(&self) -> bool {
        self.positions_scanned == self.partition.len() as u64
    }
}

/// Result of one parallel search call
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Whether any worker located the pattern
    pub found: bool,
    /// Wall time from fan-out to the last join
    pub elapsed_time: Duration,
    /// One report per worker, ordered by worker id
    pub workers: Vec<WorkerReport>,
}

impl SearchOutcome {
    /// Outcome for the empty pattern, which is present in every buffer
    pub fn empty_pattern(elapsed_time: Duration) -> Self {
        Self {
            found: true,
            elapsed_time,
            workers: Vec::new(),
        }
    }

    /// Total start positions examined across all workers
    pub fn positions_scanned(&self) -> u64 {
        self.workers.iter().map(|w| w.positions_scanned).sum()
    }

    /// The report of the worker whose match was published
    pub fn finder(&self) -> Option<&WorkerReport> {
        self.workers.iter().find(|w| w.set_flag)
    }

    /// Number of workers that returned before finishing their partition
    pub fn early_exits(&self) -> usize {
        self.workers.iter().filter(|w| w.stopped_early).count()
    }
}
