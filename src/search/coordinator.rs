//! Parallel search coordinator that fans out one worker per partition.

use crate::error::{Result, StrHuntError};
use crate::partition::partition_nonzero;
use crate::search::flag::FoundFlag;
use crate::search::result::{SearchOutcome, WorkerReport};
use crate::search::worker::search_range;
use crossbeam_channel::unbounded;
use std::num::NonZeroUsize;
use std::time::Instant;
use tracing::{debug, info};

/// Runs a substring search across a fixed number of workers.
#[derive(Debug, Clone, Copy)]
pub struct SearchCoordinator {
    num_workers: NonZeroUsize,
}

impl SearchCoordinator {
    /// Create a coordinator, rejecting a worker count of zero.
    pub fn new(num_workers: usize) -> Result<Self> {
        let num_workers = NonZeroUsize::new(num_workers).ok_or_else(|| {
            StrHuntError::Configuration("search needs at least one worker".to_string())
        })?;
        Ok(Self { num_workers })
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers.get()
    }

    /// Whether `pattern` occurs anywhere in `buffer`.
    pub fn run(&self, buffer: &[u8], pattern: &[u8]) -> bool {
        self.run_with_stats(buffer, pattern).found
    }

    /// Search and return per-worker statistics alongside the result.
    ///
    /// Every spawned worker is joined before this returns, even after a match
    /// has been published; the remaining workers see the flag on their next
    /// poll and exit.
    pub fn run_with_stats(&self, buffer: &[u8], pattern: &[u8]) -> SearchOutcome {
        let start_time = Instant::now();

        if pattern.is_empty() {
            return SearchOutcome::empty_pattern(start_time.elapsed());
        }

        let partitions = partition_nonzero(buffer.len(), self.num_workers);
        let flag = FoundFlag::new();

        // Unbounded channel from workers to coordinator (workers shouldn't block)
        let (report_tx, report_rx) = unbounded::<WorkerReport>();

        std::thread::scope(|scope| {
            for (worker_id, part) in partitions.iter().copied().enumerate() {
                let report_tx = report_tx.clone();
                let flag = &flag;
                scope.spawn(move || {
                    let report = search_range(worker_id, buffer, pattern, part, flag);
                    debug!(
                        worker_id,
                        partition = %part,
                        scanned = report.positions_scanned,
                        matched_at = ?report.matched_at,
                        stopped_early = report.stopped_early,
                        "search worker finished"
                    );
                    // Receiver outlives the scope
                    let _ = report_tx.send(report);
                });
            }
        });
        drop(report_tx);

        let mut workers: Vec<WorkerReport> = report_rx.iter().collect();
        workers.sort_by_key(|r| r.worker_id);

        let outcome = SearchOutcome {
            found: flag.get(),
            elapsed_time: start_time.elapsed(),
            workers,
        };

        info!(
            pattern_len = pattern.len(),
            found = outcome.found,
            scanned = outcome.positions_scanned(),
            early_exits = outcome.early_exits(),
            elapsed = ?outcome.elapsed_time,
            "search finished"
        );

        outcome
    }
}
