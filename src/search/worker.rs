//! Per-partition substring scan run by one search worker.

use crate::partition::Partition;
use crate::search::flag::FoundFlag;
use crate::search::result::WorkerReport;

/// Whether `pattern` occurs in `buffer` starting at `index`.
///
/// A window that would run past the end of `buffer` is a non-match.
pub fn matches_at(buffer: &[u8], pattern: &[u8], index: usize) -> bool {
    buffer
        .get(index..)
        .is_some_and(|rest| rest.starts_with(pattern))
}

/// Scan the start positions of `partition` for `pattern`.
///
/// The candidate window may extend past `partition.end` into the next
/// worker's range, so matches that straddle a partition boundary are found by
/// the worker that owns their first symbol. Before every start position the
/// worker polls `flag` and returns as soon as some other worker has matched.
///
/// `partition` must lie within `buffer`.
pub fn search_range(
    worker_id: usize,
    buffer: &[u8],
    pattern: &[u8],
    partition: Partition,
    flag: &FoundFlag,
) -> WorkerReport {
    let mut report = WorkerReport::new(worker_id, partition);

    let Some(&first) = pattern.first() else {
        // Empty pattern occurs at every position
        if !partition.is_empty() {
            report.matched_at = Some(partition.start);
            report.set_flag = flag.set();
        }
        return report;
    };

    for i in partition.range() {
        if flag.is_set() {
            report.stopped_early = true;
            return report;
        }
        report.positions_scanned += 1;

        if buffer[i] == first && matches_at(buffer, pattern, i) {
            report.matched_at = Some(i);
            report.set_flag = flag.set();
            return report;
        }
    }

    report
}
