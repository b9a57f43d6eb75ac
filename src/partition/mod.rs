//! Splitting a flat buffer into contiguous per-worker ranges
//!
//! Both generation and search hand one range to each worker. Every range has
//! `total / workers` elements except the last, which also takes the
//! remainder `total % workers`. When `total < workers` the leading ranges are
//! empty and workers treat them as no-ops.

use crate::error::{Result, StrHuntError};
use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;

/// A half-open index range `[start, end)` owned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "partition start {} past end {}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Split `[0, total)` into `workers` contiguous, gapless ranges.
///
/// # Errors
/// Returns [`StrHuntError::Configuration`] when `workers` is zero.
pub fn partition(total: usize, workers: usize) -> Result<Vec<Partition>> {
    let workers = NonZeroUsize::new(workers).ok_or_else(|| {
        StrHuntError::Configuration("cannot partition work across zero workers".to_string())
    })?;
    Ok(partition_nonzero(total, workers))
}

/// Infallible form of [`partition`] for callers that already hold a validated count.
pub fn partition_nonzero(total: usize, workers: NonZeroUsize) -> Vec<Partition> {
    let workers = workers.get();
    let step = total / workers;
    let remain = total % workers;

    let mut partitions = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let len = if i == workers - 1 { step + remain } else { step };
        partitions.push(Partition::new(start, start + len));
        start += len;
    }

    debug_assert_eq!(start, total);
    partitions
}

/// Lengths of each partition, in order. Handy for logging a split.
pub fn partition_lengths(partitions: &[Partition]) -> Vec<usize> {
    partitions.iter().map(Partition::len).collect()
}
