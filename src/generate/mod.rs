//! Parallel random buffer generation
//!
//! The buffer is carved into one disjoint mutable slice per partition and each
//! slice is filled by its own scoped thread with its own [`SymbolSource`].
//! Slices never overlap, so writes need no lock.

use crate::config::ParallelConfig;
use crate::error::{Result, StrHuntError};
use crate::partition::{Partition, partition, partition_lengths};
use crate::symbols::{Alphabet, SymbolSource, worker_seed};
use std::time::Instant;
use tracing::{debug, info};

/// Fill `buffer` with random symbols using `config.num_workers` threads.
///
/// Blocks until every worker has finished. On success every byte of the
/// buffer is a symbol of `config.alphabet`.
pub fn generate_into(buffer: &mut [u8], config: &ParallelConfig) -> Result<()> {
    config.validate()?;
    let start_time = Instant::now();
    let partitions = partition(buffer.len(), config.num_workers)?;
    let alphabet = &config.alphabet;
    debug!(lengths = ?partition_lengths(&partitions), "partitioned buffer");

    std::thread::scope(|scope| {
        for (worker_id, (part, chunk)) in partitions
            .iter()
            .zip(split_by_partitions(buffer, &partitions))
            .enumerate()
        {
            if part.is_empty() {
                continue;
            }
            let seed = worker_seed(config.base_seed, worker_id);
            scope.spawn(move || fill_chunk(worker_id, *part, chunk, alphabet, seed));
        }
    });

    info!(
        size = buffer.len(),
        workers = config.num_workers,
        elapsed = ?start_time.elapsed(),
        "buffer generated"
    );
    Ok(())
}

/// Allocate and fill a fresh buffer of `size` symbols.
///
/// # Errors
/// Returns [`StrHuntError::InvalidSize`] when `size` bytes cannot be allocated.
pub fn generate(size: usize, config: &ParallelConfig) -> Result<Vec<u8>> {
    config.validate()?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|e| StrHuntError::InvalidSize(format!("{}: {}", size, e)))?;
    buffer.resize(size, 0);
    generate_into(&mut buffer, config)?;
    Ok(buffer)
}

fn fill_chunk(
    worker_id: usize,
    part: Partition,
    chunk: &mut [u8],
    alphabet: &Alphabet,
    seed: Option<u64>,
) {
    debug!(worker_id, partition = %part, "generating");
    let mut source = SymbolSource::new(alphabet, seed);
    source.fill(chunk);
}

/// Split `buffer` into one mutable slice per partition.
///
/// Partitions must be contiguous and start at zero, which is what
/// [`partition`] produces.
fn split_by_partitions<'b>(
    mut buffer: &'b mut [u8],
    partitions: &[Partition],
) -> Vec<&'b mut [u8]> {
    let mut chunks = Vec::with_capacity(partitions.len());
    for part in partitions {
        let (head, tail) = std::mem::take(&mut buffer).split_at_mut(part.len());
        chunks.push(head);
        buffer = tail;
    }
    chunks
}
