//! Configuration for parallel generation and search.

use crate::error::{Result, StrHuntError};
use crate::symbols::Alphabet;

/// Configuration shared by buffer generation and search.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn per operation.
    pub num_workers: usize,
    /// Base random seed (workers get seed + worker_id).
    pub base_seed: Option<u64>,
    /// Symbols the buffer is drawn from.
    pub alphabet: Alphabet,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            base_seed: None,
            alphabet: Alphabet::lowercase(),
        }
    }
}

impl ParallelConfig {
    /// Set the number of workers. Zero is rejected by [`validate`](Self::validate).
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Set the number of workers from an Option, keeping the host default on `None`.
    pub fn with_workers_option(mut self, num_workers: Option<usize>) -> Self {
        if let Some(n) = num_workers {
            self.num_workers = n;
        }
        self
    }

    /// Set the base random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Set the base random seed from an Option.
    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.base_seed = seed;
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Check the configuration can drive a partitioned operation.
    pub fn validate(&self) -> Result<()> {
        if self.num_workers == 0 {
            return Err(StrHuntError::Configuration(
                "worker count resolved to zero".to_string(),
            ));
        }
        Ok(())
    }
}
