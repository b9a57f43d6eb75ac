//! Top-level game state: one generated buffer, many searches

use crate::config::ParallelConfig;
use crate::error::Result;
use crate::generate::generate;
use crate::search::{SearchCoordinator, SearchOutcome};
use crate::symbols::Alphabet;
use std::fmt;
use tracing::info;

/// Owns a random buffer for its whole lifetime and answers substring queries
/// against it using the same worker count the buffer was generated with.
#[derive(Debug)]
pub struct Game {
    buffer: Vec<u8>,
    alphabet: Alphabet,
    coordinator: SearchCoordinator,
}

impl Game {
    /// Generate a buffer of `size` random symbols and wrap it in a game.
    pub fn new(size: usize, config: &ParallelConfig) -> Result<Self> {
        config.validate()?;
        info!(size, workers = config.num_workers, "generating string");
        let buffer = generate(size, config)?;
        Self::from_parts(buffer, config)
    }

    /// Wrap an existing buffer instead of generating one.
    ///
    /// Symbols outside `config.alphabet` are allowed; the alphabet only
    /// describes what generation would have produced.
    pub fn from_buffer(buffer: impl Into<Vec<u8>>, config: &ParallelConfig) -> Result<Self> {
        config.validate()?;
        Self::from_parts(buffer.into(), config)
    }

    fn from_parts(buffer: Vec<u8>, config: &ParallelConfig) -> Result<Self> {
        Ok(Self {
            buffer,
            alphabet: config.alphabet.clone(),
            coordinator: SearchCoordinator::new(config.num_workers)?,
        })
    }

    /// Whether `pattern` occurs in the buffer.
    pub fn run(&self, pattern: &str) -> bool {
        self.coordinator.run(&self.buffer, pattern.as_bytes())
    }

    /// Like [`run`](Self::run) but with per-worker statistics.
    pub fn run_with_stats(&self, pattern: &str) -> SearchOutcome {
        self.coordinator.run_with_stats(&self.buffer, pattern.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn num_workers(&self) -> usize {
        self.coordinator.num_workers()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.buffer))
    }
}
