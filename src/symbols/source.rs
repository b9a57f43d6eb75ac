//! Per-worker uniform symbol generator

use crate::symbols::alphabet::Alphabet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws symbols uniformly from an alphabet.
///
/// Each worker constructs its own source; an instance owns its engine state
/// and is never shared between threads.
pub struct SymbolSource<'a> {
    alphabet: &'a Alphabet,
    rng: ChaCha8Rng,
    max_index: usize,
}

impl<'a> SymbolSource<'a> {
    /// Create a source seeded from `seed`, or from OS entropy when `None`.
    pub fn new(alphabet: &'a Alphabet, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            alphabet,
            rng,
            max_index: alphabet.len() - 1,
        }
    }

    /// Next uniformly distributed symbol.
    pub fn next_symbol(&mut self) -> u8 {
        let index = self.rng.random_range(0..=self.max_index);
        // Alphabet is non-empty and index is within [0, len - 1]
        self.alphabet.symbols()[index]
    }

    /// Overwrite every element of `out` with a fresh symbol.
    pub fn fill(&mut self, out: &mut [u8]) {
        for slot in out.iter_mut() {
            *slot = self.next_symbol();
        }
    }
}

/// Seed for worker `worker_id` derived from a base seed (workers get seed + worker_id).
pub fn worker_seed(base_seed: Option<u64>, worker_id: usize) -> Option<u64> {
    base_seed.map(|s| s.wrapping_add(worker_id as u64))
}
