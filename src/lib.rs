//! strhunt - parallel random string generation and substring search
//!
//! A [`Game`] fills a buffer with random symbols by splitting it into one
//! contiguous range per worker thread, then answers "is this word in the
//! string?" by scanning the same ranges in parallel. Workers share a single
//! found-flag so the rest of the pool stops scanning once anyone matches.

pub mod config;
pub mod error;
pub mod game;
pub mod generate;
pub mod partition;
pub mod search;
pub mod session;
pub mod symbols;

pub use config::ParallelConfig;
pub use error::{Result, StrHuntError};
pub use game::Game;
pub use partition::{Partition, partition};
pub use search::{SearchCoordinator, SearchOutcome};
pub use session::{SessionOptions, run_session};
pub use symbols::{Alphabet, SymbolSource};
