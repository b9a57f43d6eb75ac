//! Parallel substring search over a partitioned buffer
//!
//! This module provides the pieces of one search call:
//! - A **coordinator** that partitions the buffer, spawns one worker per
//!   partition and joins them all
//! - **Workers** that scan the start positions of their partition
//! - A shared **found-flag** workers poll to stop early once anyone matches
//! - A **sequential** scan with the same matching rules, for comparison
//!
//! # Example
//!
//! ```
//! use strhunt::search::SearchCoordinator;
//!
//! let coordinator = SearchCoordinator::new(4).unwrap();
//! assert!(coordinator.run(b"abcdefghijklmnopqrstuvwxyz", b"xyz"));
//! assert!(!coordinator.run(b"abcdefghijklmnopqrstuvwxyz", b"xyzz"));
//! ```

pub mod coordinator;
pub mod flag;
pub mod result;
pub mod sequential;
pub mod worker;

pub use coordinator::SearchCoordinator;
pub use flag::FoundFlag;
pub use result::{SearchOutcome, WorkerReport};
pub use worker::{matches_at, search_range};
