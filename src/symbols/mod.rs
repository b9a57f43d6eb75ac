//! Symbol alphabets and random symbol generation

pub mod alphabet;
pub mod source;

pub use alphabet::Alphabet;
pub use source::{SymbolSource, worker_seed};
