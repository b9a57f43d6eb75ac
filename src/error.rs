//! Error types for strhunt

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrHuntError {
    /// Worker count or alphabet cannot be used to build a game.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid string size: {0}")]
    InvalidSize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StrHuntError>;
