//! The finite symbol set a buffer is drawn from

use crate::error::{Result, StrHuntError};
use std::collections::HashSet;
use std::fmt;

/// An immutable, ordered, non-empty set of byte symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Build an alphabet of ASCII symbols, rejecting empty and duplicated sets.
    pub fn new(symbols: impl Into<Vec<u8>>) -> Result<Self> {
        let symbols = symbols.into();
        if symbols.is_empty() {
            return Err(StrHuntError::Configuration(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }
        if let Some(s) = symbols.iter().find(|s| !s.is_ascii()) {
            return Err(StrHuntError::Configuration(format!(
                "alphabet symbols must be ASCII, got byte '{}'",
                s.escape_ascii()
            )));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for &s in &symbols {
            if !seen.insert(s) {
                return Err(StrHuntError::Configuration(format!(
                    "alphabet contains duplicate symbol '{}'",
                    s.escape_ascii()
                )));
            }
        }

        Ok(Self { symbols })
    }

    /// The 26 lowercase ASCII letters
    pub fn lowercase() -> Self {
        Self {
            symbols: (b'a'..=b'z').collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`, in the order given at construction.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.symbols.get(index).copied()
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols.escape_ascii())
    }
}

impl std::str::FromStr for Alphabet {
    type Err = StrHuntError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
            return Err(StrHuntError::Configuration(format!(
                "alphabet symbols must be ASCII, got '{}'",
                c
            )));
        }
        Alphabet::new(s.as_bytes())
    }
}
