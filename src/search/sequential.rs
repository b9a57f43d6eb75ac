//! Single-threaded reference scan, used to compare timings against the
//! parallel search and as a test oracle.

use crate::search::worker::matches_at;

/// Position of the first occurrence of `pattern` in `buffer`.
///
/// The empty pattern is found at 0, even in an empty buffer.
pub fn find(buffer: &[u8], pattern: &[u8]) -> Option<usize> {
    let Some(&first) = pattern.first() else {
        return Some(0);
    };
    (0..buffer.len()).find(|&i| buffer[i] == first && matches_at(buffer, pattern, i))
}

pub fn contains(buffer: &[u8], pattern: &[u8]) -> bool {
    find(buffer, pattern).is_some()
}
