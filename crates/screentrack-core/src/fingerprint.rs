//! Snapshot fingerprinting
//!
//! Reduces an arbitrary-length UI snapshot to a cheap comparable hash so
//! the tracker can skip reclassification when nothing changed. Collisions
//! are tolerated: the fingerprint is a fast "probably unchanged" gate, not
//! a correctness primitive.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Fingerprint of the empty snapshot.
pub const EMPTY_FINGERPRINT: u64 = 0;

/// Hash the full snapshot text (not sampled) to a fixed-width fingerprint.
/// Stable across calls within one process.
pub fn fingerprint(text: &str) -> u64 {
    if text.is_empty() {
        return EMPTY_FINGERPRINT;
    }
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
