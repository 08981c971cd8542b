//! Transition journal
//!
//! Ordered, append-only log of screen transitions with adjacent-duplicate
//! suppression. Append order is the authoritative ordering; timestamps are
//! monotonic under the single-threaded calling contract.

use chrono::Utc;
use tracing::debug;

use crate::types::{Navigation, NavigationCause, ScreenName};

/// Append-only, dedup-on-write log of screen transitions for one test run.
#[derive(Debug, Default)]
pub struct TransitionJournal {
    entries: Vec<Navigation>,
}

impl TransitionJournal {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Record a transition. Silent no-op when the last entry already ends
    /// on `current`. Only adjacent repeats are suppressed; a screen may
    /// reappear non-adjacently. Returns whether an entry was written.
    ///
    /// Screen names are recorded as given; the journal does not validate
    /// well-formedness.
    pub fn append(
        &mut self,
        previous: ScreenName,
        current: ScreenName,
        cause: NavigationCause,
    ) -> bool {
        if let Some(last) = self.entries.last() {
            if last.current_screen == current {
                debug!(screen = %current, "adjacent duplicate suppressed");
                return false;
            }
        }
        debug!(from = %previous, to = %current, cause = cause.as_str(), "navigation recorded");
        self.entries.push(Navigation {
            previous_screen: previous,
            current_screen: current,
            timestamp: Utc::now(),
            cause,
        });
        true
    }

    /// Entries in append order.
    pub fn snapshot(&self) -> &[Navigation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. The only way entries are ever removed.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
