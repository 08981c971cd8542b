//! Inference throttling
//!
//! Rate-limits how often inference is attempted. Rejected attempts are a
//! no-op, not an error: the tracker simply keeps the previous screen.

use std::time::Duration;

use tokio::time::Instant;

/// Minimum-interval gate between accepted inference attempts.
#[derive(Debug, Clone, Copy)]
pub struct ThrottleGate {
    min_interval: Duration,
}

impl ThrottleGate {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Whether an attempt at `now` is accepted, given the last accepted
    /// attempt. On `true` the caller is responsible for recording `now` as
    /// the new last-check time.
    pub fn allow(&self, last_check: Option<Instant>, now: Instant) -> bool {
        match last_check {
            None => true,
            Some(last) => now.duration_since(last) >= self.min_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_always_allowed() {
        let gate = ThrottleGate::new(Duration::from_millis(300));
        assert!(gate.allow(None, Instant::now()));
    }

    #[test]
    fn test_rejects_within_interval() {
        let gate = ThrottleGate::new(Duration::from_millis(300));
        let last = Instant::now();
        assert!(!gate.allow(Some(last), last));
        assert!(!gate.allow(Some(last), last + Duration::from_millis(299)));
    }

    #[test]
    fn test_allows_at_and_past_interval() {
        let gate = ThrottleGate::new(Duration::from_millis(300));
        let last = Instant::now();
        assert!(gate.allow(Some(last), last + Duration::from_millis(300)));
        assert!(gate.allow(Some(last), last + Duration::from_secs(5)));
    }

    #[test]
    fn test_custom_interval() {
        let gate = ThrottleGate::new(Duration::from_millis(50));
        let last = Instant::now();
        assert!(!gate.allow(Some(last), last + Duration::from_millis(49)));
        assert!(gate.allow(Some(last), last + Duration::from_millis(50)));
    }
}
