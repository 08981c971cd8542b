//! Core types for screentrack
//!
//! Screen names stay open-ended strings: the classifier and the fallback
//! path synthesize novel names at runtime, so [`ScreenName`] is a branded
//! string rather than a closed enum.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Names synthesized by the fallback path (e.g. "Screen at 14:3:7").
static FALLBACK_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Screen at \d{1,2}:\d{1,2}:\d{1,2}$").unwrap());

/// A display string identifying a logical screen as perceived by the
/// tracker.
///
/// Equality is exact string match. New values are synthesized at runtime
/// ("Screen at H:M:S" fallbacks, "WebView: <path>" labels), so this is
/// deliberately not an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenName(String);

impl ScreenName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for timestamp-derived fallback names. Downstream consumers can
    /// treat these as low-confidence inferences.
    pub fn is_low_confidence(&self) -> bool {
        FALLBACK_NAME_PATTERN.is_match(&self.0)
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ScreenName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Why a navigation entry was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationCause {
    TestStart,
    UserInteraction,
    NavigationDetected,
}

impl NavigationCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationCause::TestStart => "test_start",
            NavigationCause::UserInteraction => "user_interaction",
            NavigationCause::NavigationDetected => "navigation_detected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "test_start" => Some(NavigationCause::TestStart),
            "user_interaction" => Some(NavigationCause::UserInteraction),
            "navigation_detected" => Some(NavigationCause::NavigationDetected),
            _ => None,
        }
    }
}

/// A single screen transition.
///
/// Created only by the journal's append operation and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navigation {
    pub previous_screen: ScreenName,
    pub current_screen: ScreenName,
    pub timestamp: DateTime<Utc>,
    pub cause: NavigationCause,
}

/// Platform tag for the session under test. Informational only: it never
/// enters the inference decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    #[default]
    Unknown,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Unknown => "Unknown",
        }
    }

    /// Map loosely-typed driver capability strings to a platform tag.
    /// Anything unrecognized degrades to `Unknown`, never an error.
    pub fn from_capabilities(automation_name: &str, platform_name: &str) -> Self {
        let automation = automation_name.to_ascii_lowercase();
        let platform = platform_name.to_ascii_lowercase();
        if automation.contains("uiautomator") || platform.contains("android") {
            Platform::Android
        } else if automation.contains("xcuitest") || platform.contains("ios") {
            Platform::Ios
        } else {
            Platform::Unknown
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for constructing a [`crate::ScreenTracker`].
#[derive(Debug, Clone)]
pub struct TrackerOptions {
    pub platform: Platform,
    /// Minimum interval between two accepted inference attempts.
    pub min_check_interval: Duration,
    /// Delay applied after a click-completion signal so the UI can settle
    /// before inference runs.
    pub settle_delay: Duration,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Unknown,
            min_check_interval: Duration::from_millis(300),
            settle_delay: Duration::from_millis(300),
        }
    }
}
