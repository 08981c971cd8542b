//! Navigation report model
//!
//! The artifact persisted at end of run. Field names and nesting are a
//! stable contract for downstream analysis tooling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use screentrack_core::{Navigation, TestContextProvider};

/// Fresh session identifier for one test run.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// One journal entry as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationRecord {
    pub previous_screen: String,
    pub current_screen: String,
    pub timestamp: DateTime<Utc>,
    pub navigation_type: String,
}

impl From<&Navigation> for NavigationRecord {
    fn from(nav: &Navigation) -> Self {
        Self {
            previous_screen: nav.previous_screen.as_str().to_string(),
            current_screen: nav.current_screen.as_str().to_string(),
            timestamp: nav.timestamp,
            navigation_type: nav.cause.as_str().to_string(),
        }
    }
}

/// Persisted artifact for one test session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationReport {
    pub spec_file: String,
    pub test_name: String,
    pub session_id: String,
    pub navigations: Vec<NavigationRecord>,
    /// Session start.
    pub timestamp: DateTime<Utc>,
    /// Refreshed by the store on every save.
    pub save_timestamp: DateTime<Utc>,
    pub navigation_count: usize,
}

impl NavigationReport {
    /// Assemble the artifact from an exported journal.
    pub fn new(
        context: &dyn TestContextProvider,
        session_id: &str,
        started_at: DateTime<Utc>,
        navigations: &[Navigation],
    ) -> Self {
        let records: Vec<NavigationRecord> = navigations.iter().map(NavigationRecord::from).collect();
        Self {
            spec_file: context.spec_file(),
            test_name: context.test_name(),
            session_id: session_id.to_string(),
            navigation_count: records.len(),
            navigations: records,
            timestamp: started_at,
            save_timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use screentrack_core::{NavigationCause, ScreenName, StaticTestContext};

    fn sample_journal() -> Vec<Navigation> {
        vec![
            Navigation {
                previous_screen: ScreenName::from(""),
                current_screen: ScreenName::from("App Start"),
                timestamp: Utc::now(),
                cause: NavigationCause::TestStart,
            },
            Navigation {
                previous_screen: ScreenName::from("App Start"),
                current_screen: ScreenName::from("Color Screen"),
                timestamp: Utc::now(),
                cause: NavigationCause::UserInteraction,
            },
        ]
    }

    fn sample_report() -> NavigationReport {
        let context = StaticTestContext::new("specs/navigation.spec.ts", "tracks color screen");
        NavigationReport::new(&context, &new_session_id(), Utc::now(), &sample_journal())
    }

    #[test]
    fn test_count_matches_navigations() {
        let report = sample_report();
        assert_eq!(report.navigation_count, report.navigations.len());
        assert_eq!(report.navigation_count, 2);
    }

    #[test]
    fn test_artifact_shape() {
        let report = sample_report();
        let value = serde_json::to_value(&report).unwrap();

        for key in [
            "spec_file",
            "test_name",
            "session_id",
            "navigations",
            "timestamp",
            "save_timestamp",
            "navigation_count",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }

        let first = &value["navigations"][0];
        assert_eq!(first["previous_screen"], "");
        assert_eq!(first["current_screen"], "App Start");
        assert_eq!(first["navigation_type"], "test_start");
        // Timestamps serialize as RFC 3339 strings.
        assert!(first["timestamp"].as_str().unwrap().contains('T'));

        assert_eq!(value["navigations"][1]["navigation_type"], "user_interaction");
    }

    #[test]
    fn test_roundtrip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: NavigationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.session_id, report.session_id);
        assert_eq!(parsed.navigation_count, report.navigation_count);
        assert_eq!(parsed.navigations[1].current_screen, "Color Screen");
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }
}
