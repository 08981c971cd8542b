//! Action→screen lookup
//!
//! Static table mapping a known interactive element id to the screen it is
//! expected to lead to. Feeds the pre-click hint path of the tracker.

use std::collections::HashMap;

use crate::types::ScreenName;

/// Default element-id → screen table for the demo application under test.
/// Keys are case-sensitive element ids as exposed by the driver.
const DEFAULT_TABLE: &[(&str, &str)] = &[
    ("color", "Color Screen"),
    ("Text", "Text Screen"),
    ("toast", "Toast Screen"),
    ("notification", "Notification Screen"),
    ("geoLocation", "Geolocation Screen"),
    ("buttonPage", "Home Screen"),
    ("speedTest", "Speed Test Screen"),
    ("webview", "WebView Screen"),
    ("find", "Browser Content Screen"),
    ("Back", "Home Screen"),
];

/// Immutable element-id → screen mapping, fixed at construction.
#[derive(Debug, Clone)]
pub struct ActionScreenMap {
    table: HashMap<String, ScreenName>,
}

impl Default for ActionScreenMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionScreenMap {
    /// Build the default table.
    pub fn new() -> Self {
        let table = DEFAULT_TABLE
            .iter()
            .map(|(id, screen)| ((*id).to_string(), ScreenName::from(*screen)))
            .collect();
        Self { table }
    }

    /// Screen the element is known to navigate to, if any.
    pub fn get(&self, element_id: &str) -> Option<&ScreenName> {
        self.table.get(element_id)
    }

    pub fn contains(&self, element_id: &str) -> bool {
        self.table.contains_key(element_id)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
