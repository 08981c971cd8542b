//! Marker-based screen signatures for the demo application
//!
//! ## Detection strategy
//!
//! - The home rule runs before the generic back-button rules: a stale
//!   snapshot captured mid-transition can still carry a back affordance,
//!   and the full home grid is the stronger signal.
//! - Detail screens need the back affordance plus one screen-specific
//!   sub-marker. Sub-markers are mutually exclusive in practice, so order
//!   among them does not matter.
//! - Title labels are checked independently of the back affordance; they
//!   cover screens captured before the back button renders.

use super::ScreenClassifier;
use crate::types::ScreenName;

/// All three must be present for the home grid.
const HOME_MARKERS: [&str; 3] = [
    r#"content-desc="color""#,
    r#"content-desc="toast""#,
    r#"content-desc="geoLocation""#,
];

/// Both must be present for the embedded webview.
const WEBVIEW_MARKERS: [&str; 2] = [
    "android.webkit.WebView",
    r#"resource-id="webviewContainer""#,
];

/// Generic back affordance shown on detail screens.
const BACK_MARKER: &str = r#"content-desc="Back""#;

/// Detail-screen sub-markers.
const DETAIL_MARKERS: [(&str, &str); 6] = [
    (r#"resource-id="colorScreen""#, "Color Screen"),
    (r#"resource-id="textScreen""#, "Text Screen"),
    (r#"resource-id="toastScreen""#, "Toast Screen"),
    (r#"resource-id="notificationScreen""#, "Notification Screen"),
    (r#"resource-id="geoLocationScreen""#, "Geolocation Screen"),
    (r#"resource-id="speedTestScreen""#, "Speed Test Screen"),
];

/// Displayed screen-title labels.
const TITLE_MARKERS: [(&str, &str); 3] = [
    (r#"text="Color""#, "Color Screen"),
    (r#"text="Geolocation""#, "Geolocation Screen"),
    (r#"text="Speed Test""#, "Speed Test Screen"),
];

/// Known site reachable from the in-app browser.
const EXTERNAL_SITE_MARKER: &str = "duckduckgo.com";
const EXTERNAL_SITE_LABEL: &str = "External Site";

/// True when the snapshot carries webview context even if no full
/// signature matched. The tracker uses this to decide whether a classifier
/// miss is worth a URL-derived label.
pub(crate) fn has_webview_context(snapshot: &str) -> bool {
    snapshot.contains(WEBVIEW_MARKERS[0])
}

/// Ordered containment rules over the raw snapshot text; first match wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerClassifier;

impl MarkerClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl ScreenClassifier for MarkerClassifier {
    fn classify(&self, snapshot: &str) -> Option<ScreenName> {
        // 1. Home grid.
        if HOME_MARKERS.iter().all(|m| snapshot.contains(m)) {
            return Some(ScreenName::from("Home Screen"));
        }

        // 2. Embedded webview.
        if WEBVIEW_MARKERS.iter().all(|m| snapshot.contains(m)) {
            return Some(ScreenName::from("WebView Screen"));
        }

        // 3. Back affordance + detail sub-marker.
        if snapshot.contains(BACK_MARKER) {
            for (sub_marker, screen) in DETAIL_MARKERS {
                if snapshot.contains(sub_marker) {
                    return Some(ScreenName::from(screen));
                }
            }
        }

        // 4. Title label, independent of rule 3.
        for (title_marker, screen) in TITLE_MARKERS {
            if snapshot.contains(title_marker) {
                return Some(ScreenName::from(screen));
            }
        }

        // 5. Known external site.
        if snapshot.contains(EXTERNAL_SITE_MARKER) {
            return Some(ScreenName::from(EXTERNAL_SITE_LABEL));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(snapshot: &str) -> Option<ScreenName> {
        MarkerClassifier::new().classify(snapshot)
    }

    fn home_snapshot() -> String {
        format!(
            "<hierarchy>{} {} {} content-desc=\"speedTest\"</hierarchy>",
            HOME_MARKERS[0], HOME_MARKERS[1], HOME_MARKERS[2]
        )
    }

    #[test]
    fn test_home_requires_all_three_markers() {
        assert_eq!(classify(&home_snapshot()).unwrap().as_str(), "Home Screen");

        // Two out of three is not home.
        let partial = format!("<hierarchy>{} {}</hierarchy>", HOME_MARKERS[0], HOME_MARKERS[1]);
        assert!(classify(&partial).is_none());
    }

    #[test]
    fn test_webview_requires_both_markers() {
        let full = format!("<node class=\"{}\" {}/>", WEBVIEW_MARKERS[0], WEBVIEW_MARKERS[1]);
        assert_eq!(classify(&full).unwrap().as_str(), "WebView Screen");

        assert!(classify("<node class=\"android.webkit.WebView\"/>").is_none());
        assert!(classify(r#"<node resource-id="webviewContainer"/>"#).is_none());
    }

    #[test]
    fn test_detail_screen_needs_back_and_sub_marker() {
        let color = r#"<node content-desc="Back"/><node resource-id="colorScreen"/>"#;
        assert_eq!(classify(color).unwrap().as_str(), "Color Screen");

        let toast = r#"<node content-desc="Back"/><node resource-id="toastScreen"/>"#;
        assert_eq!(classify(toast).unwrap().as_str(), "Toast Screen");

        // Back alone identifies nothing.
        assert!(classify(r#"<node content-desc="Back"/>"#).is_none());

        // Sub-marker without back and without a title label identifies nothing.
        assert!(classify(r#"<node resource-id="toastScreen"/>"#).is_none());
    }

    #[test]
    fn test_home_wins_over_stale_detail_markers() {
        // A stale snapshot can carry a back affordance and a detail marker
        // alongside the full home grid; home must win.
        let stale = format!(
            "{} <node content-desc=\"Back\"/><node resource-id=\"colorScreen\"/>",
            home_snapshot()
        );
        assert_eq!(classify(&stale).unwrap().as_str(), "Home Screen");

        let stale_title = format!("{} <node text=\"Color\"/>", home_snapshot());
        assert_eq!(classify(&stale_title).unwrap().as_str(), "Home Screen");
    }

    #[test]
    fn test_title_label_without_back() {
        // Mid-transition: the title rendered before the back affordance.
        assert_eq!(classify(r#"<node text="Color"/>"#).unwrap().as_str(), "Color Screen");
        assert_eq!(
            classify(r#"<node text="Geolocation"/>"#).unwrap().as_str(),
            "Geolocation Screen"
        );
        assert_eq!(
            classify(r#"<node text="Speed Test"/>"#).unwrap().as_str(),
            "Speed Test Screen"
        );
    }

    #[test]
    fn test_external_site() {
        let snapshot = r#"<node text="https://duckduckgo.com/?q=appium"/>"#;
        assert_eq!(classify(snapshot).unwrap().as_str(), "External Site");
    }

    #[test]
    fn test_unrecognized_snapshot() {
        assert!(classify("<hierarchy></hierarchy>").is_none());
        assert!(classify("").is_none());
        assert!(classify("random text with no markers").is_none());
    }

    #[test]
    fn test_webview_context_probe() {
        assert!(has_webview_context("<node class=\"android.webkit.WebView\"/>"));
        assert!(!has_webview_context("<hierarchy></hierarchy>"));
    }
}
