//! screentrack-core: screen inference and transition logging for
//! automated mobile-UI test runs.
//!
//! Given noisy and partial signals (a just-performed user action, a
//! snapshot of the UI tree, elapsed time since the last check), the
//! tracker decides what screen is current and whether that constitutes a
//! new, loggable transition. Best-effort heuristics, not a verified state
//! tracker: it never drives the application and treats UI snapshots as
//! opaque text.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use screentrack_core::{DriverError, ScreenTracker, TrackerOptions, UiDriver};
//!
//! struct MyDriver;
//!
//! #[async_trait::async_trait]
//! impl UiDriver for MyDriver {
//!     async fn page_source(&self) -> Result<String, DriverError> {
//!         Ok("<hierarchy/>".to_string())
//!     }
//!     async fn current_url(&self) -> Result<String, DriverError> {
//!         Err(DriverError::Unavailable("native context".to_string()))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut tracker = ScreenTracker::new(Arc::new(MyDriver), TrackerOptions::default());
//!     tracker.signal_before_action("color");
//!     let screen = tracker.signal_after_action().await;
//!     println!("now on {screen}");
//!     for nav in tracker.export_journal() {
//!         println!("{} -> {}", nav.previous_screen, nav.current_screen);
//!     }
//! }
//! ```

pub mod actions;
pub mod classify;
pub mod context;
pub mod driver;
pub mod fingerprint;
pub mod journal;
pub mod throttle;
pub mod tracker;
pub mod types;

pub use actions::ActionScreenMap;
pub use classify::{MarkerClassifier, ScreenClassifier};
pub use context::{StaticTestContext, TestContextProvider};
pub use driver::{DriverError, UiDriver};
pub use fingerprint::{fingerprint, EMPTY_FINGERPRINT};
pub use journal::TransitionJournal;
pub use throttle::ThrottleGate;
pub use tracker::ScreenTracker;
pub use types::{Navigation, NavigationCause, Platform, ScreenName, TrackerOptions};
