//! Screen inference engine
//!
//! Orchestrates the inference heuristics: a pending user-action hint wins,
//! an unchanged snapshot reuses the last result, a changed snapshot is
//! reclassified, and a time-derived synthetic name covers the case where
//! every signal is unavailable.
//!
//! Public operations never fail: collaborator errors are caught locally
//! and treated as "signal unavailable", so a flaky driver degrades the
//! trace instead of aborting the test.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::actions::ActionScreenMap;
use crate::classify::{has_webview_context, MarkerClassifier, ScreenClassifier};
use crate::driver::UiDriver;
use crate::fingerprint::fingerprint;
use crate::journal::TransitionJournal;
use crate::throttle::ThrottleGate;
use crate::types::{Navigation, NavigationCause, ScreenName, TrackerOptions};

/// Mutable single-owner state of the inference engine.
#[derive(Debug)]
struct InferenceState {
    current_screen: ScreenName,
    last_action: Option<String>,
    last_snapshot_fingerprint: Option<u64>,
    last_check_time: Option<Instant>,
}

/// Screen inference engine and transition recorder for one test session.
///
/// Single-logical-thread cooperative model: the caller awaits each call
/// before issuing the next. Construct a fresh tracker per test run; the
/// journal and inference state are owned exclusively by this instance.
pub struct ScreenTracker {
    driver: Arc<dyn UiDriver>,
    classifier: Box<dyn ScreenClassifier>,
    actions: ActionScreenMap,
    gate: ThrottleGate,
    journal: TransitionJournal,
    state: InferenceState,
    settle_delay: Duration,
}

impl ScreenTracker {
    /// Create a tracker with the default marker classifier.
    pub fn new(driver: Arc<dyn UiDriver>, options: TrackerOptions) -> Self {
        Self::with_classifier(driver, Box::new(MarkerClassifier::new()), options)
    }

    /// Create a tracker with a custom classifier.
    pub fn with_classifier(
        driver: Arc<dyn UiDriver>,
        classifier: Box<dyn ScreenClassifier>,
        options: TrackerOptions,
    ) -> Self {
        let mut journal = TransitionJournal::new();
        let mut state = InferenceState {
            current_screen: ScreenName::from("Home Screen"),
            last_action: None,
            last_snapshot_fingerprint: None,
            last_check_time: None,
        };

        // The run itself is the first transition, recorded before any
        // inference happens.
        journal.append(
            ScreenName::from(""),
            ScreenName::from("App Start"),
            NavigationCause::TestStart,
        );
        state.current_screen = ScreenName::from("App Start");

        info!(platform = options.platform.as_str(), "screen tracker started");

        Self {
            driver,
            classifier,
            actions: ActionScreenMap::new(),
            gate: ThrottleGate::new(options.min_check_interval),
            journal,
            state,
            settle_delay: options.settle_delay,
        }
    }

    /// Register a one-shot hint that `element_id` was just (or is about to
    /// be) used. Does not touch the journal.
    pub fn record_action_hint(&mut self, element_id: &str) {
        debug!(element = element_id, "action hint recorded");
        self.state.last_action = Some(element_id.to_string());
    }

    /// Pre-action hook; same effect as [`Self::record_action_hint`].
    pub fn signal_before_action(&mut self, element_id: &str) {
        self.record_action_hint(element_id);
    }

    /// Post-action hook: waits for the UI to settle, then runs a throttled
    /// inference attempt.
    pub async fn signal_after_action(&mut self) -> ScreenName {
        sleep(self.settle_delay).await;
        self.check_now().await
    }

    /// Throttled inference attempt. A rejected attempt is a no-op that
    /// keeps the previous screen.
    pub async fn check_now(&mut self) -> ScreenName {
        let now = Instant::now();
        if !self.gate.allow(self.state.last_check_time, now) {
            debug!("inference attempt throttled");
            return self.state.current_screen.clone();
        }
        self.state.last_check_time = Some(now);

        let (screen, cause) = self.infer_current_screen().await;
        let previous = self.state.current_screen.clone();
        self.journal.append(previous, screen.clone(), cause);
        self.state.current_screen = screen.clone();
        screen
    }

    /// Current screen as of the last accepted inference.
    pub fn current_screen(&self) -> &ScreenName {
        &self.state.current_screen
    }

    /// Journal entries in append order, for the persistence collaborator.
    pub fn export_journal(&self) -> Vec<Navigation> {
        self.journal.snapshot().to_vec()
    }

    /// Decide what screen is current right now. Always produces a name.
    async fn infer_current_screen(&mut self) -> (ScreenName, NavigationCause) {
        // 1. A pending action hint preempts snapshot inference. The hint
        //    is consumed whether or not it maps, so one click never
        //    explains two separate checks.
        if let Some(action) = self.state.last_action.take() {
            if let Some(screen) = self.actions.get(&action) {
                debug!(element = %action, screen = %screen, "screen from action hint");
                return (screen.clone(), NavigationCause::UserInteraction);
            }
            debug!(element = %action, "action hint not in map");
        }

        // 2. Snapshot retrieval. Unavailable or empty skips straight to
        //    the fallback.
        let snapshot = match self.driver.page_source().await {
            Ok(source) if !source.is_empty() => source,
            Ok(_) => {
                warn!("driver returned an empty snapshot");
                return (synthetic_screen_name(), NavigationCause::NavigationDetected);
            }
            Err(e) => {
                warn!(error = %e, "snapshot unavailable");
                return (synthetic_screen_name(), NavigationCause::NavigationDetected);
            }
        };

        // 3. Unchanged snapshot: reuse the last result without
        //    reclassifying. Snapshot retrieval and classification are
        //    expensive relative to hashing, so this is the dominant path.
        let print = fingerprint(&snapshot);
        if self.state.last_snapshot_fingerprint == Some(print) {
            debug!("snapshot unchanged, keeping current screen");
            return (
                self.state.current_screen.clone(),
                NavigationCause::NavigationDetected,
            );
        }
        self.state.last_snapshot_fingerprint = Some(print);

        // 4. Reclassify; a webview context without a full signature gets a
        //    URL-derived label.
        if let Some(screen) = self.classifier.classify(&snapshot) {
            debug!(screen = %screen, "screen classified");
            return (screen, NavigationCause::NavigationDetected);
        }
        if has_webview_context(&snapshot) {
            if let Some(screen) = self.webview_label().await {
                debug!(screen = %screen, "webview label resolved");
                return (screen, NavigationCause::NavigationDetected);
            }
        }

        // 5. Every signal exhausted.
        (synthetic_screen_name(), NavigationCause::NavigationDetected)
    }

    /// Resolve a more specific webview label from the current location.
    async fn webview_label(&self) -> Option<ScreenName> {
        match self.driver.current_url().await {
            Ok(url) if !url.is_empty() => {
                let trimmed = url.trim_end_matches('/');
                let segment = trimmed.rsplit('/').next().filter(|s| !s.is_empty())?;
                Some(ScreenName::new(format!("WebView: {segment}")))
            }
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "location unavailable for webview label");
                None
            }
        }
    }
}

/// Timestamp-derived synthetic name, second granularity, unpadded. Visibly
/// distinguishable in the log as a low-confidence inference.
fn synthetic_screen_name() -> ScreenName {
    ScreenName::new(format!("Screen at {}", Local::now().format("%-H:%-M:%-S")))
}
