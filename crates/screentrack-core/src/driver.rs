//! UI driver collaborator interface
//!
//! The tracker consumes a running automation session through this trait;
//! it never issues taps or gestures itself.

use std::time::Duration;

use async_trait::async_trait;

/// Driver call failures. Every variant degrades to "signal unavailable"
/// inside the tracker; none abort a test run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("driver endpoint unavailable: {0}")]
    Unavailable(String),

    #[error("driver call timed out after {0:?}")]
    Timeout(Duration),

    #[error("driver returned an empty response")]
    Empty,
}

/// Capabilities the tracker consumes from a UI automation driver.
#[async_trait]
pub trait UiDriver: Send + Sync {
    /// Textual dump of the current UI hierarchy.
    async fn page_source(&self) -> Result<String, DriverError>;

    /// Current navigable location. Only consulted for webview labeling.
    async fn current_url(&self) -> Result<String, DriverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DriverError::Unavailable("session lost".to_string());
        assert_eq!(err.to_string(), "driver endpoint unavailable: session lost");

        let err = DriverError::Timeout(Duration::from_secs(10));
        assert!(err.to_string().contains("timed out"));

        assert_eq!(DriverError::Empty.to_string(), "driver returned an empty response");
    }
}
