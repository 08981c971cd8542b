//! Test-runner context
//!
//! Supplies a human-readable test identifier from the active test-runner
//! context. Implemented by an adapter per test framework; the core never
//! inspects the call stack or process globals.

/// Identifies the test that owns the current tracker session.
pub trait TestContextProvider: Send + Sync {
    /// Path of the spec file driving the run.
    fn spec_file(&self) -> String;

    /// Name of the active test.
    fn test_name(&self) -> String;
}

/// Fixed context for adapters that know their identifiers up front.
#[derive(Debug, Clone)]
pub struct StaticTestContext {
    spec_file: String,
    test_name: String,
}

impl StaticTestContext {
    pub fn new(spec_file: impl Into<String>, test_name: impl Into<String>) -> Self {
        Self {
            spec_file: spec_file.into(),
            test_name: test_name.into(),
        }
    }
}

impl TestContextProvider for StaticTestContext {
    fn spec_file(&self) -> String {
        self.spec_file.clone()
    }

    fn test_name(&self) -> String {
        self.test_name.clone()
    }
}
