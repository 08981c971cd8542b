//! screentrack-report: persistence collaborator for the screen tracker.
//!
//! Serializes the journal exported by `screentrack-core` into the post-run
//! analysis artifact and manages the session output directory.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use screentrack_core::StaticTestContext;
//! use screentrack_report::{new_session_id, NavigationReport, ReportStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = ReportStore::new(".screentrack/reports");
//!     store.reset()?;
//!
//!     let context = StaticTestContext::new("specs/login.spec.ts", "logs in");
//!     let journal = Vec::new(); // tracker.export_journal()
//!     let report = NavigationReport::new(&context, &new_session_id(), Utc::now(), &journal);
//!     let path = store.save(&report)?;
//!     println!("saved {}", path.display());
//!     Ok(())
//! }
//! ```

mod report;
mod store;

pub use report::{new_session_id, NavigationRecord, NavigationReport};
pub use store::ReportStore;
