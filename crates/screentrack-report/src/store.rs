//! Report store
//!
//! Owns the output directory for a run: reset at session start, one JSON
//! file per session at save. The tracker exposes an always-readable
//! journal; this collaborator decides when and where it lands on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::report::NavigationReport;

/// Writes navigation reports into a session output directory.
#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Remove any previous run's artifacts and recreate the directory.
    pub fn reset(&self) -> Result<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)
                .with_context(|| format!("removing {}", self.dir.display()))?;
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;
        Ok(())
    }

    /// Write the report as pretty JSON named by session id, refreshing the
    /// save timestamp. Returns the written path.
    pub fn save(&self, report: &NavigationReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;

        let mut report = report.clone();
        report.save_timestamp = Utc::now();

        let path = self.dir.join(format!("{}-navigation.json", report.session_id));
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;

        info!(
            path = %path.display(),
            navigations = report.navigation_count,
            "navigation report saved"
        );
        Ok(path)
    }
}
