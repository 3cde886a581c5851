//! Current Dataset Store
//!
//! The system keeps exactly one raw-record set "current" at a time, backed
//! by a canonical CSV file under the data directory. Importing replaces the
//! snapshot wholesale (last-writer-wins, no incremental merge); every view
//! or export re-reads and re-aggregates from scratch, so nothing is cached
//! across data changes.
//!
//! A failed import never touches the current snapshot: the incoming file is
//! parsed completely before the replacement rename happens, and the rename
//! itself is atomic on the same filesystem.

use crate::config::get_config;
use crate::export;
use crate::logging::new_operation_id;
use crate::models::RawRecord;
use crate::parser::DatasetParser;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the current snapshot inside the data directory.
pub const DATASET_FILE: &str = "current.csv";

/// Owns the single current snapshot of raw usage records.
pub struct DatasetStore {
    data_dir: PathBuf,
    parser: DatasetParser,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetStore {
    /// Store rooted at the configured data directory.
    pub fn new() -> Self {
        Self::with_data_dir(get_config().paths.data_dir.clone())
    }

    /// Store rooted at an explicit directory. Used by tests and anything
    /// hosting more than one dataset.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            parser: DatasetParser::new(),
        }
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(DATASET_FILE)
    }

    /// Load the current snapshot. Returns an empty record set (with a log
    /// notice) when nothing has been imported yet.
    pub async fn load(&self) -> Result<Vec<RawRecord>> {
        let path = self.dataset_path();
        if path.exists() {
            return self.parser.parse_file(&path);
        }

        // A dataset exported by hand into the data directory still counts
        if let Some(found) = self.discover_dataset() {
            info!(path = %found.display(), "Using discovered dataset file");
            return self.parser.parse_file(&found);
        }

        warn!(data_dir = %self.data_dir.display(), "No current dataset");
        Ok(Vec::new())
    }

    /// Replace the current snapshot with the records from `source`.
    ///
    /// The source file is parsed in full first; only a clean parse reaches
    /// the rename, so the previous dataset survives any import failure.
    /// Returns the imported records for display.
    pub async fn import(&self, source: &Path) -> Result<Vec<RawRecord>> {
        let import_id = new_operation_id();
        info!(import_id = %import_id, source = %source.display(), "Importing dataset");

        let records = self
            .parser
            .parse_file(source)
            .with_context(|| format!("Import of {} failed", source.display()))?;

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .with_context(|| {
                format!("Failed to create data directory: {}", self.data_dir.display())
            })?;

        let staging = self.data_dir.join(format!("{}.tmp", DATASET_FILE));
        let normalized = export::raw_csv(&records)?;
        tokio::fs::write(&staging, normalized)
            .await
            .with_context(|| format!("Failed to stage dataset: {}", staging.display()))?;
        tokio::fs::rename(&staging, self.dataset_path())
            .await
            .context("Failed to replace current dataset")?;

        info!(import_id = %import_id, records = records.len(), "Dataset replaced");

        Ok(records)
    }

    // Fallback when current.csv is absent: most recently modified CSV in
    // the data directory.
    fn discover_dataset(&self) -> Option<PathBuf> {
        let pattern = self.data_dir.join("*.csv");
        let mut candidates: Vec<PathBuf> = glob(&pattern.to_string_lossy())
            .ok()?
            .flatten()
            .collect();

        candidates.sort_by_key(|p| {
            std::fs::metadata(p)
                .and_then(|m| m.modified())
                .ok()
        });

        candidates.pop()
    }
}
