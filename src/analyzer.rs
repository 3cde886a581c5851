//! Usage Analysis Engine
//!
//! This module provides the main analysis engine that orchestrates the fleet
//! usage pipeline. It serves as the primary entry point for all operations,
//! coordinating between the dataset store, the aggregation engine, and the
//! display/export layers.
//!
//! ## Data Processing Pipeline
//!
//! 1. **Loading**: Reads the current dataset snapshot from the store
//! 2. **Aggregation**: Folds records into per-vehicle or per-driver summaries
//! 3. **Reporting**: Formats output for display, JSON, or CSV export
//!
//! ## Command Processing
//!
//! - **vehicles**: Per-vehicle fuel, distance, cost-per-km, frequent drivers
//! - **drivers**: Per-driver totals plus trip counts and planned days
//! - **raw**: The current dataset as imported
//!
//! Import and template export are separate entry points ([`FleetAnalyzer::import`],
//! [`FleetAnalyzer::export_template`]) since they bypass aggregation entirely.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use fleet_usage::{FleetAnalyzer, analyzer::ProcessOptions};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut analyzer = FleetAnalyzer::new();
//!
//! let options = ProcessOptions {
//!     command: "vehicles".to_string(),
//!     json_output: false,
//!     limit: Some(30),
//!     export: None,
//! };
//!
//! analyzer.run_command("vehicles", options).await?;
//! # Ok(())
//! # }
//! ```

use crate::aggregate::aggregate_by;
use crate::dataset::DatasetStore;
use crate::display::DisplayManager;
use crate::export;
use crate::models::{EntitySummary, GroupBy};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration for one analysis invocation.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub command: String,
    pub json_output: bool,
    pub limit: Option<usize>,
    /// `None` = no export, `Some(None)` = export under a dated default
    /// filename, `Some(Some(path))` = export to an explicit path.
    pub export: Option<Option<PathBuf>>,
}

pub struct FleetAnalyzer {
    store: DatasetStore,
    display_manager: DisplayManager,
}

impl Default for FleetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetAnalyzer {
    pub fn new() -> Self {
        Self::with_store(DatasetStore::new())
    }

    /// Analyzer over an explicit store. Used by tests and embedders.
    pub fn with_store(store: DatasetStore) -> Self {
        Self {
            store,
            display_manager: DisplayManager::new(),
        }
    }

    /// Load the current snapshot and aggregate it for the given command.
    pub async fn aggregate_data(&self, command: &str) -> Result<Vec<EntitySummary>> {
        let records = self.store.load().await?;
        Ok(aggregate_by(&records, group_mode(command)?))
    }

    pub async fn run_command(&mut self, command: &str, options: ProcessOptions) -> Result<()> {
        let records = self.store.load().await?;

        if records.is_empty() {
            warn!("No fleet usage data found");
            if options.json_output {
                println!("[]");
            } else {
                println!("No fleet usage data found. Import a dataset first.");
            }
            return Ok(());
        }

        match command {
            "vehicles" | "drivers" => {
                let group_by = group_mode(command)?;
                let rows = aggregate_by(&records, group_by);

                match group_by {
                    GroupBy::Vehicle => {
                        self.display_manager
                            .display_vehicles(&rows, options.limit, options.json_output)
                    }
                    GroupBy::Driver => {
                        self.display_manager
                            .display_drivers(&rows, options.limit, options.json_output)
                    }
                }

                if let Some(target) = &options.export {
                    let path = export_path(target, command);
                    let data = export::summary_csv(&rows, group_by)?;
                    export::write_file(&path, &data)?;
                    if !options.json_output {
                        println!("Exported {} rows to {}", rows.len(), path.display());
                    }
                }
            }
            "raw" => {
                self.display_manager
                    .display_raw(&records, options.limit, options.json_output);

                if let Some(target) = &options.export {
                    let path = export_path(target, "dataset");
                    let data = export::raw_csv(&records)?;
                    export::write_file(&path, &data)?;
                    if !options.json_output {
                        println!("Exported {} records to {}", records.len(), path.display());
                    }
                }
            }
            _ => {
                anyhow::bail!("Unknown command: {}", command);
            }
        }

        Ok(())
    }

    /// Replace the current dataset with the records from `source` and echo
    /// the imported rows. A failed import leaves the previous dataset
    /// untouched and usable.
    pub async fn import(&self, source: &Path, json_output: bool) -> Result<()> {
        let records = self.store.import(source).await?;

        if json_output {
            println!("{}", serde_json::json!({"imported": records.len()}));
        } else {
            println!("✅ Imported {} records", records.len());
            self.display_manager.display_raw(&records, None, false);
        }

        Ok(())
    }

    /// Write the blank dataset template to `dest`.
    pub async fn export_template(&self, dest: &Path) -> Result<()> {
        let data = export::template_csv()?;
        export::write_file(dest, &data)?;
        println!("Template written to {}", dest.display());
        Ok(())
    }
}

fn group_mode(command: &str) -> Result<GroupBy> {
    match command {
        "vehicles" => Ok(GroupBy::Vehicle),
        "drivers" => Ok(GroupBy::Driver),
        _ => anyhow::bail!("Unknown aggregation command: {}", command),
    }
}

fn export_path(target: &Option<PathBuf>, prefix: &str) -> PathBuf {
    target
        .clone()
        .unwrap_or_else(|| PathBuf::from(export::default_export_name(prefix)))
}
