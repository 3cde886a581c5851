//! Fleet Usage Library
//!
//! A Rust library for analyzing fleet vehicle usage data. This library folds
//! raw usage records (one row per rental event) into per-vehicle and
//! per-driver summary reports and handles tabular import/export around them.
//!
//! ## Core Features
//!
//! - **Per-entity aggregation**: Fuel cost and distance totals per vehicle or
//!   per driver, in first-appearance order of the raw data
//! - **Tie-aware association**: The most frequent counter-party (drivers of a
//!   vehicle, vehicles of a driver) with `/`-joined ties
//! - **Degenerate-safe ratios**: Cost per km never divides by zero
//! - **Wholesale import**: The current dataset is a single snapshot, replaced
//!   atomically on import
//! - **Flexible output formats**: Colored terminal reports, JSON, and CSV
//!
//! ## Architecture Overview
//!
//! The library is organized around several key modules:
//!
//! - [`models`] - Core data structures for raw records and summary rows
//! - [`aggregate`] - The aggregation engine (the algorithmic core)
//! - [`parser`] - CSV parsing of raw datasets with nullable cells
//! - [`dataset`] - The current-dataset store (load, discover, replace)
//! - [`analyzer`] - Main engine that orchestrates loading, aggregation, output
//! - [`display`] - Terminal and JSON report rendering
//! - [`export`] - CSV serialization of summaries, raw data, and the template
//! - [`config`] - Configuration management with environment variable support
//! - [`logging`] - Structured logging with JSON and pretty-print formats
//!
//! ## Main Entry Point
//!
//! The primary interface is through [`FleetAnalyzer`], which provides a
//! unified API for all operations:
//!
//! ```rust,no_run
//! use fleet_usage::{FleetAnalyzer, analyzer::ProcessOptions};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut analyzer = FleetAnalyzer::new();
//! let options = ProcessOptions {
//!     command: "drivers".to_string(),
//!     json_output: false,
//!     limit: None,
//!     export: None,
//! };
//!
//! analyzer.run_command("drivers", options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Key Types
//!
//! - [`RawRecord`] - Individual usage record with every field nullable
//! - [`EntitySummary`] - Aggregated per-entity summary row
//! - [`GroupBy`] - Grouping mode selector (vehicle or driver)

pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod dataset;
pub mod display;
pub mod export;
pub mod logging;
pub mod models;
pub mod parser;

pub use aggregate::aggregate_by;
pub use analyzer::FleetAnalyzer;
pub use models::*;
