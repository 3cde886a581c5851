//! CSV export utilities for fleet usage reports
//!
//! This module provides CSV serialization for the summary tables, the raw
//! dataset, and the blank import template. Column sets differ per grouping
//! mode: vehicle rows carry the cost/distance columns, driver rows add trip
//! counts and days.

use crate::config::get_config;
use crate::models::{EntitySummary, GroupBy, RawRecord};
use crate::parser::DATASET_HEADERS;
use anyhow::{Context, Result};
use csv::Writer;
use std::path::Path;

/// Flattened row for per-vehicle CSV export
#[derive(serde::Serialize)]
struct VehicleRow<'a> {
    license_plate: &'a str,
    total_cost: f64,
    total_distance: f64,
    cost_per_distance: f64,
    frequent_drivers: &'a str,
}

/// Flattened row for per-driver CSV export
#[derive(serde::Serialize)]
struct DriverRow<'a> {
    driver: &'a str,
    total_cost: f64,
    total_distance: f64,
    trip_count: u32,
    trip_days: f64,
    cost_per_distance: f64,
    frequent_vehicles: &'a str,
}

/// Serialize summary rows to CSV with the column set of the given mode.
pub fn summary_csv(rows: &[EntitySummary], group_by: GroupBy) -> Result<Vec<u8>> {
    let mut wtr = Writer::from_writer(vec![]);

    for row in rows {
        match group_by {
            GroupBy::Vehicle => wtr
                .serialize(VehicleRow {
                    license_plate: &row.key,
                    total_cost: row.total_cost,
                    total_distance: row.total_distance,
                    cost_per_distance: row.cost_per_distance,
                    frequent_drivers: &row.associate_label,
                })
                .context("Failed to serialize vehicle summary row")?,
            GroupBy::Driver => wtr
                .serialize(DriverRow {
                    driver: &row.key,
                    total_cost: row.total_cost,
                    total_distance: row.total_distance,
                    trip_count: row.trip_count.unwrap_or(0),
                    trip_days: row.trip_days.unwrap_or(0.0),
                    cost_per_distance: row.cost_per_distance,
                    frequent_vehicles: &row.associate_label,
                })
                .context("Failed to serialize driver summary row")?,
        }
    }

    // An empty table still gets its header row
    if rows.is_empty() {
        match group_by {
            GroupBy::Vehicle => wtr.write_record([
                "license_plate",
                "total_cost",
                "total_distance",
                "cost_per_distance",
                "frequent_drivers",
            ])?,
            GroupBy::Driver => wtr.write_record([
                "driver",
                "total_cost",
                "total_distance",
                "trip_count",
                "trip_days",
                "cost_per_distance",
                "frequent_vehicles",
            ])?,
        }
    }

    finish(wtr)
}

/// Serialize the raw dataset back to canonical CSV (blank cells for `None`).
pub fn raw_csv(records: &[RawRecord]) -> Result<Vec<u8>> {
    let mut wtr = Writer::from_writer(vec![]);

    if records.is_empty() {
        wtr.write_record(DATASET_HEADERS)?;
    }
    for record in records {
        wtr.serialize(record)
            .context("Failed to serialize raw record")?;
    }

    finish(wtr)
}

/// The blank import template: the canonical header row and nothing else.
pub fn template_csv() -> Result<Vec<u8>> {
    let mut wtr = Writer::from_writer(vec![]);
    wtr.write_record(DATASET_HEADERS)?;
    finish(wtr)
}

fn finish(wtr: Writer<Vec<u8>>) -> Result<Vec<u8>> {
    wtr.into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to finish CSV export: {}", e))
}

/// Write exported bytes to disk with path context on failure.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data)
        .with_context(|| format!("Failed to write export file: {}", path.display()))
}

/// Dated default filename for a report export, e.g. `vehicles-2025-03-01.csv`.
pub fn default_export_name(prefix: &str) -> String {
    let date = chrono::Local::now()
        .format(&get_config().output.date_format)
        .to_string();
    format!("{}-{}.csv", prefix, date)
}
