//! Core Data Models
//!
//! This module defines the primary data structures used throughout the fleet usage
//! analysis system. These models represent the complete data pipeline from raw usage
//! records to aggregated reports.
//!
//! ## Data Flow
//!
//! The data flows through these models in the following sequence:
//!
//! 1. **Raw Data**: [`RawRecord`] - Individual rows parsed from the tabular dataset
//! 2. **Aggregation**: [`crate::aggregate::aggregate_by`] - Records folded per entity
//! 3. **Output**: [`EntitySummary`] - Serializable per-entity summary rows
//!
//! ## Core Types
//!
//! - [`RawRecord`] - One usage event (rental) with every field nullable
//! - [`GroupBy`] - Selects the grouping key: per-vehicle or per-driver
//! - [`EntitySummary`] - Aggregated totals, derived ratio, and associate label
//!
//! ## Features
//!
//! - **Serde Integration**: All public types support serialization/deserialization
//! - **Optional Fields**: Handles missing data gracefully (blank cells become `None`)
//! - **Derived Values**: Per-record distance and cost computed on demand, not stored

use serde::{Deserialize, Serialize};

/// One vehicle-usage event as loaded from the tabular dataset.
///
/// Every field is nullable: the loader maps blank cells to `None` and the
/// aggregation engine decides per grouping mode which records count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub license_plate: Option<String>,
    pub driver: Option<String>,
    pub start_odometer: Option<f64>,
    pub end_odometer: Option<f64>,
    pub fuel_cost: Option<f64>,
    pub planned_days: Option<f64>,
}

/// Which field buckets records into summary rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// Key = license plate, counter-party = driver.
    Vehicle,
    /// Key = driver, counter-party = license plate. Adds trip counts.
    Driver,
}

impl RawRecord {
    /// Distance covered by this event. Zero when either odometer reading
    /// is missing; negative differences pass through unvalidated.
    pub fn distance(&self) -> f64 {
        match (self.start_odometer, self.end_odometer) {
            (Some(start), Some(end)) => end - start,
            _ => 0.0,
        }
    }

    /// Fuel cost of this event, zero when missing.
    pub fn cost(&self) -> f64 {
        self.fuel_cost.unwrap_or(0.0)
    }

    /// The grouping identity for the given mode, or `None` when the field
    /// is absent or blank (such records contribute to no summary row).
    pub fn group_key(&self, group_by: GroupBy) -> Option<&str> {
        match group_by {
            GroupBy::Vehicle => non_blank(&self.license_plate),
            GroupBy::Driver => non_blank(&self.driver),
        }
    }

    /// The other identity field for the given mode, used for the
    /// most-frequent-associate computation.
    pub fn counter_party(&self, group_by: GroupBy) -> Option<&str> {
        match group_by {
            GroupBy::Vehicle => non_blank(&self.driver),
            GroupBy::Driver => non_blank(&self.license_plate),
        }
    }
}

// Blank cells survive some spreadsheet round-trips as whitespace strings;
// treat those the same as absent.
fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Aggregated summary for one vehicle or one driver.
///
/// `trip_count` and `trip_days` are populated in driver mode only and are
/// omitted from JSON output otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySummary {
    pub key: String,
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
    #[serde(rename = "totalDistance")]
    pub total_distance: f64,
    #[serde(rename = "tripCount", skip_serializing_if = "Option::is_none")]
    pub trip_count: Option<u32>,
    #[serde(rename = "tripDays", skip_serializing_if = "Option::is_none")]
    pub trip_days: Option<f64>,
    #[serde(rename = "costPerDistance")]
    pub cost_per_distance: f64,
    #[serde(rename = "associateLabel")]
    pub associate_label: String,
}
