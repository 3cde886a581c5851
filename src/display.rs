//! Output Formatting and Display Management
//!
//! This module handles all output formatting for fleet usage analysis results.
//! It provides both human-readable terminal output with colors and structured
//! JSON output for programmatic consumption.
//!
//! ## Report Types
//!
//! - **Vehicle Reports**: Per-vehicle fuel cost, distance, cost-per-km, and
//!   most frequent drivers
//! - **Driver Reports**: Per-driver totals plus trip counts and planned days
//! - **Raw Dataset**: The current record set as imported
//! - **JSON Output**: Machine-readable structured data for API consumption
//!
//! Rows are shown in the order the aggregation engine produced them (first
//! appearance in the raw data); `limit` truncates, never reorders.

use crate::config::get_config;
use crate::models::{EntitySummary, RawRecord};
use colored::Colorize;

pub struct DisplayManager;

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayManager {
    pub fn new() -> Self {
        Self
    }

    pub fn display_vehicles(&self, rows: &[EntitySummary], limit: Option<usize>, json_output: bool) {
        let shown = truncated(rows, limit);

        if json_output {
            self.print_json(&serde_json::json!({"vehicles": shown}));
            return;
        }

        self.print_banner("Fleet Usage Report - Vehicles");

        let total_cost: f64 = shown.iter().map(|r| r.total_cost).sum();
        let total_distance: f64 = shown.iter().map(|r| r.total_distance).sum();

        println!(
            "\n{} {} vehicles • {} fuel • {} total\n",
            "📊".bright_yellow(),
            shown.len().to_string().bright_white().bold(),
            format!("¥{:.2}", total_cost).bright_green().bold(),
            format!("{:.1} km", total_distance).bright_white().bold()
        );

        for row in shown {
            println!(
                "{} {} — {} fuel • {} • {}",
                "🚗".bright_blue(),
                row.key.bright_white().bold(),
                format!("¥{:.2}", row.total_cost).bright_green(),
                format!("{:.1} km", row.total_distance).bright_white(),
                format!("¥{:.2}/km", row.cost_per_distance).bright_yellow()
            );
            if !row.associate_label.is_empty() {
                println!("   drivers: {}", row.associate_label.bright_cyan());
            }
        }
        println!();
    }

    pub fn display_drivers(&self, rows: &[EntitySummary], limit: Option<usize>, json_output: bool) {
        let shown = truncated(rows, limit);

        if json_output {
            self.print_json(&serde_json::json!({"drivers": shown}));
            return;
        }

        self.print_banner("Fleet Usage Report - Drivers");

        let total_cost: f64 = shown.iter().map(|r| r.total_cost).sum();
        let total_trips: u32 = shown.iter().filter_map(|r| r.trip_count).sum();

        println!(
            "\n{} {} drivers • {} trips • {} fuel\n",
            "📊".bright_yellow(),
            shown.len().to_string().bright_white().bold(),
            total_trips.to_string().bright_white().bold(),
            format!("¥{:.2}", total_cost).bright_green().bold()
        );

        for row in shown {
            println!(
                "{} {} — {} fuel • {} • {} trips • {} days • {}",
                "👤".bright_blue(),
                row.key.bright_white().bold(),
                format!("¥{:.2}", row.total_cost).bright_green(),
                format!("{:.1} km", row.total_distance).bright_white(),
                row.trip_count.unwrap_or(0).to_string().bright_white(),
                format!("{:.1}", row.trip_days.unwrap_or(0.0)).bright_white(),
                format!("¥{:.2}/km", row.cost_per_distance).bright_yellow()
            );
            if !row.associate_label.is_empty() {
                println!("   vehicles: {}", row.associate_label.bright_cyan());
            }
        }
        println!();
    }

    pub fn display_raw(&self, records: &[RawRecord], limit: Option<usize>, json_output: bool) {
        let shown = truncated(records, limit);

        if json_output {
            self.print_json(&serde_json::json!({"records": shown}));
            return;
        }

        self.print_banner("Fleet Usage Report - Raw Dataset");

        println!(
            "\n{} {} records\n",
            "📊".bright_yellow(),
            shown.len().to_string().bright_white().bold()
        );

        for record in shown {
            println!(
                "   {} | {} | {} -> {} | {} | {} days",
                text_cell(&record.license_plate).bright_white().bold(),
                text_cell(&record.driver).bright_cyan(),
                number_cell(record.start_odometer).bright_white(),
                number_cell(record.end_odometer).bright_white(),
                record
                    .fuel_cost
                    .map(|c| format!("¥{:.2}", c))
                    .unwrap_or_else(|| "-".to_string())
                    .bright_green(),
                number_cell(record.planned_days).bright_white()
            );
        }
        println!();
    }

    fn print_banner(&self, title: &str) {
        println!("\n{}", "=".repeat(80).bright_cyan());
        println!("{}", title.bright_white().bold());
        println!("{}", "=".repeat(80).bright_cyan());
    }

    fn print_json(&self, value: &serde_json::Value) {
        let result = if get_config().output.json_pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };

        match result {
            Ok(json_str) => println!("{}", json_str),
            Err(e) => eprintln!("Error serializing report to JSON: {}", e),
        }
    }
}

fn truncated<T>(rows: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) if n < rows.len() => &rows[..n],
        _ => rows,
    }
}

fn text_cell(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("-")
}

fn number_cell(field: Option<f64>) -> String {
    field
        .map(|v| format!("{}", v))
        .unwrap_or_else(|| "-".to_string())
}
