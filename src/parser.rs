use crate::models::RawRecord;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Canonical column set of the tabular dataset, in template order.
pub const DATASET_HEADERS: [&str; 6] = [
    "license_plate",
    "driver",
    "start_odometer",
    "end_odometer",
    "fuel_cost",
    "planned_days",
];

/// Parses tabular dataset files into raw usage records.
///
/// Blank cells deserialize to `None`; numeric columns containing
/// non-numeric text are reported as parse errors with row context rather
/// than being guessed at.
pub struct DatasetParser;

impl Default for DatasetParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSV dataset file into records, preserving row order.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<RawRecord>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
        self.parse_reader(file, &path.display().to_string())
    }

    /// Parse CSV content from any reader. `source` names the origin in
    /// error messages.
    pub fn parse_reader<R: Read>(&self, reader: R, source: &str) -> Result<Vec<RawRecord>> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .with_context(|| format!("Failed to read header row from {}", source))?
            .clone();
        Self::check_headers(&headers, source)?;

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
            // Row numbering is 1-based and counts the header row
            let record = row.with_context(|| {
                format!("Failed to parse row {} of {}", index + 2, source)
            })?;
            records.push(record);
        }

        debug!(source = %source, records = records.len(), "Parsed dataset");

        Ok(records)
    }

    // A file without the canonical columns would silently deserialize to
    // all-None records, so presence is checked up front.
    fn check_headers(headers: &StringRecord, source: &str) -> Result<()> {
        for expected in DATASET_HEADERS {
            if !headers.iter().any(|h| h == expected) {
                anyhow::bail!(
                    "Dataset {} is missing required column '{}' (found: {})",
                    source,
                    expected,
                    headers.iter().collect::<Vec<_>>().join(", ")
                );
            }
        }
        Ok(())
    }
}
