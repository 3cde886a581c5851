//! Aggregation Engine
//!
//! Folds raw usage records into per-entity summaries. This is the only
//! algorithmic core of the system; everything around it is I/O plumbing.
//!
//! ## Processing Pipeline
//!
//! For a given grouping mode the engine makes a single pass over the records:
//!
//! 1. **Filtering**: Records whose grouping key is absent or blank are skipped
//! 2. **Accumulation**: Cost and distance totals build up per key, rows created
//!    zero-initialized on first appearance of a new key
//! 3. **Counting**: Driver mode additionally accumulates trip counts and days
//! 4. **Association**: Counter-party occurrences are tallied per key in
//!    insertion order
//! 5. **Derivation**: The cost-per-distance ratio is computed with a degenerate
//!    divisor of 1 when total distance is zero
//! 6. **Labeling**: Every counter-party tied for the maximum occurrence count
//!    is joined with `/` into the associate label
//!
//! Output rows preserve the first-appearance order of their keys. The fold is
//! pure and idempotent: same records in, same summaries out, no shared state
//! between calls.

use crate::models::{EntitySummary, GroupBy, RawRecord};
use std::collections::HashMap;

/// Insertion-ordered occurrence counts for the counter-parties of one key.
///
/// Backed by a plain vector: the sets are tiny (drivers of one vehicle,
/// vehicles of one driver) and first-insertion order is part of the
/// tie-breaking contract, so a hash map buys nothing here.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, u32)>,
}

impl FrequencyTable {
    /// Record one occurrence of `name`, creating its entry at the end of the
    /// table on first sight.
    pub fn bump(&mut self, name: &str) {
        if let Some((_, count)) = self.entries.iter_mut().find(|(n, _)| n == name) {
            *count += 1;
        } else {
            self.entries.push((name.to_string(), 1));
        }
    }

    /// Joined identities of every name tied for the maximum count, in
    /// first-insertion order. Ties are not broken arbitrarily: `{A:2, B:2}`
    /// yields `"A/B"`. Empty string when nothing was recorded.
    pub fn most_frequent_label(&self) -> String {
        let Some(max) = self.entries.iter().map(|(_, count)| *count).max() else {
            return String::new();
        };

        self.entries
            .iter()
            .filter(|(_, count)| *count == max)
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    total_cost: f64,
    total_distance: f64,
    trip_count: u32,
    trip_days: f64,
    associates: FrequencyTable,
}

/// Fold `records` into one summary row per distinct grouping key.
///
/// Records with a blank grouping key contribute nothing. Per-record values
/// follow [`RawRecord::distance`] and [`RawRecord::cost`]; missing odometer
/// pairs count as zero distance and negative differences pass through
/// uncorrected. Rows come back in first-appearance order of their keys.
pub fn aggregate_by(records: &[RawRecord], group_by: GroupBy) -> Vec<EntitySummary> {
    let mut order: Vec<String> = Vec::new();
    let mut rows: HashMap<String, Accumulator> = HashMap::new();

    for record in records {
        let Some(key) = record.group_key(group_by) else {
            continue;
        };

        if !rows.contains_key(key) {
            order.push(key.to_string());
        }
        let acc = rows.entry(key.to_string()).or_default();

        acc.total_cost += record.cost();
        acc.total_distance += record.distance();

        if group_by == GroupBy::Driver {
            acc.trip_count += 1;
            acc.trip_days += record.planned_days.unwrap_or(0.0);
        }

        if let Some(associate) = record.counter_party(group_by) {
            acc.associates.bump(associate);
        }
    }

    order
        .into_iter()
        .map(|key| {
            let acc = rows.remove(&key).unwrap_or_default();

            // Zero recorded distance divides by 1 instead of failing; the
            // ratio then degenerates to the total cost.
            let divisor = if acc.total_distance != 0.0 {
                acc.total_distance
            } else {
                1.0
            };

            let (trip_count, trip_days) = match group_by {
                GroupBy::Driver => (Some(acc.trip_count), Some(acc.trip_days)),
                GroupBy::Vehicle => (None, None),
            };

            EntitySummary {
                associate_label: acc.associates.most_frequent_label(),
                cost_per_distance: acc.total_cost / divisor,
                total_cost: acc.total_cost,
                total_distance: acc.total_distance,
                trip_count,
                trip_days,
                key,
            }
        })
        .collect()
}
