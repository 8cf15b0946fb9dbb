//! Record parsers for POI source payloads
//!
//! Turns decoded source payloads into normalized [`SourceRecord`]s. Both
//! parsers are tolerant: missing or unparseable fields fall back to defaults
//! instead of failing the whole payload.
//!
//! ## Architecture
//!
//! - [`tabular`] - Legacy comma-separated layout with a header line
//! - [`structured`] - JSON arrays (or maps) of field objects
//! - [`field_parsers`] - Lenient numeric and JSON field helpers
//!
//! ## Usage
//!
//! ```rust
//! use poi_engine::app::services::record_parser::parse_tabular;
//!
//! let output = parse_tabular("h1,h2,h3,h4,h5,h6\nShanghai,121.4,31.2,Shanghai,1,2\n");
//! assert_eq!(output.records.len(), 1);
//! assert_eq!(output.records[0].name, "Shanghai");
//! ```

pub mod field_parsers;
pub mod structured;
pub mod tabular;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use structured::{parse_structured, parse_structured_bytes};
pub use tabular::parse_tabular;

use crate::app::models::{PoiId, SourceRecord};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::warn;

/// Records produced by a parser plus bookkeeping about what was dropped
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    pub records: Vec<SourceRecord>,

    /// Rows skipped as malformed (tabular sources only)
    pub rows_skipped: usize,
}

/// Drop records whose id was already seen, keeping the first occurrence
///
/// Each drop is logged with the names of both the kept and the dropped
/// record. Returns the number of records removed.
pub fn drop_duplicate_ids(records: &mut Vec<SourceRecord>) -> usize {
    let mut first_names: HashMap<PoiId, String> = HashMap::with_capacity(records.len());
    let before = records.len();

    records.retain(|record| match first_names.entry(record.id.clone()) {
        Entry::Vacant(slot) => {
            slot.insert(record.name.clone());
            true
        }
        Entry::Occupied(kept) => {
            warn!(
                "Duplicate POI id {}: dropping '{}', keeping earlier '{}'",
                record.id,
                record.name,
                kept.get()
            );
            false
        }
    });

    before - records.len()
}
