//! Legacy tabular POI layout
//!
//! Newline-delimited, comma-separated rows with a header line. Columns are
//! name, longitude, latitude, city, rank in city, overall rank and an optional
//! secondary (English) name.

use super::ParseOutput;
use super::field_parsers::{parse_leading_f64, parse_leading_i64};
use crate::app::models::{PoiId, SourceRecord};
use crate::constants::{TABULAR_DELIMITER, tabular_columns as col};
use tracing::debug;

/// Parse decoded tabular text into records
///
/// The first line is a header and is discarded. Rows with fewer than six
/// fields are skipped; blank lines are ignored without being counted. The id
/// of a record is its 0-based data-row index, so skipped rows still consume
/// an index. Numeric fields that cannot be parsed default to 0.
pub fn parse_tabular(text: &str) -> ParseOutput {
    let mut output = ParseOutput::default();

    for (line_index, raw_line) in text.split('\n').enumerate().skip(1) {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let fields: Vec<&str> = line.split(TABULAR_DELIMITER).collect();

        if fields.len() < col::MIN_FIELDS {
            if !line.trim().is_empty() {
                debug!(
                    "Skipping line {}: {} fields, need at least {}",
                    line_index + 1,
                    fields.len(),
                    col::MIN_FIELDS
                );
                output.rows_skipped += 1;
            }
            continue;
        }

        let name_en = fields
            .get(col::NAME_EN)
            .map(|field| field.trim().to_string())
            .unwrap_or_default();

        output.records.push(SourceRecord {
            id: PoiId::from(line_index - 1),
            name: fields[col::NAME].to_string(),
            name_en,
            city: fields[col::CITY].to_string(),
            rank: parse_leading_i64(fields[col::RANK]).unwrap_or(0),
            rank_in_city: parse_leading_i64(fields[col::RANK_IN_CITY]).unwrap_or(0),
            lng: parse_leading_f64(fields[col::LNG]).unwrap_or(0.0),
            lat: parse_leading_f64(fields[col::LAT]).unwrap_or(0.0),
            font_size_override: None,
            font_color_override: None,
        });
    }

    debug!(
        "Parsed {} tabular records ({} rows skipped)",
        output.records.len(),
        output.rows_skipped
    );

    output
}
