//! Structured (JSON) POI payloads
//!
//! Accepts either an array of field objects or an object whose values are
//! field objects. Field names follow the current export (`id`, `name`, `lng`,
//! ...) with the legacy export names (`pid`, `pname`, `X_gcj02`, ...) accepted
//! as aliases.

use super::ParseOutput;
use super::field_parsers::{first_present, json_f64, json_i64, json_id, json_string};
use crate::app::models::{PoiId, SourceRecord};
use crate::constants::field_aliases as alias;
use crate::{Error, Result};
use serde_json::{Map, Value};
use tracing::debug;

/// Parse raw JSON bytes into records
///
/// # Errors
/// * Returns `Error::Format` if the bytes are not JSON or the payload shape
///   is not a collection of field objects
pub fn parse_structured_bytes(bytes: &[u8], source_name: &str) -> Result<ParseOutput> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::format(source_name, format!("invalid JSON: {}", e)))?;

    parse_structured(value, source_name)
}

/// Parse a JSON value into records
///
/// Arrays are read in order. Objects are read in key insertion order. An
/// entry without an id takes its 0-based position as id, so a positional id
/// can collide with an explicit id elsewhere in the payload (`[{"name": "A"},
/// {"id": 0}]` yields two records with id 0). Collisions are not resolved
/// here; the store keeps the first record with a given id when it installs
/// the list.
///
/// # Errors
/// * Returns `Error::Format` if the top-level value is neither an array nor
///   an object, or if any entry is not an object
pub fn parse_structured(value: Value, source_name: &str) -> Result<ParseOutput> {
    let entries: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, entry)| entry).collect(),
        other => {
            return Err(Error::format(
                source_name,
                format!("expected an array of POI objects, found {}", json_kind(&other)),
            ));
        }
    };

    let records = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(fields) => Ok(normalize_entry(fields, index)),
            other => Err(Error::format(
                source_name,
                format!("entry {} is {}, expected an object", index, json_kind(other)),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} structured records from {}", records.len(), source_name);

    Ok(ParseOutput {
        records,
        rows_skipped: 0,
    })
}

fn normalize_entry(fields: &Map<String, Value>, index: usize) -> SourceRecord {
    let text = |aliases: &[&str]| {
        first_present(fields, aliases)
            .and_then(json_string)
            .unwrap_or_default()
    };
    let integer = |aliases: &[&str]| first_present(fields, aliases).and_then(json_i64).unwrap_or(0);
    let float = |aliases: &[&str]| first_present(fields, aliases).and_then(json_f64).unwrap_or(0.0);

    let id = fields
        .get(alias::ID[0])
        .and_then(json_id)
        .or_else(|| first_present(fields, alias::ID).and_then(json_id))
        .unwrap_or_else(|| PoiId::from(index));

    SourceRecord {
        id,
        name: text(alias::NAME),
        name_en: text(alias::NAME_EN),
        city: text(alias::CITY),
        rank: integer(alias::RANK),
        rank_in_city: integer(alias::RANK_IN_CITY),
        lng: float(alias::LNG),
        lat: float(alias::LAT),
        font_size_override: first_present(fields, alias::FONT_SIZE)
            .and_then(json_f64)
            .filter(|size| *size > 0.0),
        font_color_override: first_present(fields, alias::FONT_COLOR).and_then(json_string),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
