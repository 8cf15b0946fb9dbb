//! Field parsing utilities for POI source records
//!
//! This module provides lenient parsers that mirror how loosely-typed exports
//! are usually read: a numeric field is taken from its leading numeric prefix
//! and anything unparseable falls back to a default rather than failing.

use crate::app::models::PoiId;
use serde_json::{Map, Value};

/// Parse the leading floating-point prefix of a field
///
/// Leading whitespace is ignored and trailing garbage after a valid prefix is
/// discarded, so `" 121.4km"` parses as `121.4`.
pub fn parse_leading_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

/// Parse the leading integer prefix of a field
///
/// `"12th"` parses as `12` and `"3.9"` as `3`.
pub fn parse_leading_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return None;
    }

    trimmed[..end].parse::<i64>().ok()
}

/// Look up the first alias that holds a meaningful value
///
/// Null, empty strings, `false` and zero are treated as absent so that a
/// later alias can still supply the field.
pub fn first_present<'a>(entry: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|alias| entry.get(*alias))
        .find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a text field, stringifying numbers
pub fn json_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Read a floating-point field from a number or a numeric string
pub fn json_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_leading_f64(text),
        _ => None,
    }
}

/// Read an integer field from a number or a numeric string
///
/// Fractional numbers are truncated toward zero.
pub fn json_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|n| n.trunc() as i64)),
        Value::String(text) => parse_leading_i64(text),
        _ => None,
    }
}

/// Read a record id from an integer or a string
///
/// Non-integral numbers keep their textual form so they stay distinct.
pub fn json_id(value: &Value) -> Option<PoiId> {
    match value {
        Value::Number(number) => Some(
            number
                .as_i64()
                .map(PoiId::Int)
                .unwrap_or_else(|| PoiId::Text(number.to_string())),
        ),
        Value::String(text) => Some(PoiId::Text(text.clone())),
        _ => None,
    }
}
