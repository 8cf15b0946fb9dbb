//! Tests for structured (JSON) payloads

use crate::Error;
use crate::app::models::PoiId;
use crate::app::services::record_parser::{
    drop_duplicate_ids, parse_structured, parse_structured_bytes,
};
use serde_json::json;

#[test]
fn test_array_entry_with_partial_fields() {
    let output = parse_structured(
        json!([{"id": 1, "name": "Beijing", "lng": 116.4, "lat": 39.9}]),
        "test.json",
    )
    .unwrap();

    assert_eq!(output.records.len(), 1);
    let record = &output.records[0];
    assert_eq!(record.id, PoiId::Int(1));
    assert_eq!(record.name, "Beijing");
    assert_eq!(record.name_en, "");
    assert_eq!(record.city, "");
    assert_eq!(record.rank, 0);
    assert_eq!(record.rank_in_city, 0);
    assert_eq!(record.lng, 116.4);
    assert_eq!(record.lat, 39.9);
}

#[test]
fn test_missing_id_uses_position() {
    let output = parse_structured(
        json!([{"name": "A"}, {"name": "B"}, {"id": 0, "name": "C"}]),
        "test.json",
    )
    .unwrap();

    let ids: Vec<_> = output.records.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![PoiId::Int(0), PoiId::Int(1), PoiId::Int(0)]);
}

#[test]
fn test_legacy_field_aliases() {
    let output = parse_structured(
        json!([{
            "pid": "P-9",
            "pname": "外滩",
            "X_gcj02": "121.49",
            "Y_gcj02": 31.24,
            "rankInChina": 3,
            "rankInCity": "1"
        }]),
        "test.json",
    )
    .unwrap();

    let record = &output.records[0];
    assert_eq!(record.id, PoiId::Text("P-9".to_string()));
    assert_eq!(record.name, "外滩");
    assert_eq!(record.lng, 121.49);
    assert_eq!(record.lat, 31.24);
    assert_eq!(record.rank, 3);
    assert_eq!(record.rank_in_city, 1);
}

#[test]
fn test_style_overrides_are_captured() {
    let output = parse_structured(
        json!([{"id": 1, "fontSize": 40, "fontColor": "#fff"}, {"id": 2, "fontSize": 0}]),
        "test.json",
    )
    .unwrap();

    assert_eq!(output.records[0].font_size_override, Some(40.0));
    assert_eq!(output.records[0].font_color_override.as_deref(), Some("#fff"));
    assert_eq!(output.records[1].font_size_override, None);
}

#[test]
fn test_object_payload_keeps_insertion_order() {
    let bytes = br#"{"b": {"id": 20, "name": "second"}, "a": {"id": 10, "name": "first"}}"#;
    let output = parse_structured_bytes(bytes, "test.json").unwrap();

    let names: Vec<_> = output.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["second", "first"]);
}

#[test]
fn test_non_collection_payload_is_format_error() {
    let result = parse_structured(json!("not a list"), "test.json");

    match result {
        Err(Error::Format { source_name, message }) => {
            assert_eq!(source_name, "test.json");
            assert!(message.contains("a string"));
        }
        other => panic!("Expected Format error, got {:?}", other),
    }
}

#[test]
fn test_non_object_entry_is_format_error() {
    let result = parse_structured(json!([{"id": 1}, 42]), "test.json");
    assert!(matches!(result, Err(Error::Format { .. })));
}

#[test]
fn test_invalid_json_bytes_is_format_error() {
    let result = parse_structured_bytes(b"[{\"id\": 1,", "test.json");
    assert!(matches!(result, Err(Error::Format { .. })));
}

#[test]
fn test_drop_duplicate_ids_keeps_first() {
    let mut output = parse_structured(
        json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}, {"id": 1, "name": "C"}]),
        "test.json",
    )
    .unwrap();

    let dropped = drop_duplicate_ids(&mut output.records);

    assert_eq!(dropped, 1);
    let names: Vec<_> = output.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_positional_id_collides_with_explicit_id() {
    let mut output = parse_structured(json!([{"name": "A"}, {"id": 0, "name": "B"}]), "test.json")
        .unwrap();

    assert_eq!(output.records[0].id, PoiId::Int(0));
    assert_eq!(output.records[1].id, PoiId::Int(0));

    let dropped = drop_duplicate_ids(&mut output.records);

    assert_eq!(dropped, 1);
    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].name, "A");
}
