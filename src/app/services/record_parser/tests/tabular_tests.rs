//! Tests for the legacy tabular layout

use super::*;
use crate::app::models::PoiId;
use crate::app::services::record_parser::parse_tabular;

#[test]
fn test_single_row_without_secondary_name() {
    let output = parse_tabular("h1,h2,h3,h4,h5,h6\nShanghai,121.4,31.2,Shanghai,1,2\n");

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.rows_skipped, 0);

    let record = &output.records[0];
    assert_eq!(record.id, PoiId::Int(0));
    assert_eq!(record.name, "Shanghai");
    assert_eq!(record.lng, 121.4);
    assert_eq!(record.lat, 31.2);
    assert_eq!(record.city, "Shanghai");
    assert_eq!(record.rank_in_city, 1);
    assert_eq!(record.rank, 2);
    assert_eq!(record.name_en, "");
    assert_eq!(record.font_size_override, None);
}

#[test]
fn test_secondary_name_is_trimmed() {
    let text = tabular_payload(&["外滩,121.49,31.24,上海,1,3,  The Bund  "]);
    let output = parse_tabular(&text);

    assert_eq!(output.records[0].name, "外滩");
    assert_eq!(output.records[0].name_en, "The Bund");
}

#[test]
fn test_short_rows_are_skipped_but_keep_their_index() {
    let text = tabular_payload(&[
        "故宫,116.39,39.91,北京,1,1,Forbidden City",
        "broken,row",
        "颐和园,116.27,39.99,北京,2,4,Summer Palace",
    ]);
    let output = parse_tabular(&text);

    assert_eq!(output.records.len(), 2);
    assert_eq!(output.rows_skipped, 1);
    assert_eq!(output.records[0].id, PoiId::Int(0));
    assert_eq!(output.records[1].id, PoiId::Int(2));
}

#[test]
fn test_blank_lines_are_not_counted_as_skipped() {
    let output = parse_tabular("header\n\nA,1,2,C,1,1\n\n");

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].id, PoiId::Int(1));
    assert_eq!(output.rows_skipped, 0);
}

#[test]
fn test_unparseable_numbers_default_to_zero() {
    let text = tabular_payload(&["Nowhere,east,north,,first,n/a"]);
    let output = parse_tabular(&text);

    let record = &output.records[0];
    assert_eq!(record.lng, 0.0);
    assert_eq!(record.lat, 0.0);
    assert_eq!(record.rank_in_city, 0);
    assert_eq!(record.rank, 0);
    assert_eq!(record.city, "");
}

#[test]
fn test_crlf_line_endings() {
    let output = parse_tabular("h1,h2,h3,h4,h5,h6\r\nA,1.5,2.5,C,3,4\r\nB,1,2,C,5,6,Bee\r\n");

    assert_eq!(output.records.len(), 2);
    assert_eq!(output.records[0].rank, 4);
    assert_eq!(output.records[1].name_en, "Bee");
}

#[test]
fn test_header_only_yields_no_records() {
    let output = parse_tabular(TABULAR_HEADER);
    assert!(output.records.is_empty());
    assert_eq!(output.rows_skipped, 0);
}
