//! Shared fixtures for ingestion tests


use crate::app::services::ingestion::StaticFetcher;

pub const JSON_LOCATION: &str = "data/chinapoi.json";
pub const CSV_LOCATION: &str = "data/chinapoi.csv";

/// A small JSON payload with three records
pub fn json_payload() -> Vec<u8> {
    r#"[
        {"id": 1, "name": "故宫", "name_en": "Forbidden City", "city": "北京", "rank": 1, "rankInCity": 1, "lng": 116.397, "lat": 39.918},
        {"id": 2, "name": "外滩", "name_en": "The Bund", "city": "上海", "rank": 2, "rankInCity": 1, "lng": 121.490, "lat": 31.240},
        {"id": 3, "name": "西湖", "city": "杭州", "rank": 3, "lng": 120.150, "lat": 30.250}
    ]"#
    .as_bytes()
    .to_vec()
}

/// A GBK-encoded legacy CSV payload with two records
pub fn gbk_csv_payload() -> Vec<u8> {
    let text = "pname,X_gcj02,Y_gcj02,city,rankInCity,rankInChina,name_en\n\
                故宫,116.397,39.918,北京,1,1,Forbidden City\n\
                外滩,121.490,31.240,上海,1,2,The Bund\n";
    let (bytes, _, had_errors) = encoding_rs::GBK.encode(text);
    assert!(!had_errors);
    bytes.into_owned()
}

/// Fetcher serving both payloads at their default locations
pub fn fetcher_with_both() -> StaticFetcher {
    StaticFetcher::new()
        .with_payload(JSON_LOCATION, json_payload())
        .with_payload(CSV_LOCATION, gbk_csv_payload())
}
