//! Shared fixtures for POI store tests

use crate::app::models::{ColorSettings, FontSettings, PoiId, SourceRecord};
use crate::app::services::poi_store::PoiStore;

mod loading_tests;

/// Create source records with integer ids `0..count`
pub fn create_test_records(count: usize) -> Vec<SourceRecord> {
    (0..count)
        .map(|i| {
            let mut record = SourceRecord::new(i, format!("poi-{}", i));
            record.city = if i % 2 == 0 { "北京" } else { "上海" }.to_string();
            record.rank = i as i64 + 1;
            record
        })
        .collect()
}

/// Create a store with small, easy-to-check style sequences
pub fn create_test_store(count: usize) -> PoiStore {
    let font = FontSettings {
        font_sizes: vec![64.0, 52.0, 44.0],
        ..Default::default()
    };
    let color = ColorSettings {
        palette: vec!["red".to_string(), "blue".to_string()],
        ..Default::default()
    };

    let mut store = PoiStore::with_settings(font, color).unwrap();
    store.install(create_test_records(count));
    store
}

/// Ids of the store's records in list order
pub fn ids(store: &PoiStore) -> Vec<PoiId> {
    store.pois().iter().map(|poi| poi.id.clone()).collect()
}

/// Check selection flags and style against the current state
pub fn assert_consistent(store: &PoiStore) {
    let sizes = &store.font_settings().font_sizes;
    let palette = &store.color_settings().palette;

    for (i, poi) in store.pois().iter().enumerate() {
        assert_eq!(
            poi.selected,
            store.selected_ids().contains(&poi.id),
            "selected flag out of sync for {}",
            poi.id
        );
        assert_eq!(poi.font_size, sizes[i % sizes.len()], "font size at {}", i);
        assert_eq!(poi.font_color, palette[i % palette.len()], "color at {}", i);
    }

    let mut unique = std::collections::HashSet::new();
    assert!(store.pois().iter().all(|poi| unique.insert(poi.id.clone())));
}
