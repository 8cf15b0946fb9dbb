//! Tests for installing loads and load sequencing

use super::*;
use crate::Error;
use crate::app::models::{PoiId, VisibleMode};
use crate::app::services::ingestion::{Fetcher, IngestionPipeline, LoadedDataset, LoadStats, StaticFetcher};
use crate::app::services::poi_store::PoiStoreHandle;
use crate::config::{SourceConfig, SourceFormat};
use std::sync::Arc;
use tokio::sync::Notify;

const JSON_LOCATION: &str = "pois.json";

fn dataset(count: usize) -> LoadedDataset {
    LoadedDataset {
        records: create_test_records(count),
        stats: LoadStats::new(SourceFormat::Json, JSON_LOCATION),
    }
}

fn json_pipeline(payload: &str) -> IngestionPipeline<StaticFetcher> {
    IngestionPipeline::new(
        StaticFetcher::new().with_payload(JSON_LOCATION, payload.as_bytes().to_vec()),
        SourceConfig::json_only(JSON_LOCATION),
    )
}

/// Fetcher that blocks until released, announcing when it has started
#[derive(Debug, Clone)]
struct GatedFetcher {
    started: Arc<Notify>,
    release: Arc<Notify>,
    payload: Vec<u8>,
}

impl Fetcher for GatedFetcher {
    async fn fetch(&self, _location: &str) -> crate::Result<Vec<u8>> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.payload.clone())
    }
}

#[test]
fn test_install_resets_selection_and_keeps_mode() {
    let mut store = create_test_store(4);
    store.apply_selection(vec![PoiId::Int(1), PoiId::Int(2)]);
    store.show_selected();

    store.install(create_test_records(3));

    assert!(store.selected_ids().is_empty());
    assert_eq!(store.visible_mode(), VisibleMode::Selected);
    assert!(store.visible_list().is_empty());
    assert_consistent(&store);
}

#[test]
fn test_install_drops_duplicate_ids() {
    let mut store = create_test_store(0);
    let mut records = create_test_records(3);
    let mut duplicate = records[1].clone();
    duplicate.name = "second copy".to_string();
    records.push(duplicate);

    let dropped = store.install(records);

    assert_eq!(dropped, 1);
    assert_eq!(store.total_count(), 3);
    assert_eq!(store.get(&PoiId::Int(1)).unwrap().name, "poi-1");
    assert_consistent(&store);
}

#[test]
fn test_install_honors_source_styles_when_enabled() {
    let mut records = create_test_records(2);
    records[0].font_size_override = Some(99.0);
    records[1].font_color_override = Some("#abcdef".to_string());

    let mut plain = create_test_store(0);
    plain.install(records.clone());
    assert_eq!(plain.pois()[0].font_size, 64.0);
    assert_eq!(plain.pois()[1].font_color, "blue");

    let mut honoring = create_test_store(0);
    honoring.honor_source_styles = true;
    honoring.install(records);
    assert_eq!(honoring.pois()[0].font_size, 99.0);
    assert_eq!(honoring.pois()[0].font_color, "red");
    assert_eq!(honoring.pois()[1].font_size, 52.0);
    assert_eq!(honoring.pois()[1].font_color, "#abcdef");
}

#[test]
fn test_stale_ticket_is_rejected() {
    let mut store = create_test_store(2);

    let old = store.begin_load();
    let new = store.begin_load();
    assert!(new > old);

    let result = store.commit_load(old, dataset(5));
    assert!(matches!(
        result,
        Err(Error::StaleLoad { generation: 1, latest: 2 })
    ));
    assert_eq!(store.total_count(), 2);

    let stats = store.commit_load(new, dataset(5)).unwrap();
    assert_eq!(stats.records_loaded, 5);
    assert_eq!(store.total_count(), 5);
    assert_eq!(store.last_load().map(|s| s.records_loaded), Some(5));
}

#[tokio::test]
async fn test_load_installs_styled_records() {
    let mut store = create_test_store(0);
    let pipeline = json_pipeline(
        r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}, {"id": 3, "name": "c"}, {"id": 1, "name": "dup"}]"#,
    );

    let stats = store.load(&pipeline).await.unwrap();

    assert_eq!(stats.records_loaded, 3);
    assert_eq!(stats.duplicates_dropped, 1);
    assert!(!stats.fallback_used);
    assert_eq!(ids(&store), vec![PoiId::Int(1), PoiId::Int(2), PoiId::Int(3)]);
    assert_consistent(&store);
}

#[tokio::test]
async fn test_failed_load_leaves_store_untouched() {
    let mut store = create_test_store(3);
    store.toggle_select(&PoiId::Int(2));
    let before = store.pois().to_vec();

    let pipeline = IngestionPipeline::new(StaticFetcher::new(), SourceConfig::default());
    let result = store.load(&pipeline).await;

    assert!(matches!(result, Err(Error::Ingestion { .. })));
    assert_eq!(store.pois(), before.as_slice());
    assert_eq!(store.selected_count(), 1);
    assert!(store.last_load().is_none());
}

#[tokio::test]
async fn test_handle_discards_slow_superseded_load() {
    let handle = PoiStoreHandle::new(create_test_store(0));
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());

    let slow = IngestionPipeline::new(
        GatedFetcher {
            started: started.clone(),
            release: release.clone(),
            payload: br#"[{"id": "old", "name": "stale"}]"#.to_vec(),
        },
        SourceConfig::json_only(JSON_LOCATION),
    );

    let slow_handle = handle.clone();
    let slow_task = tokio::spawn(async move { slow_handle.load(&slow).await });

    started.notified().await;

    let fast = json_pipeline(r#"[{"id": "new", "name": "fresh"}, {"id": "newer", "name": "fresher"}]"#);
    let stats = handle.load(&fast).await.unwrap();
    assert_eq!(stats.records_loaded, 2);

    release.notify_one();
    let slow_result = slow_task.await.unwrap();
    assert!(matches!(slow_result, Err(Error::StaleLoad { .. })));

    let store = handle.lock().await;
    assert_eq!(
        ids(&store),
        vec![PoiId::Text("new".to_string()), PoiId::Text("newer".to_string())]
    );
    assert_consistent(&store);
}

#[tokio::test]
async fn test_handle_mutations_between_loads() {
    let handle = PoiStoreHandle::new(create_test_store(0));
    handle
        .load(&json_pipeline(r#"[{"id": 10, "name": "x"}, {"id": 20, "name": "y"}]"#))
        .await
        .unwrap();

    {
        let mut store = handle.lock().await;
        store.toggle_bulk_select();
        assert_eq!(store.selected_count(), 2);
    }

    handle
        .load(&json_pipeline(r#"[{"id": 30, "name": "z"}]"#))
        .await
        .unwrap();

    let store = handle.lock().await;
    assert_eq!(store.total_count(), 1);
    assert!(store.selected_ids().is_empty());
}
