//! Shared store handle
//!
//! Wraps a store in a single async mutex so several tasks can drive it. The
//! lock is never held across a fetch: a load takes its ticket, releases the
//! lock, runs the pipeline, and re-locks only to commit.

use super::PoiStore;
use crate::Result;
use crate::app::services::ingestion::{Fetcher, IngestionPipeline, LoadStats};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Cloneable handle to a store guarded by one mutex
#[derive(Debug, Clone, Default)]
pub struct PoiStoreHandle {
    inner: Arc<Mutex<PoiStore>>,
}

impl PoiStoreHandle {
    pub fn new(store: PoiStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store for reads or synchronous mutations
    pub async fn lock(&self) -> MutexGuard<'_, PoiStore> {
        self.inner.lock().await
    }

    /// Run a pipeline and commit its result unless a newer load started
    ///
    /// # Errors
    /// * Returns the pipeline error if ingestion failed
    /// * Returns `Error::StaleLoad` if a newer load began while this one ran
    pub async fn load<F: Fetcher>(&self, pipeline: &IngestionPipeline<F>) -> Result<LoadStats> {
        let ticket = self.inner.lock().await.begin_load();

        let dataset = pipeline.run().await?;

        let mut store = self.inner.lock().await;
        store.commit_load(ticket, dataset).cloned()
    }
}
