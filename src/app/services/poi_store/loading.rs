//! Installing loaded datasets
//!
//! Loads are sequenced by generation. [`PoiStore::begin_load`] issues a ticket
//! and [`PoiStore::commit_load`] accepts a dataset only for the most recently
//! issued ticket, so a slow load that finishes after a newer one started can
//! never overwrite the newer list.

use super::PoiStore;
use crate::app::models::{Poi, SourceRecord};
use crate::app::services::ingestion::{Fetcher, IngestionPipeline, LoadStats, LoadedDataset};
use crate::app::services::record_parser::drop_duplicate_ids;
use crate::app::services::style_assignor;
use crate::{Error, Result};
use tracing::{info, warn};

/// Sequencing token for one load
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl PoiStore {
    /// Issue a ticket for a new load, superseding any load in flight
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket {
            generation: self.load_generation,
        }
    }

    /// Most recently issued load generation
    pub fn load_generation(&self) -> u64 {
        self.load_generation
    }

    /// Install a dataset if its ticket is still current
    ///
    /// # Errors
    /// * Returns `Error::StaleLoad` if a newer load was started after this
    ///   ticket was issued; the store is left unchanged
    pub fn commit_load(&mut self, ticket: LoadTicket, dataset: LoadedDataset) -> Result<&LoadStats> {
        if ticket.generation != self.load_generation {
            warn!(
                "Discarding load generation {} ({} records): generation {} is newer",
                ticket.generation,
                dataset.records.len(),
                self.load_generation
            );
            return Err(Error::stale_load(ticket.generation, self.load_generation));
        }

        let LoadedDataset { records, mut stats } = dataset;
        let duplicates = self.install(records);
        stats.duplicates_dropped = duplicates;
        stats.records_loaded = self.pois.len();

        info!("{}", stats.summary());
        Ok(&*self.last_load.insert(stats))
    }

    /// Run a pipeline and install its result
    ///
    /// On failure the current list and selection are left untouched.
    pub async fn load<F: Fetcher>(&mut self, pipeline: &IngestionPipeline<F>) -> Result<&LoadStats> {
        let ticket = self.begin_load();
        let dataset = pipeline.run().await?;
        self.commit_load(ticket, dataset)
    }

    /// Replace the list wholesale and reset the selection
    ///
    /// Records repeating an earlier id are dropped. Styles are assigned from
    /// the current settings; source-provided styles are then stamped on top
    /// when the store honors them. The visibility mode is left unchanged.
    /// Returns the number of duplicate records dropped.
    pub fn install(&mut self, mut records: Vec<SourceRecord>) -> usize {
        let duplicates = drop_duplicate_ids(&mut records);

        let overrides: Vec<(Option<f64>, Option<String>)> = if self.honor_source_styles {
            records
                .iter()
                .map(|r| (r.font_size_override, r.font_color_override.clone()))
                .collect()
        } else {
            Vec::new()
        };

        let pois: Vec<Poi> = records.into_iter().map(Poi::from).collect();
        self.pois = style_assignor::assign(pois, &self.font_settings, &self.color_settings);

        for (poi, (size, color)) in self.pois.iter_mut().zip(overrides) {
            if let Some(size) = size {
                poi.font_size = size;
            }
            if let Some(color) = color {
                poi.font_color = color;
            }
        }

        self.selected_ids.clear();
        self.sync_selected_flags();
        duplicates
    }
}
