//! POI store: authoritative list, style settings and selection state
//!
//! The store is the only writer of derived attributes. Every public mutation
//! is total and leaves the store consistent:
//! - each record's `selected` flag equals membership of its id in the
//!   selection set
//! - font size and color follow the current settings by list position
//! - ids are unique within the list
//!
//! Mutations that reference unknown ids degrade to no-ops, report a warning
//! and return `false`.

use crate::app::models::{
    ColorSettings, FontSettings, Poi, PoiId, SelectionContext, VisibleMode,
};
use crate::app::services::ingestion::LoadStats;
use crate::config::EngineConfig;
use crate::Result;
use std::collections::HashSet;

pub mod editing;
pub mod handle;
pub mod loading;
pub mod selection;
pub mod settings;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use handle::PoiStoreHandle;
pub use loading::LoadTicket;

/// In-memory POI state for a single tag cloud
#[derive(Debug, Clone)]
pub struct PoiStore {
    /// Records in display order
    pub(crate) pois: Vec<Poi>,

    /// Ids currently selected
    pub(crate) selected_ids: HashSet<PoiId>,

    /// Whether renderers see all records or only selected ones
    pub(crate) visible_mode: VisibleMode,

    pub(crate) font_settings: FontSettings,
    pub(crate) color_settings: ColorSettings,

    /// Last region drawn by the map layer
    pub(crate) selection_context: SelectionContext,

    pub(crate) is_editable: bool,
    pub(crate) has_drawing: bool,

    /// Stamp source-provided styles on freshly loaded records
    pub(crate) honor_source_styles: bool,

    /// Most recently issued load generation
    pub(crate) load_generation: u64,

    /// Statistics of the load that produced the current list
    pub(crate) last_load: Option<LoadStats>,
}

impl Default for PoiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PoiStore {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self {
            pois: Vec::new(),
            selected_ids: HashSet::new(),
            visible_mode: VisibleMode::All,
            font_settings: FontSettings::default(),
            color_settings: ColorSettings::default(),
            selection_context: SelectionContext::default(),
            is_editable: false,
            has_drawing: false,
            honor_source_styles: false,
            load_generation: 0,
            last_load: None,
        }
    }

    /// Create an empty store with the given settings
    ///
    /// # Errors
    /// * Returns `Error::Configuration` if either settings block is invalid
    pub fn with_settings(font_settings: FontSettings, color_settings: ColorSettings) -> Result<Self> {
        font_settings.validate()?;
        color_settings.validate()?;

        Ok(Self {
            font_settings,
            color_settings,
            ..Self::new()
        })
    }

    /// Create an empty store from engine configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let mut store = Self::with_settings(config.font.clone(), config.color.clone())?;
        store.honor_source_styles = config.honor_source_styles;
        Ok(store)
    }

    /// All records in display order
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// Look up a record by id
    pub fn get(&self, id: &PoiId) -> Option<&Poi> {
        self.pois.iter().find(|poi| &poi.id == id)
    }

    /// Check if a record with this id exists
    pub fn contains(&self, id: &PoiId) -> bool {
        self.pois.iter().any(|poi| &poi.id == id)
    }

    /// Total number of records
    pub fn total_count(&self) -> usize {
        self.pois.len()
    }

    /// Number of ids in the selection set
    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }

    /// Current selection set
    pub fn selected_ids(&self) -> &HashSet<PoiId> {
        &self.selected_ids
    }

    /// Current visibility mode
    pub fn visible_mode(&self) -> VisibleMode {
        self.visible_mode
    }

    /// Records exposed to renderers, in list order
    pub fn visible_list(&self) -> Vec<&Poi> {
        match self.visible_mode {
            VisibleMode::All => self.pois.iter().collect(),
            VisibleMode::Selected => self.selected_pois(),
        }
    }

    /// Selected records, in list order
    ///
    /// Filters by the selection set, so ids that match no record are ignored.
    pub fn selected_pois(&self) -> Vec<&Poi> {
        self.pois
            .iter()
            .filter(|poi| self.selected_ids.contains(&poi.id))
            .collect()
    }

    pub fn font_settings(&self) -> &FontSettings {
        &self.font_settings
    }

    pub fn color_settings(&self) -> &ColorSettings {
        &self.color_settings
    }

    pub fn selection_context(&self) -> &SelectionContext {
        &self.selection_context
    }

    pub fn is_editable(&self) -> bool {
        self.is_editable
    }

    pub fn has_drawing(&self) -> bool {
        self.has_drawing
    }

    /// Statistics of the load that produced the current list
    pub fn last_load(&self) -> Option<&LoadStats> {
        self.last_load.as_ref()
    }

    /// Recompute every record's selected flag from the selection set
    pub(crate) fn sync_selected_flags(&mut self) {
        let selected_ids = &self.selected_ids;
        for poi in self.pois.iter_mut() {
            poi.selected = selected_ids.contains(&poi.id);
        }
    }
}
