//! Selection and visibility operations
//!
//! Every operation that changes the selection set resyncs the per-record
//! selected flags before returning.

use super::PoiStore;
use crate::Error;
use crate::app::models::{PoiId, VisibleMode};
use crate::app::services::style_assignor;
use std::collections::HashSet;
use tracing::{debug, warn};

impl PoiStore {
    /// Toggle a single id in the selection set
    ///
    /// Ids already in the set are always removable. Adding an id that matches
    /// no record is refused: the call is a no-op, logs a warning and returns
    /// `false`.
    pub fn toggle_select(&mut self, id: &PoiId) -> bool {
        if self.selected_ids.remove(id) {
            debug!("Deselected POI {}", id);
        } else if self.contains(id) {
            self.selected_ids.insert(id.clone());
            debug!("Selected POI {}", id);
        } else {
            warn!("Ignoring toggle: {}", Error::not_found(id));
            return false;
        }

        self.sync_selected_flags();
        true
    }

    /// Replace the selection set wholesale
    ///
    /// Duplicates collapse. Ids are not checked against the list; ids that
    /// match no record are carried in the set and filtered out on read.
    pub fn apply_selection<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = PoiId>,
    {
        self.selected_ids = ids.into_iter().collect::<HashSet<_>>();
        self.sync_selected_flags();
        debug!("Applied selection of {} ids", self.selected_ids.len());
    }

    /// Clear the selection set
    pub fn clear_selection(&mut self) {
        self.apply_selection(std::iter::empty());
    }

    /// Expose every record to renderers
    pub fn show_all(&mut self) {
        self.visible_mode = VisibleMode::All;
    }

    /// Expose only selected records to renderers
    pub fn show_selected(&mut self) {
        self.visible_mode = VisibleMode::Selected;
    }

    /// Select everything, or clear the selection if every record is selected
    ///
    /// Counts records whose flag is set, so ids in the set that match no
    /// record never make a partial selection look complete. No-op on an
    /// empty list.
    pub fn toggle_bulk_select(&mut self) {
        if self.pois.is_empty() {
            return;
        }

        let selected_records = self.pois.iter().filter(|poi| poi.selected).count();
        if selected_records == self.pois.len() {
            self.clear_selection();
        } else {
            let all_ids: Vec<PoiId> = self.pois.iter().map(|poi| poi.id.clone()).collect();
            self.apply_selection(all_ids);
        }
    }

    /// Delete every selected record and clear the selection
    ///
    /// Remaining records are restyled because their positions changed.
    /// Returns the number of records removed; no-op if nothing is selected.
    pub fn remove_selected(&mut self) -> usize {
        if self.selected_ids.is_empty() {
            return 0;
        }

        let before = self.pois.len();
        let selected_ids = &self.selected_ids;
        self.pois.retain(|poi| !selected_ids.contains(&poi.id));
        let removed = before - self.pois.len();

        self.selected_ids.clear();
        self.sync_selected_flags();
        self.restyle();

        debug!("Removed {} selected POIs, {} remain", removed, self.pois.len());
        removed
    }

    /// Recompute font size, typeface and color over the whole list
    pub(crate) fn restyle(&mut self) {
        style_assignor::apply_font(&mut self.pois, &self.font_settings, false);
        style_assignor::apply_colors(&mut self.pois, &self.color_settings);
    }
}
