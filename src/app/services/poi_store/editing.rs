//! Record edits and UI affordance flags

use super::PoiStore;
use crate::Error;
use crate::app::models::{PoiPatch, SelectionContext};
use tracing::{debug, warn};

impl PoiStore {
    /// Flip the editable flag
    pub fn toggle_edit_mode(&mut self) {
        self.is_editable = !self.is_editable;
    }

    /// Merge a patch into the record with the matching id
    ///
    /// Returns `false` (and logs a warning) if the patch has no id or no
    /// record matches.
    pub fn update_poi(&mut self, patch: &PoiPatch) -> bool {
        let Some(id) = &patch.id else {
            warn!("Ignoring POI update without an id");
            return false;
        };

        match self.pois.iter_mut().find(|poi| &poi.id == id) {
            Some(poi) => {
                patch.apply_to(poi);
                debug!("Updated POI {}", id);
                true
            }
            None => {
                warn!("Ignoring update: {}", Error::not_found(id));
                false
            }
        }
    }

    /// Store the region last drawn by the map layer, or clear it with `None`
    pub fn set_selection_context(&mut self, context: Option<SelectionContext>) {
        self.selection_context = context.unwrap_or_default();
    }

    /// Record whether the map layer currently shows a drawing
    pub fn set_has_drawing(&mut self, has_drawing: bool) {
        self.has_drawing = has_drawing;
    }

    /// Signal renderers to clear the tag cloud
    pub fn clear_tag_cloud(&mut self) {
        self.has_drawing = false;
    }
}
