//! Settings-driven restyling
//!
//! A settings update merges the patch, validates the result, and recomputes
//! the affected attributes over the entire list. Invalid results are refused
//! so the cyclic assignment never sees an empty sequence.

use super::PoiStore;
use crate::app::models::{ColorSettingsPatch, FontSettingsPatch};
use crate::app::services::style_assignor;
use tracing::{debug, warn};

impl PoiStore {
    /// Merge a font settings patch and restyle sizes, typeface and weight
    ///
    /// Returns `false` and leaves the store unchanged if the merged settings
    /// are invalid.
    pub fn update_font_level(&mut self, patch: &FontSettingsPatch) -> bool {
        let merged = self.font_settings.merged(patch);
        if let Err(e) = merged.validate() {
            warn!("Rejected font settings update: {}", e);
            return false;
        }

        self.font_settings = merged;
        style_assignor::apply_font(&mut self.pois, &self.font_settings, true);
        debug!("Font settings updated, restyled {} POIs", self.pois.len());
        true
    }

    /// Merge a color settings patch and restyle colors
    ///
    /// Returns `false` and leaves the store unchanged if the merged settings
    /// are invalid.
    pub fn update_color_settings(&mut self, patch: &ColorSettingsPatch) -> bool {
        let merged = self.color_settings.merged(patch);
        if let Err(e) = merged.validate() {
            warn!("Rejected color settings update: {}", e);
            return false;
        }

        self.color_settings = merged;
        style_assignor::apply_colors(&mut self.pois, &self.color_settings);
        debug!("Color settings updated, restyled {} POIs", self.pois.len());
        true
    }
}
