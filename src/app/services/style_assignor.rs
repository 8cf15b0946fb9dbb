//! Cyclic style assignment
//!
//! Maps a record's position in the list to a font size and a palette color by
//! cycling through the configured sequences. Assignment is by position, not by
//! id: reordering or removing records changes the style of the records that
//! move.

use crate::app::models::{ColorSettings, FontSettings, Poi};
use tracing::{trace, warn};

/// Font size for the record at `index`, or `None` if no sizes are configured
pub fn font_size_at(font: &FontSettings, index: usize) -> Option<f64> {
    if font.font_sizes.is_empty() {
        return None;
    }
    Some(font.font_sizes[index % font.font_sizes.len()])
}

/// Palette color for the record at `index`, or `None` if the palette is empty
pub fn color_at(color: &ColorSettings, index: usize) -> Option<&str> {
    if color.palette.is_empty() {
        return None;
    }
    Some(color.palette[index % color.palette.len()].as_str())
}

/// Assign size, color and typeface to every record by position
///
/// Pure function of its inputs; `font_weight` is left untouched.
pub fn assign(mut records: Vec<Poi>, font: &FontSettings, color: &ColorSettings) -> Vec<Poi> {
    apply_font(&mut records, font, false);
    apply_colors(&mut records, color);
    records
}

/// Recompute font size and typeface over the whole list
///
/// With `stamp_weight`, the settings' font weight is also written to every
/// record. An empty size list leaves the records unchanged.
pub fn apply_font(records: &mut [Poi], font: &FontSettings, stamp_weight: bool) {
    if font.font_sizes.is_empty() {
        warn!("No font sizes configured, leaving {} records unchanged", records.len());
        return;
    }

    for (index, poi) in records.iter_mut().enumerate() {
        poi.font_size = font.font_sizes[index % font.font_sizes.len()];
        poi.typeface.clone_from(&font.font_family);
        if stamp_weight {
            poi.font_weight = Some(font.font_weight.clone());
        }
    }

    trace!("Assigned font sizes to {} records", records.len());
}

/// Recompute font color over the whole list
///
/// An empty palette leaves the records unchanged.
pub fn apply_colors(records: &mut [Poi], color: &ColorSettings) {
    if color.palette.is_empty() {
        warn!("Empty palette, leaving {} records unchanged", records.len());
        return;
    }

    for (index, poi) in records.iter_mut().enumerate() {
        poi.font_color.clone_from(&color.palette[index % color.palette.len()]);
    }

    trace!("Assigned colors to {} records", records.len());
}
