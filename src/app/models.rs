//! Data models for POI ingestion and styling
//!
//! This module contains the core data structures for representing points of
//! interest, the style settings that drive their derived attributes, and the
//! selection context handed in by an external map layer.

use crate::constants;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Record Identity
// =============================================================================

/// Stable record key, unique within the active list
///
/// Structured sources may carry numeric or string ids; tabular sources always
/// produce integer ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoiId {
    Int(i64),
    Text(String),
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoiId::Int(value) => write!(f, "{}", value),
            PoiId::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for PoiId {
    fn from(value: i64) -> Self {
        PoiId::Int(value)
    }
}

impl From<usize> for PoiId {
    fn from(value: usize) -> Self {
        PoiId::Int(value as i64)
    }
}

impl From<&str> for PoiId {
    fn from(value: &str) -> Self {
        PoiId::Text(value.to_string())
    }
}

impl From<String> for PoiId {
    fn from(value: String) -> Self {
        PoiId::Text(value)
    }
}

// =============================================================================
// Records
// =============================================================================

/// A normalized record as produced by the record parsers
///
/// Carries only source fields. Derived style attributes are added by the
/// store when the record is installed.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    pub id: PoiId,
    pub name: String,
    pub name_en: String,
    pub city: String,
    pub rank: i64,
    pub rank_in_city: i64,
    pub lng: f64,
    pub lat: f64,

    /// Source-provided font size (structured sources only)
    pub font_size_override: Option<f64>,

    /// Source-provided font color (structured sources only)
    pub font_color_override: Option<String>,
}

impl SourceRecord {
    /// Create a record with the given id and name and every other field defaulted
    pub fn new(id: impl Into<PoiId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_en: String::new(),
            city: String::new(),
            rank: 0,
            rank_in_city: 0,
            lng: 0.0,
            lat: 0.0,
            font_size_override: None,
            font_color_override: None,
        }
    }
}

/// One visualized point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub id: PoiId,
    pub name: String,
    #[serde(rename = "name_en")]
    pub name_en: String,
    pub city: String,
    pub rank: i64,
    pub rank_in_city: i64,
    pub lng: f64,
    pub lat: f64,

    /// Derived from the font settings by list position
    pub font_size: f64,

    /// Derived from the palette by list position
    pub font_color: String,

    /// Derived from the font family
    pub typeface: String,

    /// Stamped only after an explicit font settings update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,

    /// Mirrors membership of `id` in the store's selection set
    pub selected: bool,
}

impl From<SourceRecord> for Poi {
    fn from(record: SourceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            name_en: record.name_en,
            city: record.city,
            rank: record.rank,
            rank_in_city: record.rank_in_city,
            lng: record.lng,
            lat: record.lat,
            font_size: 0.0,
            font_color: String::new(),
            typeface: String::new(),
            font_weight: None,
            selected: false,
        }
    }
}

/// Partial update for a single record, matched by `id`
///
/// Only source fields can be edited. Derived style and the selected flag are
/// owned by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoiPatch {
    pub id: Option<PoiId>,
    pub name: Option<String>,
    #[serde(rename = "name_en")]
    pub name_en: Option<String>,
    pub city: Option<String>,
    pub rank: Option<i64>,
    pub rank_in_city: Option<i64>,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
}

impl PoiPatch {
    /// Create an empty patch targeting the given id
    pub fn for_id(id: impl Into<PoiId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Merge the patch fields into a record
    pub fn apply_to(&self, poi: &mut Poi) {
        if let Some(name) = &self.name {
            poi.name = name.clone();
        }
        if let Some(name_en) = &self.name_en {
            poi.name_en = name_en.clone();
        }
        if let Some(city) = &self.city {
            poi.city = city.clone();
        }
        if let Some(rank) = self.rank {
            poi.rank = rank;
        }
        if let Some(rank_in_city) = self.rank_in_city {
            poi.rank_in_city = rank_in_city;
        }
        if let Some(lng) = self.lng {
            poi.lng = lng;
        }
        if let Some(lat) = self.lat {
            poi.lat = lat;
        }
    }
}

// =============================================================================
// Style Settings
// =============================================================================

/// Label language preference for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

/// Font settings driving size and typeface assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSettings {
    pub level_count: usize,
    pub font_sizes: Vec<f64>,
    pub font_family: String,
    pub font_weight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            level_count: constants::DEFAULT_LEVEL_COUNT,
            font_sizes: constants::DEFAULT_FONT_SIZES.to_vec(),
            font_family: constants::DEFAULT_FONT_FAMILY.to_string(),
            font_weight: constants::DEFAULT_FONT_WEIGHT.to_string(),
            language: Some(Language::Zh),
        }
    }
}

impl FontSettings {
    /// Validate settings before they can drive style assignment
    pub fn validate(&self) -> Result<()> {
        if self.level_count == 0 {
            return Err(Error::configuration("levelCount must be at least 1"));
        }

        if self.font_sizes.is_empty() {
            return Err(Error::configuration("fontSizes must not be empty"));
        }

        if let Some(size) = self
            .font_sizes
            .iter()
            .find(|size| !size.is_finite() || **size <= 0.0)
        {
            return Err(Error::configuration(format!(
                "Invalid font size {}: sizes must be positive",
                size
            )));
        }

        Ok(())
    }

    /// Produce the settings that result from merging a patch
    pub fn merged(&self, patch: &FontSettingsPatch) -> Self {
        Self {
            level_count: patch.level_count.unwrap_or(self.level_count),
            font_sizes: patch
                .font_sizes
                .clone()
                .unwrap_or_else(|| self.font_sizes.clone()),
            font_family: patch
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.clone()),
            font_weight: patch
                .font_weight
                .clone()
                .unwrap_or_else(|| self.font_weight.clone()),
            language: patch.language.or(self.language),
        }
    }
}

/// Partial font settings update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettingsPatch {
    pub level_count: Option<usize>,
    pub font_sizes: Option<Vec<f64>>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub language: Option<Language>,
}

/// Color settings driving palette assignment
///
/// `discrete_method` and `discrete_count` are stored for an external
/// classifier and are not read by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSettings {
    pub background: String,
    pub palette: Vec<String>,
    pub inverted: bool,
    pub discrete_method: String,
    pub discrete_count: usize,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: constants::DEFAULT_BACKGROUND.to_string(),
            palette: constants::DEFAULT_PALETTE
                .iter()
                .map(|color| color.to_string())
                .collect(),
            inverted: false,
            discrete_method: constants::DEFAULT_DISCRETE_METHOD.to_string(),
            discrete_count: constants::DEFAULT_DISCRETE_COUNT,
        }
    }
}

impl ColorSettings {
    /// Validate settings before they can drive color assignment
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::configuration("palette must not be empty"));
        }
        Ok(())
    }

    /// Produce the settings that result from merging a patch
    pub fn merged(&self, patch: &ColorSettingsPatch) -> Self {
        Self {
            background: patch
                .background
                .clone()
                .unwrap_or_else(|| self.background.clone()),
            palette: patch
                .palette
                .clone()
                .unwrap_or_else(|| self.palette.clone()),
            inverted: patch.inverted.unwrap_or(self.inverted),
            discrete_method: patch
                .discrete_method
                .clone()
                .unwrap_or_else(|| self.discrete_method.clone()),
            discrete_count: patch.discrete_count.unwrap_or(self.discrete_count),
        }
    }
}

/// Partial color settings update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSettingsPatch {
    pub background: Option<String>,
    pub palette: Option<Vec<String>>,
    pub inverted: Option<bool>,
    pub discrete_method: Option<String>,
    pub discrete_count: Option<usize>,
}

// =============================================================================
// Selection State
// =============================================================================

/// Which records are exposed to renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibleMode {
    #[default]
    All,
    Selected,
}

/// Map coordinate supplied by the drawing layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

/// Last spatial selection region drawn by the external map layer
///
/// The geometry is opaque to the engine and stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionContext {
    pub center: Option<GeoPoint>,
    pub geometry: Option<serde_json::Value>,
}
