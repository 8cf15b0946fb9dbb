//! Application constants for the POI engine
//!
//! This module contains default values, field aliases and source layout
//! constants used throughout the engine.

// =============================================================================
// Source Defaults
// =============================================================================

/// Default structured (JSON) source location
pub const DEFAULT_JSON_SOURCE: &str = "data/chinapoi.json";

/// Default legacy tabular (CSV) source location
pub const DEFAULT_CSV_SOURCE: &str = "data/chinapoi.csv";

/// Candidate encodings tried in order when decoding legacy CSV bytes
pub const DEFAULT_ENCODING_CANDIDATES: &[&str] = &["gb18030", "gbk", "utf-8"];

/// Application directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "poi-engine";

/// Config file name looked up in the application config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Legacy Tabular Layout
// =============================================================================

/// Column positions in the legacy CSV layout (header row is skipped)
pub mod tabular_columns {
    pub const NAME: usize = 0;
    pub const LNG: usize = 1;
    pub const LAT: usize = 2;
    pub const CITY: usize = 3;
    pub const RANK_IN_CITY: usize = 4;
    pub const RANK: usize = 5;
    pub const NAME_EN: usize = 6;

    /// Rows with fewer fields than this are skipped
    pub const MIN_FIELDS: usize = 6;
}

/// Field delimiter of the legacy CSV layout
pub const TABULAR_DELIMITER: char = ',';

// =============================================================================
// Structured Field Aliases
// =============================================================================

/// Accepted keys for each structured field, primary key first
pub mod field_aliases {
    pub const ID: &[&str] = &["id", "pid"];
    pub const NAME: &[&str] = &["name", "pname"];
    pub const NAME_EN: &[&str] = &["name_en"];
    pub const CITY: &[&str] = &["city"];
    pub const RANK: &[&str] = &["rank", "rankInChina"];
    pub const RANK_IN_CITY: &[&str] = &["rankInCity"];
    pub const LNG: &[&str] = &["lng", "X_gcj02"];
    pub const LAT: &[&str] = &["lat", "Y_gcj02"];
    pub const FONT_SIZE: &[&str] = &["fontSize"];
    pub const FONT_COLOR: &[&str] = &["fontColor"];
}

// =============================================================================
// Style Defaults
// =============================================================================

/// Default number of font levels
pub const DEFAULT_LEVEL_COUNT: usize = 5;

/// Default font sizes, largest first
pub const DEFAULT_FONT_SIZES: &[f64] = &[64.0, 52.0, 44.0, 36.0, 28.0, 24.0, 20.0];

/// Default font family
pub const DEFAULT_FONT_FAMILY: &str = "等线";

/// Default font weight
pub const DEFAULT_FONT_WEIGHT: &str = "700";

/// Default canvas background
pub const DEFAULT_BACKGROUND: &str = "#0c1024";

/// Default palette (five-class sequential scheme)
pub const DEFAULT_PALETTE: &[&str] = &[
    "rgb(240,249,232)",
    "rgb(186,228,188)",
    "rgb(123,204,196)",
    "rgb(67,162,202)",
    "rgb(8,104,172)",
];

/// Default classification method, reserved for an external classifier
pub const DEFAULT_DISCRETE_METHOD: &str = "quantile";

/// Default classification class count, reserved for an external classifier
pub const DEFAULT_DISCRETE_COUNT: usize = 5;
