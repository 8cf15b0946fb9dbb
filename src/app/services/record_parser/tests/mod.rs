//! Shared fixtures for record parser tests

mod structured_tests;
mod tabular_tests;

/// Header line used by the legacy CSV exports
pub const TABULAR_HEADER: &str = "pname,X_gcj02,Y_gcj02,city,rankInCity,rankInChina,name_en";

/// Build a tabular payload from data rows, prefixed with the standard header
pub fn tabular_payload(rows: &[&str]) -> String {
    let mut text = String::from(TABULAR_HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}
