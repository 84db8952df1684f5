//! Loading [`AnalysisInputs`] from request files.
//!
//! Files ending in `.toml` are parsed as TOML; everything else is parsed
//! as JSON, the format the dashboard posts.

use std::path::Path;

use tapak_analytics_models::AnalysisInputs;

use crate::AnalyticsError;

/// Parses analysis inputs from a JSON document.
///
/// # Errors
///
/// Returns [`AnalyticsError::Json`] if the document is malformed.
pub fn from_json_str(json: &str) -> Result<AnalysisInputs, AnalyticsError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses analysis inputs from a TOML document.
///
/// # Errors
///
/// Returns [`AnalyticsError::Toml`] if the document is malformed.
pub fn from_toml_str(toml: &str) -> Result<AnalysisInputs, AnalyticsError> {
    Ok(toml::from_str(toml)?)
}

/// Reads and parses an inputs file, picking the format from the extension.
///
/// # Errors
///
/// Returns [`AnalyticsError::Io`] if the file cannot be read, or a parse
/// error if its contents are malformed.
pub fn load_file(path: &Path) -> Result<AnalysisInputs, AnalyticsError> {
    log::debug!("Loading analysis inputs from {}", path.display());
    let contents = std::fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        from_toml_str(&contents)
    } else {
        from_json_str(&contents)
    }
}
