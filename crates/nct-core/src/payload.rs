//! Import payload and caller-level import helpers
//!
//! The creation endpoint takes `{"importHierarchy": true, "data": {...}}`.
//! The helpers here add the check the UI performs before sending: a sheet
//! that yields no narratives is an error for the caller, never for the
//! parser.

use crate::builder::{NctParser, ParseOutcome};
use crate::config::ParserConfig;
use crate::csv::{parse_csv, read_csv_file};
use crate::error::{ImportError, ImportResult};
use crate::grid::Row;
use crate::types::ParsedNctData;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Request body for the hierarchy creation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPayload {
    pub import_hierarchy: bool,
    pub data: ParsedNctData,
}

impl ImportPayload {
    /// Wrap parsed data for import
    #[inline]
    #[must_use]
    pub fn new(data: ParsedNctData) -> Self {
        Self {
            import_hierarchy: true,
            data,
        }
    }

    /// Encode as JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> ImportResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_pretty(&self) -> ImportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse a grid, failing when no narrative was found
///
/// # Errors
/// Returns [`ImportError::NoNarratives`] for a grid with no narratives
pub fn import_grid(rows: &[Row], config: &ParserConfig) -> ImportResult<ParseOutcome> {
    let outcome = NctParser::new(config.clone()).parse(rows);
    if outcome.data.is_empty() {
        tracing::info!(rows = rows.len(), "no narratives found in grid");
        return Err(ImportError::NoNarratives);
    }
    tracing::info!(summary = %outcome.data.summary(), "imported grid");
    Ok(outcome)
}

/// Tokenize and import CSV text
///
/// # Errors
/// Returns [`ImportError::NoNarratives`] for a sheet with no narratives
pub fn import_csv(text: &str, config: &ParserConfig) -> ImportResult<ParseOutcome> {
    import_grid(&parse_csv(text), config)
}

/// Read, tokenize and import a CSV file
///
/// # Errors
/// Returns error if the file cannot be read or yields no narratives
pub fn import_csv_file(path: impl AsRef<Path>, config: &ParserConfig) -> ImportResult<ParseOutcome> {
    let grid = read_csv_file(path)?;
    import_grid(&grid, config)
}
