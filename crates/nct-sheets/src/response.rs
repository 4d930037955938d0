//! Sheets API response decoding
//!
//! Turns the JSON bodies of the metadata and values endpoints into sheet
//! names and grids. Network I/O stays with the caller.

use crate::error::{SheetsError, SheetsResult};
use nct_core::{Grid, Row};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Metadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    #[serde(default)]
    sheet_id: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Title of the tab with `gid`, falling back to the first tab
///
/// # Errors
/// Returns error for malformed JSON or a spreadsheet without tabs
pub fn resolve_sheet_name(metadata_json: &str, gid: u64) -> SheetsResult<String> {
    let metadata: Metadata = serde_json::from_str(metadata_json)?;
    let title = metadata
        .sheets
        .iter()
        .find(|s| s.properties.sheet_id == gid)
        .or_else(|| metadata.sheets.first())
        .map(|s| s.properties.title.clone())
        .ok_or(SheetsError::NoSheets)?;

    tracing::debug!(gid, %title, "resolved sheet name");
    Ok(title)
}

/// Grid from a values response
///
/// Missing `values` decodes to an empty grid. Non-string cells are
/// stringified; nulls become blank cells.
///
/// # Errors
/// Returns error for malformed JSON
pub fn grid_from_values(values_json: &str) -> SheetsResult<Grid> {
    let range: ValueRange = serde_json::from_str(values_json)?;
    let grid: Grid = range
        .values
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect::<Row>())
        .collect();
    tracing::debug!(rows = grid.len(), "decoded sheet values");
    Ok(grid)
}

/// Grid from a values response, requiring at least two rows
///
/// # Errors
/// Returns [`SheetsError::NoDataRows`] for a sheet with fewer than two rows
pub fn data_grid_from_values(values_json: &str) -> SheetsResult<Grid> {
    let grid = grid_from_values(values_json)?;
    if grid.len() < 2 {
        return Err(SheetsError::NoDataRows);
    }
    Ok(grid)
}

/// Error from an API error body
///
/// Bodies that cannot be decoded read as `Unknown error`.
#[must_use]
pub fn api_error(body: &str) -> SheetsError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .unwrap_or_else(|| "Unknown error".to_string());
    tracing::warn!(%message, "sheets api returned an error");
    SheetsError::api(message)
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
