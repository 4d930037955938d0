//! NCT Sheets - Google Sheets input for the NCT parser
//!
//! Resolves a browser URL to a spreadsheet tab, builds the Sheets v4
//! endpoints, and decodes their responses into a grid for `nct-core`.
//!
//! ```text
//! URL → SheetRef → metadata_url ─(caller fetches)→ resolve_sheet_name
//!               → values_url ───(caller fetches)→ grid_from_values
//!                                   ├─ "Narratives" marker → NctParser
//!                                   └─ otherwise           → parse_flat_rows
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod flat;
pub mod response;
pub mod url;

pub use error::{SheetsError, SheetsResult};
pub use flat::{flat_target, parse_flat_rows, FlatColumns, FlatNct};
pub use response::{api_error, data_grid_from_values, grid_from_values, resolve_sheet_name};
pub use url::{SheetRef, SHEETS_API_BASE};

use nct_core::{find_section_index, import_grid, ParseOutcome, ParserConfig, Section};

/// What a sheet's values decoded to
#[derive(Debug, Clone, PartialEq)]
pub enum SheetImport {
    /// Sectioned planning sheet
    Hierarchy(ParseOutcome),
    /// One NCT per row
    Flat(Vec<FlatNct>),
}

/// Decode a values response and import it
///
/// A sheet with a `Narratives` marker is parsed as a hierarchy; any other
/// sheet is read as a flat table.
///
/// # Errors
/// Returns error for malformed JSON, fewer than two rows, a hierarchy with
/// no narratives, or a flat table with no usable rows
pub fn import_values(values_json: &str, config: &ParserConfig) -> SheetsResult<SheetImport> {
    let grid = data_grid_from_values(values_json)?;
    if find_section_index(&grid, Section::Narratives.marker()).is_some() {
        return Ok(SheetImport::Hierarchy(import_grid(&grid, config)?));
    }

    tracing::info!(rows = grid.len(), "no narratives marker, reading flat table");
    let ncts = parse_flat_rows(&grid, config);
    if ncts.is_empty() {
        return Err(SheetsError::NoNcts);
    }
    Ok(SheetImport::Flat(ncts))
}
