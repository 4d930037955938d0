//! Header resolver
//!
//! Finds the header row of a section and maps column names to positions.
//! Matching is case-insensitive and by substring, so `"Task Description"`
//! answers to `"description"`.

use crate::config::DEFAULT_HEADER_LOOKAHEAD;
use crate::grid::Row;

/// Header row within the default lookahead window after `start`
///
/// A row qualifies when every required substring is contained in at least
/// one of its trimmed, lowercased cells.
#[must_use]
pub fn find_header_row(rows: &[Row], start: usize, required: &[&str]) -> Option<usize> {
    find_header_row_within(rows, start, DEFAULT_HEADER_LOOKAHEAD, |row| {
        has_columns(row, required)
    })
}

/// First row in `start..start + window` accepted by `is_header`
#[must_use]
pub fn find_header_row_within<F>(
    rows: &[Row],
    start: usize,
    window: usize,
    mut is_header: F,
) -> Option<usize>
where
    F: FnMut(&Row) -> bool,
{
    let end = start.saturating_add(window).min(rows.len());
    (start..end).find(|&i| is_header(&rows[i]))
}

/// True when every required substring appears in some cell
#[must_use]
pub fn has_columns(row: &[String], required: &[&str]) -> bool {
    let lower: Vec<String> = row.iter().map(|c| c.trim().to_lowercase()).collect();
    required
        .iter()
        .all(|col| lower.iter().any(|c| c.contains(col)))
}

/// Position of the first header cell containing a candidate
///
/// Candidates are tried in priority order; the first candidate with any
/// matching cell wins. `None` means the column is absent.
#[must_use]
pub fn col_index(header: &[String], candidates: &[&str]) -> Option<usize> {
    let lower: Vec<String> = header.iter().map(|c| c.trim().to_lowercase()).collect();
    candidates
        .iter()
        .find_map(|cand| lower.iter().position(|c| c.contains(cand)))
}
