//! Flat NCT tables
//!
//! Sheets without a `Narratives` marker hold one NCT per row under a header
//! in the first row:
//!
//! ```text
//! Goal            | Metric  | Target | Quarter
//! Grow signups    | signups | 2000   | Q2 2026
//! ```
//!
//! Columns are matched loosely; unmatched ones fall back to positions 0-3.

use nct_core::grid::cell;
use nct_core::{ParserConfig, Row};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("leading number pattern is valid")
});

/// One NCT read from a flat table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNct {
    pub goal: String,
    pub metric: String,
    pub target: f64,
    pub quarter: String,
}

/// Column positions of a flat table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatColumns {
    pub goal: usize,
    pub metric: usize,
    pub target: usize,
    pub quarter: usize,
}

impl Default for FlatColumns {
    fn default() -> Self {
        Self {
            goal: 0,
            metric: 1,
            target: 2,
            quarter: 3,
        }
    }
}

impl FlatColumns {
    /// Resolve columns from a header row
    ///
    /// Header cells are lowercased and stripped of everything but `a-z`
    /// before the substring match, so `Goal / Objective` and `KR #` match.
    #[must_use]
    pub fn from_header(header: &Row) -> Self {
        let keys: Vec<String> = header.iter().map(|c| header_key(c)).collect();
        let find = |needles: &[&str], fallback: usize| {
            keys.iter()
                .position(|k| needles.iter().any(|n| k.contains(n)))
                .unwrap_or(fallback)
        };
        let fallback = Self::default();

        Self {
            goal: find(&["goal", "description", "name"], fallback.goal),
            metric: find(&["metric", "kr"], fallback.metric),
            target: find(&["target"], fallback.target),
            quarter: find(&["quarter"], fallback.quarter),
        }
    }
}

/// Parse a flat table
///
/// Rows lacking a goal or a metric are skipped. A blank quarter takes the
/// configured default.
#[must_use]
pub fn parse_flat_rows(rows: &[Row], config: &ParserConfig) -> Vec<FlatNct> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };
    let cols = FlatColumns::from_header(header);
    tracing::debug!(?cols, "resolved flat table columns");

    let ncts: Vec<FlatNct> = body
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let goal = cell(row, Some(cols.goal));
            let metric = cell(row, Some(cols.metric));
            if goal.is_empty() || metric.is_empty() {
                tracing::trace!(row = i + 1, "flat row without goal or metric");
                return None;
            }
            let quarter = match cell(row, Some(cols.quarter)) {
                "" => config.default_quarter.clone(),
                quarter => quarter.to_string(),
            };
            Some(FlatNct {
                goal: goal.to_string(),
                metric: metric.to_string(),
                target: flat_target(cell(row, Some(cols.target))),
                quarter,
            })
        })
        .collect();

    tracing::debug!(count = ncts.len(), "parsed flat table");
    ncts
}

/// Target from the leading number of a cell
///
/// Missing, zero and non-finite values read as `1`.
#[must_use]
pub fn flat_target(text: &str) -> f64 {
    LEADING_NUMBER
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite() && v.abs() > 0.0)
        .unwrap_or(1.0)
}

fn header_key(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}
