//! Skipped-row diagnostics
//!
//! The parser drops rows it cannot place. These records say which rows and
//! why, without changing the parsed output.

use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a row contributed nothing to the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Section marker present but no header row within the lookahead
    MissingHeader,
    /// Commitment with no current narrative to attach to
    OrphanCommitment { name: String },
    /// Task row with no current commitment to attach to
    OrphanTasks,
    /// Link cell named no known parent; the previous parent was kept
    UnknownParent { name: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => f.write_str("no header row found"),
            Self::OrphanCommitment { name } => {
                write!(f, "commitment '{name}' has no narrative")
            }
            Self::OrphanTasks => f.write_str("tasks have no commitment"),
            Self::UnknownParent { name } => {
                write!(f, "unknown parent '{name}', kept previous")
            }
        }
    }
}

/// A row the parser skipped or could not link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Zero-based grid row
    pub row: usize,
    pub section: Section,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} ({}): {}", self.row + 1, self.section, self.reason)
    }
}

/// Ordered list of skipped rows for one parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    rows: Vec<SkippedRow>,
}

impl Diagnostics {
    /// Record a skipped row
    pub fn push(&mut self, row: usize, section: Section, reason: SkipReason) {
        tracing::trace!(row, %section, %reason, "row skipped");
        self.rows.push(SkippedRow {
            row,
            section,
            reason,
        });
    }

    /// All records in scan order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[SkippedRow] {
        &self.rows
    }

    /// Records for one section
    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &SkippedRow> {
        self.rows.iter().filter(move |r| r.section == section)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
