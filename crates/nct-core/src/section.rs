//! Section locator
//!
//! A planning sheet is one flat table split into sections by marker rows:
//! `O` (objectives), `Narratives`, `Commitments` and `Tasks`.

use crate::grid::Row;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four sections of a planning sheet, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Objectives,
    Narratives,
    Commitments,
    Tasks,
}

impl Section {
    /// All sections in scan order
    pub const ALL: [Section; 4] = [
        Section::Objectives,
        Section::Narratives,
        Section::Commitments,
        Section::Tasks,
    ];

    /// Marker cell text that opens this section
    #[inline]
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Objectives => "O",
            Self::Narratives => "Narratives",
            Self::Commitments => "Commitments",
            Self::Tasks => "Tasks",
        }
    }

    /// Sections scanned after this one
    #[must_use]
    pub fn later(self) -> &'static [Section] {
        let pos = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        &Self::ALL[pos + 1..]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Index of the first row holding a cell equal to `marker`
///
/// Comparison trims the cell and ignores case. `None` is an ordinary
/// result: every section is optional.
#[must_use]
pub fn find_section_index(rows: &[Row], marker: &str) -> Option<usize> {
    let marker = marker.to_lowercase();
    rows.iter()
        .position(|row| row.iter().any(|c| c.trim().to_lowercase() == marker))
}

/// Marker row positions for one grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionMap {
    pub objectives: Option<usize>,
    pub narratives: Option<usize>,
    pub commitments: Option<usize>,
    pub tasks: Option<usize>,
}

impl SectionMap {
    /// Locate every marker in the grid
    #[must_use]
    pub fn locate(rows: &[Row]) -> Self {
        let map = Self {
            objectives: find_section_index(rows, Section::Objectives.marker()),
            narratives: find_section_index(rows, Section::Narratives.marker()),
            commitments: find_section_index(rows, Section::Commitments.marker()),
            tasks: find_section_index(rows, Section::Tasks.marker()),
        };
        tracing::debug!(?map, rows = rows.len(), "located section markers");
        map
    }

    /// Marker row for a section
    #[inline]
    #[must_use]
    pub fn get(&self, section: Section) -> Option<usize> {
        match section {
            Section::Objectives => self.objectives,
            Section::Narratives => self.narratives,
            Section::Commitments => self.commitments,
            Section::Tasks => self.tasks,
        }
    }

    /// Exclusive end row of a section's data
    ///
    /// The nearest marker of a later section below `start`, or `len`.
    /// Later-section markers sitting above `start` never bound the section,
    /// so a stray `Commitments` cell above `Narratives` does not empty the
    /// narrative list. Only the inline name check in the row scan can stop
    /// such a section early.
    #[must_use]
    pub fn end_of(&self, section: Section, start: usize, len: usize) -> usize {
        section
            .later()
            .iter()
            .filter_map(|s| self.get(*s))
            .filter(|idx| *idx > start)
            .min()
            .unwrap_or(len)
    }
}
