//! Hierarchy builder
//!
//! Four linear scans over the grid, in section order:
//!
//! ```text
//! O            → objectives: one string per non-blank row
//! Narratives   → narratives, target taken from the KR column
//! Commitments  → appended to the current narrative
//! Tasks        → appended to the current commitment, one per task column
//! ```
//!
//! Sheets carry no identifiers, so children find their parent by
//! case-insensitive name. A row whose link cell is blank inherits the parent
//! of the row above it. A link naming no known parent also keeps the
//! previous parent. Rows with no parent at all are dropped and reported in
//! [`Diagnostics`].

use crate::config::ParserConfig;
use crate::diagnostics::{Diagnostics, SkipReason};
use crate::grid::{cell, Row};
use crate::header::{col_index, find_header_row_within, has_columns};
use crate::kr::kr_target;
use crate::section::{Section, SectionMap};
use crate::types::{ParsedCommitment, ParsedNarrative, ParsedNctData, ParsedTask};
use once_cell::sync::Lazy;
use regex::Regex;

/// Header cells holding task text: `Task 1`, `task2`, ...
static TASK_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^task\s*[0-9]").expect("task column pattern is valid"));

/// Done-column values that mark a row's tasks as complete
const DONE_VALUES: [&str; 4] = ["true", "yes", "1", "x"];

/// Parsed hierarchy plus the rows that did not make it in
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub data: ParsedNctData,
    pub diagnostics: Diagnostics,
}

/// Planning-sheet parser
///
/// Stateless between calls; one parser can be reused for any number of grids.
#[derive(Debug, Clone, Default)]
pub struct NctParser {
    config: ParserConfig,
}

impl NctParser {
    /// Create parser with configuration
    #[inline]
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parser configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a grid into the NCT hierarchy
    ///
    /// Never fails: missing sections and unplaceable rows degrade to empty
    /// output and diagnostics.
    #[must_use]
    pub fn parse(&self, rows: &[Row]) -> ParseOutcome {
        let mut scan = Scan {
            rows,
            config: &self.config,
            sections: SectionMap::locate(rows),
            diagnostics: Diagnostics::default(),
        };

        let objectives = scan.objectives();
        let mut narratives = scan.narratives();
        scan.commitments(&mut narratives);
        scan.tasks(&mut narratives);

        let data = ParsedNctData {
            objectives,
            narratives,
            quarter: self.config.default_quarter.clone(),
        };
        tracing::debug!(
            summary = %data.summary(),
            skipped = scan.diagnostics.len(),
            "parsed nct grid"
        );
        ParseOutcome {
            data,
            diagnostics: scan.diagnostics,
        }
    }
}

/// Parse a grid, stamping it with `quarter` or the default quarter
#[must_use]
pub fn parse_nct_rows(rows: &[Row], quarter: Option<&str>) -> ParsedNctData {
    let mut config = ParserConfig::default();
    if let Some(quarter) = quarter {
        config.default_quarter = quarter.to_string();
    }
    NctParser::new(config).parse(rows).data
}

/// Parse a grid and keep the skipped-row report
#[must_use]
pub fn parse_nct_rows_with_diagnostics(rows: &[Row], config: &ParserConfig) -> ParseOutcome {
    NctParser::new(config.clone()).parse(rows)
}

/// State for one parse call
struct Scan<'a> {
    rows: &'a [Row],
    config: &'a ParserConfig,
    sections: SectionMap,
    diagnostics: Diagnostics,
}

impl<'a> Scan<'a> {
    /// Marker row and header row for a section, if both exist
    fn header<F>(&mut self, section: Section, is_header: F) -> Option<(usize, usize)>
    where
        F: FnMut(&Row) -> bool,
    {
        let marker = self.sections.get(section)?;
        let found = find_header_row_within(
            self.rows,
            marker + 1,
            self.config.header_lookahead,
            is_header,
        );
        match found {
            Some(header) => {
                tracing::debug!(%section, marker, header, "found section header");
                Some((marker, header))
            }
            None => {
                tracing::warn!(%section, marker, "section marker without a header row");
                self.diagnostics.push(marker, section, SkipReason::MissingHeader);
                None
            }
        }
    }

    /// Data rows of a section with their grid indices
    fn data_rows(
        &self,
        section: Section,
        marker: usize,
        header: usize,
    ) -> impl Iterator<Item = (usize, &'a Row)> {
        let rows = self.rows;
        let end = self.sections.end_of(section, marker, rows.len());
        rows.iter()
            .enumerate()
            .take(end)
            .skip(header + 1)
    }

    fn objectives(&self) -> Vec<String> {
        let rows = self.rows;
        let Some(start) = self.sections.objectives else {
            return Vec::new();
        };
        let end = self.sections.end_of(Section::Objectives, start, rows.len());

        let objectives: Vec<String> = rows[start + 1..end]
            .iter()
            .filter_map(|row| {
                let text = row
                    .iter()
                    .filter(|c| !c.trim().is_empty())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                let text = text.trim();
                (!text.is_empty() && !text.eq_ignore_ascii_case("o")).then(|| text.to_string())
            })
            .collect();

        tracing::debug!(count = objectives.len(), "parsed objectives");
        objectives
    }

    fn narratives(&mut self) -> Vec<ParsedNarrative> {
        let Some((marker, header)) =
            self.header(Section::Narratives, |row| has_columns(row, &["name"]))
        else {
            return Vec::new();
        };
        let rows = self.rows;
        let hdr = &rows[header];
        let name_i = col_index(hdr, &["name"]);
        let desc_i = col_index(hdr, &["description"]);
        let kr_i = col_index(hdr, &["kr"]);

        let mut narratives: Vec<ParsedNarrative> = Vec::new();
        for (_, row) in self.data_rows(Section::Narratives, marker, header) {
            let name = cell(row, name_i);
            if name.is_empty() {
                continue;
            }
            if is_marker_name(name, &[Section::Commitments, Section::Tasks]) {
                break;
            }

            let kr = cell(row, kr_i);
            narratives.push(ParsedNarrative {
                name: name.to_string(),
                description: cell(row, desc_i).to_string(),
                kr: kr.to_string(),
                target: kr_target(kr),
                metric: (if kr.is_empty() { name } else { kr }).to_string(),
                sort_order: narratives.len(),
                commitments: Vec::new(),
            });
        }

        tracing::debug!(count = narratives.len(), "parsed narratives");
        narratives
    }

    fn commitments(&mut self, narratives: &mut [ParsedNarrative]) {
        let Some((marker, header)) =
            self.header(Section::Commitments, |row| has_columns(row, &["name"]))
        else {
            return;
        };
        let rows = self.rows;
        let hdr = &rows[header];
        let narr_i = col_index(hdr, &["narrative"]);
        let name_i = col_index(hdr, &["name"]);
        let type_i = col_index(hdr, &["type"]);
        let desc_i = col_index(hdr, &["description"]);
        let dri_i = col_index(hdr, &["dri"]);

        let mut current: Option<usize> = None;
        let mut linked = 0usize;
        let rows: Vec<(usize, &Row)> = self
            .data_rows(Section::Commitments, marker, header)
            .collect();

        for (i, row) in rows {
            let name = cell(row, name_i);
            if name.is_empty() {
                continue;
            }
            if is_marker_name(name, &[Section::Tasks]) {
                break;
            }

            let link = cell(row, narr_i);
            if !link.is_empty() {
                match find_narrative(narratives, link) {
                    Some(idx) => current = Some(idx),
                    None => self.diagnostics.push(
                        i,
                        Section::Commitments,
                        SkipReason::UnknownParent {
                            name: link.to_string(),
                        },
                    ),
                }
            }

            let Some(idx) = current else {
                self.diagnostics.push(
                    i,
                    Section::Commitments,
                    SkipReason::OrphanCommitment {
                        name: name.to_string(),
                    },
                );
                continue;
            };

            let kind = match cell(row, type_i) {
                "" => self.config.default_commitment_type.clone(),
                kind => kind.to_string(),
            };
            // Sort order counts linked rows across the whole section.
            narratives[idx].commitments.push(ParsedCommitment {
                name: name.to_string(),
                kind,
                description: cell(row, desc_i).to_string(),
                dri: cell(row, dri_i).to_string(),
                sort_order: linked,
                tasks: Vec::new(),
            });
            linked += 1;
        }

        tracing::debug!(count = linked, "parsed commitments");
    }

    fn tasks(&mut self, narratives: &mut [ParsedNarrative]) {
        let Some((marker, header)) = self.header(Section::Tasks, |row| {
            row.iter().any(|c| TASK_COLUMN.is_match(c.trim()))
        }) else {
            return;
        };
        let rows = self.rows;
        let hdr = &rows[header];
        let commit_i = col_index(hdr, &["commitment"]);
        let done_i = col_index(hdr, &["done"]);
        let task_cols: Vec<usize> = hdr
            .iter()
            .enumerate()
            .filter(|(_, c)| TASK_COLUMN.is_match(c.trim()))
            .map(|(idx, _)| idx)
            .collect();

        let mut current: Option<(usize, usize)> = None;
        let mut added = 0usize;
        let rows: Vec<(usize, &Row)> = self.data_rows(Section::Tasks, marker, header).collect();

        for (i, row) in rows {
            let link = cell(row, commit_i);
            if !link.is_empty() {
                match find_commitment(narratives, link) {
                    Some(pos) => current = Some(pos),
                    None => self.diagnostics.push(
                        i,
                        Section::Tasks,
                        SkipReason::UnknownParent {
                            name: link.to_string(),
                        },
                    ),
                }
            }

            let texts: Vec<&str> = task_cols
                .iter()
                .map(|col| cell(row, Some(*col)))
                .filter(|text| !text.is_empty())
                .collect();

            let Some((n, c)) = current else {
                if !texts.is_empty() {
                    self.diagnostics.push(i, Section::Tasks, SkipReason::OrphanTasks);
                }
                continue;
            };

            let done = is_done(cell(row, done_i));
            let commitment = &mut narratives[n].commitments[c];
            // Sort order restarts on every row.
            for (sort_order, text) in texts.into_iter().enumerate() {
                commitment.tasks.push(ParsedTask {
                    text: text.to_string(),
                    is_done: done,
                    sort_order,
                });
                added += 1;
            }
        }

        tracing::debug!(count = added, columns = task_cols.len(), "parsed tasks");
    }
}

fn is_marker_name(name: &str, sections: &[Section]) -> bool {
    sections
        .iter()
        .any(|s| name.eq_ignore_ascii_case(s.marker()))
}

fn is_done(value: &str) -> bool {
    let value = value.to_lowercase();
    DONE_VALUES.contains(&value.as_str())
}

fn find_narrative(narratives: &[ParsedNarrative], name: &str) -> Option<usize> {
    let name = name.to_lowercase();
    narratives
        .iter()
        .position(|n| n.name.to_lowercase() == name)
}

/// First commitment with a matching name, narrative by narrative
fn find_commitment(narratives: &[ParsedNarrative], name: &str) -> Option<(usize, usize)> {
    let name = name.to_lowercase();
    narratives.iter().enumerate().find_map(|(n, narrative)| {
        narrative
            .commitments
            .iter()
            .position(|c| c.name.to_lowercase() == name)
            .map(|c| (n, c))
    })
}
