//! NCT Core - planning sheet hierarchy parser
//!
//! Rebuilds the four-level planning hierarchy from a spreadsheet grid:
//! - Objectives (free text under the `O` marker)
//! - Narratives, each with a Key Result and numeric target
//! - Commitments, linked to narratives by name
//! - Tasks, linked to commitments by name
//!
//! # Architecture
//!
//! ```text
//! CSV text ─→ csv::parse_csv ─┐
//!                             ├─→ Grid ─→ NctParser ─→ ParsedNctData ─→ ImportPayload
//! Sheets values ──────────────┘            │
//!                                          └─→ Diagnostics (skipped rows)
//! ```
//!
//! The parser never fails on malformed sheets; it degrades to empty output.
//!
//! # Example
//!
//! ```rust
//! use nct_core::{parse_csv, parse_nct_rows};
//!
//! let grid = parse_csv("Narratives\nName,KR\nSignups,2000 users");
//! let data = parse_nct_rows(&grid, Some("Q2 2026"));
//!
//! assert_eq!(data.narratives[0].target, 2000.0);
//! assert_eq!(data.quarter, "Q2 2026");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod builder;
pub mod config;
pub mod csv;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod header;
pub mod kr;
pub mod payload;
pub mod section;
pub mod types;

// Re-exports for convenience
pub use builder::{parse_nct_rows, parse_nct_rows_with_diagnostics, NctParser, ParseOutcome};
pub use config::{ParserConfig, DEFAULT_QUARTER};
pub use csv::{parse_csv, parse_csv_line, read_csv_file};
pub use diagnostics::{Diagnostics, SkipReason, SkippedRow};
pub use error::{ImportError, ImportResult};
pub use grid::{grid_from, Grid, Row};
pub use header::{col_index, find_header_row};
pub use kr::parse_kr_number;
pub use payload::{import_csv, import_csv_file, import_grid, ImportPayload};
pub use section::{find_section_index, Section};
pub use types::{NctSummary, ParsedCommitment, ParsedNarrative, ParsedNctData, ParsedTask};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with NCT Core
    pub use crate::{
        Grid, ImportPayload, NctParser, ParseOutcome, ParsedCommitment, ParsedNarrative,
        ParsedNctData, ParsedTask, ParserConfig, Row,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
