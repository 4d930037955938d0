//! Testing utilities for the NCT workspace
//!
//! Grid fixtures and a small builder for laying out planning sheets.

#![allow(missing_docs)]

use nct_core::{grid_from, Grid, Row};

/// Build a row from string slices
pub fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| (*c).to_string()).collect()
}

/// Grid laid out section by section
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    rows: Grid,
}

impl SheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(row(cells));
        self
    }

    pub fn blank(self) -> Self {
        self.row(&[""])
    }

    pub fn objectives(mut self, lines: &[&str]) -> Self {
        self = self.row(&["O"]);
        for line in lines {
            self = self.row(&[*line]);
        }
        self
    }

    /// `Narratives` marker, `Name | Description | KR` header, one row per entry
    pub fn narratives(mut self, entries: &[(&str, &str, &str)]) -> Self {
        self = self.row(&["Narratives"]).row(&["Name", "Description", "KR"]);
        for &(name, description, kr) in entries {
            self = self.row(&[name, description, kr]);
        }
        self
    }

    /// `Commitments` marker, `Narrative | Name | Type | Description | DRI` header
    pub fn commitments(mut self, entries: &[[&str; 5]]) -> Self {
        self = self
            .row(&["Commitments"])
            .row(&["Narrative", "Name", "Type", "Description", "DRI"]);
        for entry in entries {
            self = self.row(entry);
        }
        self
    }

    /// `Tasks` marker, `Commitment | Task 1..n | Done` header
    ///
    /// Each entry is `(commitment, tasks, done)`; short task lists are padded.
    pub fn tasks(mut self, columns: usize, entries: &[(&str, &[&str], &str)]) -> Self {
        let mut header = vec!["Commitment".to_string()];
        header.extend((1..=columns).map(|n| format!("Task {n}")));
        header.push("Done".to_string());
        self.rows.push(row(&["Tasks"]));
        self.rows.push(header);

        for &(commitment, tasks, done) in entries {
            let mut cells = vec![commitment.to_string()];
            for idx in 0..columns {
                cells.push(tasks.get(idx).map_or_else(String::new, |t| (*t).to_string()));
            }
            cells.push(done.to_string());
            self.rows.push(cells);
        }
        self
    }

    pub fn build(self) -> Grid {
        self.rows
    }
}

/// The reference sheet: one of each record, fully linked
pub fn reference_grid() -> Grid {
    grid_from(&[
        vec!["O"],
        vec!["Grow to 2000 signups"],
        vec!["Narratives"],
        vec!["Name", "Description", "KR"],
        vec!["Signups", "Increase sign-ups", "2000 users"],
        vec!["Commitments"],
        vec!["Narrative", "Name", "Type", "Description", "DRI"],
        vec!["Signups", "Run referral campaign", "Build-It", "", "Dana"],
        vec!["Tasks"],
        vec!["Commitment", "Task 1", "Task 2", "Done"],
        vec!["Run referral campaign", "Design banner", "Write copy", "yes"],
    ])
}

/// A larger sheet with blank spacer rows, two narratives and sticky links
pub fn quarterly_plan_grid() -> Grid {
    SheetBuilder::new()
        .row(&["Growth plan", "", ""])
        .objectives(&["Double qualified pipeline", "Keep churn under 3%"])
        .blank()
        .narratives(&[
            ("Pipeline", "Inbound demand", "$1.5M ARR"),
            ("Retention", "Keep customers", "97%"),
            ("Brand", "Awareness", ""),
        ])
        .blank()
        .commitments(&[
            ["Pipeline", "Webinar series", "Launch-It", "Monthly webinars", "Ari"],
            ["", "Partner referrals", "", "", "Sam"],
            ["Retention", "Onboarding revamp", "Build-It", "", "Lee"],
            ["Unknown", "Stray commitment", "", "", ""],
        ])
        .tasks(
            3,
            &[
                ("Webinar series", &["Pick topics", "Book speakers", "Promote"], "x"),
                ("", &["Run first webinar"], ""),
                ("Onboarding revamp", &["Audit flow", "", "Ship v2"], "no"),
                ("Nonexistent", &["Lost task"], "yes"),
            ],
        )
        .build()
}
