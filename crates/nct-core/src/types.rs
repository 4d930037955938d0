//! Parsed hierarchy types
//!
//! Plain values with no identity until a caller stores them. Serialized in
//! camelCase, the shape the creation endpoint accepts.

use serde::{Deserialize, Serialize};

/// A task line under a commitment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    pub text: String,
    pub is_done: bool,
    /// Column position among the row's non-empty task cells
    pub sort_order: usize,
}

/// A commitment under a narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommitment {
    pub name: String,
    /// Commitment type, e.g. `Quantitative` or `Build-It`
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub dri: String,
    pub sort_order: usize,
    pub tasks: Vec<ParsedTask>,
}

/// A narrative with its key result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNarrative {
    pub name: String,
    pub description: String,
    /// Raw key result text
    pub kr: String,
    /// Number extracted from `kr`, `1` when none
    pub target: f64,
    /// `kr`, or `name` when `kr` is blank
    pub metric: String,
    pub sort_order: usize,
    pub commitments: Vec<ParsedCommitment>,
}

impl ParsedNarrative {
    /// Find a commitment by case-insensitive name
    #[must_use]
    pub fn commitment(&self, name: &str) -> Option<&ParsedCommitment> {
        let name = name.to_lowercase();
        self.commitments
            .iter()
            .find(|c| c.name.to_lowercase() == name)
    }
}

/// Root of a parsed planning sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNctData {
    pub objectives: Vec<String>,
    pub narratives: Vec<ParsedNarrative>,
    pub quarter: String,
}

impl ParsedNctData {
    /// Empty result for a quarter
    #[inline]
    #[must_use]
    pub fn empty(quarter: impl Into<String>) -> Self {
        Self {
            objectives: Vec::new(),
            narratives: Vec::new(),
            quarter: quarter.into(),
        }
    }

    /// True when no narrative was parsed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.narratives.is_empty()
    }

    /// Find a narrative by case-insensitive name
    #[must_use]
    pub fn narrative(&self, name: &str) -> Option<&ParsedNarrative> {
        let name = name.to_lowercase();
        self.narratives
            .iter()
            .find(|n| n.name.to_lowercase() == name)
    }

    /// Counts across the whole hierarchy
    #[must_use]
    pub fn summary(&self) -> NctSummary {
        let commitments = self.narratives.iter().flat_map(|n| &n.commitments);
        let mut summary = NctSummary {
            objectives: self.objectives.len(),
            narratives: self.narratives.len(),
            ..NctSummary::default()
        };
        for commitment in commitments {
            summary.commitments += 1;
            summary.tasks += commitment.tasks.len();
            summary.done_tasks += commitment.tasks.iter().filter(|t| t.is_done).count();
        }
        summary
    }
}

/// Record counts for a parsed sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NctSummary {
    pub objectives: usize,
    pub narratives: usize,
    pub commitments: usize,
    pub tasks: usize,
    pub done_tasks: usize,
}

impl std::fmt::Display for NctSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} narratives, {} commitments, {}/{} tasks done",
            self.narratives, self.commitments, self.done_tasks, self.tasks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedNctData {
        ParsedNctData {
            objectives: vec!["Grow".to_string()],
            narratives: vec![ParsedNarrative {
                name: "Signups".to_string(),
                description: String::new(),
                kr: "2000 users".to_string(),
                target: 2000.0,
                metric: "2000 users".to_string(),
                sort_order: 0,
                commitments: vec![ParsedCommitment {
                    name: "Referral".to_string(),
                    kind: "Build-It".to_string(),
                    description: String::new(),
                    dri: "Dana".to_string(),
                    sort_order: 0,
                    tasks: vec![
                        ParsedTask { text: "Banner".to_string(), is_done: true, sort_order: 0 },
                        ParsedTask { text: "Copy".to_string(), is_done: false, sort_order: 1 },
                    ],
                }],
            }],
            quarter: "Q1 2026".to_string(),
        }
    }

    #[test]
    fn camel_case_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let commitment = &json["narratives"][0]["commitments"][0];
        assert_eq!(commitment["type"], "Build-It");
        assert_eq!(commitment["sortOrder"], 0);
        assert_eq!(commitment["tasks"][0]["isDone"], true);
        assert_eq!(json["quarter"], "Q1 2026");
    }

    #[test]
    fn summary_counts() {
        let summary = sample().summary();
        assert_eq!(summary.narratives, 1);
        assert_eq!(summary.commitments, 1);
        assert_eq!(summary.tasks, 2);
        assert_eq!(summary.done_tasks, 1);
        assert_eq!(summary.to_string(), "1 narratives, 1 commitments, 1/2 tasks done");
    }

    #[test]
    fn lookups_ignore_case() {
        let data = sample();
        let narrative = data.narrative("SIGNUPS").unwrap();
        assert!(narrative.commitment("referral").is_some());
        assert!(data.narrative("churn").is_none());
    }

    #[test]
    fn empty_result() {
        let data = ParsedNctData::empty("Q2 2026");
        assert!(data.is_empty());
        assert_eq!(data.summary(), NctSummary::default());
    }
}
