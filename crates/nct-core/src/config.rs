//! Parser configuration
//!
//! Loaded from TOML, every field optional:
//!
//! ```toml
//! default_quarter = "Q2 2026"
//! header_lookahead = 5
//! default_commitment_type = "Quantitative"
//! ```

use crate::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Quarter label used when the caller supplies none
pub const DEFAULT_QUARTER: &str = "Q1 2026";

/// Rows searched after a section marker for its header row
pub const DEFAULT_HEADER_LOOKAHEAD: usize = 5;

/// Commitment type used when the type column is absent or blank
pub const DEFAULT_COMMITMENT_TYPE: &str = "Quantitative";

/// Hierarchy parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Quarter stamped on the parsed result
    pub default_quarter: String,
    /// Header search window after each section marker
    pub header_lookahead: usize,
    /// Fallback for commitments without a type
    pub default_commitment_type: String,
}

impl ParserConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With quarter label
    #[inline]
    #[must_use]
    pub fn with_quarter(mut self, quarter: impl Into<String>) -> Self {
        self.default_quarter = quarter.into();
        self
    }

    /// With header search window
    #[inline]
    #[must_use]
    pub fn with_header_lookahead(mut self, rows: usize) -> Self {
        self.header_lookahead = rows;
        self
    }

    /// With fallback commitment type
    #[inline]
    #[must_use]
    pub fn with_default_commitment_type(mut self, kind: impl Into<String>) -> Self {
        self.default_commitment_type = kind.into();
        self
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or a field has the wrong type
    pub fn from_toml_str(text: &str) -> ImportResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or decoded
    pub fn load(path: impl AsRef<Path>) -> ImportResult<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ImportError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), quarter = %config.default_quarter, "loaded parser config");
        Ok(config)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_quarter: DEFAULT_QUARTER.to_string(),
            header_lookahead: DEFAULT_HEADER_LOOKAHEAD,
            default_commitment_type: DEFAULT_COMMITMENT_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.default_quarter, "Q1 2026");
        assert_eq!(config.header_lookahead, 5);
        assert_eq!(config.default_commitment_type, "Quantitative");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ParserConfig::from_toml_str(r#"default_quarter = "Q3 2026""#).unwrap();
        assert_eq!(config.default_quarter, "Q3 2026");
        assert_eq!(config.header_lookahead, DEFAULT_HEADER_LOOKAHEAD);
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = ParserConfig::from_toml_str("header_lookahead = \"five\"");
        assert!(matches!(result, Err(ImportError::Config(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header_lookahead = 2").unwrap();
        writeln!(file, "default_commitment_type = \"Build-It\"").unwrap();

        let config = ParserConfig::load(file.path()).unwrap();
        assert_eq!(config.header_lookahead, 2);
        assert_eq!(config.default_commitment_type, "Build-It");
    }

    #[test]
    fn load_missing_file() {
        let result = ParserConfig::load("/definitely/not/here.toml");
        assert!(matches!(result, Err(ImportError::Io { .. })));
    }

    #[test]
    fn builders() {
        let config = ParserConfig::new()
            .with_quarter("Q4 2025")
            .with_header_lookahead(3)
            .with_default_commitment_type("Think-It");
        assert_eq!(config.default_quarter, "Q4 2025");
        assert_eq!(config.header_lookahead, 3);
        assert_eq!(config.default_commitment_type, "Think-It");
    }
}
