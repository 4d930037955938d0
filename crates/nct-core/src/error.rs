//! Error types for NCT import
//!
//! The grid parser itself never fails. Errors only come from the edges:
//! - reading CSV files from disk
//! - loading parser configuration
//! - encoding the import payload
//! - the caller-level "nothing to import" check

use std::path::PathBuf;

/// Errors raised around the hierarchy parser
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be decoded
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Payload encoding failed
    #[error("payload encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The grid parsed, but no narrative survived
    #[error("no narratives found")]
    NoNarratives,
}

impl ImportError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for import operations
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_narratives_display() {
        assert_eq!(ImportError::NoNarratives.to_string(), "no narratives found");
    }

    #[test]
    fn io_error_mentions_path() {
        let err = ImportError::io_error(
            "plan.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("plan.csv"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn config_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("quarter = ").unwrap_err();
        let err: ImportError = toml_err.into();
        assert!(matches!(err, ImportError::Config(_)));
    }
}
