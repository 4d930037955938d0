//! Error types for Google Sheets handling

/// Errors decoding sheet URLs and Sheets API responses
#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    /// URL has no `/spreadsheets/d/<id>` segment
    #[error("could not parse spreadsheet id from url: {0}")]
    InvalidUrl(String),

    /// Response body was not the expected JSON
    #[error("invalid sheets response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// API returned an error body
    #[error("sheets api error: {message}")]
    Api { message: String },

    /// Sheets API is disabled for the key
    #[error("google sheets api is not enabled for this api key: {message}")]
    ApiNotEnabled { message: String },

    /// Metadata listed no sheets
    #[error("no sheets found in the spreadsheet")]
    NoSheets,

    /// Sheet holds fewer than two rows
    #[error("sheet has no data rows")]
    NoDataRows,

    /// Flat table held no row with both a goal and a metric
    #[error("no NCTs found in the sheet")]
    NoNcts,

    /// Grid parsed but could not be imported
    #[error("import failed: {0}")]
    Import(#[from] nct_core::ImportError),
}

impl SheetsError {
    /// Classify an API error message
    pub fn api(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("not enabled") || message.contains("API") {
            Self::ApiNotEnabled { message }
        } else {
            Self::Api { message }
        }
    }
}

/// Result type alias for sheets operations
pub type SheetsResult<T> = Result<T, SheetsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_classification() {
        assert!(matches!(
            SheetsError::api("Google Sheets API has not been used in project 123"),
            SheetsError::ApiNotEnabled { .. }
        ));
        assert!(matches!(
            SheetsError::api("Requested entity was not found."),
            SheetsError::Api { .. }
        ));
    }

    #[test]
    fn display() {
        assert_eq!(SheetsError::NoDataRows.to_string(), "sheet has no data rows");
        assert_eq!(SheetsError::NoNcts.to_string(), "no NCTs found in the sheet");
        assert_eq!(
            SheetsError::InvalidUrl("https://example.com".to_string()).to_string(),
            "could not parse spreadsheet id from url: https://example.com"
        );
    }
}
