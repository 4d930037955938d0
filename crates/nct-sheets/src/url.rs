//! Spreadsheet references and Sheets v4 endpoints
//!
//! Accepts the URLs users copy from the browser:
//!
//! ```text
//! https://docs.google.com/spreadsheets/d/{ID}/edit#gid={GID}
//! https://docs.google.com/spreadsheets/d/{ID}/edit?gid={GID}
//! ```

use crate::error::{SheetsError, SheetsResult};
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;
use serde::{Deserialize, Serialize};

static SPREADSHEET_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/spreadsheets/d/([a-zA-Z0-9_-]+)").expect("spreadsheet id pattern is valid")
});

static GID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#?&]gid=([0-9]+)").expect("gid pattern is valid"));

/// Base of the Sheets v4 REST API
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// One tab of a spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRef {
    pub spreadsheet_id: String,
    /// Tab id; `0` is the first tab
    pub gid: u64,
}

impl SheetRef {
    /// Parse a browser URL
    ///
    /// # Errors
    /// Returns [`SheetsError::InvalidUrl`] when the URL has no spreadsheet id
    pub fn from_url(url: &str) -> SheetsResult<Self> {
        let spreadsheet_id = SPREADSHEET_ID
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| SheetsError::InvalidUrl(url.to_string()))?;
        let gid = GID
            .captures(url)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        tracing::debug!(%spreadsheet_id, gid, "parsed sheet url");
        Ok(Self {
            spreadsheet_id,
            gid,
        })
    }

    /// Endpoint listing sheet properties (ids and titles)
    #[must_use]
    pub fn metadata_url(&self, api_key: &str) -> String {
        format!(
            "{SHEETS_API_BASE}/{}?fields=sheets.properties&key={}",
            self.spreadsheet_id,
            encode(api_key)
        )
    }

    /// Endpoint returning every value of the named sheet
    #[must_use]
    pub fn values_url(&self, sheet_name: &str, api_key: &str) -> String {
        format!(
            "{SHEETS_API_BASE}/{}/values/{}?key={}",
            self.spreadsheet_id,
            encode(sheet_name),
            encode(api_key)
        )
    }
}

fn encode(text: &str) -> String {
    utf8_percent_encode(text, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_url_with_hash_gid() {
        let sheet =
            SheetRef::from_url("https://docs.google.com/spreadsheets/d/1AbC_d-9/edit#gid=42")
                .unwrap();
        assert_eq!(sheet.spreadsheet_id, "1AbC_d-9");
        assert_eq!(sheet.gid, 42);
    }

    #[test]
    fn query_gid_and_default() {
        let sheet =
            SheetRef::from_url("https://docs.google.com/spreadsheets/d/xyz/edit?usp=sharing&gid=7")
                .unwrap();
        assert_eq!(sheet.gid, 7);

        let sheet = SheetRef::from_url("https://docs.google.com/spreadsheets/d/xyz").unwrap();
        assert_eq!(sheet.gid, 0);
    }

    #[test]
    fn rejects_non_sheet_url() {
        let result = SheetRef::from_url("https://docs.google.com/document/d/abc/edit");
        assert!(matches!(result, Err(SheetsError::InvalidUrl(_))));
    }

    #[test]
    fn endpoint_urls() {
        let sheet = SheetRef {
            spreadsheet_id: "abc".to_string(),
            gid: 0,
        };
        assert_eq!(
            sheet.metadata_url("KEY1"),
            "https://sheets.googleapis.com/v4/spreadsheets/abc?fields=sheets.properties&key=KEY1"
        );
        assert_eq!(
            sheet.values_url("Q1 NCTs", "KEY1"),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/Q1%20NCTs?key=KEY1"
        );
    }
}
