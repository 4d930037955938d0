//! CSV tokenizer
//!
//! Splits exported CSV text into a [`Grid`]. Quoting follows the usual
//! spreadsheet export rules: `"` toggles a quoted field, `""` inside a quoted
//! field is a literal quote, and commas inside quotes do not split. Fields
//! are trimmed. Quoted newlines are not supported; every line is one row.

use crate::error::{ImportError, ImportResult};
use crate::grid::{Grid, Row};
use std::path::Path;

/// Tokenize one CSV line into trimmed cells
#[must_use]
pub fn parse_csv_line(line: &str) -> Row {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                result.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    result.push(current.trim().to_string());
    result
}

/// Tokenize CSV text into a grid, one row per line
///
/// Lines end in `\n` or `\r\n`. Blank lines become single-cell blank rows so
/// row indices line up with the source file.
#[must_use]
pub fn parse_csv(text: &str) -> Grid {
    text.split('\n')
        .map(|line| parse_csv_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Read and tokenize a CSV file
///
/// # Errors
/// Returns error if the file cannot be read
pub fn read_csv_file(path: impl AsRef<Path>) -> ImportResult<Grid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ImportError::io_error(path, e))?;
    let grid = parse_csv(&text);
    tracing::debug!(path = %path.display(), rows = grid.len(), "tokenized csv file");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields() {
        assert_eq!(parse_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(parse_csv_line(" a , b ,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn quoted_comma_does_not_split() {
        assert_eq!(
            parse_csv_line(r#"Signups,"Grow, then retain",2000"#),
            vec!["Signups", "Grow, then retain", "2000"]
        );
    }

    #[test]
    fn escaped_quote() {
        assert_eq!(
            parse_csv_line(r#""Say ""hi""",x"#),
            vec![r#"Say "hi""#, "x"]
        );
    }

    #[test]
    fn empty_fields_kept() {
        assert_eq!(parse_csv_line("a,,c,"), vec!["a", "", "c", ""]);
        assert_eq!(parse_csv_line(""), vec![""]);
    }

    #[test]
    fn doubled_quote_outside_quotes_toggles_twice() {
        assert_eq!(parse_csv_line(r#"a""b"#), vec!["ab"]);
    }

    #[test]
    fn crlf_lines() {
        let grid = parse_csv("O\r\nGrow\r\n\r\nNarratives");
        assert_eq!(grid, vec![vec!["O"], vec!["Grow"], vec![""], vec!["Narratives"]]);
    }

    #[test]
    fn missing_file() {
        let result = read_csv_file("/no/such/plan.csv");
        assert!(matches!(result, Err(ImportError::Io { .. })));
    }
}
