//! Row and grid primitives

/// One spreadsheet row; blank cells are empty strings
pub type Row = Vec<String>;

/// Spreadsheet rows in top-to-bottom order
pub type Grid = Vec<Row>;

/// Trimmed cell text, or `""` when the column is absent or out of range
#[inline]
#[must_use]
pub fn cell(row: &[String], idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i)).map_or("", |c| c.trim())
}

/// True when every cell in the row is blank
#[inline]
#[must_use]
pub fn is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// Build a grid from borrowed string slices
#[must_use]
pub fn grid_from<R, S>(rows: &[R]) -> Grid
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.iter()
        .map(|r| r.as_ref().iter().map(|c| c.as_ref().to_string()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_trims_and_defaults() {
        let row = vec!["  a  ".to_string(), "b".to_string()];
        assert_eq!(cell(&row, Some(0)), "a");
        assert_eq!(cell(&row, Some(1)), "b");
        assert_eq!(cell(&row, Some(5)), "");
        assert_eq!(cell(&row, None), "");
    }

    #[test]
    fn blank_rows() {
        assert!(is_blank(&[]));
        assert!(is_blank(&["".to_string(), "   ".to_string()]));
        assert!(!is_blank(&["".to_string(), "x".to_string()]));
    }

    #[test]
    fn grid_from_slices() {
        let grid = grid_from(&[vec!["a", "b"], vec!["c"]]);
        assert_eq!(grid, vec![vec!["a", "b"], vec!["c"]]);
    }
}
