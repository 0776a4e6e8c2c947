//! Shared helpers for tabular statement layouts.

use crate::error::ExtractionError;
use crate::pdf::Table;

use super::patterns::DATE_STRICT;

/// Flatten a multi-line cell into single-line text.
pub(crate) fn flatten(cell: &str) -> String {
    cell.replace('\n', " ").trim().to_string()
}

/// Cell at a column index, if present and populated.
pub(crate) fn cell(row: &[Option<String>], index: usize) -> Option<&str> {
    row.get(index).and_then(|c| c.as_deref())
}

/// True when a cell holds a strict DD/MM/YYYY date.
pub(crate) fn is_date_cell(cell: Option<&str>) -> bool {
    cell.map(str::trim).is_some_and(|s| DATE_STRICT.is_match(s))
}

/// Index of the first row containing every given header literal.
pub(crate) fn find_header_row(table: &Table, names: &[&str]) -> Option<usize> {
    table.rows.iter().position(|row| {
        names.iter().all(|name| {
            row.iter()
                .flatten()
                .any(|cell| cell.trim() == *name)
        })
    })
}

/// Column index of a named header within a header row. Failing to find a
/// column that the header row promised is structural drift, not a row to
/// skip.
pub(crate) fn column_index(row: &[Option<String>], name: &str) -> Result<usize, ExtractionError> {
    row.iter()
        .position(|c| c.as_deref().map(str::trim) == Some(name))
        .ok_or_else(|| ExtractionError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows([
            ["Opening balance", "", ""],
            ["Date", "Transaction Description", "Amount (inRs.)"],
            ["01/01/2024", "COFFEE SHOP", "250.00"],
        ])
    }

    #[test]
    fn test_find_header_row() {
        let table = sample();
        assert_eq!(
            find_header_row(&table, &["Transaction Description", "Amount (inRs.)"]),
            Some(1)
        );
        assert_eq!(find_header_row(&table, &["No Such Column"]), None);
    }

    #[test]
    fn test_column_index() {
        let table = sample();
        let header = &table.rows[1];
        assert_eq!(column_index(header, "Date").unwrap(), 0);
        assert_eq!(column_index(header, "Amount (inRs.)").unwrap(), 2);
        assert!(matches!(
            column_index(header, "Missing"),
            Err(ExtractionError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_is_date_cell() {
        assert!(is_date_cell(Some("01/01/2024")));
        assert!(is_date_cell(Some(" 01/01/2024 ")));
        assert!(!is_date_cell(Some("Date")));
        assert!(!is_date_cell(None));
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten("COFFEE\nSHOP  "), "COFFEE SHOP");
    }
}
