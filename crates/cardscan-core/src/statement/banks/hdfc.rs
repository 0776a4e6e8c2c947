//! HDFC MoneyBack statement layout.

use crate::models::statement::Bank;
use crate::pdf::{Document, Table};

use super::super::table::{cell, column_index, find_header_row, is_date_cell};
use super::super::{Extraction, Result, StatementExtractor};

const DATE: &str = "Date";
const DESCRIPTION: &str = "Transaction Description";
const AMOUNT: &str = "Amount (inRs.)";

/// HDFC statements print a bordered transaction table headed by
/// "Transaction Description" / "Amount (inRs.)" columns. Tables that lost
/// their header during recovery still follow the same Date / Description /
/// Amount column order.
pub struct HdfcExtractor;

impl StatementExtractor for HdfcExtractor {
    fn bank(&self) -> Bank {
        Bank::Hdfc
    }

    fn extract(&self, doc: &Document) -> Result<Extraction> {
        let mut out = Extraction::default();

        for page in &doc.pages {
            for table in &page.tables {
                match find_header_row(table, &[DESCRIPTION, AMOUNT]) {
                    Some(header) => extract_named(table, header, &mut out)?,
                    None => extract_positional(table, &mut out),
                }
            }
        }

        Ok(out)
    }
}

/// Slice the three relevant columns by header name; rows with any missing
/// cell are dropped.
fn extract_named(table: &Table, header: usize, out: &mut Extraction) -> Result<()> {
    let head = &table.rows[header];
    let date_col = column_index(head, DATE)?;
    let desc_col = column_index(head, DESCRIPTION)?;
    let amount_col = column_index(head, AMOUNT)?;

    for row in &table.rows[header + 1..] {
        let (Some(date), Some(desc), Some(amount)) = (
            cell(row, date_col),
            cell(row, desc_col),
            cell(row, amount_col),
        ) else {
            out.skipped_rows += 1;
            continue;
        };

        if !is_date_cell(Some(date)) {
            out.skipped_rows += 1;
            continue;
        }

        out.push_row(date, desc, Some(amount));
    }

    Ok(())
}

/// Header-less fallback: fixed Date / Description / Amount columns with a
/// strict date check on the first cell.
fn extract_positional(table: &Table, out: &mut Extraction) {
    for row in &table.rows {
        if row.len() < 3 {
            continue;
        }

        let date = cell(row, 0);
        if !is_date_cell(date) {
            continue;
        }

        let (Some(date), Some(desc)) = (date, cell(row, 1)) else {
            out.skipped_rows += 1;
            continue;
        };

        // stray header remnant glued onto a data table
        if desc.contains(DESCRIPTION) {
            continue;
        }

        out.push_row(date, desc, cell(row, 2));
    }
}
