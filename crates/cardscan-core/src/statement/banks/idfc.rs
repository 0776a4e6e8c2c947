//! IDFC First Bank statement layout.

use crate::models::statement::Bank;
use crate::pdf::{Document, Table};

use super::super::patterns::{DATE_LINE_PREFIX, IDFC_LINE};
use super::super::table::{cell, is_date_cell};
use super::super::{Extraction, Result, StatementExtractor};

/// Exact header of the IDFC transaction table; other tables on the page
/// (EMI schedules, reward summaries) are ignored.
const TABLE_HEADER: [&str; 4] = [
    "Transaction Date",
    "Transactional Details",
    "FX Transactions",
    "Amount ()",
];

/// Lines that look like transactions but belong to loan amortization and
/// charge breakdowns.
const EXCLUDED: [&str; 3] = ["Amortization", "IGST", "Interest charges"];

/// IDFC statements carry a four-column transaction table (the FX column
/// is skipped); older exports flatten to text lines instead. Tables are
/// tried first, the text pass only when they yield nothing.
pub struct IdfcExtractor;

impl StatementExtractor for IdfcExtractor {
    fn bank(&self) -> Bank {
        Bank::Idfc
    }

    fn extract(&self, doc: &Document) -> Result<Extraction> {
        let mut out = Extraction::default();

        for page in &doc.pages {
            for table in &page.tables {
                if is_transaction_table(table) {
                    extract_table(table, &mut out);
                }
            }
        }

        if out.transactions.is_empty() {
            extract_lines(doc, &mut out);
        }

        Ok(out)
    }
}

fn is_transaction_table(table: &Table) -> bool {
    let Some(first) = table.rows.first() else {
        return false;
    };
    first.len() == TABLE_HEADER.len()
        && first
            .iter()
            .zip(TABLE_HEADER)
            .all(|(cell, name)| cell.as_deref().map(str::trim) == Some(name))
}

/// Columns 0/1/3; column 2 (FX details) is skipped.
fn extract_table(table: &Table, out: &mut Extraction) {
    for row in &table.rows[1..] {
        if row.len() < 4 {
            continue;
        }

        let date = cell(row, 0);
        if !is_date_cell(date) {
            continue;
        }
        let Some(date) = date else { continue };

        let Some(amount) = cell(row, 3) else {
            out.skipped_rows += 1;
            continue;
        };

        let desc = cell(row, 1).unwrap_or_default();
        out.push_row(date, desc, Some(amount));
    }
}

fn extract_lines(doc: &Document, out: &mut Extraction) {
    for page in &doc.pages {
        for line in page.text.lines() {
            let line = line.trim();
            if EXCLUDED.iter().any(|marker| line.contains(marker)) {
                continue;
            }

            match IDFC_LINE.captures(line) {
                Some(caps) => out.push_row(&caps[1], caps[2].trim(), Some(&caps[3])),
                None if DATE_LINE_PREFIX.is_match(line) => out.skipped_rows += 1,
                None => {}
            }
        }
    }
}
