//! Axis My Zone statement layout.

use crate::models::statement::Bank;
use crate::pdf::Document;

use super::super::patterns::{AXIS_LINE_CATEGORY, AXIS_LINE_PAYMENT, DATE_LINE_PREFIX};
use super::super::table::{cell, is_date_cell};
use super::super::{Extraction, Result, StatementExtractor};

/// Axis statements come in two shapes: a four-column table (date,
/// narration, category, amount) and a flat text listing where payments
/// drop the category column. Tables are tried first; the text pass only
/// runs when the table pass found nothing.
pub struct AxisExtractor;

impl StatementExtractor for AxisExtractor {
    fn bank(&self) -> Bank {
        Bank::Axis
    }

    fn extract(&self, doc: &Document) -> Result<Extraction> {
        let mut out = Extraction::default();

        extract_tables(doc, &mut out);
        if out.transactions.is_empty() {
            extract_lines(doc, &mut out);
        }

        Ok(out)
    }
}

/// Fixed-position table path: date in column 0, narration in column 1,
/// amount in column 3 (column 2 is the spend category).
fn extract_tables(doc: &Document, out: &mut Extraction) {
    for page in &doc.pages {
        for table in &page.tables {
            for row in &table.rows {
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
    }
}

/// Text path: the category pattern first, then the payment pattern for
/// lines without a category column.
fn extract_lines(doc: &Document, out: &mut Extraction) {
    for page in &doc.pages {
        for line in page.text.lines() {
            let line = line.trim();

            let caps = AXIS_LINE_CATEGORY
                .captures(line)
                .or_else(|| AXIS_LINE_PAYMENT.captures(line));

            match caps {
                Some(caps) => out.push_row(&caps[1], caps[2].trim(), Some(&caps[3])),
                None if DATE_LINE_PREFIX.is_match(line) => out.skipped_rows += 1,
                None => {}
            }
        }
    }
}
