//! ICICI Amazon Pay statement layout.

use crate::models::statement::Bank;
use crate::pdf::Document;

use super::super::patterns::DATE_ANYWHERE;
use super::super::table::{cell, is_date_cell};
use super::super::{Extraction, Result, StatementExtractor};

const HEADER_PHRASE: &str = "Transaction Details";

/// ICICI Amazon Pay statements have an irregularly-bordered table that
/// only the text-alignment strategy recovers, and it comes apart two
/// ways: a five-column grid (date / ref / narration / points / amount)
/// or a collapsed three-column grid where the date is embedded in a
/// wider first cell.
pub struct IciciAmazonExtractor;

impl StatementExtractor for IciciAmazonExtractor {
    fn bank(&self) -> Bank {
        Bank::IciciAmazon
    }

    fn extract(&self, doc: &Document) -> Result<Extraction> {
        let mut out = Extraction::default();

        for page in &doc.pages {
            for table in &page.tables {
                for row in &table.rows {
                    if row.len() >= 5 {
                        extract_wide(row, &mut out);
                    } else if row.len() >= 3 {
                        extract_collapsed(row, &mut out);
                    }
                }
            }
        }

        Ok(out)
    }
}

/// Five-column layout: date / reference / narration / points / amount.
fn extract_wide(row: &[Option<String>], out: &mut Extraction) {
    let date = cell(row, 0);
    if !is_date_cell(date) {
        return;
    }
    let Some(date) = date else { return };

    let Some(desc) = cell(row, 2) else {
        out.skipped_rows += 1;
        return;
    };
    if desc.contains(HEADER_PHRASE) {
        return;
    }

    out.push_row(date, desc, cell(row, 4));
}

/// Collapsed three-column layout: the date is searched, not anchored,
/// because recovery often glues it to neighbouring text.
fn extract_collapsed(row: &[Option<String>], out: &mut Extraction) {
    let (Some(first), Some(desc), Some(amount)) = (cell(row, 0), cell(row, 1), cell(row, 2))
    else {
        return;
    };

    let Some(date) = DATE_ANYWHERE.find(first).map(|m| m.as_str().to_string()) else {
        return;
    };

    if desc.contains(HEADER_PHRASE) {
        return;
    }

    out.push_row(&date, desc, Some(amount));
}
