//! ICICI Coral statement layout.

use crate::models::statement::Bank;
use crate::pdf::Document;

use super::super::patterns::{DATE_LINE_PREFIX, ICICI_CORAL_LINE};
use super::super::{Extraction, Result, StatementExtractor};

/// Header phrase of the transaction section; lines carrying it are table
/// furniture, not records.
const HEADER_PHRASE: &str = "Transaction Details";

/// ICICI Coral statements list transactions as text lines: date, a
/// reference number, narration, an optional reward-points column, and the
/// amount with a CR suffix on credits.
pub struct IciciCoralExtractor;

impl StatementExtractor for IciciCoralExtractor {
    fn bank(&self) -> Bank {
        Bank::IciciCoral
    }

    fn extract(&self, doc: &Document) -> Result<Extraction> {
        let mut out = Extraction::default();

        for page in &doc.pages {
            for line in page.text.lines() {
                let line = line.trim();
                if line.contains(HEADER_PHRASE) {
                    continue;
                }

                match ICICI_CORAL_LINE.captures(line) {
                    Some(caps) => out.push_row(&caps[1], caps[2].trim(), Some(&caps[3])),
                    None if DATE_LINE_PREFIX.is_match(line) => out.skipped_rows += 1,
                    None => {}
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use crate::pdf::Page;

    use super::*;

    fn doc(text: &str) -> Document {
        Document::from_pages(vec![Page::with_text(text)])
    }

    #[test]
    fn test_extracts_debits_and_credits() {
        let text = "ICICI Bank Coral Credit Card\n\
                    02/01/2024 7645123001 GROCERY MART GURGAON 1,250.00\n\
                    05/01/2024 7645123009 PAYMENT RECEIVED 12,000.00 CR\n\
                    Statement generated on 31/01/2024";

        let out = IciciCoralExtractor.extract(&doc(text)).unwrap();
        assert_eq!(out.transactions.len(), 2);
        assert_eq!(out.transactions[0].date, "02/01/2024");
        assert_eq!(
            out.transactions[0].amount,
            Decimal::from_str("1250.00").unwrap()
        );
        assert_eq!(
            out.transactions[1].amount,
            Decimal::from_str("-12000.00").unwrap()
        );
    }

    #[test]
    fn test_header_line_is_excluded() {
        let text = "01/01/2024 SerNo Transaction Details Reward 100.00";
        let out = IciciCoralExtractor.extract(&doc(text)).unwrap();
        assert!(out.transactions.is_empty());
    }

    #[test]
    fn test_unmatched_date_line_counts_as_skipped() {
        let text = "03/01/2024 incomplete line without amount";
        let out = IciciCoralExtractor.extract(&doc(text)).unwrap();
        assert!(out.transactions.is_empty());
        assert_eq!(out.skipped_rows, 1);
    }
}
