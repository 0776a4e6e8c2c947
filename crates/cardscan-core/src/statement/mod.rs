//! Statement parsing: bank classification, per-bank extraction, dispatch.

pub mod amount;
pub mod banks;
pub mod classifier;
mod dispatcher;
pub mod patterns;
mod table;

pub use classifier::{Classifier, ClassifierRule};
pub use dispatcher::parse_document;

use chrono::NaiveDate;

use crate::error::ExtractionError;
use crate::models::statement::{Bank, Transaction};
use crate::pdf::Document;

use amount::normalize;
use table::flatten;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Outcome of one extraction pass over one document.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Extracted transactions, in document order.
    pub transactions: Vec<Transaction>,

    /// Transaction-like rows dropped for a missing cell, bad date, or
    /// amount that normalized to zero.
    pub skipped_rows: usize,
}

impl Extraction {
    /// Record one candidate row. Rows whose amount normalizes to zero are
    /// waivers or noise and count as skipped instead.
    pub(crate) fn push_row(&mut self, date: &str, description: &str, amount: Option<&str>) {
        let amount = normalize(amount);
        if amount.is_zero() {
            self.skipped_rows += 1;
            return;
        }

        self.transactions.push(Transaction {
            date: date.trim().to_string(),
            description: flatten(description),
            amount,
        });
    }
}

/// Trait for per-bank statement extractors.
///
/// Extractors are total over well-formed documents: malformed rows and
/// lines are skipped and counted, never surfaced individually. The error
/// path exists for structural drift (a recognized table whose columns no
/// longer line up), which the dispatcher reports naming the bank.
pub trait StatementExtractor {
    /// The statement layout this extractor understands.
    fn bank(&self) -> Bank;

    /// Extract transactions from a parsed document.
    fn extract(&self, doc: &Document) -> Result<Extraction>;
}

/// Look up the extractor for a classified bank.
pub fn extractor_for(bank: Bank) -> Box<dyn StatementExtractor> {
    match bank {
        Bank::Hdfc => Box::new(banks::HdfcExtractor),
        Bank::IciciCoral => Box::new(banks::IciciCoralExtractor),
        Bank::IciciAmazon => Box::new(banks::IciciAmazonExtractor),
        Bank::Axis => Box::new(banks::AxisExtractor),
        Bank::Idfc => Box::new(banks::IdfcExtractor),
    }
}

/// Shared final pass over every extractor's output: drop zero-amount
/// records and records whose date is not a real calendar date.
pub(crate) fn post_filter(extraction: &mut Extraction) {
    let before = extraction.transactions.len();
    extraction
        .transactions
        .retain(|t| !t.amount.is_zero() && is_statement_date(&t.date));
    extraction.skipped_rows += before - extraction.transactions.len();
}

/// Strict DD/MM/YYYY check, including calendar validity.
pub fn is_statement_date(s: &str) -> bool {
    patterns::DATE_STRICT.is_match(s) && NaiveDate::parse_from_str(s, "%d/%m/%Y").is_ok()
}
