//! Classify-and-extract pipeline over one parsed document.

use tracing::{debug, info, warn};

use crate::error::ParseError;
use crate::models::config::CardscanConfig;
use crate::models::statement::{StatementReport, Summary};
use crate::pdf::Document;

use super::{extractor_for, post_filter, Classifier};

/// Classify a document and run the matching extractor.
///
/// The three non-record outcomes stay distinguishable: an unrecognized
/// statement never reaches an extractor, a recognized statement that
/// yields nothing is a soft failure, and an extractor error is reported
/// naming the bank.
pub fn parse_document(
    doc: &Document,
    config: &CardscanConfig,
) -> std::result::Result<StatementReport, ParseError> {
    let classifier = Classifier::from_config(&config.classifier);
    let Some(bank) = classifier.classify(doc) else {
        warn!("statement not recognized by any classifier rule");
        return Err(ParseError::UnknownBank);
    };
    info!(%bank, "detected statement layout");

    let extractor = extractor_for(bank);
    let mut extraction = extractor
        .extract(doc)
        .map_err(|source| ParseError::Extraction { bank, source })?;
    post_filter(&mut extraction);

    if extraction.transactions.is_empty() {
        warn!(%bank, "extractor produced no transactions");
        return Err(ParseError::NoTransactions { bank });
    }

    debug!(
        count = extraction.transactions.len(),
        skipped = extraction.skipped_rows,
        "extraction complete"
    );

    let summary = Summary::of(&extraction.transactions);
    Ok(StatementReport {
        bank,
        transactions: extraction.transactions,
        skipped_rows: extraction.skipped_rows,
        summary,
    })
}
