//! End-to-end pipeline tests over synthetic documents.

use std::str::FromStr;

use rust_decimal::Decimal;

use cardscan_core::models::config::CardscanConfig;
use cardscan_core::pdf::{Document, Page, Table};
use cardscan_core::statement::parse_document;
use cardscan_core::{Bank, ParseError};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn hdfc_single_table_statement() {
    let table = Table::from_rows([
        ["Date", "Transaction Description", "Amount (inRs.)"],
        ["01/01/2024", "COFFEE SHOP", "250.00"],
    ]);
    let doc = Document::from_pages(vec![Page::with_text("HDFC Bank").add_table(table)]);

    let report = parse_document(&doc, &CardscanConfig::default()).unwrap();

    assert_eq!(report.bank, Bank::Hdfc);
    assert_eq!(report.transactions.len(), 1);
    assert_eq!(report.transactions[0].date, "01/01/2024");
    assert_eq!(report.transactions[0].description, "COFFEE SHOP");
    assert_eq!(report.transactions[0].amount, dec("250.00"));
    assert_eq!(report.summary.total_spend, dec("250.00"));
    assert_eq!(report.summary.total_payments, Decimal::ZERO);
    assert_eq!(report.skipped_rows, 0);
}

#[test]
fn icici_amazon_wins_over_coral_default() {
    let table = Table::from_rows([
        ["Date", "SerNo.", "Details", "Reward", "Amount"],
        ["02/01/2024", "7645123001", "AMAZON.IN ORDER", "12", "1,250.00"],
    ]);
    let doc = Document::from_pages(vec![
        Page::with_text("ICICI Bank Amazon Pay Credit Card").add_table(table),
    ]);

    let report = parse_document(&doc, &CardscanConfig::default()).unwrap();
    assert_eq!(report.bank, Bank::IciciAmazon);
    assert_eq!(report.transactions[0].description, "AMAZON.IN ORDER");
}

#[test]
fn icici_coral_text_statement() {
    let text = "ICICI Bank Coral Credit Card\n\
                02/01/2024 7645123001 GROCERY MART GURGAON 1,250.00\n\
                05/01/2024 7645123009 PAYMENT RECEIVED 12,000.00 CR";
    let doc = Document::from_pages(vec![Page::with_text(text)]);

    let report = parse_document(&doc, &CardscanConfig::default()).unwrap();
    assert_eq!(report.bank, Bank::IciciCoral);
    assert_eq!(report.transactions.len(), 2);
    assert_eq!(report.summary.total_spend, dec("1250.00"));
    assert_eq!(report.summary.total_payments, dec("-12000.00"));
}

#[test]
fn axis_text_statement_with_both_line_shapes() {
    let text = "Axis Bank My Zone Credit Card\n\
                03/01/2024 AMAZON RETAIL #1234 Shopping 1,499.00 Dr\n\
                10/01/2024 INTERNET PAYMENT RECEIVED 5,000.00 Cr";
    let doc = Document::from_pages(vec![Page::with_text(text)]);

    let report = parse_document(&doc, &CardscanConfig::default()).unwrap();
    assert_eq!(report.bank, Bank::Axis);
    assert_eq!(report.transactions.len(), 2);
    assert_eq!(report.summary.total_spend, dec("1499.00"));
    assert_eq!(report.summary.total_payments, dec("-5000.00"));
}

#[test]
fn idfc_table_statement() {
    let table = Table::from_rows([
        [
            "Transaction Date",
            "Transactional Details",
            "FX Transactions",
            "Amount ()",
        ],
        ["04/01/2024", "SWIGGY BANGALORE", "", "389.00"],
    ]);
    let doc =
        Document::from_pages(vec![Page::with_text("IDFC FIRST Bank").add_table(table)]);

    let report = parse_document(&doc, &CardscanConfig::default()).unwrap();
    assert_eq!(report.bank, Bank::Idfc);
    assert_eq!(report.transactions.len(), 1);
}

#[test]
fn unknown_statement_is_not_extracted() {
    let doc = Document::from_pages(vec![Page::with_text("Acme Savings Bank")]);
    let err = parse_document(&doc, &CardscanConfig::default()).unwrap_err();
    assert!(matches!(err, ParseError::UnknownBank));
}

#[test]
fn zero_result_is_distinct_from_unknown() {
    let doc = Document::from_pages(vec![Page::with_text("HDFC Bank, but no transactions")]);
    let err = parse_document(&doc, &CardscanConfig::default()).unwrap_err();
    assert!(matches!(err, ParseError::NoTransactions { bank: Bank::Hdfc }));
}

#[test]
fn configurable_icici_fallback_changes_extractor() {
    let mut config = CardscanConfig::default();
    config.classifier.icici_default = Bank::IciciAmazon;

    // no sub-product marker anywhere; the fallback decides
    let table = Table::from_rows([
        ["Date", "SerNo.", "Details", "Reward", "Amount"],
        ["02/01/2024", "7645123001", "SOME MERCHANT", "3", "640.00"],
    ]);
    let doc = Document::from_pages(vec![
        Page::with_text("ICICI Bank Credit Card Statement").add_table(table),
    ]);

    let report = parse_document(&doc, &config).unwrap();
    assert_eq!(report.bank, Bank::IciciAmazon);
    assert_eq!(report.transactions.len(), 1);
}

#[test]
fn waiver_rows_are_counted_not_reported() {
    let table = Table::from_rows([
        ["Date", "Transaction Description", "Amount (inRs.)"],
        ["01/01/2024", "COFFEE SHOP", "250.00"],
        ["02/01/2024", "FUEL SURCHARGE WAIVER", "0.00"],
    ]);
    let doc = Document::from_pages(vec![Page::with_text("HDFC Bank").add_table(table)]);

    let report = parse_document(&doc, &CardscanConfig::default()).unwrap();
    assert_eq!(report.transactions.len(), 1);
    assert_eq!(report.skipped_rows, 1);
}
