//! Statement data models: banks, transactions, reports.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Supported bank / card-product statement layouts.
///
/// Each variant corresponds to a distinct PDF layout with its own
/// extraction routine, not merely an issuing institution: the two ICICI
/// card products print entirely different statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bank {
    Hdfc,
    IciciCoral,
    IciciAmazon,
    Axis,
    Idfc,
}

impl Bank {
    /// All supported layouts, in classifier precedence order.
    pub const ALL: [Bank; 5] = [
        Bank::Axis,
        Bank::IciciAmazon,
        Bank::IciciCoral,
        Bank::Hdfc,
        Bank::Idfc,
    ];

    /// Stable identifier, e.g. `ICICI_AMAZON`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bank::Hdfc => "HDFC",
            Bank::IciciCoral => "ICICI_CORAL",
            Bank::IciciAmazon => "ICICI_AMAZON",
            Bank::Axis => "AXIS",
            Bank::Idfc => "IDFC",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single statement line item.
///
/// Sign convention: positive amounts are debits (spend), negative amounts
/// are credits (payments/refunds reducing the balance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date in DD/MM/YYYY form, as printed on the statement.
    pub date: String,

    /// Merchant / narration text. May be empty, never absent.
    pub description: String,

    /// Signed amount.
    pub amount: Decimal,
}

impl Transaction {
    /// Whether this is a payment/refund rather than spend.
    pub fn is_credit(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

/// Aggregate totals over one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of positive amounts (debits).
    pub total_spend: Decimal,

    /// Sum of negative amounts (credits). Zero or negative.
    pub total_payments: Decimal,

    /// Number of extracted transactions.
    pub transaction_count: usize,
}

impl Summary {
    /// Compute aggregates over an extracted record list.
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut total_spend = Decimal::ZERO;
        let mut total_payments = Decimal::ZERO;

        for txn in transactions {
            if txn.is_credit() {
                total_payments += txn.amount;
            } else {
                total_spend += txn.amount;
            }
        }

        Self {
            total_spend,
            total_payments,
            transaction_count: transactions.len(),
        }
    }
}

/// Result of parsing one statement document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementReport {
    /// Detected statement layout.
    pub bank: Bank,

    /// Extracted transactions, in document order.
    pub transactions: Vec<Transaction>,

    /// Transaction-like rows dropped during extraction (missing cell, bad
    /// date, or amount that normalized to zero). A rising count against a
    /// known-good statement signals layout drift.
    pub skipped_rows: usize,

    /// Aggregate totals.
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn txn(amount: &str) -> Transaction {
        Transaction {
            date: "01/01/2024".to_string(),
            description: "TEST".to_string(),
            amount: Decimal::from_str(amount).unwrap(),
        }
    }

    #[test]
    fn test_bank_identifiers() {
        assert_eq!(Bank::IciciAmazon.as_str(), "ICICI_AMAZON");
        assert_eq!(Bank::Hdfc.to_string(), "HDFC");
        assert_eq!(
            serde_json::to_string(&Bank::IciciCoral).unwrap(),
            "\"ICICI_CORAL\""
        );
    }

    #[test]
    fn test_summary_splits_debits_and_credits() {
        let txns = vec![txn("250.00"), txn("-500.00"), txn("99.50")];
        let summary = Summary::of(&txns);

        assert_eq!(summary.total_spend, Decimal::from_str("349.50").unwrap());
        assert_eq!(summary.total_payments, Decimal::from_str("-500.00").unwrap());
        assert_eq!(summary.transaction_count, 3);
    }

    #[test]
    fn test_summary_of_empty_list() {
        let summary = Summary::of(&[]);
        assert_eq!(summary.total_spend, Decimal::ZERO);
        assert_eq!(summary.total_payments, Decimal::ZERO);
        assert_eq!(summary.transaction_count, 0);
    }
}
