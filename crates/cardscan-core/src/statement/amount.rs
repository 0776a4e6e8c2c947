//! Amount normalization.
//!
//! Statement amounts arrive with currency symbols, thousands separators,
//! and credit markers ("Cr" suffixes or parenthesised amounts).
//! [`normalize`] reduces them to a signed [`Decimal`]: debits positive,
//! credits negative.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::CREDIT_MARKER;

/// Normalize a raw amount token into a signed decimal.
///
/// Total over its domain: absent, empty, or unparseable input yields zero,
/// a sentinel for "not a valid amount" that downstream filtering removes.
pub fn normalize(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };

    let s = raw.trim();
    let is_credit = CREDIT_MARKER.is_match(s);

    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match Decimal::from_str(&cleaned) {
        Ok(amount) if is_credit => -amount,
        Ok(amount) => amount,
        Err(_) => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_absent_input_is_zero() {
        assert_eq!(normalize(None), Decimal::ZERO);
        assert_eq!(normalize(Some("")), Decimal::ZERO);
        assert_eq!(normalize(Some("   ")), Decimal::ZERO);
    }

    #[test]
    fn test_debit_forms_stay_positive() {
        assert_eq!(normalize(Some("250.00")), dec("250.00"));
        assert_eq!(normalize(Some("1,234.56 Dr")), dec("1234.56"));
        assert_eq!(normalize(Some("₹ 99.00")), dec("99.00"));
    }

    #[test]
    fn test_credit_forms_negate() {
        assert_eq!(normalize(Some("₹500.00 Cr")), dec("-500.00"));
        assert_eq!(normalize(Some("12,000.00 CR")), dec("-12000.00"));
        assert_eq!(normalize(Some("(250.00)")), dec("-250.00"));
        assert_eq!(normalize(Some("1,000.00 cr")), dec("-1000.00"));
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(normalize(Some("TOTAL DUE")), Decimal::ZERO);
        assert_eq!(normalize(Some("12.34.56")), Decimal::ZERO);
        assert_eq!(normalize(Some("--")), Decimal::ZERO);
    }

    #[test]
    fn test_zero_stays_zero_even_as_credit() {
        // a "0.00 Cr" waiver must remain the zero sentinel, not -0
        assert!(normalize(Some("0.00 Cr")).is_zero());
    }
}
