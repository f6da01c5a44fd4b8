//! Lenient numeric parsing for user-typed fields.
//!
//! Text that is not a finite, non-negative decimal number is treated as
//! "unset". Callers decide what unset means: a mileage submission is skipped,
//! an offer field counts as zero.

use lease_domain::FinancingOffer;
use serde::{Deserialize, Serialize};

/// Parses a typed amount, returning `None` for empty, non-numeric,
/// non-finite or negative text.
pub fn parse_amount(text: &str) -> Option<f64> {
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Same as [`parse_amount`] but substitutes zero for unset text.
pub fn amount_or_zero(text: &str) -> f64 {
    parse_amount(text).unwrap_or(0.0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Raw text of one offer's input fields, exactly as typed.
pub struct OfferEntry {
    pub down_payment: String,
    pub monthly_payment: String,
}

impl OfferEntry {
    pub fn new(down_payment: impl Into<String>, monthly_payment: impl Into<String>) -> Self {
        Self {
            down_payment: down_payment.into(),
            monthly_payment: monthly_payment.into(),
        }
    }

    /// True once something has been typed into the monthly payment field.
    pub fn has_monthly_payment(&self) -> bool {
        !self.monthly_payment.is_empty()
    }

    pub fn to_offer(&self) -> FinancingOffer {
        FinancingOffer::new(
            amount_or_zero(&self.down_payment),
            amount_or_zero(&self.monthly_payment),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_decimals() {
        assert_eq!(parse_amount("13000"), Some(13000.0));
        assert_eq!(parse_amount("299.99"), Some(299.99));
        assert_eq!(parse_amount("0"), Some(0.0));
    }

    #[test]
    fn rejects_unusable_text() {
        for text in ["", "abc", "12 000", " 12", "-5", "inf", "NaN"] {
            assert_eq!(parse_amount(text), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn entry_substitutes_zero_for_bad_fields() {
        let entry = OfferEntry::new("lots", "300");
        assert_eq!(entry.to_offer(), FinancingOffer::new(0.0, 300.0));
        assert!(entry.has_monthly_payment());
        assert!(!OfferEntry::default().has_monthly_payment());
    }
}
