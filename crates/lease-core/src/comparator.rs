//! Total-cost comparison of two financing offers.

use lease_domain::{FinancingOffer, OfferSlot};
use serde::{Deserialize, Serialize};

use crate::OfferEntry;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferComparison {
    /// Slot with the lower total. Equal totals resolve to [`OfferSlot::First`].
    pub cheaper: OfferSlot,
    /// Absolute gap between the two totals.
    pub difference: f64,
}

impl OfferComparison {
    pub fn is_tie(&self) -> bool {
        self.difference == 0.0
    }
}

/// Stateless helpers comparing financing offers.
pub struct OfferComparator;

impl OfferComparator {
    /// Money down plus every monthly payment over the fixed term.
    pub fn total_cost(offer: &FinancingOffer) -> f64 {
        offer.down_payment + offer.monthly_payment * f64::from(FinancingOffer::TERM_MONTHS)
    }

    pub fn compare(first: &FinancingOffer, second: &FinancingOffer) -> OfferComparison {
        let first_total = Self::total_cost(first);
        let second_total = Self::total_cost(second);
        let cheaper = if second_total < first_total {
            OfferSlot::Second
        } else {
            OfferSlot::First
        };
        OfferComparison {
            cheaper,
            difference: (first_total - second_total).abs(),
        }
    }

    /// Compares typed entries once both monthly payments have been filled in.
    pub fn compare_entries(first: &OfferEntry, second: &OfferEntry) -> Option<OfferComparison> {
        if !first.has_monthly_payment() || !second.has_monthly_payment() {
            return None;
        }
        Some(Self::compare(&first.to_offer(), &second.to_offer()))
    }
}
