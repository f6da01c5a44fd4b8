use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// A financing proposal: money down plus a fixed monthly payment.
pub struct FinancingOffer {
    pub down_payment: f64,
    pub monthly_payment: f64,
}

impl FinancingOffer {
    /// Every offer is evaluated over the same contract length.
    pub const TERM_MONTHS: u32 = 36;

    pub fn new(down_payment: f64, monthly_payment: f64) -> Self {
        Self {
            down_payment,
            monthly_payment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifies one of the two offers being compared.
pub enum OfferSlot {
    First,
    Second,
}

impl OfferSlot {
    pub const ALL: [OfferSlot; 2] = [OfferSlot::First, OfferSlot::Second];

    pub fn number(self) -> u8 {
        match self {
            OfferSlot::First => 1,
            OfferSlot::Second => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(OfferSlot::First),
            2 => Some(OfferSlot::Second),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self.number() as usize - 1
    }

    pub fn other(self) -> Self {
        match self {
            OfferSlot::First => OfferSlot::Second,
            OfferSlot::Second => OfferSlot::First,
        }
    }

    /// Ordinal label used in comparison sentences.
    pub fn ordinal_label(self) -> &'static str {
        match self {
            OfferSlot::First => "1st set",
            OfferSlot::Second => "2nd set",
        }
    }
}

impl fmt::Display for OfferSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Offer {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_numbers_round_trip() {
        for slot in OfferSlot::ALL {
            assert_eq!(OfferSlot::from_number(slot.number()), Some(slot));
        }
        assert_eq!(OfferSlot::from_number(3), None);
        assert_eq!(OfferSlot::First.other(), OfferSlot::Second);
        assert_eq!(OfferSlot::Second.index(), 1);
    }
}
