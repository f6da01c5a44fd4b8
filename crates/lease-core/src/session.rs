//! In-memory session state owned by a front end.
//!
//! Nothing here is persisted; a new session always starts from defaults.

use chrono::NaiveDateTime;
use lease_domain::{FinancingOffer, LeaseTerm, MileageAllowance, MileageState, OfferSlot};

use crate::{parse_amount, LeaseAccounting, LeaseReport, OfferComparator, OfferComparison, OfferEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferField {
    DownPayment,
    MonthlyPayment,
}

impl OfferField {
    pub fn label(self) -> &'static str {
        match self {
            OfferField::DownPayment => "Down Payment",
            OfferField::MonthlyPayment => "Monthly Payment",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub mileage: MileageState,
    offers: [OfferEntry; 2],
}

impl SessionState {
    pub fn new(default_allowance: MileageAllowance) -> Self {
        Self {
            mileage: MileageState::new(0.0, default_allowance),
            offers: Default::default(),
        }
    }

    /// Replaces the current reading when `input` parses; otherwise leaves state untouched.
    ///
    /// Returns the accepted reading.
    pub fn submit_mileage(&mut self, input: &str) -> Option<f64> {
        match parse_amount(input) {
            Some(reading) => {
                self.mileage.current_mileage = reading;
                tracing::debug!(reading, "mileage reading accepted");
                Some(reading)
            }
            None => {
                tracing::debug!(input, "mileage reading ignored");
                None
            }
        }
    }

    pub fn select_allowance(&mut self, allowance: MileageAllowance) {
        self.mileage.annual_allowance = allowance;
        tracing::debug!(%allowance, "allowance selected");
    }

    pub fn offer_entry(&self, slot: OfferSlot) -> &OfferEntry {
        &self.offers[slot.index()]
    }

    /// Overwrites one offer field with the raw text typed by the user.
    pub fn set_offer_field(&mut self, slot: OfferSlot, field: OfferField, text: impl Into<String>) {
        let entry = &mut self.offers[slot.index()];
        let text = text.into();
        match field {
            OfferField::DownPayment => entry.down_payment = text,
            OfferField::MonthlyPayment => entry.monthly_payment = text,
        }
    }

    pub fn offer(&self, slot: OfferSlot) -> FinancingOffer {
        self.offer_entry(slot).to_offer()
    }

    pub fn offer_total(&self, slot: OfferSlot) -> f64 {
        OfferComparator::total_cost(&self.offer(slot))
    }

    pub fn offer_comparison(&self) -> Option<OfferComparison> {
        OfferComparator::compare_entries(
            self.offer_entry(OfferSlot::First),
            self.offer_entry(OfferSlot::Second),
        )
    }

    pub fn lease_report(&self, term: &LeaseTerm, now: NaiveDateTime) -> LeaseReport {
        LeaseAccounting::report(term, &self.mileage, now)
    }

    /// Clears every field back to a fresh session using `default_allowance`.
    pub fn reset(&mut self, default_allowance: MileageAllowance) {
        *self = Self::new(default_allowance);
    }
}
