//! Lease-compliance metrics derived from a mileage snapshot.

use chrono::{NaiveDate, NaiveDateTime};
use lease_domain::{LeaseTerm, MileageState};
use serde::{Deserialize, Serialize};

/// Penalty charged per mile driven beyond the prorated allowance.
pub const OVERAGE_RATE_PER_MILE: f64 = 0.25;

/// Straight-line year length used for proration. Leap days are ignored.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Stateless helpers computing lease-compliance figures.
pub struct LeaseAccounting;

impl LeaseAccounting {
    /// Whole days from `now` until the lease ends. Negative after the end date.
    pub fn days_left_in_lease(term: &LeaseTerm, now: NaiveDateTime) -> i64 {
        (term.ends_at() - now).num_days()
    }

    /// Whole days between the lease start and `now`, as an absolute value.
    pub fn days_elapsed(term: &LeaseTerm, now: NaiveDateTime) -> i64 {
        (now - term.starts_at()).num_days().abs()
    }

    /// Miles driven per elapsed day. Returns `0.0` when no day has elapsed yet.
    pub fn average_daily_mileage(state: &MileageState, days_elapsed: i64) -> f64 {
        if days_elapsed == 0 {
            return 0.0;
        }
        state.current_mileage / days_elapsed as f64
    }

    /// Prorated mileage budget to date under the selected allowance.
    pub fn recommended_mileage(state: &MileageState, days_elapsed: i64) -> f64 {
        (state.annual_allowance.annual_miles() / DAYS_PER_YEAR) * days_elapsed as f64
    }

    /// Miles over (positive) or under (negative) the prorated budget.
    pub fn excess_mileage(state: &MileageState, days_elapsed: i64) -> f64 {
        state.current_mileage - Self::recommended_mileage(state, days_elapsed)
    }

    /// Penalty owed if the current pace is kept. Never negative.
    pub fn amount_owed(excess_mileage: f64) -> f64 {
        excess_mileage.max(0.0) * OVERAGE_RATE_PER_MILE
    }

    /// Builds the full lease snapshot shown to the user.
    ///
    /// Mileage metrics are withheld until a non-zero reading exists.
    pub fn report(term: &LeaseTerm, state: &MileageState, now: NaiveDateTime) -> LeaseReport {
        let days_left = Self::days_left_in_lease(term, now);
        let metrics = if state.is_unset() {
            None
        } else {
            Some(Self::metrics(state, Self::days_elapsed(term, now)))
        };
        tracing::debug!(days_left, has_metrics = metrics.is_some(), "lease report computed");
        LeaseReport {
            as_of: now.date(),
            days_left,
            metrics,
        }
    }

    /// Computes every derived mileage figure for a given elapsed-day count.
    pub fn metrics(state: &MileageState, days_elapsed: i64) -> MileageMetrics {
        let recommended = Self::recommended_mileage(state, days_elapsed);
        let excess = Self::excess_mileage(state, days_elapsed);
        MileageMetrics {
            current_mileage: state.current_mileage,
            days_elapsed,
            recommended_mileage: recommended,
            excess_mileage: excess,
            amount_owed: Self::amount_owed(excess),
            average_daily_mileage: Self::average_daily_mileage(state, days_elapsed),
            standing: MileageStanding::classify(state.current_mileage, recommended),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Snapshot of the lease as of a given day.
pub struct LeaseReport {
    pub as_of: NaiveDate,
    pub days_left: i64,
    /// `None` until a mileage reading has been entered.
    pub metrics: Option<MileageMetrics>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MileageMetrics {
    pub current_mileage: f64,
    pub days_elapsed: i64,
    pub recommended_mileage: f64,
    pub excess_mileage: f64,
    pub amount_owed: f64,
    pub average_daily_mileage: f64,
    pub standing: MileageStanding,
}

impl MileageMetrics {
    /// The owed amount is shown whenever the driver is at or above budget.
    pub fn shows_amount_owed(&self) -> bool {
        self.current_mileage >= self.recommended_mileage
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Position of the current reading relative to the prorated budget.
pub enum MileageStanding {
    Under(f64),
    Over(f64),
    OnTrack,
}

impl MileageStanding {
    pub fn classify(current: f64, recommended: f64) -> Self {
        if recommended > current {
            MileageStanding::Under(recommended - current)
        } else if current > recommended {
            MileageStanding::Over(current - recommended)
        } else {
            MileageStanding::OnTrack
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lease_domain::MileageAllowance;

    fn term() -> LeaseTerm {
        LeaseTerm::new(
            NaiveDate::from_ymd_opt(2023, 11, 25).unwrap(),
            NaiveDate::from_ymd_opt(2026, 11, 25).unwrap(),
        )
        .unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn partial_days_are_truncated() {
        let term = term();
        assert_eq!(LeaseAccounting::days_left_in_lease(&term, at(2026, 11, 24, 18)), 0);
        assert_eq!(LeaseAccounting::days_left_in_lease(&term, at(2026, 11, 23, 18)), 1);
        assert_eq!(LeaseAccounting::days_elapsed(&term, at(2023, 11, 26, 23)), 1);
    }

    #[test]
    fn days_left_goes_negative_after_end() {
        assert_eq!(
            LeaseAccounting::days_left_in_lease(&term(), at(2026, 12, 5, 0)),
            -10
        );
    }

    #[test]
    fn days_elapsed_is_absolute_before_start() {
        assert_eq!(LeaseAccounting::days_elapsed(&term(), at(2023, 11, 20, 0)), 5);
    }

    #[test]
    fn zero_elapsed_days_yield_sentinel_average() {
        let state = MileageState::new(500.0, MileageAllowance::TenThousand);
        assert_eq!(LeaseAccounting::average_daily_mileage(&state, 0), 0.0);
    }

    #[test]
    fn standing_classifies_relative_to_budget() {
        assert_eq!(MileageStanding::classify(90.0, 100.0), MileageStanding::Under(10.0));
        assert_eq!(MileageStanding::classify(110.0, 100.0), MileageStanding::Over(10.0));
        assert_eq!(MileageStanding::classify(100.0, 100.0), MileageStanding::OnTrack);
    }

    #[test]
    fn report_on_start_day_does_not_divide_by_zero() {
        let state = MileageState::new(42.0, MileageAllowance::default());
        let report = LeaseAccounting::report(&term(), &state, at(2023, 11, 25, 9));
        let metrics = report.metrics.unwrap();
        assert_eq!(metrics.days_elapsed, 0);
        assert_eq!(metrics.average_daily_mileage, 0.0);
        assert_eq!(metrics.recommended_mileage, 0.0);
        assert_eq!(metrics.amount_owed, 42.0 * OVERAGE_RATE_PER_MILE);
    }
}
