//! Lease contract window.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LeaseTermFields")]
/// Fixed start/end dates of a vehicle lease contract.
pub struct LeaseTerm {
    start: NaiveDate,
    end: NaiveDate,
}

impl LeaseTerm {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LeaseTermError> {
        if end <= start {
            return Err(LeaseTermError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Midnight at the beginning of the start date.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Midnight at the beginning of the end date.
    pub fn ends_at(&self) -> NaiveDateTime {
        self.end.and_time(NaiveTime::MIN)
    }

    /// Total contract length in calendar days.
    pub fn length_in_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl fmt::Display for LeaseTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[derive(Deserialize)]
struct LeaseTermFields {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<LeaseTermFields> for LeaseTerm {
    type Error = LeaseTermError;

    fn try_from(fields: LeaseTermFields) -> Result<Self, Self::Error> {
        LeaseTerm::new(fields.start, fields.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`LeaseTerm`] values.
pub enum LeaseTermError {
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for LeaseTermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaseTermError::InvalidRange { start, end } => write!(
                f,
                "lease end date {} must be after start date {}",
                end, start
            ),
        }
    }
}

impl std::error::Error for LeaseTermError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_end_not_after_start() {
        let same = date(2024, 1, 1);
        assert!(LeaseTerm::new(same, same).is_err());
        assert!(LeaseTerm::new(date(2024, 1, 2), same).is_err());
    }

    #[test]
    fn reports_length_and_bounds() {
        let term = LeaseTerm::new(date(2023, 11, 25), date(2026, 11, 25)).unwrap();
        assert_eq!(term.length_in_days(), 1096);
        assert_eq!(term.ends_at(), date(2026, 11, 25).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn deserialization_enforces_range() {
        let ok: LeaseTerm =
            serde_json::from_str(r#"{"start":"2023-11-25","end":"2026-11-25"}"#).unwrap();
        assert_eq!(ok.start(), date(2023, 11, 25));

        let bad = serde_json::from_str::<LeaseTerm>(r#"{"start":"2026-11-25","end":"2023-11-25"}"#);
        assert!(bad.is_err());
    }
}
