use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::CoreError;

/// Clock abstracts access to the current local time so calculations remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock timestamp.
    fn now(&self) -> NaiveDateTime;
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Pins the clock to midnight of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Parses `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` into a local timestamp.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, CoreError> {
    let trimmed = input.trim();
    if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(stamp);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| CoreError::InvalidTimestamp(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates_and_datetimes() {
        let midnight = parse_timestamp("2024-11-25").unwrap();
        assert_eq!(midnight, FixedClock::on(midnight.date()).now());

        let afternoon = parse_timestamp("2024-11-25T15:30:00").unwrap();
        assert_eq!(afternoon.date(), midnight.date());
        assert!(afternoon > midnight);

        assert!(parse_timestamp("25/11/2024").is_err());
    }
}
