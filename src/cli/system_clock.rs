use chrono::{Local, NaiveDateTime};

use lease_core::{parse_timestamp, Clock, CoreError, FixedClock};

/// Environment variable pinning the shell clock, as `YYYY-MM-DD[THH:MM:SS]`.
pub const NOW_ENV: &str = "LEASE_INFO_NOW";

/// Real-time clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Picks a fixed clock when [`NOW_ENV`] is set, the system clock otherwise.
pub fn clock_from_env() -> Result<Box<dyn Clock>, CoreError> {
    match std::env::var(NOW_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            let pinned = parse_timestamp(&value)?;
            tracing::info!(%pinned, "clock pinned from environment");
            Ok(Box::new(FixedClock(pinned)))
        }
        _ => Ok(Box::new(SystemClock)),
    }
}
