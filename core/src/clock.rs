//! Generation clock: owns the notion of "now".
//!
//! Generators never read the wall clock themselves. The engine asks the
//! clock once per call and passes the instant down, so a pinned clock makes
//! every timestamp reproducible.

use crate::error::{GenError, GenResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Days counted per month when sizing a backdating window.
pub const DAYS_PER_MONTH: i64 = 30;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenClock {
    pinned: Option<DateTime<Utc>>,
}

impl GenClock {
    pub fn system() -> Self {
        Self { pinned: None }
    }

    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self { pinned: Some(now) }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.pinned.unwrap_or_else(Utc::now)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }
}

/// Start of a `months`-long window ending at `now`. Fails when the window
/// reaches past the earliest representable instant.
pub fn window_start(now: DateTime<Utc>, months: u32) -> GenResult<DateTime<Utc>> {
    Duration::try_days(months as i64 * DAYS_PER_MONTH)
        .and_then(|span| now.checked_sub_signed(span))
        .ok_or_else(|| {
            GenError::invalid(format!("a window of {months} months ending at {now} is out of range"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_never_moves() {
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let clock = GenClock::fixed(t);
        assert!(clock.is_pinned());
        assert_eq!(clock.now(), t);
        assert_eq!(clock.now(), t);
    }

    #[test]
    fn six_months_is_180_days() {
        let t = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(t - window_start(t, 6).unwrap(), Duration::days(180));
        assert_eq!(window_start(t, 0).unwrap(), t);
    }

    #[test]
    fn oversized_window_is_invalid_input() {
        let t = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        assert!(matches!(window_start(t, 4_000_000), Err(GenError::InvalidInput(_))));
        assert!(matches!(window_start(t, u32::MAX), Err(GenError::InvalidInput(_))));
    }
}
