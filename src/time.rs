use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Clock abstracts access to the current timestamp so transactions remain
/// deterministic in tests and turn-based front ends.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock. Cloning yields a handle onto the same instant, so a
/// caller can keep advancing time after handing a clone to a session.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("manual clock lock poisoned");
        *now = *now + delta;
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        let mut now = self.now.lock().expect("manual clock lock poisoned");
        *now = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("manual clock lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn manual_clock_advances_by_requested_delta() {
        let start = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();
        let clock = ManualClock::starting_at(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::seconds(30));
        assert_eq!(clock.now(), start + Duration::seconds(30));
    }

    #[test]
    fn manual_clock_clones_share_the_same_instant() {
        let start = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();
        let clock = ManualClock::starting_at(start);
        let handle = clock.clone();

        handle.advance(Duration::minutes(5));
        assert_eq!(clock.now(), start + Duration::minutes(5));
    }

    #[test]
    fn today_tracks_the_underlying_instant() {
        let start = Utc.with_ymd_and_hms(2024, 4, 1, 23, 59, 0).unwrap();
        let clock = ManualClock::starting_at(start);
        clock.advance(Duration::minutes(2));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
    }
}
