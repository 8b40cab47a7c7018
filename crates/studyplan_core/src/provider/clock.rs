//! Current-time sources.
//!
//! # Invariants
//! - `today()` is derived from local wall-clock time, matching what the user
//!   sees as the current day.

use crate::model::task::IsoDate;
use chrono::{Local, NaiveDate};
use std::cell::Cell;

/// Source of creation timestamps and the current calendar day.
pub trait Clock {
    /// Current time in Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
    /// Current local calendar day.
    fn today(&self) -> IsoDate;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> IsoDate {
        IsoDate::from_naive(Local::now().date_naive())
    }
}

/// Deterministic clock that advances by a fixed step on every read.
///
/// Used by tests so consecutive creations get distinct, ordered timestamps.
#[derive(Debug)]
pub struct ManualClock {
    next_ms: Cell<i64>,
    step_ms: i64,
    today: IsoDate,
}

impl ManualClock {
    pub fn new(start_ms: i64, step_ms: i64, today: NaiveDate) -> Self {
        Self {
            next_ms: Cell::new(start_ms),
            step_ms,
            today: IsoDate::from_naive(today),
        }
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = IsoDate::from_naive(today);
    }
}

impl Clock for ManualClock {
    fn now_epoch_ms(&self) -> i64 {
        let now = self.next_ms.get();
        self.next_ms.set(now + self.step_ms);
        now
    }

    fn today(&self) -> IsoDate {
        self.today.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock};
    use chrono::NaiveDate;

    #[test]
    fn manual_clock_advances_per_read() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let clock = ManualClock::new(1_000, 10, day);
        assert_eq!(clock.now_epoch_ms(), 1_000);
        assert_eq!(clock.now_epoch_ms(), 1_010);
        assert_eq!(clock.today().as_str(), "2024-01-01");
    }
}
