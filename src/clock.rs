//! Clock - supplies "today" as a calendar date.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

/// Source of the current calendar day.
///
/// Every date comparison in the engine (D-Day computation, passive expiry)
/// goes through a `Clock`, so tests and replays can pin "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock days in the local timezone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to a fixed day. Clone-friendly via Arc, so a test can
/// hold one handle and advance the day seen by a service holding another.
#[derive(Clone, Debug)]
pub struct FixedClock {
    today: Arc<RwLock<NaiveDate>>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Arc::new(RwLock::new(today)),
        }
    }

    /// Move the pinned day for every handle sharing this clock.
    pub fn set_today(&self, today: NaiveDate) {
        *self.today.write().unwrap() = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.read().unwrap()
    }
}
