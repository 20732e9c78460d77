//! DDayCalculator - signed day-count to an expiration date.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Items this many days or fewer from expiration count as urgent
/// (inclusive of due-today and overdue).
pub const URGENT_WINDOW_DAYS: i64 = 3;

/// Classification of a day-count relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DDayLabel {
    Upcoming,
    DueToday,
    Overdue,
}

/// Result of the D-Day computation: whole calendar days until expiration
/// plus its classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DDay {
    pub delta_days: i64,
    pub label: DDayLabel,
}

impl DDay {
    /// True when the item needs attention: expiring within
    /// [`URGENT_WINDOW_DAYS`], due today, or already overdue.
    pub fn is_urgent(&self) -> bool {
        self.delta_days <= URGENT_WINDOW_DAYS
    }
}

/// Badge rendering: `D-3` upcoming, `D-Day` due today, `D+4` overdue.
impl fmt::Display for DDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            DDayLabel::Upcoming => write!(f, "D-{}", self.delta_days),
            DDayLabel::DueToday => write!(f, "D-Day"),
            DDayLabel::Overdue => write!(f, "D+{}", -self.delta_days),
        }
    }
}

/// Compute the D-Day for an expiration date. Pure and total: any two
/// calendar dates produce a result.
pub fn d_day(today: NaiveDate, expiration_date: NaiveDate) -> DDay {
    let delta_days = (expiration_date - today).num_days();
    let label = match delta_days {
        d if d > 0 => DDayLabel::Upcoming,
        0 => DDayLabel::DueToday,
        _ => DDayLabel::Overdue,
    };
    DDay { delta_days, label }
}
