//! `MonthDay` — a year-independent calendar day, the key of fixed-date
//! feast tables.

use std::str::FromStr;

use crate::month::Month;
use ordo_core::errors::{Error, Result};
use ordo_core::utilities::data_parsers::parse_month_day;

/// A month and day with no year, written `MM-DD` (e.g. `12-25`).
///
/// February 29 is a valid `MonthDay`; it simply has no date in common
/// years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Create a month-day, checking `day` against the longest form of
    /// `month`.
    pub fn new(month: Month, day: u8) -> Result<Self> {
        let max = month.max_days();
        if day == 0 || day > max {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {max}] for {month}"
            )));
        }
        Ok(Self { month, day })
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (m, d) =
            parse_month_day(s).ok_or_else(|| Error::Parse(format!("invalid month-day {s:?}")))?;
        let month =
            Month::from_number(m).ok_or_else(|| Error::Date(format!("month {m} out of range [1, 12]")))?;
        MonthDay::new(month, d)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month.number(), self.day)
    }
}
