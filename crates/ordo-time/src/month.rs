//! Months of the civil year, as used by fixed feast keys and long dates.

/// Month of the year, numbered 1 (January) to 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

use Month::*;

const BY_NUMBER: [Month; 12] = [
    January, February, March, April, May, June, July, August, September, October, November,
    December,
];

const NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    /// The month numbered `n`, or `None` outside `1..=12`.
    pub fn from_number(n: u8) -> Option<Self> {
        BY_NUMBER.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// 1-based month number.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Longest this month can be in any year; a fixed feast may sit on
    /// Feb 29.
    pub fn max_days(self) -> u8 {
        match self {
            February => 29,
            April | June | September | November => 30,
            _ => 31,
        }
    }

    /// English name.
    pub fn name(self) -> &'static str {
        NAMES[usize::from(self.number()) - 1]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
