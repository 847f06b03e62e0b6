//! `Date` type.
//!
//! Dates are stored as a serial number of days in the proleptic Gregorian
//! calendar, with no time-of-day component.  Comparisons and differences are
//! plain integer operations, so there is no drift around daylight-saving
//! transitions or other wall-clock effects.
//!
//! # Serial number convention
//! * Serial 1 = January 1, year 1 (a Monday).
//! * The checked constructors accept years 1 through 9999.
//! * Arithmetic with `+`/`-` is total: it may step just outside the checked
//!   range (e.g. to the Baptism of the Lord of year 10000) without failing.

use std::str::FromStr;

use crate::month::Month;
use crate::month_day::MonthDay;
use crate::weekday::Weekday;
use ordo_core::errors::{Error, Result};
use ordo_core::utilities::data_parsers::parse_iso_date;

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// First year accepted by the checked constructors.
    pub const MIN_YEAR: i32 = 1;

    /// Last year accepted by the checked constructors.
    pub const MAX_YEAR: i32 = 9999;

    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial falls outside [`Date::MIN`, `Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date without range checks.
    ///
    /// `month` and `day` must form a valid month-day for `year`; the year
    /// itself may lie outside the checked range.
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month));
        Date(serial_from_ymd(year, month, day))
    }

    /// January 1 of `year`.
    ///
    /// Total for any year: boundary dates of the neighbouring years (e.g.
    /// Christmas of the previous year) are derived from this without a
    /// failure path.
    pub fn start_of_year(year: i32) -> Self {
        Date(serial_from_ymd(year, 1, 1))
    }

    /// The date of `month_day` in `year`.
    ///
    /// Returns `None` for February 29 in a common year.
    pub fn from_month_day(year: i32, month_day: MonthDay) -> Option<Self> {
        let (m, d) = (month_day.month().number(), month_day.day());
        (d <= days_in_month(year, m)).then(|| Date(serial_from_ymd(year, m, d)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_enum(&self) -> Month {
        Month::from_number(self.month()).expect("month is always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.0 - Self::start_of_year(self.year()).0 + 1) as u16
    }

    /// Return the year-independent month and day.
    pub fn month_day(&self) -> MonthDay {
        MonthDay::new(self.month_enum(), self.day_of_month())
            .expect("a calendar date is always a valid month-day")
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday (ordinal 1).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))
            .and_then(Self::from_serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the closest date strictly after `self` falling on `weekday`.
    ///
    /// If `self` is already a `weekday`, the result is one week later.
    pub fn next_weekday_after(self, weekday: Weekday) -> Self {
        let skip = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self + if skip == 0 { 7 } else { skip }
    }

    /// Return the closest date strictly before `self` falling on `weekday`.
    ///
    /// If `self` is already a `weekday`, the result is one week earlier.
    pub fn previous_weekday_before(self, weekday: Weekday) -> Self {
        let back = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self - if back == 0 { 7 } else { back }
    }

    // ── Keys and formatting ───────────────────────────────────────────────────

    /// The `MM-DD` key of this date (e.g. `"12-25"`).
    pub fn month_day_key(&self) -> String {
        self.month_day().to_string()
    }

    /// The full `YYYY-MM-DD` key of this date.
    pub fn full_key(&self) -> String {
        self.to_string()
    }

    /// Long en-US form, e.g. `"Sunday, April 20, 2025"`.
    pub fn long_format(&self) -> String {
        let (y, _, d) = self.ymd();
        format!("{}, {} {d}, {y}", self.weekday(), self.month_enum())
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        Date(self.0 + rhs)
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        Date(self.0 - rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        self.0 -= rhs;
    }
}

// ── Parsing / Display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) =
            parse_iso_date(s).ok_or_else(|| Error::Parse(format!("invalid date {s:?}")))?;
        Date::from_ymd(y, m, d)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Number of days in a given year (365 or 366).
pub fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Offset between the March-based day count (0000-03-01 = 0) and serials
/// (0001-01-01 = 1).
const EPOCH_SHIFT: i32 = 305;

/// Convert (year, month, day) to a serial number.
///
/// Years are counted from March so that the leap day falls at the end of
/// the counting year; 400-year eras hold exactly 146 097 days.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let (m, d) = (month as i32, day as i32);
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - EPOCH_SHIFT
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + EPOCH_SHIFT;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
