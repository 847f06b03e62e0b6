//! # ordo-time
//!
//! Timezone-naive calendar dates, weekdays, months, month-day keys, and the
//! Gregorian Easter computus.
//!
//! All arithmetic is done on integer day serials; nothing in this crate
//! reads a clock or depends on a local time zone (except the optional
//! [`Date::today`] behind the `chrono` feature).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter Sunday computus.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `MonthDay` — a year-independent month and day.
pub mod month_day;

/// `Weekday` — day of the week.
pub mod weekday;

#[cfg(feature = "chrono")]
mod chrono_interop;

#[cfg(feature = "serde")]
mod serde_impls;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::easter_sunday;
pub use month::Month;
pub use month_day::MonthDay;
pub use weekday::Weekday;
