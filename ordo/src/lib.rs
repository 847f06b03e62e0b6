//! # ordo
//!
//! The liturgical calendar of the Roman Catholic Church for any Gregorian
//! date: season, feast, and color, plus the days until the next major feast
//! and progress through the civil year.
//!
//! This crate is a façade that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ordo-*` crates.
//!
//! ## Quick start
//!
//! ```
//! use ordo::{Date, LiturgicalCalendar, LiturgicalColor};
//!
//! let calendar = LiturgicalCalendar::standard();
//! let gaudete = calendar.info(Date::from_ymd(2024, 12, 15).unwrap());
//! assert_eq!(gaudete.color, LiturgicalColor::Rose);
//!
//! let next = calendar.next_major_feast(Date::from_ymd(2024, 12, 26).unwrap());
//! assert_eq!((next.name, next.days_until), ("Easter", 115));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and text utilities.
pub use ordo_core as core;

/// Dates, weekdays, months, and the Easter computus.
pub use ordo_time as time;

/// Colors, feast tables, seasons, the resolver, and countdowns.
pub use ordo_calendar as calendar;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use ordo_calendar::{
    classify_season, liturgical_info, next_major_feast, ordinary_time_sunday_name, year_progress,
    year_progress_percent, FeastAnchor, FeastTables, FixedFeastEntry, FixedFeastTable, InfoSource,
    LiturgicalCalendar, LiturgicalColor, LiturgicalInfo, MajorFeastCandidate, MovableFeastEntry,
    MovableFeastTable, NextFeast, Season, SeasonAnchors, SeasonClassification,
};
pub use ordo_core::{Error, Result};
pub use ordo_time::{easter_sunday, Date, Month, MonthDay, Weekday};
