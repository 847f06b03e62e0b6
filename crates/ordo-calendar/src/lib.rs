//! # ordo-calendar
//!
//! Liturgical classification of calendar dates for the Roman Catholic
//! calendar: season, feast, and liturgical color, plus countdown and
//! year-progress helpers.
//!
//! Classification follows a fixed precedence: a movable feast (defined
//! relative to Easter or to Advent) wins over a fixed-date feast, which
//! wins over the season default.  Every function is pure; feast tables are
//! loaded once and only ever read.
//!
//! ```
//! use ordo_calendar::{LiturgicalCalendar, LiturgicalColor};
//! use ordo_time::Date;
//!
//! let calendar = LiturgicalCalendar::standard();
//! let info = calendar.info(Date::from_ymd(2025, 4, 18).unwrap());
//! assert_eq!(info.name.as_deref(), Some("Good Friday"));
//! assert_eq!(info.color, LiturgicalColor::Red);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Per-year boundary dates of the liturgical seasons.
pub mod anchors;

/// `LiturgicalColor`.
pub mod color;

/// Next-major-feast countdown and year progress.
pub mod countdown;

/// Fixed-date feast table and lookup.
pub mod fixed;

/// Movable feast table and matcher.
pub mod movable;

/// Sunday numbering in Ordinary Time.
pub mod ordinal;

/// Liturgical info resolver and the `LiturgicalCalendar` service.
pub mod resolver;

/// Season resolver.
pub mod season;

/// Combined feast tables, JSON loading, and the bundled defaults.
pub mod tables;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use anchors::SeasonAnchors;
pub use color::LiturgicalColor;
pub use countdown::{
    next_major_feast, year_progress, year_progress_percent, MajorFeastCandidate, NextFeast,
};
pub use fixed::{FixedFeastEntry, FixedFeastTable};
pub use movable::{FeastAnchor, MovableFeastEntry, MovableFeastTable};
pub use ordinal::ordinary_time_sunday_name;
pub use resolver::{liturgical_info, InfoSource, LiturgicalCalendar, LiturgicalInfo};
pub use season::{classify_season, Season, SeasonClassification};
pub use tables::FeastTables;
