//! Liturgical info resolver and the `LiturgicalCalendar` service.
//!
//! Precedence is fixed: movable feast, then fixed feast, then season.  A
//! fixed feast on December 25 therefore answers before the Christmas-season
//! check runs; both agree on the color under the bundled tables.

use ordo_time::Date;
use serde::{Deserialize, Serialize};

use crate::anchors::SeasonAnchors;
use crate::color::LiturgicalColor;
use crate::countdown::{self, NextFeast};
use crate::season::{classify_with_anchors, Season, SeasonClassification};
use crate::tables::FeastTables;

/// Which stage of the resolver produced a [`LiturgicalInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "season", rename_all = "camelCase")]
pub enum InfoSource {
    /// A movable feast matched.
    MovableFeast,
    /// A fixed-date feast matched.
    FixedFeast,
    /// No feast matched; the season default applies.
    Season(Season),
}

/// The liturgical designation of one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalInfo {
    /// Feast name, or the Ordinary Time Sunday name, or `None`.
    pub name: Option<String>,
    /// Color of the day.
    pub color: LiturgicalColor,
    /// Which stage answered.
    pub source: InfoSource,
}

/// Resolve the liturgical designation of `date` against `tables`.
pub fn liturgical_info(date: Date, tables: &FeastTables) -> LiturgicalInfo {
    resolve(date, &SeasonAnchors::for_year(date.year()), tables)
}

fn resolve(date: Date, anchors: &SeasonAnchors, tables: &FeastTables) -> LiturgicalInfo {
    if let Some(feast) = tables.movable.find_match(date, anchors) {
        log::trace!("{date}: movable feast {:?}", feast.name);
        return LiturgicalInfo {
            name: Some(feast.name.clone()),
            color: feast.color,
            source: InfoSource::MovableFeast,
        };
    }
    if let Some(feast) = tables.fixed.lookup(date) {
        log::trace!("{date}: fixed feast {:?}", feast.name);
        return LiturgicalInfo {
            name: Some(feast.name.clone()),
            color: feast.color,
            source: InfoSource::FixedFeast,
        };
    }
    let SeasonClassification {
        season,
        color,
        display_name,
    } = classify_with_anchors(date, anchors);
    log::trace!("{date}: {season}, {color}");
    LiturgicalInfo {
        name: display_name,
        color,
        source: InfoSource::Season(season),
    }
}

/// A stateless liturgical calendar over a fixed pair of feast tables.
///
/// The tables are owned and never mutated, so a `LiturgicalCalendar` can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct LiturgicalCalendar {
    tables: FeastTables,
}

impl LiturgicalCalendar {
    /// Create a calendar over `tables`.
    pub fn new(tables: FeastTables) -> Self {
        Self { tables }
    }

    /// A calendar over the bundled default tables.
    pub fn standard() -> Self {
        Self::new(FeastTables::standard())
    }

    /// The liturgical designation of `date`.
    pub fn info(&self, date: Date) -> LiturgicalInfo {
        liturgical_info(date, &self.tables)
    }

    /// Designations of every day in `[from, to]`, in order.
    ///
    /// Anchors are computed once per civil year in the range.
    pub fn range(&self, from: Date, to: Date) -> Vec<(Date, LiturgicalInfo)> {
        let mut out = Vec::with_capacity((to - from + 1).max(0) as usize);
        let mut anchors = SeasonAnchors::for_year(from.year());
        let mut d = from;
        while d <= to {
            if d.year() != anchors.year {
                anchors = SeasonAnchors::for_year(d.year());
            }
            out.push((d, resolve(d, &anchors, &self.tables)));
            d += 1;
        }
        out
    }

    /// The season of `date`, ignoring the feast tables.
    pub fn classify_season(&self, date: Date) -> SeasonClassification {
        classify_with_anchors(date, &SeasonAnchors::for_year(date.year()))
    }

    /// The next Christmas or Easter strictly after `from`.
    pub fn next_major_feast(&self, from: Date) -> NextFeast {
        countdown::next_major_feast(from)
    }

    /// How far through its civil year `date` is, as a whole percentage.
    pub fn year_progress_percent(&self, date: Date) -> u8 {
        countdown::year_progress_percent(date)
    }
}
