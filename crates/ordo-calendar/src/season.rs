//! Season resolver.
//!
//! Ranges are checked in a fixed order and the first match wins:
//!
//! 1. Christmas — Dec 25 through the Baptism of the Lord, on either side of
//!    New Year (white).
//! 2. Advent — first Sunday of Advent through Dec 24 (violet; Gaudete
//!    Sunday rose).
//! 3. Lent — Ash Wednesday through Holy Saturday (violet; Laetare Sunday
//!    rose).
//! 4. Easter — Easter Sunday through Pentecost (white).
//! 5. Ordinary Time — everything else (green); Sundays are numbered.

use ordo_time::Date;
use serde::{Deserialize, Serialize};

use crate::anchors::SeasonAnchors;
use crate::color::LiturgicalColor;
use crate::ordinal::ordinary_time_sunday_name;

/// A liturgical season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Advent.
    Advent,
    /// Christmas.
    Christmas,
    /// Lent.
    Lent,
    /// Easter.
    Easter,
    /// Ordinary Time.
    #[serde(rename = "Ordinary Time")]
    OrdinaryTime,
}

impl Season {
    /// Return the display name (`"Ordinary Time"` for [`Season::OrdinaryTime`]).
    pub fn name(&self) -> &'static str {
        match self {
            Season::Advent => "Advent",
            Season::Christmas => "Christmas",
            Season::Lent => "Lent",
            Season::Easter => "Easter",
            Season::OrdinaryTime => "Ordinary Time",
        }
    }

    /// The season's default color, before rose-Sunday exceptions.
    pub fn default_color(&self) -> LiturgicalColor {
        match self {
            Season::Advent | Season::Lent => LiturgicalColor::Violet,
            Season::Christmas | Season::Easter => LiturgicalColor::White,
            Season::OrdinaryTime => LiturgicalColor::Green,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The season a date falls in, with its color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonClassification {
    /// The season.
    pub season: Season,
    /// Color of the day (rose on Gaudete and Laetare Sundays).
    pub color: LiturgicalColor,
    /// `"Nth Sunday in Ordinary Time"` on Ordinary Time Sundays, otherwise
    /// `None`.
    pub display_name: Option<String>,
}

impl SeasonClassification {
    fn plain(season: Season, color: LiturgicalColor) -> Self {
        Self {
            season,
            color,
            display_name: None,
        }
    }
}

/// Classify `date` into its season, given the Easter date of its year.
pub fn classify_season(date: Date, easter: Date) -> SeasonClassification {
    classify_with_anchors(date, &SeasonAnchors::with_easter(date.year(), easter))
}

/// Classify `date` using precomputed anchors of its year.
pub fn classify_with_anchors(date: Date, a: &SeasonAnchors) -> SeasonClassification {
    let within = |from: Date, to: Date| from <= date && date <= to;

    if within(a.previous_christmas, a.baptism_of_the_lord)
        || within(a.christmas, a.next_baptism_of_the_lord)
    {
        return SeasonClassification::plain(Season::Christmas, LiturgicalColor::White);
    }
    if within(a.first_advent_sunday, a.christmas_eve) {
        let color = if date == a.gaudete_sunday {
            LiturgicalColor::Rose
        } else {
            LiturgicalColor::Violet
        };
        return SeasonClassification::plain(Season::Advent, color);
    }
    if within(a.ash_wednesday, a.holy_saturday) {
        let color = if date == a.laetare_sunday {
            LiturgicalColor::Rose
        } else {
            LiturgicalColor::Violet
        };
        return SeasonClassification::plain(Season::Lent, color);
    }
    if within(a.easter, a.pentecost) {
        return SeasonClassification::plain(Season::Easter, LiturgicalColor::White);
    }
    SeasonClassification {
        season: Season::OrdinaryTime,
        color: LiturgicalColor::Green,
        display_name: ordinary_time_sunday_name(date, a),
    }
}
