//! `LiturgicalColor` — the vestment color of a day.

use std::str::FromStr;

use ordo_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Liturgical color.
///
/// Serialized, parsed, and displayed by its lowercase English name
/// (`"violet"`, `"rose"`, …).  How a color is rendered is left to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiturgicalColor {
    /// Ordinary Time.
    #[default]
    Green,
    /// Advent and Lent.
    Violet,
    /// Christmas, Easter, and feasts of the Lord, Mary, and non-martyr saints.
    White,
    /// Passion, Pentecost, and martyrs.
    Red,
    /// Gaudete and Laetare Sundays.
    Rose,
    /// All Souls and funerals.
    Black,
}

impl LiturgicalColor {
    /// All six colors.
    pub const ALL: [LiturgicalColor; 6] = [
        LiturgicalColor::Green,
        LiturgicalColor::Violet,
        LiturgicalColor::White,
        LiturgicalColor::Red,
        LiturgicalColor::Rose,
        LiturgicalColor::Black,
    ];

    /// Return the lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            LiturgicalColor::Green => "green",
            LiturgicalColor::Violet => "violet",
            LiturgicalColor::White => "white",
            LiturgicalColor::Red => "red",
            LiturgicalColor::Rose => "rose",
            LiturgicalColor::Black => "black",
        }
    }
}

impl FromStr for LiturgicalColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LiturgicalColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Parse(format!("unknown liturgical color {s:?}")))
    }
}

impl std::fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for c in LiturgicalColor::ALL {
            assert_eq!(c.to_string().parse::<LiturgicalColor>().unwrap(), c);
        }
        assert_eq!("Rose".parse::<LiturgicalColor>().unwrap(), LiturgicalColor::Rose);
        assert!("purple".parse::<LiturgicalColor>().is_err());
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&LiturgicalColor::Violet).unwrap(), "\"violet\"");
        assert_eq!(
            serde_json::from_str::<LiturgicalColor>("\"black\"").unwrap(),
            LiturgicalColor::Black
        );
        assert!(serde_json::from_str::<LiturgicalColor>("\"purple\"").is_err());
    }

    #[test]
    fn default_is_green() {
        assert_eq!(LiturgicalColor::default(), LiturgicalColor::Green);
    }
}
