//! Movable feast table and matcher.
//!
//! A movable feast is anchored either to Easter Sunday (a signed day
//! offset) or to the Sunday immediately preceding Advent.  Matching
//! resolves each entry's date in the query date's year and returns the
//! first entry, in table order, that falls on the query date.

use std::ops::RangeInclusive;

use indexmap::{IndexMap, IndexSet};
use ordo_core::errors::{Error, Result};
use ordo_core::{ensure, fail};
use ordo_time::Date;
use serde::{Deserialize, Serialize};

use crate::anchors::SeasonAnchors;
use crate::color::LiturgicalColor;

/// What a movable feast's date is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeastAnchor {
    /// A signed number of days from Easter Sunday (Good Friday is `-2`).
    EasterOffset(i32),
    /// The Sunday immediately preceding the first Sunday of Advent.
    BeforeAdvent,
}

impl FeastAnchor {
    /// Resolve the anchor to a concrete date in the year of `anchors`.
    ///
    /// `None` if an Easter offset lands outside the representable years.
    pub fn resolve(&self, anchors: &SeasonAnchors) -> Option<Date> {
        match *self {
            FeastAnchor::EasterOffset(days) => anchors.easter.add_days(days).ok(),
            FeastAnchor::BeforeAdvent => Some(anchors.sunday_before_advent),
        }
    }
}

/// A feast whose date moves from year to year.
///
/// Deserialized from `{name, color, offset}` or
/// `{name, color, anchoredBeforeAdvent: true}`; exactly one anchor must be
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMovableFeast", into = "RawMovableFeast")]
pub struct MovableFeastEntry {
    /// Display name (e.g. `"Good Friday"`).
    pub name: String,
    /// Liturgical color of the day.
    pub color: LiturgicalColor,
    /// How the date is found each year.
    pub anchor: FeastAnchor,
}

impl MovableFeastEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, color: LiturgicalColor, anchor: FeastAnchor) -> Self {
        Self {
            name: name.into(),
            color,
            anchor,
        }
    }

    /// The date of this feast in the year of `anchors`.
    pub fn date_in(&self, anchors: &SeasonAnchors) -> Option<Date> {
        self.anchor.resolve(anchors)
    }
}

/// Years scanned at load time for entries that land on the same day.
const COLLISION_SCAN_YEARS: RangeInclusive<i32> = 1900..=2299;

/// Wire form of a movable feast, before the anchor is validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMovableFeast {
    name: String,
    color: LiturgicalColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    offset: Option<i32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    anchored_before_advent: bool,
}

impl TryFrom<RawMovableFeast> for MovableFeastEntry {
    type Error = Error;

    fn try_from(raw: RawMovableFeast) -> Result<Self> {
        let anchor = match (raw.offset, raw.anchored_before_advent) {
            (Some(days), false) => FeastAnchor::EasterOffset(days),
            (None, true) => FeastAnchor::BeforeAdvent,
            (Some(_), true) => fail!("{:?} has both an offset and anchoredBeforeAdvent", raw.name),
            (None, false) => fail!("{:?} has no anchor", raw.name),
        };
        ensure!(!raw.name.trim().is_empty(), "movable feast name must not be empty");
        Ok(Self {
            name: raw.name,
            color: raw.color,
            anchor,
        })
    }
}

impl From<MovableFeastEntry> for RawMovableFeast {
    fn from(entry: MovableFeastEntry) -> Self {
        let (offset, anchored_before_advent) = match entry.anchor {
            FeastAnchor::EasterOffset(days) => (Some(days), false),
            FeastAnchor::BeforeAdvent => (None, true),
        };
        Self {
            name: entry.name,
            color: entry.color,
            offset,
            anchored_before_advent,
        }
    }
}

/// Movable feasts in table order, keyed by an identifier such as
/// `"goodFriday"`.
///
/// Table order is the tie-break when two entries resolve to the same date;
/// the table is never reordered or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovableFeastTable {
    entries: IndexMap<String, MovableFeastEntry>,
}

impl MovableFeastTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object mapping feast keys to movable feast entries,
    /// preserving the document's key order.
    ///
    /// # Errors
    /// Returns [`Error::Table`] for malformed JSON, an entry without exactly
    /// one anchor, or an unknown color.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self =
            serde_json::from_str(json).map_err(|e| Error::Table(format!("movable feasts: {e}")))?;
        log::debug!("loaded {} movable feasts", table.len());
        table.warn_shadowed();
        Ok(table)
    }

    /// Append a feast (or replace the one with the same key, keeping its
    /// position).
    pub fn push(&mut self, key: impl Into<String>, entry: MovableFeastEntry) -> Option<MovableFeastEntry> {
        self.entries.insert(key.into(), entry)
    }

    /// Return the feast with the given key.
    pub fn get(&self, key: &str) -> Option<&MovableFeastEntry> {
        self.entries.get(key)
    }

    /// Return the first feast, in table order, that falls on `date` in the
    /// year described by `anchors`.
    pub fn find_match(&self, date: Date, anchors: &SeasonAnchors) -> Option<&MovableFeastEntry> {
        self.entries.values().find(|entry| entry.date_in(anchors) == Some(date))
    }

    /// Return the first feast falling on `date`, given that year's Easter.
    pub fn match_date(&self, date: Date, easter: Date) -> Option<&MovableFeastEntry> {
        self.find_match(date, &SeasonAnchors::with_easter(date.year(), easter))
    }

    /// Number of feasts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, entry)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MovableFeastEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Pairs `(earlier, later)` of keys whose dates coincide in at least
    /// one year of 1900–2299; on those days only `earlier` can match.
    pub fn shadowed(&self) -> Vec<(&str, &str)> {
        let mut pairs = IndexSet::new();
        for year in COLLISION_SCAN_YEARS {
            let anchors = SeasonAnchors::for_year(year);
            let dates: Vec<_> = self.entries.values().map(|e| e.date_in(&anchors)).collect();
            for (i, date) in dates.iter().enumerate() {
                if date.is_none() {
                    continue;
                }
                if let Some(first) = dates[..i].iter().position(|d| d == date) {
                    pairs.insert((first, i));
                }
            }
        }
        let key = |i: usize| self.entries.get_index(i).map_or("", |(k, _)| k.as_str());
        pairs.into_iter().map(|(a, b)| (key(a), key(b))).collect()
    }

    pub(crate) fn warn_shadowed(&self) {
        for (earlier, later) in self.shadowed() {
            log::warn!("movable feast {later:?} can fall on the same day as {earlier:?} and is shadowed there");
        }
    }
}

impl<K: Into<String>> FromIterator<(K, MovableFeastEntry)> for MovableFeastTable {
    fn from_iter<I: IntoIterator<Item = (K, MovableFeastEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    const TABLE: &str = r#"{
        "goodFriday": { "name": "Good Friday", "color": "red", "offset": -2 },
        "christTheKing": { "name": "Christ the King", "color": "white", "anchoredBeforeAdvent": true }
    }"#;

    #[test]
    fn parses_both_anchor_kinds() {
        let table = MovableFeastTable::from_json(TABLE).unwrap();
        assert_eq!(table.get("goodFriday").unwrap().anchor, FeastAnchor::EasterOffset(-2));
        assert_eq!(table.get("christTheKing").unwrap().anchor, FeastAnchor::BeforeAdvent);
        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["goodFriday", "christTheKing"]);
    }

    #[test]
    fn matches_resolved_dates() {
        let table = MovableFeastTable::from_json(TABLE).unwrap();
        let anchors = SeasonAnchors::for_year(2025);
        assert_eq!(
            table.find_match(date(2025, 4, 18), &anchors).unwrap().name,
            "Good Friday"
        );
        assert_eq!(
            table.find_match(date(2025, 11, 23), &anchors).unwrap().name,
            "Christ the King"
        );
        assert!(table.find_match(date(2025, 4, 19), &anchors).is_none());
    }

    #[test]
    fn match_date_from_easter_alone() {
        let table = MovableFeastTable::from_json(TABLE).unwrap();
        let easter = date(2024, 3, 31);
        assert_eq!(
            table.match_date(date(2024, 3, 29), easter).unwrap().name,
            "Good Friday"
        );
        // Advent 2024 begins Dec 1.
        assert_eq!(
            table.match_date(date(2024, 11, 24), easter).unwrap().name,
            "Christ the King"
        );
        assert!(table.match_date(date(2024, 3, 31), easter).is_none());
    }

    #[test]
    fn huge_offset_never_matches() {
        let table = MovableFeastTable::from_json(
            r#"{ "x": { "name": "X", "color": "red", "offset": 2147483000 },
                 "y": { "name": "Y", "color": "red", "offset": -2147483000 } }"#,
        )
        .unwrap();
        let anchors = SeasonAnchors::for_year(2025);
        assert_eq!(table.get("x").unwrap().date_in(&anchors), None);
        assert!(table.find_match(date(2025, 7, 9), &anchors).is_none());
        assert!(table.shadowed().is_empty());
    }

    #[test]
    fn reports_entries_that_share_a_day() {
        let table: MovableFeastTable = [
            ("christTheKing", MovableFeastEntry::new("Christ the King", LiturgicalColor::White, FeastAnchor::BeforeAdvent)),
            ("goodFriday", MovableFeastEntry::new("Good Friday", LiturgicalColor::Red, FeastAnchor::EasterOffset(-2))),
            ("kingAgain", MovableFeastEntry::new("King Again", LiturgicalColor::White, FeastAnchor::BeforeAdvent)),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.shadowed(), [("christTheKing", "kingAgain")]);

        // Easter + 231 is the Sunday before Advent only in some years.
        let sometimes: MovableFeastTable = [
            ("christTheKing", MovableFeastEntry::new("Christ the King", LiturgicalColor::White, FeastAnchor::BeforeAdvent)),
            ("lateSunday", MovableFeastEntry::new("Late Sunday", LiturgicalColor::Green, FeastAnchor::EasterOffset(231))),
        ]
        .into_iter()
        .collect();
        assert_eq!(sometimes.shadowed(), [("christTheKing", "lateSunday")]);

        assert!(MovableFeastTable::from_json(TABLE).unwrap().shadowed().is_empty());
    }

    #[test]
    fn rejects_ambiguous_or_missing_anchor() {
        let both = r#"{ "x": { "name": "X", "color": "red", "offset": 1, "anchoredBeforeAdvent": true } }"#;
        assert!(matches!(MovableFeastTable::from_json(both), Err(Error::Table(_))));
        let neither = r#"{ "x": { "name": "X", "color": "red" } }"#;
        assert!(matches!(MovableFeastTable::from_json(neither), Err(Error::Table(_))));
        let explicit_false = r#"{ "x": { "name": "X", "color": "red", "anchoredBeforeAdvent": false } }"#;
        assert!(matches!(MovableFeastTable::from_json(explicit_false), Err(Error::Table(_))));
    }

    #[test]
    fn serializes_to_wire_form() {
        let entry = MovableFeastEntry::new("Christ the King", LiturgicalColor::White, FeastAnchor::BeforeAdvent);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Christ the King","color":"white","anchoredBeforeAdvent":true}"#);
        let entry = MovableFeastEntry::new("Good Friday", LiturgicalColor::Red, FeastAnchor::EasterOffset(-2));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Good Friday","color":"red","offset":-2}"#);
    }
}
