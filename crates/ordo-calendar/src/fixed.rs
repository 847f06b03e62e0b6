//! Fixed-date feast table and lookup.
//!
//! Fixed feasts are keyed by month and day alone, so one table serves every
//! year.  Lookup is an exact key match; there is no range or nearest-day
//! matching.

use std::collections::HashMap;

use ordo_core::errors::{Error, Result};
use ordo_time::{Date, MonthDay};
use serde::{Deserialize, Serialize};

use crate::color::LiturgicalColor;

/// A feast celebrated on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedFeastEntry {
    /// Display name (e.g. `"Christmas"`).
    pub name: String,
    /// Liturgical color of the day.
    pub color: LiturgicalColor,
}

impl FixedFeastEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, color: LiturgicalColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Fixed feasts keyed by `MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedFeastTable {
    entries: HashMap<MonthDay, FixedFeastEntry>,
}

impl FixedFeastTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object mapping `"MM-DD"` keys to `{name, color}`.
    ///
    /// # Errors
    /// Returns [`Error::Table`] for malformed JSON, a key that is not a valid
    /// month-day, or an unknown color.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self =
            serde_json::from_str(json).map_err(|e| Error::Table(format!("fixed feasts: {e}")))?;
        log::debug!("loaded {} fixed feasts", table.len());
        Ok(table)
    }

    /// Insert or replace the feast on `month_day`.
    pub fn insert(&mut self, month_day: MonthDay, entry: FixedFeastEntry) -> Option<FixedFeastEntry> {
        self.entries.insert(month_day, entry)
    }

    /// Return the feast on `month_day`, if any.
    pub fn get(&self, month_day: MonthDay) -> Option<&FixedFeastEntry> {
        self.entries.get(&month_day)
    }

    /// Return the fixed feast falling on `date`, if any.
    ///
    /// Only the month and day of `date` are considered.
    pub fn lookup(&self, date: Date) -> Option<&FixedFeastEntry> {
        self.get(date.month_day())
    }

    /// Number of feasts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all feasts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&MonthDay, &FixedFeastEntry)> {
        self.entries.iter()
    }
}

impl FromIterator<(MonthDay, FixedFeastEntry)> for FixedFeastTable {
    fn from_iter<I: IntoIterator<Item = (MonthDay, FixedFeastEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
