//! Combined feast tables, JSON loading, and the bundled defaults.

use ordo_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::fixed::FixedFeastTable;
use crate::movable::MovableFeastTable;

/// Default Roman-calendar feasts shipped with the crate.
const STANDARD_FEASTS: &str = include_str!("../data/feasts.json");

/// The fixed and movable feast tables used for classification.
///
/// Either section may be absent in a document; an absent section is an
/// empty table and simply never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeastTables {
    /// Feasts keyed by `MM-DD`.
    pub fixed: FixedFeastTable,
    /// Feasts anchored to Easter or Advent, in priority order.
    pub movable: MovableFeastTable,
}

impl FeastTables {
    /// Combine two tables.
    pub fn new(fixed: FixedFeastTable, movable: MovableFeastTable) -> Self {
        Self { fixed, movable }
    }

    /// Tables with no feasts: every date classifies by season alone.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The bundled default tables.
    pub fn standard() -> Self {
        Self::from_json(STANDARD_FEASTS).expect("bundled feast tables are valid")
    }

    /// Parse a document of the form `{"fixed": {...}, "movable": {...}}`.
    ///
    /// # Errors
    /// Returns [`Error::Table`] if the document is not a JSON object, has a
    /// section other than `fixed` or `movable`, or any entry is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        // serde also accepts a struct written as a JSON array.
        if !json.trim_start().starts_with('{') {
            return Err(Error::Table("feast tables: expected a JSON object".into()));
        }
        let tables: Self =
            serde_json::from_str(json).map_err(|e| Error::Table(format!("feast tables: {e}")))?;
        log::debug!(
            "loaded {} fixed and {} movable feasts",
            tables.fixed.len(),
            tables.movable.len()
        );
        tables.movable.warn_shadowed();
        Ok(tables)
    }

    /// Serialize back to the JSON document form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Table(e.to_string()))
    }
}
