//! Conversions between [`Date`] and `chrono::NaiveDate`, and reading the
//! local calendar date.

use chrono::{Datelike, NaiveDate};

use crate::date::Date;
use ordo_core::errors::{Error, Result};

impl Date {
    /// Today's date in the local time zone, reduced to a calendar day.
    ///
    /// This is the only place in the workspace that reads the clock.
    pub fn today() -> Self {
        Date::try_from(chrono::Local::now().date_naive())
            .expect("the system clock reads a year between 1 and 9999")
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    /// chrono's day count from the common era is our serial number.
    fn try_from(d: NaiveDate) -> Result<Self> {
        Date::from_serial(d.num_days_from_ce())
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        NaiveDate::from_num_days_from_ce_opt(d.serial())
            .ok_or_else(|| Error::Date(format!("{d} is outside chrono's range")))
    }
}
