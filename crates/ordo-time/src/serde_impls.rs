//! `serde` support: dates serialize as `YYYY-MM-DD` strings and month-days
//! as `MM-DD` strings.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;
use crate::month_day::MonthDay;

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_as_string() {
        let d = Date::from_ymd(2024, 12, 25).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-12-25\"");
        assert_eq!(serde_json::from_str::<Date>("\"2024-12-25\"").unwrap(), d);
        assert!(serde_json::from_str::<Date>("\"2024-13-25\"").is_err());
    }

    #[test]
    fn month_day_as_string() {
        let md: MonthDay = serde_json::from_str("\"08-15\"").unwrap();
        assert_eq!(md.to_string(), "08-15");
        assert_eq!(serde_json::to_string(&md).unwrap(), "\"08-15\"");
    }
}
