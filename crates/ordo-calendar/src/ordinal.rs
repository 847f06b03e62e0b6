//! Sunday numbering in Ordinary Time.
//!
//! Ordinary Time runs twice a year: from the Baptism of the Lord to Ash
//! Wednesday, and from Pentecost to Advent.  A Sunday's number counts the
//! whole weeks elapsed since the start of its span, plus one.

use ordo_core::utilities::data_formatters::format_ordinal;
use ordo_time::Date;

use crate::anchors::SeasonAnchors;

/// Return the ordinal of an Ordinary Time Sunday (`2` for the Sunday after
/// the Baptism of the Lord).
///
/// Returns `None` if `date` is not a Sunday or lies outside both Ordinary
/// Time spans of its year.
pub fn ordinary_time_sunday(date: Date, anchors: &SeasonAnchors) -> Option<u32> {
    if !date.weekday().is_sunday() {
        return None;
    }
    let start = if anchors.baptism_of_the_lord < date && date < anchors.ash_wednesday {
        anchors.baptism_of_the_lord
    } else if anchors.pentecost < date && date < anchors.first_advent_sunday {
        anchors.pentecost
    } else {
        return None;
    };
    Some(((date - start) / 7 + 1) as u32)
}

/// Return `"{N} Sunday in Ordinary Time"` for an Ordinary Time Sunday.
pub fn ordinary_time_sunday_name(date: Date, anchors: &SeasonAnchors) -> Option<String> {
    ordinary_time_sunday(date, anchors).map(|n| format!("{} Sunday in Ordinary Time", format_ordinal(n)))
}
