//! Next-major-feast countdown and year progress.

use ordo_time::date::days_in_year;
use ordo_time::{easter_sunday, Date};
use serde::Serialize;

use crate::anchors::christmas;

/// A major feast considered for the countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorFeastCandidate {
    /// `"Christmas"` or `"Easter"`.
    pub name: &'static str,
    /// Date of the feast.
    pub date: Date,
}

/// The upcoming major feast and the number of days until it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextFeast {
    /// `"Christmas"` or `"Easter"`.
    pub name: &'static str,
    /// Date of the feast.
    pub date: Date,
    /// Whole calendar days from the reference date (at least 1).
    pub days_until: u32,
}

/// Christmas and Easter of the year of `from` and of the next year.
pub fn major_feast_candidates(from: Date) -> [MajorFeastCandidate; 4] {
    let year = from.year();
    [
        MajorFeastCandidate {
            name: "Christmas",
            date: christmas(year),
        },
        MajorFeastCandidate {
            name: "Easter",
            date: easter_sunday(year),
        },
        MajorFeastCandidate {
            name: "Christmas",
            date: christmas(year + 1),
        },
        MajorFeastCandidate {
            name: "Easter",
            date: easter_sunday(year + 1),
        },
    ]
}

/// The earliest major feast strictly after `from`.
///
/// On Christmas Day itself the countdown moves on to the next Easter.
pub fn next_major_feast(from: Date) -> NextFeast {
    let mut upcoming: Vec<_> = major_feast_candidates(from)
        .into_iter()
        .filter(|c| c.date > from)
        .collect();
    upcoming.sort_by_key(|c| c.date);
    let next = upcoming
        .into_iter()
        .next()
        .expect("Christmas of the next year is always upcoming");
    NextFeast {
        name: next.name,
        date: next.date,
        days_until: (next.date - from) as u32,
    }
}

/// Fraction of the civil year elapsed at the start of `date`, in `[0, 1)`.
pub fn year_progress(date: Date) -> f64 {
    let year = date.year();
    let elapsed = date - Date::start_of_year(year);
    f64::from(elapsed) / f64::from(days_in_year(year))
}

/// [`year_progress`] rounded to a whole percentage (0–100).
pub fn year_progress_percent(date: Date) -> u8 {
    (year_progress(date) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_comes_first_in_spring() {
        let next = next_major_feast(date(2025, 3, 1));
        assert_eq!(next.name, "Easter");
        assert_eq!(next.date, date(2025, 4, 20));
        assert_eq!(next.days_until, 50);
    }

    #[test]
    fn christmas_after_easter() {
        let next = next_major_feast(date(2025, 4, 20));
        assert_eq!(next.name, "Christmas");
        assert_eq!(next.date, date(2025, 12, 25));
        assert_eq!(next.days_until, 249);
    }

    #[test]
    fn progress_fraction() {
        assert_relative_eq!(year_progress(date(2025, 1, 1)), 0.0);
        assert_relative_eq!(year_progress(date(2025, 7, 2)), 182.0 / 365.0);
        assert_relative_eq!(year_progress(date(2024, 12, 31)), 365.0 / 366.0);
    }
}
