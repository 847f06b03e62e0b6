//! Per-year boundary dates of the liturgical seasons.
//!
//! Everything the season resolver, the movable-feast matcher, and the
//! Sunday numbering need is derived here once from the civil year and its
//! Easter date.

use ordo_time::{easter_sunday, Date, Weekday};

/// Days from Ash Wednesday to Easter Sunday.
pub const ASH_WEDNESDAY_OFFSET: i32 = -46;

/// Days from Laetare Sunday (4th Sunday of Lent) to Easter Sunday.
pub const LAETARE_OFFSET: i32 = -21;

/// Days from Easter Sunday to Pentecost.
pub const PENTECOST_OFFSET: i32 = 49;

/// Days from the Sunday before Advent to the first Sunday of Advent.
pub const BEFORE_ADVENT_OFFSET: i32 = -7;

/// December 25 of `year`.
pub fn christmas(year: i32) -> Date {
    Date::start_of_year(year + 1) - 7
}

/// Baptism of the Lord: the Sunday after Epiphany (January 6).
///
/// When Epiphany itself is a Sunday, the Baptism is the following Sunday.
pub fn baptism_of_the_lord(year: i32) -> Date {
    let epiphany = Date::start_of_year(year) + 5;
    epiphany.next_weekday_after(Weekday::Sunday)
}

/// First Sunday of Advent: the fourth Sunday before Christmas.
///
/// Found by stepping back from December 25 to the preceding Sunday (the
/// fourth Sunday of Advent) and then three more weeks.
pub fn first_sunday_of_advent(year: i32) -> Date {
    christmas(year).previous_weekday_before(Weekday::Sunday) - 21
}

/// The boundary dates of one civil year's liturgical seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonAnchors {
    /// The civil year.
    pub year: i32,
    /// December 25 of the previous year.
    pub previous_christmas: Date,
    /// Baptism of the Lord, end of the Christmas season begun last year.
    pub baptism_of_the_lord: Date,
    /// Ash Wednesday, first day of Lent.
    pub ash_wednesday: Date,
    /// Fourth Sunday of Lent (rose).
    pub laetare_sunday: Date,
    /// Holy Saturday, last day of Lent.
    pub holy_saturday: Date,
    /// Easter Sunday.
    pub easter: Date,
    /// Pentecost, last day of the Easter season.
    pub pentecost: Date,
    /// The Sunday immediately preceding Advent.
    pub sunday_before_advent: Date,
    /// First Sunday of Advent.
    pub first_advent_sunday: Date,
    /// Third Sunday of Advent (rose).
    pub gaudete_sunday: Date,
    /// December 24, last day of Advent.
    pub christmas_eve: Date,
    /// December 25.
    pub christmas: Date,
    /// Baptism of the Lord of the next year, end of this year's Christmas
    /// season.
    pub next_baptism_of_the_lord: Date,
}

impl SeasonAnchors {
    /// Compute the anchors of `year`, deriving its Easter date.
    pub fn for_year(year: i32) -> Self {
        Self::with_easter(year, easter_sunday(year))
    }

    /// Compute the anchors of `year` around an already-known Easter date.
    pub fn with_easter(year: i32, easter: Date) -> Self {
        let first_advent_sunday = first_sunday_of_advent(year);
        let christmas_day = christmas(year);
        Self {
            year,
            previous_christmas: christmas(year - 1),
            baptism_of_the_lord: baptism_of_the_lord(year),
            ash_wednesday: easter + ASH_WEDNESDAY_OFFSET,
            laetare_sunday: easter + LAETARE_OFFSET,
            holy_saturday: easter - 1,
            easter,
            pentecost: easter + PENTECOST_OFFSET,
            sunday_before_advent: first_advent_sunday + BEFORE_ADVENT_OFFSET,
            first_advent_sunday,
            gaudete_sunday: first_advent_sunday + 14,
            christmas_eve: christmas_day - 1,
            christmas: christmas_day,
            next_baptism_of_the_lord: baptism_of_the_lord(year + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn advent_2023() {
        // Christmas 2023 is a Monday; Advent IV is Christmas Eve.
        assert_eq!(first_sunday_of_advent(2023), date(2023, 12, 3));
    }

    #[test]
    fn advent_when_christmas_is_sunday() {
        // Christmas 2022 is a Sunday; Advent IV is December 18.
        assert_eq!(first_sunday_of_advent(2022), date(2022, 11, 27));
    }

    #[test]
    fn baptism_dates() {
        // Epiphany 2025 is a Monday
        assert_eq!(baptism_of_the_lord(2025), date(2025, 1, 12));
        // Epiphany 2019 is a Sunday: Baptism the following Sunday
        assert_eq!(baptism_of_the_lord(2019), date(2019, 1, 13));
        // Epiphany 2024 is a Saturday
        assert_eq!(baptism_of_the_lord(2024), date(2024, 1, 7));
    }

    #[test]
    fn anchors_2025() {
        let a = SeasonAnchors::for_year(2025);
        assert_eq!(a.easter, date(2025, 4, 20));
        assert_eq!(a.ash_wednesday, date(2025, 3, 5));
        assert_eq!(a.laetare_sunday, date(2025, 3, 30));
        assert_eq!(a.holy_saturday, date(2025, 4, 19));
        assert_eq!(a.pentecost, date(2025, 6, 8));
        assert_eq!(a.first_advent_sunday, date(2025, 11, 30));
        assert_eq!(a.sunday_before_advent, date(2025, 11, 23));
        assert_eq!(a.gaudete_sunday, date(2025, 12, 14));
        assert_eq!(a.previous_christmas, date(2024, 12, 25));
        assert_eq!(a.next_baptism_of_the_lord, date(2026, 1, 11));
    }
}
