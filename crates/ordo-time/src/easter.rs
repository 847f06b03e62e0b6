//! Easter Sunday computus.
//!
//! Implements the anonymous Gregorian algorithm (Meeus/Jones/Butcher): a
//! fixed sequence of integer divisions and remainders on the year, with no
//! loops and no failure path.  Every other movable date of the liturgical
//! year is an offset from the result.
//!
//! The Gregorian rules took effect in 1583; earlier years still produce a
//! well-defined (proleptic) answer.

use crate::date::Date;

/// Return the `(month, day)` of Easter Sunday in the Gregorian calendar.
///
/// The month is always 3 (March) or 4 (April).
pub fn easter_month_day(year: i32) -> (u8, u8) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    // Epact-derived distance from March 21 to the paschal full moon.
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    // Days from the full moon to the following Sunday.
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

/// Return the date of Easter Sunday for `year`.
///
/// ```
/// use ordo_time::{easter_sunday, Date};
///
/// assert_eq!(easter_sunday(2024), Date::from_ymd(2024, 3, 31).unwrap());
/// assert_eq!(easter_sunday(2025), Date::from_ymd(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> Date {
    let (month, day) = easter_month_day(year);
    Date::from_ymd_unchecked(year, month, day)
}
