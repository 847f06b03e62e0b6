//! Data parsing helpers.
//!
//! Dates arrive as ISO 8601 strings (`YYYY-MM-DD`) and fixed-feast keys as
//! zero-padded month-day strings (`MM-DD`).  These functions only split and
//! convert the numeric fields; range validation belongs to the date types.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(i32, u8, u8)> {
    let s = s.trim();
    let mut parts = s.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    Some((year, month, day))
}

/// Parse a month-day key in `MM-DD` format (e.g. `"12-25"`).
///
/// Both fields must be exactly two digits.  Returns `(month, day)` on
/// success.
pub fn parse_month_day(s: &str) -> Option<(u8, u8)> {
    let (m, d) = s.trim().split_once('-')?;
    if m.len() != 2 || d.len() != 2 {
        return None;
    }
    if !m.bytes().chain(d.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((m.parse().ok()?, d.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-03-15"), Some((2024, 3, 15)));
        assert_eq!(parse_iso_date(" 1999-12-31 "), Some((1999, 12, 31)));
        assert_eq!(parse_iso_date("2024-03"), None);
        assert_eq!(parse_iso_date("2024/03/15"), None);
        assert_eq!(parse_iso_date("2024-03-15-01"), None);
        assert_eq!(parse_iso_date("abc"), None);
    }

    #[test]
    fn test_parse_month_day() {
        assert_eq!(parse_month_day("12-25"), Some((12, 25)));
        assert_eq!(parse_month_day("01-06"), Some((1, 6)));
        assert_eq!(parse_month_day("1-6"), None);
        assert_eq!(parse_month_day("12/25"), None);
        assert_eq!(parse_month_day("+1-06"), None);
        assert_eq!(parse_month_day("12-25-2024"), None);
    }
}
