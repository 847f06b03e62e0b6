//! Data formatting helpers.
//!
//! English ordinal numbers (`1st`, `22nd`, `113th`).

/// Return the English ordinal suffix for `n` (e.g. `1` → `"st"`, `2` → `"nd"`).
///
/// Numbers ending in 11, 12, or 13 always take `"th"`.
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Format a number with its ordinal suffix (e.g. `1` → `"1st"`, `22` → `"22nd"`).
pub fn format_ordinal(n: u32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}
