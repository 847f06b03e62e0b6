//! Miscellaneous utilities.

/// Formatting helpers for ordinal numbers.
pub mod data_formatters;

/// Parsing helpers for date strings and month-day keys.
pub mod data_parsers;
