//! Error types for ordo.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  Validation at constructor and loader
//! boundaries goes through the [`ensure!`](crate::ensure) and
//! [`fail!`](crate::fail) macros defined here.
//!
//! Liturgical classification itself never fails: missing table data
//! degrades to "no match" instead of producing an error.

use thiserror::Error;

/// The top-level error type used throughout ordo.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// A string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// A feast table could not be loaded.
    #[error("feast table error: {0}")]
    Table(String),
}

/// Shorthand `Result` type used throughout ordo.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ordo_core::{ensure, errors::Error};
/// fn positive(x: i32) -> ordo_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ordo_core::{fail, errors::Error};
/// fn always_err() -> ordo_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("something went wrong".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Date("month 13 out of range [1, 12]".into()).to_string(),
            "date error: month 13 out of range [1, 12]"
        );
        assert_eq!(
            Error::Table("missing anchor".into()).to_string(),
            "feast table error: missing anchor"
        );
    }

    #[test]
    fn ensure_passes_through() {
        fn check(n: u8) -> Result<u8> {
            ensure!(n < 10, "n too large: {n}");
            Ok(n)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(12),
            Err(Error::Precondition("n too large: 12".into()))
        );
    }
}
