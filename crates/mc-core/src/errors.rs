//! Error types for multicalendar-rs.
//!
//! Almost every calendar operation is lenient: it clamps or returns a zero
//! sentinel so that a rendering path never fails on a half-typed date. The
//! few strict entry points (formatting, strict constructors, strict
//! parsers) report through the single `thiserror`-derived enum defined
//! here. The `ensure!` and `fail!` macros are the shorthand for early
//! returns.

use thiserror::Error;

/// The top-level error type used throughout multicalendar-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date failed validity checking where a valid one was required.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A civil triple or day number lies outside the supported range.
    #[error("conversion out of range: {0}")]
    ConversionOutOfRange(String),

    /// Invalid argument, e.g. an unknown calendar name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout multicalendar-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mc_core::{ensure, errors::Error};
/// fn month(m: u8) -> mc_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::Precondition("month 13 out of range [1, 12]".into()))
/// );
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
/// use mc_core::{fail, errors::Error};
/// fn always_err() -> mc_core::errors::Result<()> {
///     fail!("unsupported pattern {}", "QQ");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("unsupported pattern QQ".into())));
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
            Error::InvalidDate("null date".into()).to_string(),
            "invalid date: null date"
        );
        assert_eq!(
            Error::ConversionOutOfRange("year 10000".into()).to_string(),
            "conversion out of range: year 10000"
        );
    }

    #[test]
    fn ensure_passes_through() {
        fn check(x: i32) -> Result<i32> {
            ensure!(x >= 0, "negative: {x}");
            Ok(x)
        }
        assert_eq!(check(4), Ok(4));
        assert!(matches!(check(-1), Err(Error::Precondition(_))));
    }
}
