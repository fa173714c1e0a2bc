//! # mc-time
//!
//! Absolute dates, the Gregorian / Jalaali / Hijri conversion library, and
//! the multi-calendar date adapter.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `AbsoluteDate`: calendar-independent day value.
pub mod absolute_date;

/// `CalendarAdapter`: field access, arithmetic and formatting per system.
pub mod adapter;

/// `CalendarSystem`, `StartOfWeek` and name tables.
pub mod calendar_system;

/// `CalendarUnit`: days, weeks, months, years.
pub mod calendar_unit;

/// `CivilDate`: a year/month/day triple in one system.
pub mod civil_date;

/// Pure conversions between civil triples and day numbers.
pub mod conversion;

/// `DateRange`: inclusive span of days.
pub mod date_range;

/// Pattern formatting.
pub mod format;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use absolute_date::AbsoluteDate;
pub use adapter::CalendarAdapter;
pub use calendar_system::{CalendarSystem, NameStyle, StartOfWeek};
pub use calendar_unit::CalendarUnit;
pub use civil_date::CivilDate;
pub use date_range::DateRange;
pub use weekday::Weekday;
