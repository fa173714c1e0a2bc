//! Calendar conversion library.
//!
//! Pure functions between civil `(year, month 1–12, day)` triples and the
//! Julian Day Number used as the pivot. Callers are expected to pass
//! normalized triples; out-of-range fields never panic but produce an
//! unspecified (clamped or overflowed-into-next-month) day.

pub mod gregorian;
pub mod hijri;
pub mod jalaali;

use crate::calendar_system::CalendarSystem;

/// Julian Day Number of a civil date in `system`.
pub fn to_jdn(system: CalendarSystem, year: i32, month: u8, day: u8) -> i64 {
    match system {
        CalendarSystem::Gregorian => gregorian::to_jdn(year, month, day),
        CalendarSystem::Jalaali => jalaali::to_jdn(year, month, day),
        CalendarSystem::Hijri => hijri::to_jdn(year, month, day),
    }
}

/// Civil `(year, month 1–12, day)` of a Julian Day Number in `system`.
pub fn from_jdn(system: CalendarSystem, jdn: i64) -> (i32, u8, u8) {
    match system {
        CalendarSystem::Gregorian => gregorian::from_jdn(jdn),
        CalendarSystem::Jalaali => jalaali::from_jdn(jdn),
        CalendarSystem::Hijri => hijri::from_jdn(jdn),
    }
}

/// Number of days in `month` (1–12) of `year` in `system`; `0` for an
/// invalid month.
pub fn month_length(system: CalendarSystem, year: i32, month: u8) -> u8 {
    match system {
        CalendarSystem::Gregorian => gregorian::month_length(year, month),
        CalendarSystem::Jalaali => jalaali::month_length(year, month),
        CalendarSystem::Hijri => hijri::month_length(year, month),
    }
}
