//! Built-in holiday tables.
//!
//! Each table is a fixed list of `(month, day)` or `(month, day range)`
//! entries read against the civil triple of its own calendar system. No
//! entry is a Gregorian approximation of a lunar or solar date.

use mc_time::{AbsoluteDate, CalendarSystem};

pub mod gregorian;
pub mod hijri;
pub mod jalaali;

pub use gregorian::GregorianHolidays;
pub use hijri::HijriHolidays;
pub use jalaali::JalaaliHolidays;

/// One row of a holiday table: `month`, days `first..=last`, and a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayEntry {
    /// Month (1–12).
    pub month: u8,
    /// First day of the holiday.
    pub first_day: u8,
    /// Last day of the holiday (equal to `first_day` for one-day holidays).
    pub last_day: u8,
    /// Human-readable name.
    pub name: &'static str,
}

impl HolidayEntry {
    /// A one-day holiday.
    pub const fn on(month: u8, day: u8, name: &'static str) -> Self {
        Self {
            month,
            first_day: day,
            last_day: day,
            name,
        }
    }

    /// A holiday spanning `first..=last` of `month`.
    pub const fn span(month: u8, first: u8, last: u8, name: &'static str) -> Self {
        Self {
            month,
            first_day: first,
            last_day: last,
            name,
        }
    }

    /// Whether the civil `(month, day)` falls inside this entry.
    pub fn matches(&self, month: u8, day: u8) -> bool {
        self.month == month && (self.first_day..=self.last_day).contains(&day)
    }
}

/// First entry of `entries` covering `(month, day)`.
pub fn lookup(entries: &[HolidayEntry], month: u8, day: u8) -> Option<&'static str> {
    entries
        .iter()
        .find(|e| e.matches(month, day))
        .map(|e| e.name)
}

/// A built-in holiday table for one calendar system.
pub trait HolidayTable: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Jalaali"`).
    fn name(&self) -> &str;

    /// The calendar system the entries are expressed in.
    fn system(&self) -> CalendarSystem;

    /// The fixed entries of the table.
    fn entries(&self) -> &'static [HolidayEntry];

    /// Name of the holiday falling on `date`, if any.
    fn holiday_name(&self, date: AbsoluteDate) -> Option<&'static str> {
        if !date.is_valid() {
            return None;
        }
        let civil = date.to_civil(self.system());
        lookup(self.entries(), civil.month(), civil.day())
    }

    /// Return `true` if `date` is a holiday in this table.
    fn is_holiday(&self, date: AbsoluteDate) -> bool {
        self.holiday_name(date).is_some()
    }
}

/// The built-in table for `system`.
pub fn builtin(system: CalendarSystem) -> &'static dyn HolidayTable {
    match system {
        CalendarSystem::Gregorian => &GregorianHolidays,
        CalendarSystem::Jalaali => &JalaaliHolidays,
        CalendarSystem::Hijri => &HijriHolidays,
    }
}
