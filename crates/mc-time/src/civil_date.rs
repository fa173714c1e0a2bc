//! `CivilDate`: a (year, month, day) triple read in one calendar system.

use mc_core::errors::{Error, Result};
use tracing::trace;

use crate::absolute_date::AbsoluteDate;
use crate::calendar_system::CalendarSystem;
use crate::conversion;

/// A civil date: `(year, month 1–12, day)` interpreted under a specific
/// [`CalendarSystem`].
///
/// The same [`AbsoluteDate`] yields a different `CivilDate` in each system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    system: CalendarSystem,
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Create a validated civil date.
    ///
    /// # Errors
    /// * [`Error::InvalidDate`] if the month or day does not exist.
    /// * [`Error::ConversionOutOfRange`] if the day exists but lies outside
    ///   the supported absolute range (0001-01-01 to 9999-12-31).
    pub fn new(system: CalendarSystem, year: i32, month: u8, day: u8) -> Result<Self> {
        let len = conversion::month_length(system, year, month);
        if len == 0 {
            return Err(Error::InvalidDate(format!(
                "{system} month {month} out of range [1, 12]"
            )));
        }
        if day == 0 || day > len {
            return Err(Error::InvalidDate(format!(
                "{system} day {day} out of range [1, {len}] for {year}/{month:02}"
            )));
        }
        let (min, max) = year_range(system);
        if !(min..=max).contains(&year) {
            return Err(Error::ConversionOutOfRange(format!(
                "{system} year {year} out of range [{min}, {max}]"
            )));
        }
        let civil = Self::from_parts_unchecked(system, year, month, day);
        AbsoluteDate::try_from_jdn(civil.jdn())?;
        Ok(civil)
    }

    /// Build the nearest valid civil date: the month is clamped to 1–12,
    /// the day to the month's length and the whole date to the supported
    /// absolute range.
    pub fn clamped(system: CalendarSystem, year: i64, month: i64, day: i64) -> Self {
        let (min, max) = year_range(system);
        let y = year.clamp(i64::from(min), i64::from(max)) as i32;
        let m = month.clamp(1, 12) as u8;
        let len = conversion::month_length(system, y, m);
        let d = day.clamp(1, i64::from(len)) as u8;
        if (i64::from(y), i64::from(m), i64::from(d)) != (year, month, day) {
            trace!(%system, year, month, day, "civil date clamped");
        }
        // Edge years are only partly inside the range.
        AbsoluteDate::from_jdn(conversion::to_jdn(system, y, m, d)).to_civil(system)
    }

    pub(crate) fn from_parts_unchecked(
        system: CalendarSystem,
        year: i32,
        month: u8,
        day: u8,
    ) -> Self {
        Self {
            system,
            year,
            month,
            day,
        }
    }

    /// The calendar system this triple belongs to.
    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    /// Year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// `(year, month 1–12, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        conversion::month_length(self.system, self.year, self.month)
    }

    /// Julian Day Number of this triple.
    pub fn jdn(&self) -> i64 {
        conversion::to_jdn(self.system, self.year, self.month, self.day)
    }

    /// Convert to an [`AbsoluteDate`] (clamped to the supported range).
    pub fn to_absolute(&self) -> AbsoluteDate {
        AbsoluteDate::from_jdn(self.jdn())
    }

    /// The same day expressed in another calendar system.
    pub fn convert(&self, system: CalendarSystem) -> CivilDate {
        self.to_absolute().to_civil(system)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// The civil years that contain at least one supported day in `system`.
pub fn year_range(system: CalendarSystem) -> (i32, i32) {
    (
        AbsoluteDate::MIN.to_civil(system).year(),
        AbsoluteDate::MAX.to_civil(system).year(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert!(CivilDate::new(CalendarSystem::Jalaali, 1403, 12, 30).is_ok());
        assert!(matches!(
            CivilDate::new(CalendarSystem::Jalaali, 1402, 12, 30),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            CivilDate::new(CalendarSystem::Hijri, 1446, 13, 1),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            CivilDate::new(CalendarSystem::Gregorian, 10_000, 1, 1),
            Err(Error::ConversionOutOfRange(_))
        ));
        // Jalaali -621/10/10 is 0000-12-31, one day before the range.
        assert!(matches!(
            CivilDate::new(CalendarSystem::Jalaali, -621, 10, 10),
            Err(Error::ConversionOutOfRange(_))
        ));
    }

    #[test]
    fn year_ranges() {
        assert_eq!(year_range(CalendarSystem::Gregorian), (1, 9999));
        assert_eq!(year_range(CalendarSystem::Jalaali), (-621, 9378));
    }

    #[test]
    fn clamping() {
        let c = CivilDate::clamped(CalendarSystem::Jalaali, 1402, 12, 31);
        assert_eq!(c.ymd(), (1402, 12, 29));
        let c = CivilDate::clamped(CalendarSystem::Gregorian, 2023, 0, 0);
        assert_eq!(c.ymd(), (2023, 1, 1));
        let c = CivilDate::clamped(CalendarSystem::Gregorian, 123_456, 12, 31);
        assert_eq!(c.ymd(), (9999, 12, 31));
        let c = CivilDate::clamped(CalendarSystem::Jalaali, -5000, 1, 1);
        assert_eq!(c.to_absolute(), AbsoluteDate::MIN);
    }

    #[test]
    fn convert_between_systems() {
        let c = CivilDate::new(CalendarSystem::Gregorian, 2024, 3, 20).unwrap();
        assert_eq!(c.convert(CalendarSystem::Jalaali).ymd(), (1403, 1, 1));
        assert_eq!(c.convert(CalendarSystem::Hijri).to_string(), "1445/09/10");
        assert_eq!(c.days_in_month(), 31);
    }
}
