//! `DateRange`: an inclusive span of absolute days.

use mc_core::ensure;
use mc_core::errors::Result;

use crate::absolute_date::AbsoluteDate;
use crate::calendar_system::CalendarSystem;
use crate::civil_date::CivilDate;

/// An inclusive range `[start, end]` of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: AbsoluteDate,
    end: AbsoluteDate,
}

impl DateRange {
    /// Create a range.
    ///
    /// # Errors
    /// Returns an error if either bound is invalid or `start > end`.
    pub fn new(start: AbsoluteDate, end: AbsoluteDate) -> Result<Self> {
        ensure!(
            start.is_valid() && end.is_valid(),
            "range bounds must be valid dates, got {start:?} and {end:?}"
        );
        ensure!(start <= end, "range start {start} is after end {end}");
        Ok(Self { start, end })
    }

    /// The civil month of `system` that contains `date`, or `None` for an
    /// invalid date.
    pub fn month_of(date: AbsoluteDate, system: CalendarSystem) -> Option<Self> {
        if !date.is_valid() {
            return None;
        }
        let civil = date.to_civil(system);
        let first = CivilDate::clamped(
            system,
            i64::from(civil.year()),
            i64::from(civil.month()),
            1,
        );
        let last = CivilDate::clamped(
            system,
            i64::from(civil.year()),
            i64::from(civil.month()),
            i64::from(civil.days_in_month()),
        );
        Some(Self {
            start: first.to_absolute(),
            end: last.to_absolute(),
        })
    }

    /// First day of the range.
    pub fn start(&self) -> AbsoluteDate {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> AbsoluteDate {
        self.end
    }

    /// Number of days in the range (at least 1).
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Always `false`: a range holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `date` lies inside the range.
    pub fn contains(&self, date: AbsoluteDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Iterate over every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = AbsoluteDate> {
        let start = self.start;
        (0..self.len() as i32).map(move |offset| start + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::errors::Error;

    fn date(y: i32, m: u8, d: u8) -> AbsoluteDate {
        AbsoluteDate::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn construction() {
        let r = DateRange::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
        assert_eq!(r.len(), 31);
        assert!(r.contains(date(2024, 3, 20)));
        assert!(!r.contains(date(2024, 4, 1)));
        assert!(matches!(
            DateRange::new(date(2024, 4, 1), date(2024, 3, 1)),
            Err(Error::Precondition(_))
        ));
        assert!(DateRange::new(AbsoluteDate::NULL, date(2024, 3, 1)).is_err());
    }

    #[test]
    fn jalaali_month() {
        // Esfand 1402 (non-leap) runs 2024-02-20 ..= 2024-03-19
        let r = DateRange::month_of(date(2024, 3, 1), CalendarSystem::Jalaali).unwrap();
        assert_eq!(r.start(), date(2024, 2, 20));
        assert_eq!(r.end(), date(2024, 3, 19));
        assert_eq!(r.len(), 29);
        assert!(DateRange::month_of(AbsoluteDate::NULL, CalendarSystem::Jalaali).is_none());
    }

    #[test]
    fn iterate_days() {
        let r = DateRange::new(date(2024, 2, 28), date(2024, 3, 1)).unwrap();
        let days: Vec<_> = r.days().collect();
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }
}
