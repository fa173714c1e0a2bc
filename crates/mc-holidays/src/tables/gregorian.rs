//! Gregorian holidays.

use mc_time::CalendarSystem;

use super::{HolidayEntry, HolidayTable};

const ENTRIES: &[HolidayEntry] = &[
    HolidayEntry::on(1, 1, "New Year's Day"),
    HolidayEntry::on(12, 25, "Christmas"),
];

/// Gregorian holiday table.
///
/// * New Year's Day (Jan 1)
/// * Christmas (Dec 25)
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianHolidays;

impl HolidayTable for GregorianHolidays {
    fn name(&self) -> &str {
        "Gregorian"
    }

    fn system(&self) -> CalendarSystem {
        CalendarSystem::Gregorian
    }

    fn entries(&self) -> &'static [HolidayEntry] {
        ENTRIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_time::AbsoluteDate;

    fn date(y: i32, m: u8, d: u8) -> AbsoluteDate {
        AbsoluteDate::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn fixed_holidays() {
        let table = GregorianHolidays;
        assert_eq!(table.holiday_name(date(2025, 1, 1)), Some("New Year's Day"));
        assert_eq!(table.holiday_name(date(2024, 12, 25)), Some("Christmas"));
        assert!(!table.is_holiday(date(2024, 12, 24)));
        assert!(!table.is_holiday(date(2024, 12, 26)));
    }

    #[test]
    fn null_date_is_never_a_holiday() {
        assert!(!GregorianHolidays.is_holiday(AbsoluteDate::NULL));
    }
}
