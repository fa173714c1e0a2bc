//! Hijri (tabular lunar) holidays.
//!
//! The martyrdom of Imam Reza falls on the last day of Safar. Safar has
//! no fixed length across lunar reckonings, so it is detected by checking
//! whether the following day rolls into Rabi' al-Awwal rather than by a
//! day number.

use mc_time::{AbsoluteDate, CalendarSystem};
use tracing::trace;

use super::{lookup, HolidayEntry, HolidayTable};

const SAFAR: u8 = 2;
const RABI_AL_AWWAL: u8 = 3;

/// Name reported for the last day of Safar.
pub const IMAM_REZA_MARTYRDOM: &str = "Martyrdom of Imam Reza";

const ENTRIES: &[HolidayEntry] = &[
    HolidayEntry::on(1, 9, "Tasua"),
    HolidayEntry::on(1, 10, "Ashura"),
    HolidayEntry::on(2, 20, "Arbaeen"),
    HolidayEntry::on(2, 28, "Demise of the Prophet and Imam Hassan"),
    HolidayEntry::on(3, 8, "Martyrdom of Imam Hassan Askari"),
    HolidayEntry::on(3, 17, "Birthday of the Prophet and Imam Sadiq"),
    HolidayEntry::on(6, 3, "Martyrdom of Fatima"),
    HolidayEntry::on(7, 13, "Birthday of Imam Ali"),
    HolidayEntry::on(7, 27, "Mab'ath"),
    HolidayEntry::on(8, 15, "Birthday of Imam Mahdi"),
    HolidayEntry::on(9, 21, "Martyrdom of Imam Ali"),
    HolidayEntry::span(10, 1, 2, "Eid al-Fitr"),
    HolidayEntry::on(10, 25, "Martyrdom of Imam Sadiq"),
    HolidayEntry::on(12, 10, "Eid al-Adha"),
    HolidayEntry::on(12, 18, "Eid al-Ghadir"),
];

/// Hijri holiday table, read against the tabular Hijri civil triple.
#[derive(Debug, Clone, Copy, Default)]
pub struct HijriHolidays;

impl HijriHolidays {
    /// Whether `date` is the last day of Safar.
    pub fn is_end_of_safar(date: AbsoluteDate) -> bool {
        if !date.is_valid() || date.to_hijri().month() != SAFAR {
            return false;
        }
        let next = date.add_days(1);
        // At the upper range bound `next` clamps onto `date` itself.
        next != date && next.to_hijri().month() == RABI_AL_AWWAL
    }
}

impl HolidayTable for HijriHolidays {
    fn name(&self) -> &str {
        "Hijri"
    }

    fn system(&self) -> CalendarSystem {
        CalendarSystem::Hijri
    }

    fn entries(&self) -> &'static [HolidayEntry] {
        ENTRIES
    }

    fn holiday_name(&self, date: AbsoluteDate) -> Option<&'static str> {
        if !date.is_valid() {
            return None;
        }
        let civil = date.to_hijri();
        if let Some(name) = lookup(ENTRIES, civil.month(), civil.day()) {
            return Some(name);
        }
        if Self::is_end_of_safar(date) {
            trace!(%civil, "last day of Safar");
            return Some(IMAM_REZA_MARTYRDOM);
        }
        None
    }
}
