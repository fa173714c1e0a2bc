//! Jalaali (Iranian official) holidays.

use mc_time::CalendarSystem;

use super::{HolidayEntry, HolidayTable};

const ENTRIES: &[HolidayEntry] = &[
    HolidayEntry::span(1, 1, 4, "Nowruz"),
    HolidayEntry::on(1, 12, "Islamic Republic Day"),
    HolidayEntry::on(1, 13, "Nature Day"),
    HolidayEntry::on(3, 14, "Demise of Imam Khomeini"),
    HolidayEntry::on(3, 15, "Khordad 15 Uprising"),
    HolidayEntry::on(11, 22, "Revolution Victory Day"),
    HolidayEntry::on(12, 29, "Oil Nationalization Day"),
    // Only exists in leap years; closes the New Year break.
    HolidayEntry::on(12, 30, "Nowruz Eve"),
];

/// Jalaali holiday table, read against the Jalaali civil triple.
///
/// * Nowruz (Farvardin 1–4)
/// * Islamic Republic Day (Farvardin 12)
/// * Nature Day (Farvardin 13)
/// * Demise of Imam Khomeini (Khordad 14)
/// * Khordad 15 Uprising (Khordad 15)
/// * Revolution Victory Day (Bahman 22)
/// * Oil Nationalization Day (Esfand 29)
/// * Esfand 30 in leap years
#[derive(Debug, Clone, Copy, Default)]
pub struct JalaaliHolidays;

impl HolidayTable for JalaaliHolidays {
    fn name(&self) -> &str {
        "Jalaali"
    }

    fn system(&self) -> CalendarSystem {
        CalendarSystem::Jalaali
    }

    fn entries(&self) -> &'static [HolidayEntry] {
        ENTRIES
    }
}
