//! `CalendarAdapter`: the date contract a picker widget talks to.
//!
//! One adapter belongs to one widget. It holds the active
//! [`CalendarSystem`] and an optional [`StartOfWeek`] override and exposes
//! field accessors, metadata, arithmetic, parsing and formatting over
//! [`AbsoluteDate`]s in that system.
//!
//! Every accessor is lenient: an invalid date yields `0`, an empty string
//! or `None`, so that a widget re-rendering while the user is typing never
//! fails. [`CalendarAdapter::format`] is the one strict operation.
//!
//! Both mutators publish exactly one change notification after the new
//! value is stored; renderers subscribe through [`Observable`].

use std::cmp::Ordering;
use std::sync::Weak;

use mc_core::errors::{Error, Result};
use mc_core::patterns::observable::{ChangeNotifier, Observable, Observer};
use mc_core::utilities::parsers::{parse_iso_date, parse_triple};
use tracing::{debug, trace};

use crate::absolute_date::AbsoluteDate;
use crate::calendar_system::{CalendarSystem, NameStyle, StartOfWeek};
use crate::calendar_unit::CalendarUnit;
use crate::civil_date::CivilDate;
use crate::date_range::DateRange;
use crate::format::format_civil;

/// Multi-calendar date adapter.
#[derive(Debug, Default)]
pub struct CalendarAdapter {
    system: CalendarSystem,
    start_of_week: Option<StartOfWeek>,
    changes: ChangeNotifier,
}

impl CalendarAdapter {
    // ── Construction and state ───────────────────────────────────────────────

    /// Create an adapter displaying `system`, with no start-of-week override.
    pub fn new(system: CalendarSystem) -> Self {
        Self {
            system,
            start_of_week: None,
            changes: ChangeNotifier::new(),
        }
    }

    /// Create an adapter whose calendar is chosen from a locale tag
    /// (see [`CalendarSystem::from_locale`]).
    pub fn from_locale(locale: &str) -> Self {
        Self::new(CalendarSystem::from_locale(locale))
    }

    /// The active calendar system.
    pub fn calendar_system(&self) -> CalendarSystem {
        self.system
    }

    /// The start-of-week override, if any.
    pub fn start_of_week(&self) -> Option<StartOfWeek> {
        self.start_of_week
    }

    /// Switch the active calendar system and notify observers once.
    pub fn set_calendar_type(&mut self, system: CalendarSystem) {
        debug!(from = %self.system, to = %system, "calendar system changed");
        self.system = system;
        self.changes.notify();
    }

    /// Override the first day of the week and notify observers once.
    pub fn set_start_day(&mut self, day: StartOfWeek) {
        debug!(?day, "start of week changed");
        self.start_of_week = Some(day);
        self.changes.notify();
    }

    /// Drop the start-of-week override and notify observers once.
    pub fn clear_start_day(&mut self) {
        debug!("start of week reset to calendar default");
        self.start_of_week = None;
        self.changes.notify();
    }

    // ── Field accessors ──────────────────────────────────────────────────────

    /// The civil triple of `date` in the active system, or `None` for an
    /// invalid date.
    pub fn civil(&self, date: AbsoluteDate) -> Option<CivilDate> {
        date.is_valid().then(|| date.to_civil(self.system))
    }

    /// Year of `date` in the active system; `0` for an invalid date.
    pub fn year(&self, date: AbsoluteDate) -> i32 {
        self.civil(date).map_or(0, |c| c.year())
    }

    /// Zero-based month (0–11) of `date` in the active system; `0` for an
    /// invalid date.
    pub fn month(&self, date: AbsoluteDate) -> u32 {
        self.civil(date).map_or(0, |c| u32::from(c.month()) - 1)
    }

    /// Day of the month of `date` in the active system; `0` for an invalid
    /// date.
    pub fn day(&self, date: AbsoluteDate) -> u32 {
        self.civil(date).map_or(0, |c| u32::from(c.day()))
    }

    /// Weekday index (0 = Sunday); `0` for an invalid date.
    pub fn day_of_week(&self, date: AbsoluteDate) -> u8 {
        if date.is_valid() {
            date.weekday().index()
        } else {
            0
        }
    }

    /// Length of the month containing `date`; `0` for an invalid date.
    pub fn days_in_month(&self, date: AbsoluteDate) -> u8 {
        self.civil(date).map_or(0, |c| c.days_in_month())
    }

    /// Weekday index the calendar grid starts with: the override if set,
    /// otherwise Saturday (6) for Jalaali and Sunday (0) for the others.
    pub fn first_day_of_week(&self) -> u8 {
        self.start_of_week
            .map(|s| s.weekday())
            .unwrap_or_else(|| self.system.default_first_day())
            .index()
    }

    /// The civil month containing `date`, for laying out a month view.
    pub fn month_range(&self, date: AbsoluteDate) -> Option<DateRange> {
        DateRange::month_of(date, self.system)
    }

    // ── Names ────────────────────────────────────────────────────────────────

    /// The twelve month names of the active system.
    pub fn month_names(&self, style: NameStyle) -> Vec<&'static str> {
        self.system.month_names(style)
    }

    /// The seven weekday names, starting at Sunday.
    pub fn day_of_week_names(&self, style: NameStyle) -> Vec<&'static str> {
        self.system.weekday_names(style)
    }

    /// Labels for the day cells: `"1"` … `"31"`.
    pub fn date_names(&self) -> Vec<String> {
        (1..=31).map(|d: u8| d.to_string()).collect()
    }

    /// The year of `date` as a label; empty for an invalid date.
    pub fn year_name(&self, date: AbsoluteDate) -> String {
        self.civil(date)
            .map(|c| c.year().to_string())
            .unwrap_or_default()
    }

    // ── Construction of dates ────────────────────────────────────────────────

    /// Build a date from a civil triple of the active system. `month` is
    /// zero-based. Out-of-range fields are clamped to the nearest valid
    /// day.
    pub fn create_date(&self, year: i32, month: i32, day: i32) -> AbsoluteDate {
        CivilDate::clamped(
            self.system,
            i64::from(year),
            i64::from(month) + 1,
            i64::from(day),
        )
        .to_absolute()
    }

    /// Strict form of [`create_date`](Self::create_date).
    ///
    /// # Errors
    /// [`Error::InvalidDate`] when the month or day does not exist, and
    /// [`Error::ConversionOutOfRange`] outside the supported range.
    pub fn try_create_date(&self, year: i32, month: i32, day: i32) -> Result<AbsoluteDate> {
        let month = u8::try_from(month.saturating_add(1))
            .map_err(|_| Error::InvalidDate(format!("month index {month} out of range")))?;
        let day = u8::try_from(day)
            .map_err(|_| Error::InvalidDate(format!("day {day} out of range")))?;
        CivilDate::new(self.system, year, month, day).map(|c| c.to_absolute())
    }

    /// Today's date.
    pub fn today(&self) -> AbsoluteDate {
        AbsoluteDate::today()
    }

    /// Parse user text.
    ///
    /// `Y/M/D` (one-based month, Persian or Arabic digits allowed) is read
    /// in the active system; ISO `YYYY-MM-DD` is read as Gregorian. Returns
    /// `None` when the text is empty, malformed, or names a day that does
    /// not exist.
    pub fn parse(&self, text: &str) -> Option<AbsoluteDate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let parsed = if let Some((y, m, d)) = parse_triple(text, '/') {
            let month = i32::try_from(m).ok().and_then(|m| m.checked_sub(1));
            match (month, i32::try_from(d)) {
                (Some(m), Ok(d)) => self.try_create_date(y, m, d),
                _ => Err(Error::InvalidDate(text.to_string())),
            }
        } else if let Some((y, m, d)) = parse_iso_date(text) {
            match (u8::try_from(m), u8::try_from(d)) {
                (Ok(m), Ok(d)) => AbsoluteDate::from_gregorian(y, m, d),
                _ => Err(Error::InvalidDate(text.to_string())),
            }
        } else {
            Err(Error::InvalidArgument(format!("unrecognized date text '{text}'")))
        };
        match parsed {
            Ok(date) => Some(date),
            Err(err) => {
                trace!(text, %err, "date text rejected");
                None
            }
        }
    }

    // ── Formatting ───────────────────────────────────────────────────────────

    /// Format `date` in the active system. An empty pattern means
    /// `YYYY/MM/DD`; see [`crate::format`] for the tokens.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if `date` is not a valid date.
    pub fn format(&self, date: AbsoluteDate, pattern: &str) -> Result<String> {
        let Some(civil) = self.civil(date) else {
            debug!(?date, "refusing to format invalid date");
            return Err(Error::InvalidDate(format!(
                "cannot format invalid date {date:?}"
            )));
        };
        Ok(format_civil(&civil, date.weekday(), pattern))
    }

    /// ISO 8601 (`YYYY-MM-DD`, Gregorian) form; empty for an invalid date.
    pub fn to_iso8601(&self, date: AbsoluteDate) -> String {
        if date.is_valid() {
            date.to_string()
        } else {
            String::new()
        }
    }

    // ── Arithmetic ───────────────────────────────────────────────────────────

    /// Advance `date` by `n` units.
    ///
    /// Months and years are added to the civil triple of the active system
    /// with carry between month and year; a day past the end of the new
    /// month is clamped to its last day. Days and weeks are absolute. An
    /// invalid date is returned unchanged.
    pub fn add(&self, date: AbsoluteDate, n: i32, unit: CalendarUnit) -> AbsoluteDate {
        if !date.is_valid() {
            return date;
        }
        match unit {
            CalendarUnit::Days => date.add_days(i64::from(n)),
            CalendarUnit::Weeks => date.add_days(i64::from(n) * 7),
            CalendarUnit::Months => self.add_months(date, i64::from(n)),
            CalendarUnit::Years => self.add_months(date, i64::from(n) * 12),
        }
    }

    /// Add `years` calendar years in the active system.
    pub fn add_calendar_years(&self, date: AbsoluteDate, years: i32) -> AbsoluteDate {
        self.add(date, years, CalendarUnit::Years)
    }

    /// Add `months` calendar months in the active system.
    pub fn add_calendar_months(&self, date: AbsoluteDate, months: i32) -> AbsoluteDate {
        self.add(date, months, CalendarUnit::Months)
    }

    /// Add `days` absolute days.
    pub fn add_calendar_days(&self, date: AbsoluteDate, days: i32) -> AbsoluteDate {
        self.add(date, days, CalendarUnit::Days)
    }

    fn add_months(&self, date: AbsoluteDate, months: i64) -> AbsoluteDate {
        let civil = date.to_civil(self.system);
        let total = i64::from(civil.month()) - 1 + months;
        CivilDate::clamped(
            self.system,
            i64::from(civil.year()) + total.div_euclid(12),
            total.rem_euclid(12) + 1,
            i64::from(civil.day()),
        )
        .to_absolute()
    }

    // ── Validation and comparison ────────────────────────────────────────────

    /// Whether `date` is a valid date.
    pub fn is_valid(&self, date: AbsoluteDate) -> bool {
        date.is_valid()
    }

    /// The invalid-date sentinel.
    pub fn invalid(&self) -> AbsoluteDate {
        AbsoluteDate::NULL
    }

    /// Order two dates.
    pub fn compare_date(&self, a: AbsoluteDate, b: AbsoluteDate) -> Ordering {
        a.cmp(&b)
    }

    /// Whether two optional dates denote the same day (two `None`s are
    /// equal; an invalid date equals nothing).
    pub fn same_date(&self, a: Option<AbsoluteDate>, b: Option<AbsoluteDate>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a.is_valid() && b.is_valid() && a == b,
            (None, None) => true,
            _ => false,
        }
    }

    /// Clamp `date` into the optional `[min, max]` bounds.
    pub fn clamp_date(
        &self,
        date: AbsoluteDate,
        min: Option<AbsoluteDate>,
        max: Option<AbsoluteDate>,
    ) -> AbsoluteDate {
        match (min, max) {
            (Some(min), _) if date < min => min,
            (_, Some(max)) if date > max => max,
            _ => date,
        }
    }
}

impl Observable for CalendarAdapter {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.changes.subscribe(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.changes.unsubscribe(observer);
    }

    fn notify_observers(&self) {
        self.changes.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> AbsoluteDate {
        AbsoluteDate::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn default_is_jalaali() {
        let adapter = CalendarAdapter::default();
        assert_eq!(adapter.calendar_system(), CalendarSystem::Jalaali);
        assert_eq!(adapter.first_day_of_week(), 6);
    }

    #[test]
    fn invalid_date_sentinels() {
        let adapter = CalendarAdapter::new(CalendarSystem::Hijri);
        let null = adapter.invalid();
        assert_eq!(adapter.year(null), 0);
        assert_eq!(adapter.month(null), 0);
        assert_eq!(adapter.day(null), 0);
        assert_eq!(adapter.days_in_month(null), 0);
        assert_eq!(adapter.year_name(null), "");
        assert_eq!(adapter.to_iso8601(null), "");
        assert_eq!(adapter.add_calendar_months(null, 3), null);
        assert!(matches!(adapter.format(null, ""), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn month_is_zero_based() {
        let adapter = CalendarAdapter::new(CalendarSystem::Gregorian);
        assert_eq!(adapter.month(date(2024, 1, 15)), 0);
        assert_eq!(adapter.month(date(2024, 12, 15)), 11);
    }

    #[test]
    fn clamp_date_bounds() {
        let adapter = CalendarAdapter::new(CalendarSystem::Gregorian);
        let min = date(2024, 1, 1);
        let max = date(2024, 12, 31);
        assert_eq!(adapter.clamp_date(date(2023, 5, 5), Some(min), Some(max)), min);
        assert_eq!(adapter.clamp_date(date(2025, 5, 5), Some(min), Some(max)), max);
        assert_eq!(adapter.clamp_date(date(2024, 5, 5), None, None), date(2024, 5, 5));
    }

    #[test]
    fn same_date_semantics() {
        let adapter = CalendarAdapter::default();
        let d = date(2024, 3, 20);
        assert!(adapter.same_date(Some(d), Some(d)));
        assert!(adapter.same_date(None, None));
        assert!(!adapter.same_date(Some(d), None));
        assert!(!adapter.same_date(Some(AbsoluteDate::NULL), Some(AbsoluteDate::NULL)));
        assert_eq!(adapter.compare_date(d, d + 1), Ordering::Less);
    }
}
