//! Holiday configuration supplied on every classification.

use std::collections::BTreeSet;

use mc_core::errors::Result;
use mc_core::{ensure, fail};
use mc_time::{CalendarSystem, Weekday};

/// A custom holiday: the listed `days` of one Gregorian `year`/`month`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomHolidayRule {
    /// Gregorian year.
    pub year: i32,
    /// Gregorian month (1–12).
    pub month: u8,
    /// Days of the month.
    pub days: BTreeSet<u8>,
}

impl CustomHolidayRule {
    /// Create a validated rule.
    ///
    /// # Errors
    /// See [`validate`](Self::validate).
    pub fn new(year: i32, month: u8, days: impl IntoIterator<Item = u8>) -> Result<Self> {
        let rule = Self {
            year,
            month,
            days: days.into_iter().collect(),
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Check the month and day bounds of a rule built by hand or
    /// deserialized.
    ///
    /// # Errors
    /// Returns `Error::Precondition` on an out-of-range month or day and
    /// `Error::Runtime` when the rule lists no days.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=12).contains(&self.month),
            "custom holiday month {} out of range [1, 12]",
            self.month
        );
        for day in &self.days {
            ensure!(
                (1..=31).contains(day),
                "custom holiday day {day} out of range [1, 31]"
            );
        }
        if self.days.is_empty() {
            fail!("custom holiday rule for {}/{:02} lists no days", self.year, self.month);
        }
        Ok(())
    }

    /// Whether the Gregorian triple `(year, month, day)` is covered.
    pub fn matches(&self, year: i32, month: u8, day: u8) -> bool {
        self.year == year && self.month == month && self.days.contains(&day)
    }
}

/// Inputs of the holiday classifier.
///
/// The default configuration has no weekend days, no custom holidays and
/// every built-in table disabled, so nothing is a holiday.
///
/// ```
/// use mc_holidays::{CustomHolidayRule, HolidayConfig};
/// use mc_time::Weekday;
///
/// let config = HolidayConfig::new()
///     .with_weekend_days([Weekday::Friday])
///     .with_jalaali_holidays(true)
///     .with_custom_holiday(CustomHolidayRule::new(2024, 3, [20]).unwrap());
/// assert!(config.is_weekend(Weekday::Friday));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HolidayConfig {
    /// Weekdays that are always holidays. Serialized as lowercase names;
    /// either names or indices 0–6 (Sunday = 0) are accepted on input.
    pub weekend_days: BTreeSet<Weekday>,
    /// Custom Gregorian holidays, checked in order.
    pub custom_gregorian_holidays: Vec<CustomHolidayRule>,
    /// Enable the built-in Gregorian table.
    pub show_gregorian_holidays: bool,
    /// Enable the built-in Jalaali table.
    pub show_jalaali_holidays: bool,
    /// Enable the built-in Hijri table.
    pub show_hijri_holidays: bool,
}

impl HolidayConfig {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iranian official calendar: Friday weekend with the Jalaali and Hijri
    /// tables.
    pub fn iran() -> Self {
        Self::new()
            .with_weekend_days([Weekday::Friday])
            .with_jalaali_holidays(true)
            .with_hijri_holidays(true)
    }

    /// Replace the weekend set.
    pub fn with_weekend_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.weekend_days = days.into_iter().collect();
        self
    }

    /// Append a custom holiday rule.
    pub fn with_custom_holiday(mut self, rule: CustomHolidayRule) -> Self {
        self.custom_gregorian_holidays.push(rule);
        self
    }

    /// Toggle the built-in Gregorian table.
    pub fn with_gregorian_holidays(mut self, on: bool) -> Self {
        self.show_gregorian_holidays = on;
        self
    }

    /// Toggle the built-in Jalaali table.
    pub fn with_jalaali_holidays(mut self, on: bool) -> Self {
        self.show_jalaali_holidays = on;
        self
    }

    /// Toggle the built-in Hijri table.
    pub fn with_hijri_holidays(mut self, on: bool) -> Self {
        self.show_hijri_holidays = on;
        self
    }

    /// Whether `weekday` is a weekend day.
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        self.weekend_days.contains(&weekday)
    }

    /// Whether the built-in table of `system` is enabled.
    pub fn shows(&self, system: CalendarSystem) -> bool {
        match system {
            CalendarSystem::Gregorian => self.show_gregorian_holidays,
            CalendarSystem::Jalaali => self.show_jalaali_holidays,
            CalendarSystem::Hijri => self.show_hijri_holidays,
        }
    }

    /// Enabled built-in systems in precedence order: Gregorian, Jalaali,
    /// Hijri.
    pub fn enabled_systems(&self) -> impl Iterator<Item = CalendarSystem> + '_ {
        [
            CalendarSystem::Gregorian,
            CalendarSystem::Jalaali,
            CalendarSystem::Hijri,
        ]
        .into_iter()
        .filter(|s| self.shows(*s))
    }

    /// Validate every custom rule.
    ///
    /// # Errors
    /// The first error reported by [`CustomHolidayRule::validate`].
    pub fn validate(&self) -> Result<()> {
        self.custom_gregorian_holidays
            .iter()
            .try_for_each(CustomHolidayRule::validate)
    }
}
