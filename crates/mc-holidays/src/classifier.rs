//! Holiday classification of calendar cells.
//!
//! [`classify`] is a pure function of the date, the zoom level of the
//! calendar view and a [`HolidayConfig`]. Rules are tried in a fixed order
//! and the first match wins:
//!
//! 1. weekend days,
//! 2. custom Gregorian holidays,
//! 3. the built-in Gregorian table,
//! 4. the built-in Jalaali table,
//! 5. the built-in Hijri table.
//!
//! Every table is evaluated in its own calendar, whatever calendar the
//! widget happens to display.

use std::fmt;

use mc_time::{AbsoluteDate, CalendarSystem, DateRange, Weekday};
use tracing::trace;

use crate::config::HolidayConfig;
use crate::tables;

/// Label attached to holiday cells.
pub const HOLIDAY_CLASS: &str = "holiday-date";

/// Zoom level of the calendar a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CalendarView {
    /// Day cells of one month. The only view that carries holidays.
    #[default]
    Month,
    /// Month cells of one year.
    Year,
    /// Year cells of a multi-year page.
    MultiYear,
}

/// The rule that made a date a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayRule {
    /// The date's weekday is in the weekend set.
    Weekend(Weekday),
    /// A custom Gregorian rule, by position in
    /// [`HolidayConfig::custom_gregorian_holidays`].
    Custom {
        /// Index of the matching rule.
        index: usize,
    },
    /// An entry of a built-in table.
    Builtin {
        /// Calendar system of the table.
        system: CalendarSystem,
        /// Name of the holiday.
        name: &'static str,
    },
}

impl fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayRule::Weekend(day) => write!(f, "weekend ({day})"),
            HolidayRule::Custom { index } => write!(f, "custom holiday #{index}"),
            HolidayRule::Builtin { system, name } => write!(f, "{name} ({system})"),
        }
    }
}

/// Result of classifying one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HolidayClassification {
    /// Whether the cell is a holiday.
    pub is_holiday: bool,
    /// [`HOLIDAY_CLASS`] for holidays.
    pub label: Option<&'static str>,
    /// The first rule that matched.
    pub rule: Option<HolidayRule>,
}

impl HolidayClassification {
    /// Not a holiday.
    pub const NONE: Self = Self {
        is_holiday: false,
        label: None,
        rule: None,
    };

    fn matched(rule: HolidayRule) -> Self {
        Self {
            is_holiday: true,
            label: Some(HOLIDAY_CLASS),
            rule: Some(rule),
        }
    }
}

/// Classify the cell showing `date` in a calendar at zoom level `view`.
///
/// Only [`CalendarView::Month`] cells are classified; an invalid date is
/// never a holiday.
pub fn classify(
    date: AbsoluteDate,
    view: CalendarView,
    config: &HolidayConfig,
) -> HolidayClassification {
    if view != CalendarView::Month || !date.is_valid() {
        return HolidayClassification::NONE;
    }
    match first_matching_rule(date, config) {
        Some(rule) => {
            trace!(%date, %rule, "holiday");
            HolidayClassification::matched(rule)
        }
        None => HolidayClassification::NONE,
    }
}

/// Whether `date` is a holiday in a month view.
pub fn is_holiday(date: AbsoluteDate, config: &HolidayConfig) -> bool {
    classify(date, CalendarView::Month, config).is_holiday
}

/// Every holiday in `range`, in date order, with the rule that matched.
pub fn holidays_between(
    range: &DateRange,
    config: &HolidayConfig,
) -> Vec<(AbsoluteDate, HolidayRule)> {
    range
        .days()
        .filter_map(|date| {
            classify(date, CalendarView::Month, config)
                .rule
                .map(|rule| (date, rule))
        })
        .collect()
}

fn first_matching_rule(date: AbsoluteDate, config: &HolidayConfig) -> Option<HolidayRule> {
    let weekday = date.weekday();
    if config.is_weekend(weekday) {
        return Some(HolidayRule::Weekend(weekday));
    }

    let (year, month, day) = date.to_gregorian().ymd();
    if let Some(index) = config
        .custom_gregorian_holidays
        .iter()
        .position(|rule| rule.matches(year, month, day))
    {
        return Some(HolidayRule::Custom { index });
    }

    config.enabled_systems().find_map(|system| {
        tables::builtin(system)
            .holiday_name(date)
            .map(|name| HolidayRule::Builtin { system, name })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomHolidayRule;

    fn date(y: i32, m: u8, d: u8) -> AbsoluteDate {
        AbsoluteDate::from_gregorian(y, m, d).unwrap()
    }

    fn everything() -> HolidayConfig {
        HolidayConfig::new()
            .with_weekend_days(Weekday::ALL)
            .with_gregorian_holidays(true)
            .with_jalaali_holidays(true)
            .with_hijri_holidays(true)
    }

    #[test]
    fn empty_config_has_no_holidays() {
        let config = HolidayConfig::default();
        assert_eq!(
            classify(date(2024, 3, 20), CalendarView::Month, &config),
            HolidayClassification::NONE
        );
    }

    #[test]
    fn only_month_view_is_classified() {
        let config = everything();
        let d = date(2024, 3, 20);
        assert!(classify(d, CalendarView::Month, &config).is_holiday);
        assert_eq!(classify(d, CalendarView::Year, &config), HolidayClassification::NONE);
        assert_eq!(classify(d, CalendarView::MultiYear, &config), HolidayClassification::NONE);
    }

    #[test]
    fn invalid_date_is_not_a_holiday() {
        assert!(!is_holiday(AbsoluteDate::NULL, &everything()));
    }

    #[test]
    fn label_is_holiday_class() {
        let config = HolidayConfig::new().with_gregorian_holidays(true);
        let c = classify(date(2024, 12, 25), CalendarView::Month, &config);
        assert_eq!(c.label, Some(HOLIDAY_CLASS));
        assert_eq!(
            c.rule,
            Some(HolidayRule::Builtin {
                system: CalendarSystem::Gregorian,
                name: "Christmas"
            })
        );
    }

    #[test]
    fn custom_rule_index() {
        let config = HolidayConfig::new()
            .with_custom_holiday(CustomHolidayRule::new(2024, 1, [2]).unwrap())
            .with_custom_holiday(CustomHolidayRule::new(2024, 3, [19, 20]).unwrap());
        assert_eq!(
            classify(date(2024, 3, 19), CalendarView::Month, &config).rule,
            Some(HolidayRule::Custom { index: 1 })
        );
        assert!(!is_holiday(date(2025, 3, 19), &config));
    }

    #[test]
    fn rule_display() {
        assert_eq!(HolidayRule::Weekend(Weekday::Friday).to_string(), "weekend (Friday)");
        assert_eq!(HolidayRule::Custom { index: 2 }.to_string(), "custom holiday #2");
    }
}
