//! `CalendarSystem`, `StartOfWeek` and per-calendar name tables.

use std::str::FromStr;

use mc_core::errors::Error;

use crate::weekday::Weekday;

/// A calendar system the adapter can display and compute in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarSystem {
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Jalaali (Solar Hijri / Persian) calendar.
    #[default]
    Jalaali,
    /// Tabular Lunar Hijri calendar.
    Hijri,
}

/// Length of month and weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameStyle {
    /// Full names (`"January"`).
    #[default]
    Long,
    /// Abbreviations (`"Jan"`).
    Short,
    /// Single letters (`"J"`).
    Narrow,
}

const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const JALAALI_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const HIJRI_MONTHS: [&str; 12] = [
    "محرم",
    "صفر",
    "ربیع‌الاول",
    "ربیع‌الثانی",
    "جمادی‌الاول",
    "جمادی‌الثانی",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذی‌القعده",
    "ذی‌الحجه",
];

impl CalendarSystem {
    /// All supported systems.
    pub const ALL: [CalendarSystem; 3] = [
        CalendarSystem::Gregorian,
        CalendarSystem::Jalaali,
        CalendarSystem::Hijri,
    ];

    /// Choose a system from a locale tag: Persian (`fa*`) displays Jalaali,
    /// Arabic (`ar*`) displays Hijri, everything else Gregorian.
    pub fn from_locale(locale: &str) -> Self {
        let lang = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "fa" => CalendarSystem::Jalaali,
            "ar" => CalendarSystem::Hijri,
            _ => CalendarSystem::Gregorian,
        }
    }

    /// First day of the week when no override is set: Saturday for
    /// Jalaali, Sunday otherwise.
    pub fn default_first_day(&self) -> Weekday {
        match self {
            CalendarSystem::Jalaali => Weekday::Saturday,
            CalendarSystem::Gregorian | CalendarSystem::Hijri => Weekday::Sunday,
        }
    }

    /// Name of `month` (1–12) in this system, or `""` for an invalid month.
    pub fn month_name(&self, month: u8, style: NameStyle) -> &'static str {
        let Some(idx) = usize::from(month).checked_sub(1).filter(|&i| i < 12) else {
            return "";
        };
        match self {
            CalendarSystem::Gregorian => {
                let long = GREGORIAN_MONTHS[idx];
                match style {
                    NameStyle::Long => long,
                    NameStyle::Short => &long[..3],
                    NameStyle::Narrow => &long[..1],
                }
            }
            CalendarSystem::Jalaali => persian_styled(JALAALI_MONTHS[idx], style),
            CalendarSystem::Hijri => persian_styled(HIJRI_MONTHS[idx], style),
        }
    }

    /// The twelve month names in order.
    pub fn month_names(&self, style: NameStyle) -> Vec<&'static str> {
        (1..=12).map(|m| self.month_name(m, style)).collect()
    }

    /// The seven weekday names, starting at Sunday (index 0).
    ///
    /// Jalaali uses Persian names; the other systems English ones.
    pub fn weekday_names(&self, style: NameStyle) -> Vec<&'static str> {
        Weekday::ALL
            .iter()
            .map(|w| match self {
                CalendarSystem::Jalaali => persian_styled(w.persian_name(), style),
                CalendarSystem::Gregorian | CalendarSystem::Hijri => w.english_name(style),
            })
            .collect()
    }

    /// Lowercase identifier (`"gregorian"`, `"jalaali"`, `"hijri"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "gregorian",
            CalendarSystem::Jalaali => "jalaali",
            CalendarSystem::Hijri => "hijri",
        }
    }
}

/// Narrow Persian names are the first letter; long and short are the word.
fn persian_styled(name: &'static str, style: NameStyle) -> &'static str {
    match style {
        NameStyle::Long | NameStyle::Short => name,
        NameStyle::Narrow => name
            .char_indices()
            .nth(1)
            .map_or(name, |(end, _)| &name[..end]),
    }
}

impl std::fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(CalendarSystem::Gregorian),
            // "jalali" is a common alternative transliteration.
            "jalaali" | "jalali" | "persian" => Ok(CalendarSystem::Jalaali),
            "hijri" | "islamic" => Ok(CalendarSystem::Hijri),
            other => Err(Error::InvalidArgument(format!(
                "unknown calendar system '{other}'"
            ))),
        }
    }
}

/// An explicit first-day-of-week choice overriding the system default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StartOfWeek {
    /// Weeks start on Saturday (6).
    Saturday,
    /// Weeks start on Sunday (0).
    Sunday,
    /// Weeks start on Monday (1).
    Monday,
}

impl StartOfWeek {
    /// The weekday this choice maps to.
    pub fn weekday(&self) -> Weekday {
        match self {
            StartOfWeek::Saturday => Weekday::Saturday,
            StartOfWeek::Sunday => Weekday::Sunday,
            StartOfWeek::Monday => Weekday::Monday,
        }
    }

    /// Widget index of the weekday (6, 0 or 1).
    pub fn index(&self) -> u8 {
        self.weekday().index()
    }
}

impl FromStr for StartOfWeek {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "saturday" => Ok(StartOfWeek::Saturday),
            "sunday" => Ok(StartOfWeek::Sunday),
            "monday" => Ok(StartOfWeek::Monday),
            other => Err(Error::InvalidArgument(format!(
                "unsupported start of week '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_selection() {
        assert_eq!(CalendarSystem::from_locale("fa"), CalendarSystem::Jalaali);
        assert_eq!(CalendarSystem::from_locale("fa-IR"), CalendarSystem::Jalaali);
        assert_eq!(CalendarSystem::from_locale("ar_SA"), CalendarSystem::Hijri);
        assert_eq!(CalendarSystem::from_locale("en-US"), CalendarSystem::Gregorian);
        assert_eq!(CalendarSystem::from_locale(""), CalendarSystem::Gregorian);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Jalaali".parse::<CalendarSystem>(), Ok(CalendarSystem::Jalaali));
        assert_eq!("hijri".parse::<CalendarSystem>(), Ok(CalendarSystem::Hijri));
        assert!("julian".parse::<CalendarSystem>().is_err());
        assert_eq!("monday".parse::<StartOfWeek>(), Ok(StartOfWeek::Monday));
        assert!("friday".parse::<StartOfWeek>().is_err());
    }

    #[test]
    fn start_of_week_indices() {
        assert_eq!(StartOfWeek::Saturday.index(), 6);
        assert_eq!(StartOfWeek::Sunday.index(), 0);
        assert_eq!(StartOfWeek::Monday.index(), 1);
    }

    #[test]
    fn month_names() {
        assert_eq!(CalendarSystem::Jalaali.month_name(1, NameStyle::Long), "فروردین");
        assert_eq!(CalendarSystem::Hijri.month_name(9, NameStyle::Long), "رمضان");
        assert_eq!(CalendarSystem::Gregorian.month_name(12, NameStyle::Short), "Dec");
        assert_eq!(CalendarSystem::Gregorian.month_name(13, NameStyle::Long), "");
        assert_eq!(CalendarSystem::Jalaali.month_name(1, NameStyle::Narrow), "ف");
        assert_eq!(CalendarSystem::Hijri.month_names(NameStyle::Long).len(), 12);
    }

    #[test]
    fn weekday_names_start_at_sunday() {
        let fa = CalendarSystem::Jalaali.weekday_names(NameStyle::Long);
        assert_eq!(fa[0], "یک‌شنبه");
        assert_eq!(fa[6], "شنبه");
        let en = CalendarSystem::Gregorian.weekday_names(NameStyle::Short);
        assert_eq!(en, vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    }
}
