//! `Weekday`: day-of-week enum.

use mc_core::errors::{Error, Result};

use crate::calendar_system::NameStyle;

/// Day of the week.
///
/// Variants are numbered 0–6 (Sunday = 0, Saturday = 6), the index used by
/// date-picker widgets and by weekend sets. The numbering is the same
/// whatever calendar system is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

const ENGLISH_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const PERSIAN_NAMES: [&str; 7] = [
    "یک‌شنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
    "شنبه",
];

impl Weekday {
    /// All weekdays in index order, starting with Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the widget index (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n)).copied()
    }

    /// Return the widget index (0 = Sunday … 6 = Saturday).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// English name in the requested style (`"Sunday"`, `"Sun"`, `"S"`).
    pub fn english_name(&self, style: NameStyle) -> &'static str {
        let long = ENGLISH_NAMES[usize::from(self.index())];
        match style {
            NameStyle::Long => long,
            NameStyle::Short => &long[..3],
            NameStyle::Narrow => &long[..1],
        }
    }

    /// Persian name (`"شنبه"` for Saturday).
    pub fn persian_name(&self) -> &'static str {
        PERSIAN_NAMES[usize::from(self.index())]
    }
}

impl std::str::FromStr for Weekday {
    type Err = Error;

    /// Accepts the English name in any style and case (`"friday"`, `"Fri"`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|w| {
                [NameStyle::Long, NameStyle::Short]
                    .into_iter()
                    .any(|style| w.english_name(style).eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| Error::InvalidArgument(format!("unknown weekday '{s}'")))
    }
}

// Serialized as the lowercase name; read back from a name or a 0–6 index.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Index(u64),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Index(n) => u8::try_from(n)
                .ok()
                .and_then(Weekday::from_index)
                .ok_or_else(|| {
                    serde::de::Error::invalid_value(
                        serde::de::Unexpected::Unsigned(n),
                        &"a weekday index in 0..=6",
                    )
                }),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.english_name(NameStyle::Long))
    }
}
