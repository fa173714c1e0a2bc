//! Pattern formatting of civil dates.
//!
//! Supported tokens (longest match first):
//!
//! | Token | Output |
//! |---|---|
//! | `YYYY` | year, at least four digits |
//! | `YY` | last two digits of the year |
//! | `MMMM` / `MMM` | long / short month name of the date's calendar |
//! | `MM` / `M` | month number, zero-padded / plain |
//! | `DD` / `D` | day of month, zero-padded / plain |
//! | `dddd` / `ddd` | long / short weekday name |
//!
//! Text between `[` and `]` is copied verbatim; any other character is
//! copied as is.

use crate::calendar_system::NameStyle;
use crate::civil_date::CivilDate;
use crate::weekday::Weekday;

/// Pattern used when the caller passes an empty one.
pub const DEFAULT_PATTERN: &str = "YYYY/MM/DD";

const TOKENS: [&str; 10] = [
    "YYYY", "YY", "MMMM", "MMM", "MM", "M", "DD", "D", "dddd", "ddd",
];

/// Render `civil` (whose weekday is `weekday`) according to `pattern`.
pub fn format_civil(civil: &CivilDate, weekday: Weekday, pattern: &str) -> String {
    let pattern = if pattern.is_empty() {
        DEFAULT_PATTERN
    } else {
        pattern
    };
    let system = civil.system();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        if c == '[' {
            match rest.find(']') {
                Some(end) => {
                    out.push_str(&rest[1..end]);
                    rest = &rest[end + 1..];
                }
                None => {
                    out.push_str(&rest[1..]);
                    rest = "";
                }
            }
            continue;
        }
        let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        };
        let wd = usize::from(weekday.index());
        match *token {
            "YYYY" => out.push_str(&format!("{:04}", civil.year())),
            "YY" => out.push_str(&format!("{:02}", civil.year().rem_euclid(100))),
            "MMMM" => out.push_str(system.month_name(civil.month(), NameStyle::Long)),
            "MMM" => out.push_str(system.month_name(civil.month(), NameStyle::Short)),
            "MM" => out.push_str(&format!("{:02}", civil.month())),
            "M" => out.push_str(&civil.month().to_string()),
            "DD" => out.push_str(&format!("{:02}", civil.day())),
            "D" => out.push_str(&civil.day().to_string()),
            "dddd" => out.push_str(system.weekday_names(NameStyle::Long)[wd]),
            _ => out.push_str(system.weekday_names(NameStyle::Short)[wd]),
        }
        rest = &rest[token.len()..];
    }
    out
}
