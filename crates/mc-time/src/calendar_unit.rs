//! `CalendarUnit`: units the adapter can step a date by.

/// A unit of calendar arithmetic.
///
/// Days and weeks are absolute; months and years are read in the active
/// calendar system and carry into the neighbouring field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years (12 months).
    Years,
}

impl std::fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarUnit::Days => write!(f, "Day(s)"),
            CalendarUnit::Weeks => write!(f, "Week(s)"),
            CalendarUnit::Months => write!(f, "Month(s)"),
            CalendarUnit::Years => write!(f, "Year(s)"),
        }
    }
}
