//! `AbsoluteDate`: the calendar-independent day value.
//!
//! Dates are stored as a Julian Day Number (JDN): the count of days since
//! noon, 1 January 4713 BCE (Julian). Every calendar system converts to and
//! from this number, so it is the pivot for all field arithmetic.
//!
//! # Range and sentinel
//! * JDN 0 is used as the "null date" sentinel ([`AbsoluteDate::NULL`]).
//! * The valid range is proleptic Gregorian 0001-01-01 ([`AbsoluteDate::MIN`])
//!   to 9999-12-31 ([`AbsoluteDate::MAX`]).
//! * Lenient constructors clamp into that range; strict ones return
//!   [`Error::ConversionOutOfRange`].

use mc_core::errors::{Error, Result};
use tracing::trace;

use crate::calendar_system::CalendarSystem;
use crate::civil_date::CivilDate;
use crate::conversion::{self, gregorian};
use crate::weekday::Weekday;

/// A calendar-independent day, represented as a Julian Day Number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AbsoluteDate(i32);

/// Offset between chrono's "days from CE" (0001-01-01 = 1) and the JDN.
const CE_TO_JDN: i32 = 1_721_425;

// ── Constants ─────────────────────────────────────────────────────────────────

impl AbsoluteDate {
    /// The null date sentinel (JDN 0).
    pub const NULL: AbsoluteDate = AbsoluteDate(0);

    /// Minimum valid date: January 1, 0001.
    pub const MIN: AbsoluteDate = AbsoluteDate(1_721_426);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: AbsoluteDate = AbsoluteDate(5_373_484);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a Julian Day Number, clamping into
    /// `[MIN, MAX]`.
    pub fn from_jdn(jdn: i64) -> Self {
        let clamped = jdn.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        if clamped != jdn {
            trace!(jdn, clamped, "day number clamped into supported range");
        }
        AbsoluteDate(clamped as i32)
    }

    /// Create a date from a Julian Day Number.
    ///
    /// # Errors
    /// Returns [`Error::ConversionOutOfRange`] outside `[MIN, MAX]`.
    pub fn try_from_jdn(jdn: i64) -> Result<Self> {
        if jdn < i64::from(Self::MIN.0) || jdn > i64::from(Self::MAX.0) {
            return Err(Error::ConversionOutOfRange(format!(
                "day number {jdn} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(AbsoluteDate(jdn as i32))
    }

    /// Create a date from a Gregorian year, month (1–12), and day (1–31).
    ///
    /// # Errors
    /// Returns an error if the triple does not name an existing day in
    /// 0001–9999.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self> {
        CivilDate::new(CalendarSystem::Gregorian, year, month, day).map(|c| c.to_absolute())
    }

    /// Create a date from a Jalaali year, month (1–12), and day.
    ///
    /// # Errors
    /// Returns an error if the triple is not a valid Jalaali day in range.
    pub fn from_jalaali(year: i32, month: u8, day: u8) -> Result<Self> {
        CivilDate::new(CalendarSystem::Jalaali, year, month, day).map(|c| c.to_absolute())
    }

    /// Create a date from a Hijri year, month (1–12), and day.
    ///
    /// # Errors
    /// Returns an error if the triple is not a valid Hijri day in range.
    pub fn from_hijri(year: i32, month: u8, day: u8) -> Result<Self> {
        CivilDate::new(CalendarSystem::Hijri, year, month, day).map(|c| c.to_absolute())
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the Julian Day Number.
    pub fn jdn(&self) -> i64 {
        i64::from(self.0)
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return `true` if the date lies in `[MIN, MAX]`.
    pub fn is_valid(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(self)
    }

    /// Return the weekday (Gregorian, independent of any display calendar).
    pub fn weekday(&self) -> Weekday {
        Weekday::ALL[usize::from(gregorian::weekday_index(self.jdn()))]
    }

    /// The civil triple of this date in `system`.
    ///
    /// For the null date the triple is meaningless; check
    /// [`is_valid`](Self::is_valid) first where it matters.
    pub fn to_civil(&self, system: CalendarSystem) -> CivilDate {
        let (y, m, d) = conversion::from_jdn(system, self.jdn());
        CivilDate::from_parts_unchecked(system, y, m, d)
    }

    /// The Gregorian civil triple.
    pub fn to_gregorian(&self) -> CivilDate {
        self.to_civil(CalendarSystem::Gregorian)
    }

    /// The Jalaali civil triple.
    pub fn to_jalaali(&self) -> CivilDate {
        self.to_civil(CalendarSystem::Jalaali)
    }

    /// The Hijri civil triple.
    pub fn to_hijri(&self) -> CivilDate {
        self.to_civil(CalendarSystem::Hijri)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days, clamping to the supported range. The null
    /// date stays null.
    pub fn add_days(self, n: i64) -> Self {
        if self.is_null() {
            return self;
        }
        Self::from_jdn(self.jdn().saturating_add(n))
    }

    /// Return the number of days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: AbsoluteDate) -> i64 {
        other.jdn() - self.jdn()
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for AbsoluteDate {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(i64::from(rhs))
    }
}

impl std::ops::Sub<i32> for AbsoluteDate {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-i64::from(rhs))
    }
}

impl std::ops::Sub<AbsoluteDate> for AbsoluteDate {
    type Output = i64;
    fn sub(self, rhs: AbsoluteDate) -> i64 {
        self.jdn() - rhs.jdn()
    }
}

impl std::ops::AddAssign<i32> for AbsoluteDate {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for AbsoluteDate {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl From<chrono::NaiveDate> for AbsoluteDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self::from_jdn(i64::from(date.num_days_from_ce()) + i64::from(CE_TO_JDN))
    }
}

impl TryFrom<AbsoluteDate> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(date: AbsoluteDate) -> Result<Self> {
        if !date.is_valid() {
            return Err(Error::InvalidDate(format!("{date:?}")));
        }
        chrono::NaiveDate::from_num_days_from_ce_opt(date.0 - CE_TO_JDN)
            .ok_or_else(|| Error::ConversionOutOfRange(format!("{date:?}")))
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for AbsoluteDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = gregorian::from_jdn(self.jdn());
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for AbsoluteDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "AbsoluteDate(null)");
        }
        write!(f, "AbsoluteDate({self})")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
