//! Tabular (arithmetic) Hijri calendar conversions.
//!
//! This is the civil tabular calendar, not an observational one:
//!
//! * **Epoch:** 1 Muharram 1 AH is Julian Day Number [`EPOCH_JDN`]
//!   (`1_948_440`), i.e. Friday 16 July 622 Julian / 19 July 622 proleptic
//!   Gregorian.
//! * **Leap years:** year `y` is leap iff `(14 + 11·y) mod 30 < 11`, giving
//!   the years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of every 30-year
//!   cycle (10 631 days).
//! * **Months:** odd months have 30 days and even months 29, except that
//!   Dhu al-Hijjah (12) has 30 days in a leap year.
//!
//! Fixtures computed from any other epoch differ by one or two days.

use super::gregorian;

/// Julian Day Number of 1 Muharram 1 AH.
pub const EPOCH_JDN: i64 = 1_948_440;

/// Days in one 30-year cycle.
const CYCLE_DAYS: i64 = 10_631;

/// Whether the Hijri year has 355 days.
pub fn is_leap_year(iy: i32) -> bool {
    (14 + 11 * i64::from(iy)).rem_euclid(30) < 11
}

/// Number of days in a Hijri month (1–12): 29 or 30.
///
/// Returns `0` for a month outside `1..=12`.
pub fn month_length(iy: i32, im: u8) -> u8 {
    match im {
        12 if is_leap_year(iy) => 30,
        1..=12 if im % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

/// Whether `(iy, im, id)` names an existing Hijri day.
pub fn is_valid(iy: i32, im: u8, id: u8) -> bool {
    id >= 1 && id <= month_length(iy, im)
}

fn year_start(iy: i64) -> i64 {
    EPOCH_JDN + (iy - 1) * 354 + (3 + 11 * iy).div_euclid(30)
}

/// Julian Day Number of a Hijri date.
pub fn to_jdn(iy: i32, im: u8, id: u8) -> i64 {
    let im = i64::from(im);
    year_start(i64::from(iy)) + (59 * (im - 1) + 1).div_euclid(2) + i64::from(id) - 1
}

/// Hijri `(year, month 1–12, day)` of a Julian Day Number.
pub fn from_jdn(jdn: i64) -> (i32, u8, u8) {
    let mut iy = (30 * (jdn - EPOCH_JDN) + CYCLE_DAYS + 15).div_euclid(CYCLE_DAYS);
    // The estimate is off by at most one year near year boundaries.
    while jdn < year_start(iy) {
        iy -= 1;
    }
    while jdn >= year_start(iy + 1) {
        iy += 1;
    }
    let iy = iy as i32;
    let mut remaining = jdn - year_start(i64::from(iy));
    let mut im = 1u8;
    while im < 12 && remaining >= i64::from(month_length(iy, im)) {
        remaining -= i64::from(month_length(iy, im));
        im += 1;
    }
    (iy, im, (remaining + 1) as u8)
}

/// Convert a Gregorian date to Hijri.
pub fn gregorian_to_hijri(gy: i32, gm: u8, gd: u8) -> (i32, u8, u8) {
    from_jdn(gregorian::to_jdn(gy, gm, gd))
}

/// Convert a Hijri date to Gregorian.
pub fn hijri_to_gregorian(iy: i32, im: u8, id: u8) -> (i32, u8, u8) {
    gregorian::from_jdn(to_jdn(iy, im, id))
}
