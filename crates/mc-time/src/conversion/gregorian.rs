//! Proleptic Gregorian calendar ↔ Julian Day Number.
//!
//! The arithmetic is the integer form used by the Jalaali algorithms: every
//! intermediate division truncates toward zero, which is exact for all
//! day numbers from roughly 100 000 BCE onwards.

/// Whether a given Gregorian year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given Gregorian month (1–12).
///
/// Returns `0` for a month outside `1..=12`.
pub fn month_length(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian Day Number of a Gregorian date (month 1–12).
pub fn to_jdn(year: i32, month: u8, day: u8) -> i64 {
    g2d(i64::from(year), i64::from(month), i64::from(day))
}

/// Gregorian `(year, month 1–12, day)` of a Julian Day Number.
pub fn from_jdn(jdn: i64) -> (i32, u8, u8) {
    let (y, m, d) = d2g(jdn);
    (y as i32, m as u8, d as u8)
}

/// Gregorian weekday index of a Julian Day Number (0 = Sunday … 6 = Saturday).
pub fn weekday_index(jdn: i64) -> u8 {
    (jdn + 1).rem_euclid(7) as u8
}

pub(crate) fn g2d(gy: i64, gm: i64, gd: i64) -> i64 {
    let d = (gy + (gm - 8) / 6 + 100_100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34_840_408;
    d - (gy + 100_100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

pub(crate) fn d2g(jdn: i64) -> (i64, i64, i64) {
    let mut j = 4 * jdn + 139_361_631;
    j += (4 * jdn + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
    let i = (j % 1461) / 4 * 5 + 308;
    let gd = (i % 153) / 5 + 1;
    let gm = (i / 153) % 12 + 1;
    let gy = j / 1461 - 100_100 + (8 - gm) / 6;
    (gy, gm, gd)
}
