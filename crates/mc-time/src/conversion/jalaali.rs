//! Jalaali (Solar Hijri) calendar conversions.
//!
//! Leap years follow the 33-year sub-cycle rule anchored at a table of
//! "break" years where the cycle phase shifts (Kazimierz Borkowski's
//! algorithm, as used by the common `jalaali-js` library). Between
//! Jalaali −61 and 3177 this table agrees with the astronomical vernal
//! equinox calendar; outside it the rule continues with whole 33-year
//! cycles so that every day from Gregorian 0001-01-01 to 9999-12-31 maps
//! to exactly one Jalaali date and back.

use super::gregorian;

/// Years at which the 33-year cycle restarts. The outermost two entries
/// extend the published table by whole cycles (29 and 300 respectively).
const BREAKS: [i64; 22] = [
    -1018, -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262,
    2324, 2394, 2456, 3178, 13_078,
];

/// Leap days accumulated from AD 621 up to `BREAKS[0]`.
const LEAP_OFFSET: i64 = -246;

/// Smallest Jalaali year handled without clamping.
pub const MIN_YEAR: i32 = BREAKS[0] as i32;

/// Largest Jalaali year handled without clamping.
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] as i32 - 1;

struct JalCal {
    /// Years since the last leap year (0 means `jy` itself is leap).
    leap: i64,
    /// Gregorian year in which `jy` begins.
    gy: i64,
    /// Day of March on which 1 Farvardin of `jy` falls.
    march: i64,
}

fn jal_cal(jy: i64) -> JalCal {
    let jy = jy.clamp(i64::from(MIN_YEAR), i64::from(MAX_YEAR));
    let gy = jy + 621;
    let mut leap_j = LEAP_OFFSET;
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }
    let mut n = jy - jp;

    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }
    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }
    JalCal { leap, gy, march }
}

/// Whether the Jalaali year has 366 days (Esfand 30 exists).
pub fn is_leap_year(jy: i32) -> bool {
    jal_cal(i64::from(jy)).leap == 0
}

/// Number of days in a Jalaali month (1–12).
///
/// Months 1–6 have 31 days, 7–11 have 30, and Esfand (12) has 30 in a leap
/// year and 29 otherwise. Returns `0` for a month outside `1..=12`.
pub fn month_length(jy: i32, jm: u8) -> u8 {
    match jm {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(jy) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Whether `(jy, jm, jd)` names an existing Jalaali day.
pub fn is_valid(jy: i32, jm: u8, jd: u8) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&jy) && jd >= 1 && jd <= month_length(jy, jm)
}

/// Julian Day Number of a Jalaali date.
pub fn to_jdn(jy: i32, jm: u8, jd: u8) -> i64 {
    let r = jal_cal(i64::from(jy));
    let jm = i64::from(jm);
    gregorian::g2d(r.gy, 3, r.march) + (jm - 1) * 31 - jm / 7 * (jm - 7) + i64::from(jd) - 1
}

/// Jalaali `(year, month 1–12, day)` of a Julian Day Number.
pub fn from_jdn(jdn: i64) -> (i32, u8, u8) {
    let (gy, _, _) = gregorian::d2g(jdn);
    let mut jy = gy - 621;
    let r = jal_cal(jy);
    let mut k = jdn - gregorian::g2d(r.gy, 3, r.march);
    if k >= 0 {
        if k <= 185 {
            return (jy as i32, (1 + k / 31) as u8, (k % 31 + 1) as u8);
        }
        k -= 186;
    } else {
        jy -= 1;
        k += 179;
        if r.leap == 1 {
            k += 1;
        }
    }
    (jy as i32, (7 + k / 30) as u8, (k % 30 + 1) as u8)
}

/// Convert a Gregorian date to Jalaali.
pub fn gregorian_to_jalaali(gy: i32, gm: u8, gd: u8) -> (i32, u8, u8) {
    from_jdn(gregorian::to_jdn(gy, gm, gd))
}

/// Convert a Jalaali date to Gregorian.
pub fn jalaali_to_gregorian(jy: i32, jm: u8, jd: u8) -> (i32, u8, u8) {
    gregorian::from_jdn(to_jdn(jy, jm, jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nowruz_1403() {
        assert_eq!(gregorian_to_jalaali(2024, 3, 20), (1403, 1, 1));
        assert_eq!(jalaali_to_gregorian(1403, 1, 1), (2024, 3, 20));
        assert_eq!(gregorian_to_jalaali(2025, 3, 21), (1404, 1, 1));
    }

    #[test]
    fn esfand_length() {
        assert!(is_leap_year(1403));
        assert!(!is_leap_year(1402));
        assert!(!is_leap_year(1404));
        assert!(is_leap_year(1399));
        assert_eq!(month_length(1403, 12), 30);
        assert_eq!(month_length(1402, 12), 29);
        assert_eq!(jalaali_to_gregorian(1403, 12, 30), (2025, 3, 20));
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(month_length(1402, 6), 31);
        assert_eq!(month_length(1402, 7), 30);
        assert_eq!(month_length(1402, 0), 0);
        // 1402/06/31 is followed by 1402/07/01
        assert_eq!(from_jdn(to_jdn(1402, 6, 31) + 1), (1402, 7, 1));
        assert_eq!(from_jdn(to_jdn(1402, 12, 29) + 1), (1403, 1, 1));
    }

    #[test]
    fn validity() {
        assert!(is_valid(1403, 12, 30));
        assert!(!is_valid(1402, 12, 30));
        assert!(!is_valid(1402, 13, 1));
        assert!(!is_valid(1402, 1, 0));
    }

    #[test]
    fn out_of_table_years_do_not_panic() {
        let far = to_jdn(i32::MAX, 1, 1);
        assert_eq!(far, to_jdn(MAX_YEAR, 1, 1));
        let (jy, _, _) = from_jdn(to_jdn(-621, 10, 11));
        assert_eq!(jy, -621);
    }
}
