//! Conversion library tests.
//!
//! These integration tests exercise the Gregorian, Jalaali and tabular
//! Hijri conversions through `conversion::*` and `AbsoluteDate`.

use mc_time::conversion::{gregorian, hijri, jalaali};
use mc_time::{AbsoluteDate, CalendarSystem, CivilDate, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> AbsoluteDate {
    AbsoluteDate::from_gregorian(y, m, d).unwrap()
}

// ─── Fixed points ─────────────────────────────────────────────────────────────

#[test]
fn nowruz_fixed_points() {
    assert_eq!(jalaali::gregorian_to_jalaali(2024, 3, 20), (1403, 1, 1));
    assert_eq!(jalaali::gregorian_to_jalaali(2023, 3, 21), (1402, 1, 1));
    assert_eq!(jalaali::gregorian_to_jalaali(2025, 3, 21), (1404, 1, 1));
    assert_eq!(jalaali::gregorian_to_jalaali(2024, 3, 19), (1402, 12, 29));
    assert_eq!(jalaali::gregorian_to_jalaali(2025, 3, 20), (1403, 12, 30));
}

#[test]
fn jalaali_leap_years() {
    assert_eq!(jalaali::month_length(1403, 12), 30);
    assert_eq!(jalaali::month_length(1402, 12), 29);
    // Leap years around the current era, as published in the Iranian calendar
    let leaps: Vec<i32> = (1390..=1410).filter(|&y| jalaali::is_leap_year(y)).collect();
    assert_eq!(leaps, vec![1391, 1395, 1399, 1403, 1408]);
}

#[test]
fn hijri_fixed_points() {
    assert_eq!(hijri::gregorian_to_hijri(2024, 3, 20), (1445, 9, 10));
    assert_eq!(hijri::hijri_to_gregorian(1, 1, 1), (622, 7, 19));
    assert_eq!(hijri::hijri_to_gregorian(1445, 12, 30), (2024, 7, 7));
    assert_eq!(hijri::hijri_to_gregorian(1446, 2, 28), (2024, 9, 3));
    assert_eq!(hijri::to_jdn(1, 1, 1), hijri::EPOCH_JDN);
}

#[test]
fn hijri_month_lengths() {
    for year in 1440..1450 {
        let total: u32 = (1..=12).map(|m| u32::from(hijri::month_length(year, m))).sum();
        let expected = if hijri::is_leap_year(year) { 355 } else { 354 };
        assert_eq!(total, expected, "year {year}");
        assert_eq!(hijri::month_length(year, 2), 29);
    }
}

#[test]
fn supported_year_ranges() {
    assert_eq!(AbsoluteDate::MIN.to_jalaali().ymd(), (-621, 10, 11));
    assert_eq!(AbsoluteDate::MAX.to_jalaali().ymd(), (9378, 10, 10));
    assert_eq!(AbsoluteDate::MIN.to_hijri().ymd(), (-640, 5, 18));
    assert_eq!(AbsoluteDate::MAX.to_hijri().ymd(), (9666, 4, 2));
}

// ─── Continuity ───────────────────────────────────────────────────────────────

/// Walking day by day must visit every civil day exactly once, in order,
/// and a month may only end on its last day.
fn check_continuity(system: CalendarSystem, from: AbsoluteDate, to: AbsoluteDate) {
    let mut prev = from.to_civil(system);
    let mut d = from + 1;
    while d <= to {
        let cur = d.to_civil(system);
        if cur.day() == prev.day() + 1 {
            assert_eq!((cur.year(), cur.month()), (prev.year(), prev.month()), "{d}");
        } else {
            assert_eq!(cur.day(), 1, "{system}: {prev} -> {cur}");
            assert_eq!(prev.day(), prev.days_in_month(), "{system}: {prev} -> {cur}");
            if prev.month() == 12 {
                assert_eq!((cur.year(), cur.month()), (prev.year() + 1, 1));
            } else {
                assert_eq!((cur.year(), cur.month()), (prev.year(), prev.month() + 1));
            }
        }
        prev = cur;
        d += 1;
    }
}

#[test]
fn continuity_around_present() {
    let from = date(1900, 1, 1);
    let to = date(2100, 12, 31);
    for system in CalendarSystem::ALL {
        check_continuity(system, from, to);
    }
}

#[test]
fn continuity_at_range_edges() {
    for system in CalendarSystem::ALL {
        check_continuity(system, AbsoluteDate::MIN, AbsoluteDate::MIN + 800);
        check_continuity(system, AbsoluteDate::MAX - 800, AbsoluteDate::MAX);
    }
}

#[test]
fn weekday_cycle() {
    let mut d = date(2024, 1, 7); // a Sunday
    for _ in 0..3 {
        for wd in Weekday::ALL {
            assert_eq!(d.weekday(), wd, "{d}");
            d += 1;
        }
    }
}

// ─── Round trips ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn gregorian_jalaali_roundtrip(jdn in AbsoluteDate::MIN.jdn()..=AbsoluteDate::MAX.jdn()) {
        let (y, m, d) = gregorian::from_jdn(jdn);
        let (jy, jm, jd) = jalaali::gregorian_to_jalaali(y, m, d);
        prop_assert!(jalaali::is_valid(jy, jm, jd));
        prop_assert_eq!(jalaali::jalaali_to_gregorian(jy, jm, jd), (y, m, d));
    }

    #[test]
    fn gregorian_hijri_roundtrip(jdn in AbsoluteDate::MIN.jdn()..=AbsoluteDate::MAX.jdn()) {
        let (y, m, d) = gregorian::from_jdn(jdn);
        let (iy, im, id) = hijri::gregorian_to_hijri(y, m, d);
        prop_assert!(hijri::is_valid(iy, im, id));
        prop_assert_eq!(hijri::hijri_to_gregorian(iy, im, id), (y, m, d));
    }

    #[test]
    fn civil_roundtrip_every_system(jdn in AbsoluteDate::MIN.jdn()..=AbsoluteDate::MAX.jdn()) {
        let abs = AbsoluteDate::from_jdn(jdn);
        for system in CalendarSystem::ALL {
            let civil = abs.to_civil(system);
            let (y, m, d) = civil.ymd();
            prop_assert_eq!(CivilDate::new(system, y, m, d).map(|c| c.to_absolute()), Ok(abs));
        }
    }
}
