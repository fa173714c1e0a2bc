//! # mc-holidays
//!
//! Holiday classification over the Gregorian, Jalaali and Hijri calendars.
//!
//! ```
//! use mc_holidays::{classify, CalendarView, HolidayConfig, HOLIDAY_CLASS};
//! use mc_time::AbsoluteDate;
//!
//! let nowruz = AbsoluteDate::from_jalaali(1403, 1, 1).unwrap();
//! let config = HolidayConfig::new().with_jalaali_holidays(true);
//! let cell = classify(nowruz, CalendarView::Month, &config);
//! assert!(cell.is_holiday);
//! assert_eq!(cell.label, Some(HOLIDAY_CLASS));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `classify` and its result types.
pub mod classifier;

/// `HolidayConfig` and `CustomHolidayRule`.
pub mod config;

/// Built-in holiday tables.
pub mod tables;

pub use classifier::{
    classify, holidays_between, is_holiday, CalendarView, HolidayClassification, HolidayRule,
    HOLIDAY_CLASS,
};
pub use config::{CustomHolidayRule, HolidayConfig};
pub use tables::{HolidayEntry, HolidayTable};
