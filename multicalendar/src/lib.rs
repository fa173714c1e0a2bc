//! # multicalendar
//!
//! Gregorian, Jalaali (Solar Hijri) and tabular Hijri dates for
//! date-picker controls, with holiday classification.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `mc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! multicalendar = "0.1"
//! ```
//!
//! ```rust
//! use multicalendar::holidays::{classify, CalendarView, HolidayConfig};
//! use multicalendar::time::{CalendarAdapter, CalendarSystem};
//!
//! let adapter = CalendarAdapter::new(CalendarSystem::Jalaali);
//! let nowruz = adapter.parse("1403/1/1").unwrap();
//! assert_eq!(adapter.to_iso8601(nowruz), "2024-03-20");
//! assert_eq!(adapter.format(nowruz, "D MMMM YYYY").unwrap(), "1 فروردین 1403");
//!
//! let next = adapter.add_calendar_months(nowruz, 1);
//! assert_eq!(adapter.format(next, "").unwrap(), "1403/02/01");
//!
//! let config = HolidayConfig::iran();
//! assert!(classify(nowruz, CalendarView::Month, &config).is_holiday);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `ensure!`/`fail!`, change notification and text parsing.
pub use mc_core as core;

/// Absolute dates, calendar conversions and the date adapter.
pub use mc_time as time;

/// Holiday configuration, tables and classification.
pub use mc_holidays as holidays;
