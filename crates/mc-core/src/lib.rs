//! # mc-core
//!
//! Core types, traits, and error definitions for multicalendar-rs.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: the error hierarchy, the Observer/Observable pattern used
//! for change notification, and small text-parsing utilities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Design patterns: observable.
pub mod patterns;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use patterns::observable::{ChangeNotifier, FnObserver, Observable, Observer};
