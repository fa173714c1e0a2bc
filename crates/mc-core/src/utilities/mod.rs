//! Text utilities shared by the adapter's parse and format paths.

pub mod parsers;
