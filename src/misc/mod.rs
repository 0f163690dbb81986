//! Miscellaneous support items.

pub mod log;
