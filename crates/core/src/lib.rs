//! Domain logic for the paratick service: cursor parsing, ticker windowing,
//! and IGC header extraction. No database or network access, only pure functions
//! over values the boundary crates feed in.

pub mod cursor;
pub mod error;
pub mod igc;
pub mod query;
pub mod ticker;
pub mod types;
