//! Free-function algorithms over borrowed slices.
//!
//! Scans run in increasing index order. "Not found" is [`None`]; see
//! [`crate::sentinel`] for the `-1` encoding.

pub mod cmp;
pub mod count;
pub mod pred;
pub mod search;
pub mod transform;
