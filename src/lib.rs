//! Generic search, counting, equality and in-place transform algorithms over
//! slices.
//!
//! Every function borrows its sequence for the duration of the call and never
//! changes its length. Functions needing equality take `T: PartialEq`; the
//! rest take a caller-supplied closure and work over any `T`.
//!
//! # Example
//!
//! ```rust
//! use slice_algo::{count, equal, find, for_each, max, seq::SeqExt};
//!
//! let mut s = vec![1, 1, 2, 3, 4, 2, 1];
//! assert_eq!(count(&s, &1), 3);
//! assert_eq!(find(&s, &3), Some(3));
//! assert_eq!(s.adjacent_find(), Some(0));
//!
//! for_each(&mut s, |x| *x *= 2);
//! assert!(equal(&s, &[2, 2, 4, 6, 8, 4, 2]));
//!
//! assert_eq!(max(3, 5, |x, y| x > y), 5);
//! ```
#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

pub mod ops;
pub mod sentinel;
pub mod seq;

pub use ops::{
    cmp::{Mismatch, ensure_equal, equal, equal_if, max, mismatch, mismatch_by},
    count::{count, count_if, try_count_if},
    pred::{all_of, any_of, none_of, try_all_of, try_any_of},
    search::{adjacent_find, contains, find, find_if, try_find_if},
    transform::{for_each, try_for_each},
};
