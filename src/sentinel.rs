use core::fmt;

use num_traits::{NumCast, PrimInt, Signed};
use thiserror::Error;

pub const NOT_FOUND: isize = -1;

/// A position encoded as a signed integer where `-1` means "not found".
///
/// # Example
///
/// ```rust
/// use slice_algo::{ops::search::find, sentinel::SentinelIndex};
///
/// let s = [3, 5, 7, 11];
/// let i = SentinelIndex::<isize>::from_position(find(&s, &7)).unwrap();
/// assert_eq!(i.raw(), 2);
/// let i = SentinelIndex::<i32>::from_position(find(&s, &4)).unwrap();
/// assert_eq!(i.raw(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SentinelIndex<I = isize> {
    value: I,
}
impl<I> SentinelIndex<I>
where
    I: PrimInt + Signed,
{
    #[must_use]
    pub fn none() -> Self {
        Self { value: -I::one() }
    }
    /// [`None`] if `index` does not fit in `I`
    #[must_use]
    pub fn some(index: usize) -> Option<Self> {
        let value = <I as NumCast>::from(index)?;
        Some(Self { value })
    }
    #[must_use]
    pub fn from_position(position: Option<usize>) -> Option<Self> {
        match position {
            Some(index) => Self::some(index),
            None => Some(Self::none()),
        }
    }
    /// Rejects values below `-1` and non-negative values that do not fit in [`usize`]
    pub fn from_raw(value: I) -> Result<Self, InvalidSentinel> {
        if value < -I::one() {
            return Err(InvalidSentinel);
        }
        if !value.is_negative() && value.to_usize().is_none() {
            return Err(InvalidSentinel);
        }
        Ok(Self { value })
    }

    #[must_use]
    pub fn get(&self) -> Option<usize> {
        if self.value.is_negative() {
            return None;
        }
        self.value.to_usize()
    }
    #[must_use]
    pub fn raw(&self) -> I {
        self.value
    }
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.value.is_negative()
    }
    #[must_use]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}
impl<I> Default for SentinelIndex<I>
where
    I: PrimInt + Signed,
{
    fn default() -> Self {
        Self::none()
    }
}
impl<I> From<SentinelIndex<I>> for Option<usize>
where
    I: PrimInt + Signed,
{
    fn from(value: SentinelIndex<I>) -> Self {
        value.get()
    }
}
impl<I: fmt::Display> fmt::Display for SentinelIndex<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("raw index is below -1 or exceeds usize")]
pub struct InvalidSentinel;
