use thiserror::Error;

/// The first reason two slices compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Mismatch {
    #[error("lengths differ: {left} != {right}")]
    Len { left: usize, right: usize },
    #[error("elements differ at index {index}")]
    Elem { index: usize },
}

/// Lengths are compared before any element.
/// Elements are then compared in increasing index order up to the first unequal pair.
#[must_use]
pub fn mismatch<T: PartialEq>(s1: &[T], s2: &[T]) -> Option<Mismatch> {
    if s1.len() != s2.len() {
        return Some(Mismatch::Len {
            left: s1.len(),
            right: s2.len(),
        });
    }
    let index = s1.iter().zip(s2).position(|(a, b)| a != b)?;
    Some(Mismatch::Elem { index })
}

/// Same as [`mismatch`] but compares `proj(s1[i])` against `proj(s2[i])`.
#[must_use]
pub fn mismatch_by<T, K: PartialEq>(
    s1: &[T],
    s2: &[T],
    mut proj: impl FnMut(&T) -> K,
) -> Option<Mismatch> {
    if s1.len() != s2.len() {
        return Some(Mismatch::Len {
            left: s1.len(),
            right: s2.len(),
        });
    }
    let index = s1.iter().zip(s2).position(|(a, b)| proj(a) != proj(b))?;
    Some(Mismatch::Elem { index })
}

/// Same length and all elements equal.
#[must_use]
pub fn equal<T: PartialEq>(s1: &[T], s2: &[T]) -> bool {
    mismatch(s1, s2).is_none()
}

/// Same length and all projected elements equal.
///
/// ```rust
/// use slice_algo::ops::cmp::equal_if;
///
/// let is_odd = |x: &i32| x % 2 == 1;
/// assert!(equal_if(&[3, 9, 7], &[3, 5, 7], is_odd));
/// assert!(!equal_if(&[3, 9, 7], &[3, 4, 7], is_odd));
/// ```
#[must_use]
pub fn equal_if<T, K: PartialEq>(s1: &[T], s2: &[T], proj: impl FnMut(&T) -> K) -> bool {
    mismatch_by(s1, s2, proj).is_none()
}

/// [`mismatch`] as a [`Result`].
pub fn ensure_equal<T: PartialEq>(s1: &[T], s2: &[T]) -> Result<(), Mismatch> {
    match mismatch(s1, s2) {
        Some(m) => Err(m),
        None => Ok(()),
    }
}

/// Returns `x` if `keep_first(&x, &y)`, otherwise `y`.
///
/// This chooses between exactly two values; it is not a reduction over a sequence.
#[must_use]
pub fn max<T>(x: T, y: T, keep_first: impl FnOnce(&T, &T) -> bool) -> T {
    if keep_first(&x, &y) {
        return x;
    }
    y
}
