/// Returns the index of the first element that equals its successor.
///
/// ```rust
/// use slice_algo::ops::search::adjacent_find;
///
/// assert_eq!(adjacent_find(&[0, 3, 1, 1]), Some(2));
/// assert_eq!(adjacent_find(&[7]), None);
/// ```
#[must_use]
pub fn adjacent_find<T: PartialEq>(s: &[T]) -> Option<usize> {
    s.windows(2).position(|pair| pair[0] == pair[1])
}

/// Returns the index of the first element equal to `value`.
#[must_use]
pub fn find<T: PartialEq>(s: &[T], value: &T) -> Option<usize> {
    for (i, e) in s.iter().enumerate() {
        if e == value {
            return Some(i);
        }
    }
    None
}

/// Returns the index of the first element for which `pred` holds.
#[must_use]
pub fn find_if<T>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> Option<usize> {
    for (i, e) in s.iter().enumerate() {
        if pred(e) {
            return Some(i);
        }
    }
    None
}

/// Whether any element equals `value`.
#[must_use]
pub fn contains<T: PartialEq>(s: &[T], value: &T) -> bool {
    find(s, value).is_some()
}

/// Stops at the first match or the first `Err`, whichever comes first.
pub fn try_find_if<T, E>(
    s: &[T],
    mut pred: impl FnMut(&T) -> Result<bool, E>,
) -> Result<Option<usize>, E> {
    for (i, e) in s.iter().enumerate() {
        if pred(e)? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}
