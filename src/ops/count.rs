/// Number of elements equal to `value`.
#[must_use]
pub fn count<T: PartialEq>(s: &[T], value: &T) -> usize {
    count_if(s, |e| e == value)
}

/// Number of elements for which `pred` holds.
#[must_use]
pub fn count_if<T>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> usize {
    let mut n = 0;
    for e in s {
        if pred(e) {
            n += 1;
        }
    }
    n
}

/// The count is discarded if `pred` fails on any element.
pub fn try_count_if<T, E>(
    s: &[T],
    mut pred: impl FnMut(&T) -> Result<bool, E>,
) -> Result<usize, E> {
    let mut n = 0;
    for e in s {
        if pred(e)? {
            n += 1;
        }
    }
    Ok(n)
}
