/// Vacuously `true` for an empty slice.
#[must_use]
pub fn all_of<T>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> bool {
    for e in s {
        if !pred(e) {
            return false;
        }
    }
    true
}

/// `false` for an empty slice.
#[must_use]
pub fn any_of<T>(s: &[T], mut pred: impl FnMut(&T) -> bool) -> bool {
    for e in s {
        if pred(e) {
            return true;
        }
    }
    false
}

/// Vacuously `true` for an empty slice.
#[must_use]
pub fn none_of<T>(s: &[T], pred: impl FnMut(&T) -> bool) -> bool {
    !any_of(s, pred)
}

/// [`all_of`] that stops at the first `Err`.
pub fn try_all_of<T, E>(s: &[T], mut pred: impl FnMut(&T) -> Result<bool, E>) -> Result<bool, E> {
    for e in s {
        if !pred(e)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// [`any_of`] that stops at the first `Err`.
pub fn try_any_of<T, E>(s: &[T], mut pred: impl FnMut(&T) -> Result<bool, E>) -> Result<bool, E> {
    for e in s {
        if pred(e)? {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ODD: [i32; 8] = [3, 5, 7, 11, 13, 17, 19, 23];
    const MIXED: [i32; 7] = [0, 1, -1, 3, -3, 5, -5];
    const POWERS: [i32; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

    #[test]
    fn test_all_of() {
        assert!(all_of(&ODD, |e| e % 2 == 1));
        assert!(!all_of(&MIXED, |e| *e < 0));
        assert!(all_of::<i32>(&[], |_| false));
    }

    #[test]
    fn test_any_of() {
        assert!(!any_of(&ODD, |e| e % 2 == 0));
        assert!(any_of(&MIXED, |e| *e < 0));
        assert!(!any_of::<i32>(&[], |_| true));
    }

    #[test]
    fn test_none_of() {
        assert!(none_of(&ODD, |e| e % 2 == 0));
        assert!(!none_of(&MIXED, |e| *e < 0));
        assert!(none_of(&POWERS, |e| *e < 0));
        assert!(none_of::<i32>(&[], |_| true));
    }

    #[test]
    fn test_short_circuit() {
        let mut calls = 0;
        assert!(!all_of(&MIXED, |e| {
            calls += 1;
            *e == 0
        }));
        assert_eq!(calls, 2);

        let mut calls = 0;
        assert!(any_of(&MIXED, |e| {
            calls += 1;
            *e < 0
        }));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_try_all_of() {
        assert_eq!(try_all_of::<_, ()>(&ODD, |e| Ok(e % 2 == 1)), Ok(true));
        assert_eq!(try_all_of::<_, ()>(&MIXED, |e| Ok(*e >= 0)), Ok(false));

        let mut calls = 0;
        let res = try_all_of(&POWERS, |e| {
            calls += 1;
            if *e > 4 {
                return Err(*e);
            }
            Ok(true)
        });
        assert_eq!(res, Err(8));
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_try_any_of() {
        assert_eq!(try_any_of::<_, ()>(&MIXED, |e| Ok(*e < 0)), Ok(true));
        assert_eq!(try_any_of::<i32, ()>(&[], |_| Ok(true)), Ok(false));

        // a match before the failing element wins
        let res = try_any_of(&POWERS, |e| match *e {
            2 => Ok(true),
            4 => Err(()),
            _ => Ok(false),
        });
        assert_eq!(res, Ok(true));
    }
}
