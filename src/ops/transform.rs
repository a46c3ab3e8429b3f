/// Applies `f` to every element in place, in index order.
pub fn for_each<T>(s: &mut [T], mut f: impl FnMut(&mut T)) {
    for e in s.iter_mut() {
        f(e);
    }
}

/// Stops at the first `Err`.
///
/// Elements before the failing one keep their new values; the failing element
/// keeps whatever `f` left in it and later elements are not visited.
pub fn try_for_each<T, E>(
    s: &mut [T],
    mut f: impl FnMut(&mut T) -> Result<(), E>,
) -> Result<(), E> {
    for e in s.iter_mut() {
        f(e)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each() {
        let mut s = [3, 5, 7, 11, 13, 17, 19, 23];
        for_each(&mut s, |e| *e -= 1);
        assert_eq!(s, [2, 4, 6, 10, 12, 16, 18, 22]);

        let mut s = [0, 1, 3, 5];
        for_each(&mut s, |e| *e = -*e);
        assert_eq!(s, [0, -1, -3, -5]);

        let mut s = [1, 2, 4, 8, 16, 32, 64, 128];
        for_each(&mut s, |e| *e /= 2);
        assert_eq!(s, [0, 1, 2, 4, 8, 16, 32, 64]);
    }

    #[test]
    fn test_for_each_involution() {
        let orig = vec![0, 1, -2, 3];
        let mut s = orig.clone();
        for_each(&mut s, |e| *e = -*e);
        for_each(&mut s, |e| *e = -*e);
        assert_eq!(s, orig);
    }

    #[test]
    fn test_for_each_order() {
        let mut s = [1, 1, 1, 1];
        let mut acc = 0;
        for_each(&mut s, |e| {
            acc += *e;
            *e = acc;
        });
        assert_eq!(s, [1, 2, 3, 4]);
    }

    #[test]
    fn test_for_each_owned() {
        let mut s = vec![String::from("a"), String::from("b")];
        for_each(&mut s, |e| e.push('!'));
        assert_eq!(s, ["a!", "b!"]);
    }

    #[test]
    fn test_try_for_each() {
        let mut s = [1, 2, 3, 4];
        let res = try_for_each(&mut s, |e| {
            if *e == 3 {
                return Err(*e);
            }
            *e *= 10;
            Ok(())
        });
        assert_eq!(res, Err(3));
        assert_eq!(s, [10, 20, 3, 4]);

        let mut s = [1, 2];
        let res: Result<(), ()> = try_for_each(&mut s, |e| {
            *e += 1;
            Ok(())
        });
        assert!(res.is_ok());
        assert_eq!(s, [2, 3]);
    }
}
