use crate::ops::{cmp, count, pred, search, transform};

pub trait Seq<T> {
    #[must_use]
    fn as_slice(&self) -> &[T];
}
pub trait SeqMut<T>: Seq<T> {
    #[must_use]
    fn as_slice_mut(&mut self) -> &mut [T];
}

impl<T> Seq<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> SeqMut<T> for Vec<T> {
    fn as_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Seq<T> for [T; N] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T, const N: usize> SeqMut<T> for [T; N] {
    fn as_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Seq<T> for Box<[T]> {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> SeqMut<T> for Box<[T]> {
    fn as_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Seq<T> for &[T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> Seq<T> for &mut [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> SeqMut<T> for &mut [T] {
    fn as_slice_mut(&mut self) -> &mut [T] {
        self
    }
}

/// Method-call form of the read-only algorithms in [`crate::ops`].
///
/// Names differ from the free functions where the free name would shadow an
/// inherent slice method or an [`Iterator`] method.
pub trait SeqExt<T>: Seq<T> {
    #[must_use]
    fn adjacent_find(&self) -> Option<usize>
    where
        T: PartialEq,
    {
        search::adjacent_find(self.as_slice())
    }
    #[must_use]
    fn find_eq(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        search::find(self.as_slice(), value)
    }
    #[must_use]
    fn find_if(&self, f: impl FnMut(&T) -> bool) -> Option<usize> {
        search::find_if(self.as_slice(), f)
    }
    #[must_use]
    fn all_of(&self, f: impl FnMut(&T) -> bool) -> bool {
        pred::all_of(self.as_slice(), f)
    }
    #[must_use]
    fn any_of(&self, f: impl FnMut(&T) -> bool) -> bool {
        pred::any_of(self.as_slice(), f)
    }
    #[must_use]
    fn none_of(&self, f: impl FnMut(&T) -> bool) -> bool {
        pred::none_of(self.as_slice(), f)
    }
    #[must_use]
    fn count_eq(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        count::count(self.as_slice(), value)
    }
    #[must_use]
    fn count_if(&self, f: impl FnMut(&T) -> bool) -> usize {
        count::count_if(self.as_slice(), f)
    }
    #[must_use]
    fn equal(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        cmp::equal(self.as_slice(), other)
    }
    #[must_use]
    fn equal_if<K: PartialEq>(&self, other: &[T], proj: impl FnMut(&T) -> K) -> bool {
        cmp::equal_if(self.as_slice(), other, proj)
    }
    #[must_use]
    fn mismatch(&self, other: &[T]) -> Option<cmp::Mismatch>
    where
        T: PartialEq,
    {
        cmp::mismatch(self.as_slice(), other)
    }
}
impl<S, T> SeqExt<T> for S where S: Seq<T> + ?Sized {}

pub trait SeqMutExt<T>: SeqMut<T> {
    fn for_each_mut(&mut self, f: impl FnMut(&mut T)) {
        transform::for_each(self.as_slice_mut(), f);
    }
    fn try_for_each_mut<E>(&mut self, f: impl FnMut(&mut T) -> Result<(), E>) -> Result<(), E> {
        transform::try_for_each(self.as_slice_mut(), f)
    }
}
impl<S, T> SeqMutExt<T> for S where S: SeqMut<T> + ?Sized {}
