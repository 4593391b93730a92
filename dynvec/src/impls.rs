use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use crate::core::DynVec;

impl<T> Default for DynVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Deep copy. The copy's capacity equals the source's length.
impl<T: Clone> Clone for DynVec<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.len());
        buf.extend_from_slice(self.as_slice());
        Self {
            cap: buf.len(),
            buf,
            max_size: self.max_size,
        }
    }
}

impl<T: PartialEq> PartialEq for DynVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynVec<T> {}

/// Lexicographic: the first differing element decides, and a proper prefix
/// orders before the longer array.
impl<T: PartialOrd> PartialOrd for DynVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

/// Unchecked access.
///
/// # Panics
///
/// Panics if `index >= len()`. Use [`DynVec::at`] for a checked variant.
impl<T> Index<usize> for DynVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buf[index]
    }
}

impl<T> IndexMut<usize> for DynVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buf[index]
    }
}

impl<T> AsRef<[T]> for DynVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Vec<T>> for DynVec<T> {
    fn from(buf: Vec<T>) -> Self {
        Self {
            cap: buf.len(),
            buf,
            ..Self::new()
        }
    }
}

impl<T: Clone> From<&[T]> for DynVec<T> {
    fn from(elements: &[T]) -> Self {
        Self::from(elements.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for DynVec<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T> From<DynVec<T>> for Vec<T> {
    fn from(dynvec: DynVec<T>) -> Self {
        dynvec.buf
    }
}

impl<T> FromIterator<T> for DynVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut dynvec = Self::new();
        dynvec.extend(iter);
        dynvec
    }
}

/// # Panics
///
/// Panics if the array would grow past [`DynVec::max_size`].
impl<T> Extend<T> for DynVec<T> {
    #[allow(clippy::expect_used)]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let position = self.len();
        self.insert_iter(position, iter)
            .expect("DynVec grew past its maximum size");
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
