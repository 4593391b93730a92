use alloc::vec;
use core::iter::FusedIterator;

use crate::core::DynVec;

/// Iterator over the elements of a `DynVec`
///
/// Positions are offsets from the buffer origin. This iterator implements `Clone`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    elements: &'a [T],
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            front: 0,
            back: elements.len(),
        }
    }

    /// Offset of the element the next call to `next()` yields.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.front
    }

    /// The elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.elements.get(self.front..self.back).unwrap_or(&[])
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let item = self.elements.get(self.front);
            self.front += 1;
            item
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.elements.get(self.back)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over the elements of a `DynVec`
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: core::slice::IterMut<'a, T>,
    front: usize,
    back: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T]) -> Self {
        Self {
            back: elements.len(),
            inner: elements.iter_mut(),
            front: 0,
        }
    }

    /// Offset of the element the next call to `next()` yields.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.front
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.back -= 1;
        Some(item)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Iterator over the elements of a `DynVec`, back to front
///
/// This iterator implements `Clone`.
#[derive(Debug)]
pub struct RevIter<'a, T> {
    inner: Iter<'a, T>,
}

impl<T> Clone for RevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> RevIter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            inner: Iter::new(elements),
        }
    }

    /// Offset one past the element the next call to `next()` yields.
    ///
    /// A fresh iterator reports `len()`. Once exhausted it reports the number
    /// of elements taken with `next_back()`.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.inner.back
    }

    /// The elements not yet yielded, in buffer order.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for RevIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> ExactSizeIterator for RevIter<'_, T> {}

impl<T> FusedIterator for RevIter<'_, T> {}

/// Mutable iterator over the elements of a `DynVec`, back to front
#[derive(Debug)]
pub struct RevIterMut<'a, T> {
    inner: IterMut<'a, T>,
}

impl<'a, T> RevIterMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T]) -> Self {
        Self {
            inner: IterMut::new(elements),
        }
    }

    /// Offset one past the element the next call to `next()` yields.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.inner.back
    }
}

impl<'a, T> Iterator for RevIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for RevIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> ExactSizeIterator for RevIterMut<'_, T> {}

impl<T> FusedIterator for RevIterMut<'_, T> {}

/// Owning iterator, moving the elements out of a `DynVec`
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DynVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.buf.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
