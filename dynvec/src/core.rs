use alloc::vec::Vec;
use core::iter;

use crate::error::DynVecError;
use crate::iter::{Iter, IterMut, RevIter, RevIterMut};

/// Largest element count the global allocator can hand out for `T`.
pub(crate) const fn allocator_max_size<T>() -> usize {
    let element_size = core::mem::size_of::<T>();
    if element_size == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / element_size
    }
}

/// Capacity picked when insertion needs room for `required` elements.
///
/// Doubles the current capacity, or jumps straight to `required` if doubling
/// is not enough, and never goes past `max_size`.
pub(crate) fn grown_capacity(current: usize, required: usize, max_size: usize) -> usize {
    current.saturating_mul(2).max(required).min(max_size)
}

/// A growable contiguous array with an explicit growth policy
///
/// Slots `[0, len)` hold live elements, slots `[len, capacity)` are allocated
/// but empty. The buffer moves only when the capacity has to grow.
pub struct DynVec<T> {
    // Invariant: `buf.len() <= cap <= buf.capacity()` and `cap <= max_size`.
    pub(crate) buf: Vec<T>,
    pub(crate) cap: usize,
    pub(crate) max_size: usize,
}

impl<T> DynVec<T> {
    /// Creates an empty array. Nothing is allocated until the first element arrives.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            cap: 0,
            max_size: allocator_max_size::<T>(),
        }
    }

    /// Creates an empty array that refuses to hold more than `max_size` elements.
    ///
    /// The limit is clamped to what the allocator can provide for `T`.
    #[must_use]
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            buf: Vec::new(),
            cap: 0,
            max_size: max_size.min(allocator_max_size::<T>()),
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::LengthError` if `capacity` exceeds [`DynVec::max_size`].
    pub fn with_capacity(capacity: usize) -> Result<Self, DynVecError> {
        let mut dynvec = Self::new();
        dynvec.reserve(capacity)?;
        Ok(dynvec)
    }

    /// Creates an array holding `n` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::LengthError` if `n` exceeds [`DynVec::max_size`].
    pub fn from_elem(n: usize, value: T) -> Result<Self, DynVecError>
    where
        T: Clone,
    {
        let mut dynvec = Self::new();
        dynvec.assign(n, value)?;
        Ok(dynvec)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of allocated slots, live or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Maximum number of elements this array may ever hold.
    ///
    /// This is an upper bound on the element count, not a promise that the
    /// allocator has that much memory; growth that the allocator refuses is
    /// reported as `DynVecError::AllocationFailed`.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn check_length(&self, requested: usize) -> Result<(), DynVecError> {
        if requested > self.max_size {
            return Err(DynVecError::LengthError {
                requested,
                max_size: self.max_size,
            });
        }
        Ok(())
    }

    fn check_position(&self, position: usize) -> Result<(), DynVecError> {
        if position > self.len() {
            return Err(DynVecError::OutOfRange {
                index: position,
                length: self.len(),
            });
        }
        Ok(())
    }

    /// Moves the live elements into a buffer with exactly `new_capacity` slots.
    ///
    /// On allocator failure the array is left as it was.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), DynVecError> {
        debug_assert!(new_capacity >= self.len());
        if self.buf.try_reserve_exact(new_capacity - self.len()).is_err() {
            tracing::trace!(new_capacity, len = self.len(), "dynvec allocation refused");
            return Err(DynVecError::AllocationFailed {
                capacity: new_capacity,
            });
        }
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity,
            len = self.len(),
            "dynvec capacity grown"
        );
        self.cap = new_capacity;
        Ok(())
    }

    /// Makes room for `additional` more elements following the growth policy.
    fn grow_for(&mut self, additional: usize) -> Result<(), DynVecError> {
        let Some(required) = self.len().checked_add(additional) else {
            return Err(DynVecError::LengthError {
                requested: usize::MAX,
                max_size: self.max_size,
            });
        };
        if required <= self.cap {
            return Ok(());
        }
        self.check_length(required)?;
        let grown = grown_capacity(self.cap, required, self.max_size);
        match self.reallocate(grown) {
            // Doubling may ask for more than the allocator has; settle for what is needed
            Err(_) if grown > required => self.reallocate(required),
            result => result,
        }
    }

    /// Ensures the capacity is at least `n`. Never changes the length.
    ///
    /// Reserves exactly `n` slots; does nothing if the capacity is already
    /// large enough.
    ///
    /// # Errors
    ///
    /// - `DynVecError::LengthError` if `n` exceeds [`DynVec::max_size`]
    /// - `DynVecError::AllocationFailed` if the allocator refuses the buffer;
    ///   the array is unchanged
    pub fn reserve(&mut self, n: usize) -> Result<(), DynVecError> {
        if n <= self.cap {
            return Ok(());
        }
        self.check_length(n)?;
        self.reallocate(n)
    }

    fn prepare_resize(&mut self, n: usize) -> Result<(), DynVecError> {
        self.check_length(n)?;
        if n > self.cap {
            self.reallocate(n)?;
        }
        Ok(())
    }

    /// Grows or shrinks the array to `n` elements.
    ///
    /// New slots are filled with clones of `value`; shrinking drops the
    /// trailing elements.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::LengthError` if `n` exceeds [`DynVec::max_size`].
    pub fn resize(&mut self, n: usize, value: T) -> Result<(), DynVecError>
    where
        T: Clone,
    {
        self.prepare_resize(n)?;
        self.buf.resize(n, value);
        Ok(())
    }

    /// Like [`DynVec::resize`], filling new slots with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::LengthError` if `n` exceeds [`DynVec::max_size`].
    pub fn resize_default(&mut self, n: usize) -> Result<(), DynVecError>
    where
        T: Default,
    {
        self.prepare_resize(n)?;
        self.buf.resize_with(n, T::default);
        Ok(())
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, DynVecError> {
        self.buf.get(index).ok_or(DynVecError::OutOfRange {
            index,
            length: self.len(),
        })
    }

    /// Gets the element at `index` for modification.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynVecError> {
        let length = self.len();
        self.buf
            .get_mut(index)
            .ok_or(DynVecError::OutOfRange { index, length })
    }

    /// Gets the element at `index`.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.buf.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.buf.first_mut()
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.buf.last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.buf.last_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Pointer to the first slot of the buffer.
    ///
    /// Dangling but non-null while the capacity is 0. Stays the same until
    /// the capacity grows.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Appends an element, growing the capacity if the array is full.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::LengthError` if the array already holds
    /// [`DynVec::max_size`] elements.
    pub fn push_back(&mut self, value: T) -> Result<(), DynVecError> {
        self.grow_for(1)?;
        self.buf.push(value);
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the array is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Inserts `value` at `position`, shifting the tail one slot right.
    ///
    /// Returns the position of the inserted element.
    ///
    /// # Errors
    ///
    /// - `DynVecError::OutOfRange` if `position > len()`
    /// - `DynVecError::LengthError` if the array is already at [`DynVec::max_size`]
    pub fn insert(&mut self, position: usize, value: T) -> Result<usize, DynVecError> {
        self.check_position(position)?;
        self.grow_for(1)?;
        self.buf.insert(position, value);
        Ok(position)
    }

    /// Inserts `n` clones of `value` at `position`.
    ///
    /// Returns the position of the first inserted element.
    ///
    /// # Errors
    ///
    /// - `DynVecError::OutOfRange` if `position > len()`
    /// - `DynVecError::LengthError` if `len() + n` exceeds [`DynVec::max_size`]
    pub fn insert_n(&mut self, position: usize, n: usize, value: T) -> Result<usize, DynVecError>
    where
        T: Clone,
    {
        self.check_position(position)?;
        self.grow_for(n)?;
        self.buf.extend(iter::repeat(value).take(n));
        self.buf[position..].rotate_right(n);
        Ok(position)
    }

    /// Inserts every element of `elements` at `position`, keeping their order.
    ///
    /// Returns the position of the first inserted element. On error the
    /// array holds the same elements as before the call.
    ///
    /// # Errors
    ///
    /// - `DynVecError::OutOfRange` if `position > len()`
    /// - `DynVecError::LengthError` if the elements do not fit under [`DynVec::max_size`]
    pub fn insert_iter<I>(&mut self, position: usize, elements: I) -> Result<usize, DynVecError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(position)?;
        let inserted = self.append_iter(elements)?;
        self.buf[position..].rotate_right(inserted);
        Ok(position)
    }

    /// Pushes `elements` at the end, rolling back on failure.
    fn append_iter<I>(&mut self, elements: I) -> Result<usize, DynVecError>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        let (lower, _) = elements.size_hint();
        self.grow_for(lower)?;

        let old_len = self.len();
        for value in elements {
            if let Err(err) = self.grow_for(1) {
                self.buf.truncate(old_len);
                return Err(err);
            }
            self.buf.push(value);
        }
        Ok(self.len() - old_len)
    }

    /// Removes the element at `position`, shifting the tail one slot left.
    ///
    /// Returns the position of the element that followed the removed one.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfRange` if `position >= len()`.
    pub fn erase(&mut self, position: usize) -> Result<usize, DynVecError> {
        if position >= self.len() {
            return Err(DynVecError::OutOfRange {
                index: position,
                length: self.len(),
            });
        }
        drop(self.buf.remove(position));
        Ok(position)
    }

    /// Removes the elements in `[first, last)`, shifting the tail left.
    ///
    /// Returns `first`, now the position of the element that followed the range.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::OutOfRange` if `last > len()` or `first > last`.
    pub fn erase_range(&mut self, first: usize, last: usize) -> Result<usize, DynVecError> {
        self.check_position(last)?;
        if first > last {
            return Err(DynVecError::OutOfRange {
                index: first,
                length: self.len(),
            });
        }
        drop(self.buf.drain(first..last));
        Ok(first)
    }

    /// Replaces the contents with `n` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::LengthError` if `n` exceeds [`DynVec::max_size`];
    /// the contents are left untouched in that case.
    pub fn assign(&mut self, n: usize, value: T) -> Result<(), DynVecError>
    where
        T: Clone,
    {
        self.check_length(n)?;
        self.clear();
        self.grow_for(n)?;
        self.buf.extend(iter::repeat(value).take(n));
        Ok(())
    }

    /// Replaces the contents with the elements of `elements`.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::LengthError` if the elements do not fit under
    /// [`DynVec::max_size`]; the array is left empty in that case.
    pub fn assign_iter<I>(&mut self, elements: I) -> Result<(), DynVecError>
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.append_iter(elements).map(|_| ())
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Exchanges buffers, lengths, capacities and limits with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buf)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.buf)
    }

    /// Returns an iterator over the elements, back to front.
    #[must_use]
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter::new(&self.buf)
    }

    pub fn iter_rev_mut(&mut self) -> RevIterMut<'_, T> {
        RevIterMut::new(&mut self.buf)
    }
}
