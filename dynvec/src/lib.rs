#![no_std]

//! `DynVec`: a growable contiguous array with an explicit growth policy.
//!
//! `DynVec` owns a single contiguous buffer. It distinguishes the number of
//! live elements (`len`) from the number of allocated slots (`capacity`) and
//! only moves the buffer when the capacity has to grow.
//!
//! This crate is `no_std` compatible; it needs `alloc`.
//!
//! # Growth Policy
//!
//! When an insertion needs more slots than are allocated, the new capacity is
//! `max(capacity * 2, required)`, clamped to [`DynVec::max_size`]. Explicit
//! requests ([`DynVec::reserve`], [`DynVec::resize`]) allocate exactly what
//! was asked for.
//!
//! ```
//! # use dynvec::DynVec;
//! let mut dynvec = DynVec::new();
//! assert_eq!(dynvec.capacity(), 0);
//!
//! dynvec.push_back(1).unwrap();
//! assert_eq!(dynvec.capacity(), 1);
//! dynvec.push_back(2).unwrap();
//! assert_eq!(dynvec.capacity(), 2);
//! dynvec.push_back(3).unwrap();
//! assert_eq!(dynvec.capacity(), 4);
//!
//! dynvec.insert_n(0, 10, 0).unwrap();
//! assert_eq!(dynvec.capacity(), 13);
//! ```
//!
//! # Errors
//!
//! Failures are reported through [`DynVecError`]:
//!
//! - `LengthError`: the array would hold more than [`DynVec::max_size`] elements
//! - `OutOfRange`: a checked access or a position argument is past the end
//! - `AllocationFailed`: the allocator refused to grow the buffer. Any call
//!   that can grow the capacity may return it; the array keeps its contents
//!   as they were before the growth was attempted.
//!
//! ```
//! # use dynvec::{DynVec, DynVecError};
//! let mut dynvec = DynVec::with_max_size(2);
//! dynvec.push_back('a').unwrap();
//! dynvec.push_back('b').unwrap();
//!
//! assert_eq!(
//!     dynvec.push_back('c'),
//!     Err(DynVecError::LengthError { requested: 3, max_size: 2 })
//! );
//! assert_eq!(
//!     dynvec.at(2),
//!     Err(DynVecError::OutOfRange { index: 2, length: 2 })
//! );
//! ```
//!
//! Indexing with `[]` is unchecked by contract and panics on a bad index.
//!
//! # Positions and Iterators
//!
//! Positions are offsets from the start of the buffer. `insert*` returns the
//! position of the first inserted element and `erase*` returns the position
//! of the element that followed the removed range:
//!
//! ```
//! # use dynvec::DynVec;
//! let mut dynvec = DynVec::from([1, 2, 3, 4, 5]);
//!
//! let next = dynvec.erase_range(1, 3).unwrap();
//! assert_eq!(dynvec[next], 4);
//!
//! dynvec.insert_iter(next, [2, 3]).unwrap();
//! assert_eq!(dynvec.as_slice(), &[1, 2, 3, 4, 5]);
//!
//! let reversed: Vec<_> = dynvec.iter_rev().copied().collect();
//! assert_eq!(reversed, vec![5, 4, 3, 2, 1]);
//! ```
//!
//! Any operation that can move or shift elements takes `&mut self`, so the
//! borrow checker rules out using an iterator across it.

extern crate alloc;

mod core;
mod error;
mod impls;
mod iter;

// Re-export public types
pub use crate::core::DynVec;
pub use error::DynVecError;
pub use iter::{IntoIter, Iter, IterMut, RevIter, RevIterMut};
