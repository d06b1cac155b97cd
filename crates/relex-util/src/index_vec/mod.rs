//! IndexVec - A vector indexed by a typed handle.
//!
//! [`IndexVec`] wraps a `Vec<T>` behind a caller-chosen index type so that
//! handles from different arenas cannot be mixed up at compile time. The
//! scanner's state chain stores its nodes in one of these, addressed by
//! `StateId` handles.
//!
//! # Example
//!
//! ```
//! use relex_util::{Idx, IndexVec};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct NodeId(u32);
//!
//! impl Idx for NodeId {
//!     fn from_usize(idx: usize) -> Self { NodeId(idx as u32) }
//!     fn index(self) -> usize { self.0 as usize }
//! }
//!
//! let mut nodes: IndexVec<NodeId, &str> = IndexVec::new();
//! let id = nodes.push("root");
//! assert_eq!(nodes[id], "root");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Trait for types usable as an [`IndexVec`] index.
///
/// Implementors must round-trip through `usize`: `from_usize(i).index() == i`.
///
/// # Panics
///
/// `from_usize` may panic if the value does not fit the index's
/// representation (e.g. a `u32`-backed handle past `u32::MAX`).
pub trait Idx: Copy + Eq + PartialEq {
    /// Convert from usize to the index type.
    fn from_usize(idx: usize) -> Self;

    /// Convert the index back to usize for slot access.
    fn index(self) -> usize;
}

/// A vector indexed by a typed handle instead of `usize`.
///
/// Same layout and cost as `Vec<T>`; the index type is purely a
/// compile-time discriminator.
#[derive(Clone)]
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    _marker: PhantomData<fn(&I)>,
}

impl<I, T> IndexVec<I, T> {
    /// Creates an empty vector.
    #[inline]
    pub fn new() -> Self {
        Self {
            raw: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Creates an empty vector with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: Vec::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// Number of elements stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Current allocated capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Iterates over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.raw.iter()
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    /// Appends an element, returning the handle of its slot.
    #[inline]
    pub fn push(&mut self, value: T) -> I {
        let idx = I::from_usize(self.raw.len());
        self.raw.push(value);
        idx
    }

    /// Returns a reference to the element at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        self.raw.get(index.index())
    }

    /// Returns a mutable reference to the element at `index`, if in bounds.
    #[inline]
    pub fn get_mut(&mut self, index: I) -> Option<&mut T> {
        self.raw.get_mut(index.index())
    }

    /// Handle of the most recently pushed element, if any.
    pub fn last_index(&self) -> Option<I> {
        if self.raw.is_empty() {
            None
        } else {
            Some(I::from_usize(self.raw.len() - 1))
        }
    }

    /// Iterates over `(handle, element)` pairs in index order.
    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> {
        self.raw
            .iter()
            .enumerate()
            .map(|(i, t)| (I::from_usize(i), t))
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.raw[index.index()]
    }
}

impl<I: Idx, T> IndexMut<I> for IndexVec<I, T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.raw[index.index()]
    }
}

impl<I, T> Default for IndexVec<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T: fmt::Debug> fmt::Debug for IndexVec<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.raw.iter()).finish()
    }
}
