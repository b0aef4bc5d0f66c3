//! IndexVec - A vector indexed by a specific type.
//!
//! [`IndexVec`] is a typed vector that uses a custom index type instead of
//! `usize`. The automata crates keep one arena per automaton, and the typed
//! index keeps NFA and DFA state ids from being mixed up.
//!
//! # Example
//!
//! ```
//! use pylex_util::index_vec::{IndexVec, Idx};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct StateId(u32);
//!
//! impl Idx for StateId {
//!     fn from_usize(idx: usize) -> Self { StateId(idx as u32) }
//!     fn index(self) -> usize { self.0 as usize }
//! }
//!
//! let mut accepting: IndexVec<StateId, i32> = IndexVec::new();
//! let id = accepting.push(3);
//! assert_eq!(accepting[id], 3);
//! ```

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Trait for types that can be used as indices
///
/// The type must be convertible to and from `usize`.
pub trait Idx: Copy + Eq + PartialEq {
    /// Convert from usize to index type
    ///
    /// # Panics
    ///
    /// Implementations may panic if the usize value is too large to fit
    /// in the index type.
    fn from_usize(idx: usize) -> Self;

    /// Convert index to usize for array indexing
    fn index(self) -> usize;
}

impl Idx for usize {
    #[inline]
    fn from_usize(idx: usize) -> Self {
        idx
    }

    #[inline]
    fn index(self) -> usize {
        self
    }
}

/// A vector indexed by a specific type
///
/// `IndexVec` is a wrapper around `Vec<T>` that uses a typed index `I`
/// instead of `usize`. The index type is a zero-cost abstraction.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    _marker: PhantomData<fn(&I)>,
}

impl<I, T> IndexVec<I, T> {
    /// Create an empty IndexVec
    #[inline]
    pub fn new() -> Self {
        Self {
            raw: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the vector
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the vector contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    /// Push a value, returning its index
    #[inline]
    pub fn push(&mut self, value: T) -> I {
        let index = self.raw.len();
        self.raw.push(value);
        I::from_usize(index)
    }

    /// Iterate over `(index, &element)` pairs
    #[inline]
    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> {
        self.raw
            .iter()
            .enumerate()
            .map(|(i, v)| (I::from_usize(i), v))
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
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T: std::fmt::Debug> std::fmt::Debug for IndexVec<I, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.raw.fmt(f)
    }
}

impl<I: Idx, T> FromIterator<T> for IndexVec<I, T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self {
            raw: iter.into_iter().collect(),
            _marker: PhantomData,
        }
    }
}

/// Define a `u32`-backed index newtype implementing [`Idx`].
///
/// ```
/// pylex_util::define_idx!(BlockId);
///
/// let id = <BlockId as pylex_util::Idx>::from_usize(4);
/// assert_eq!(id, BlockId(4));
/// ```
#[macro_export]
macro_rules! define_idx {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $crate::index_vec::Idx for $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize, "Index {} exceeds u32::MAX", idx);
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

#[cfg(test)]
mod tests;
