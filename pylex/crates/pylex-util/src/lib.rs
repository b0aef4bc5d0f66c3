//! pylex-util - Shared foundation types for the pylex workspace
//!
//! The automata crates store states in flat arenas and refer to them by
//! small typed indices. [`IndexVec`] is that arena: a `Vec<T>` addressed by
//! an index newtype, so an NFA state id can never be used to index the DFA.
//!
//! # Example
//!
//! ```
//! use pylex_util::{define_idx, IndexVec};
//!
//! define_idx!(StateId);
//!
//! let mut states: IndexVec<StateId, &str> = IndexVec::new();
//! let start = states.push("start");
//! assert_eq!(states[start], "start");
//! ```

#![warn(missing_docs)]

pub mod index_vec;

pub use index_vec::{Idx, IndexVec};
