//! Mergeable binomial heap with addressable elements
//!
//! This crate provides a binomial heap whose ordering is supplied by the
//! caller, and which supports operations on arbitrary elements, not just the
//! best one.
//!
//! # Features
//!
//! - **Caller-defined order**: a [`Preference`] strategy decides which key is
//!   "best". [`Natural`] (the default) gives a max-heap, [`Reversed`] a
//!   min-heap, and any comparison closure works through
//!   [`BinomialHeap::with_comparator`].
//! - **Union**: destructive merge of two heaps, an O(log n) meld after the
//!   other heap's nodes move over
//! - **Key improvement**: O(log n) `change_key` toward a more preferred key
//! - **Delete-anywhere**: O(log n) `remove_node` through a handle
//! - **Search**: `find` walks the forest, pruning subtrees by heap order, and
//!   can remove matches as it goes
//!
//! Nodes live in a generational arena, so a handle to a removed element is
//! detected instead of dangling, and a handle from another heap is rejected.
//!
//! # Example
//!
//! ```rust
//! use rust_binomial_heap::binomial::BinomialHeap;
//! use rust_binomial_heap::HeapError;
//!
//! let mut heap = BinomialHeap::new();
//! for key in [10, 1, 12, 25] {
//!     heap.insert(key);
//! }
//! let low = heap.find_handles(&1)[0];
//! heap.change_key(&low, 30).unwrap();
//!
//! assert_eq!(heap.extract_best(), Ok(30));
//! assert_eq!(heap.extract_best(), Ok(25));
//!
//! let best = heap.best_handle().unwrap();
//! assert_eq!(heap.change_key(&best, 0), Err(HeapError::KeyNotImproved));
//! ```

mod arena;
pub mod binomial;
pub mod degree;
pub mod find;
mod merge;
pub mod preference;
pub mod stdlib_compat;
pub mod traits;

pub use binomial::{BinomialHeap, InvariantViolation, NodeHandle};
pub use find::Find;
pub use preference::{FnPreference, Natural, Preference, Reversed};
pub use traits::{AddressableHeap, Heap, HeapError};
