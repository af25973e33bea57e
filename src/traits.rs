//! Common traits and errors for heap data structures
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: push/peek/pop/merge, the surface shared with
//!   `std::collections::BinaryHeap`
//! - [`AddressableHeap`]: adds handles that name individual elements, so a
//!   caller can improve a key or remove an element that is not the best
//!
//! Both traits are ordering-agnostic: "best" is whatever the heap's
//! preference strategy prefers.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// The heap has no elements
    #[error("heap is empty")]
    Empty,
    /// The new key is less preferred than the key it would replace
    #[error("new key is less preferred than the current key")]
    KeyNotImproved,
    /// The handle's element has already been removed
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
    /// The handle was issued by a different heap
    #[error("handle belongs to a different heap")]
    ForeignHandle,
    /// A search cursor has no yielded element left to remove
    #[error("no yielded element to remove")]
    InvalidState,
}

/// Base trait for heap/priority queue data structures
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::Heap;
/// use rust_binomial_heap::binomial::BinomialHeap;
///
/// let mut heap: BinomialHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(7);
/// heap.push(5);
///
/// assert_eq!(heap.peek(), Some(&7));
/// assert_eq!(heap.pop(), Some(7));
/// ```
pub trait Heap<K> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    fn push(&mut self, key: K);

    /// Returns the best key without removing it
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the best key
    fn pop(&mut self) -> Option<K>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

/// Heap whose elements can be addressed after insertion
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::{AddressableHeap, Heap};
/// use rust_binomial_heap::binomial::BinomialHeap;
///
/// let mut heap: BinomialHeap<i32> = Heap::new();
/// heap.push(10);
/// let handle = heap.push_with_handle(4);
/// heap.change_key(&handle, 12).unwrap();
/// assert_eq!(heap.peek(), Some(&12));
/// ```
pub trait AddressableHeap<K>: Heap<K> {
    /// Opaque element handle
    type Handle: Copy + Eq + fmt::Debug;

    /// Inserts a key, returning a handle to its element
    fn push_with_handle(&mut self, key: K) -> Self::Handle;

    /// Replaces an element's key with one that is at least as preferred
    ///
    /// Returns the handle of the element now holding `new_key`, which may
    /// differ from `handle`.
    ///
    /// # Errors
    /// - [`HeapError::KeyNotImproved`] if `new_key` is less preferred
    /// - [`HeapError::InvalidHandle`] / [`HeapError::ForeignHandle`] for a
    ///   handle this heap cannot resolve
    fn change_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<Self::Handle, HeapError>;

    /// Removes the element named by `handle` and returns its key
    fn remove(&mut self, handle: &Self::Handle) -> Result<K, HeapError>;
}
