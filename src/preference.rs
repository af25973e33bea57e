//! Ordering strategies
//!
//! A heap never compares keys directly. Every structural decision goes
//! through a [`Preference`] value stored on the heap, so the same code
//! serves max-heaps, min-heaps and arbitrary caller orderings.
//!
//! "Best" always means "most preferred". With the default [`Natural`]
//! strategy the best key is the maximum, matching `std::collections::BinaryHeap`.

use std::cmp::Ordering;
use std::fmt;

/// A total preference order over keys.
///
/// `compare(a, b)` returns:
/// - [`Ordering::Greater`] if `a` is preferred over `b`
/// - [`Ordering::Equal`] if they are tied
/// - [`Ordering::Less`] if `b` is preferred over `a`
///
/// Implementations must be total and consistent, in the same sense as [`Ord`].
/// An inconsistent strategy cannot corrupt memory, but it can break heap order,
/// after which extraction order and search pruning are unspecified.
pub trait Preference<K: ?Sized> {
    /// Compares two keys by preference.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns true if `a` is preferred over or tied with `b`.
    #[inline]
    fn prefers(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// Returns true if `a` is strictly preferred over `b`.
    #[inline]
    fn strictly_prefers(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// Natural order: larger keys are preferred, so the heap is a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K: Ord + ?Sized> Preference<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Reversed order: smaller keys are preferred, so the heap is a min-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed;

impl<K: Ord + ?Sized> Preference<K> for Reversed {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

/// Adapter turning a comparison closure into a [`Preference`].
///
/// The closure follows the [`Preference::compare`] convention: `Greater`
/// means the first argument is preferred.
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::preference::{FnPreference, Preference};
///
/// // Prefer keys closer to zero.
/// let closest = FnPreference(|a: &i32, b: &i32| b.abs().cmp(&a.abs()));
/// assert!(closest.strictly_prefers(&-2, &5));
/// ```
#[derive(Clone, Copy)]
pub struct FnPreference<F>(pub F);

impl<K: ?Sized, F> Preference<K> for FnPreference<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnPreference<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnPreference(..)")
    }
}
