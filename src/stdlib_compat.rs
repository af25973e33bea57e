//! Standard library interop
//!
//! Collection traits that let a [`BinomialHeap`] stand in for
//! `std::collections::BinaryHeap`: build one with `collect`, grow it with
//! `extend`, and drain it in preference order.
//!
//! With the default [`Natural`](crate::preference::Natural) strategy the heap
//! is a max-heap, like `BinaryHeap`. Draining yields the best key first.
//!
//! # Example
//!
//! ```rust
//! use rust_binomial_heap::binomial::BinomialHeap;
//!
//! let mut heap: BinomialHeap<i32> = vec![5, 3, 7].into_iter().collect();
//! heap.extend([1, 9]);
//! let ordered: Vec<i32> = heap.into_iter().collect();
//! assert_eq!(ordered, vec![9, 7, 5, 3, 1]);
//! ```

use crate::binomial::BinomialHeap;
use crate::preference::Preference;
use std::iter::FusedIterator;

impl<K, F: Preference<K> + Default> FromIterator<K> for BinomialHeap<K, F> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::default();
        for key in iter {
            heap.insert(key);
        }
        heap
    }
}

impl<K, F: Preference<K>> Extend<K> for BinomialHeap<K, F> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: Copy + 'a, F: Preference<K>> Extend<&'a K> for BinomialHeap<K, F> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        for &key in iter {
            self.insert(key);
        }
    }
}

/// Owning iterator yielding keys best-first
///
/// Created by `BinomialHeap::into_iter`.
#[derive(Debug)]
pub struct IntoIter<K, F> {
    heap: BinomialHeap<K, F>,
}

impl<K, F: Preference<K>> Iterator for IntoIter<K, F> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.heap.extract_best().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<K, F: Preference<K>> ExactSizeIterator for IntoIter<K, F> {}

impl<K, F: Preference<K>> FusedIterator for IntoIter<K, F> {}

impl<K, F: Preference<K>> IntoIterator for BinomialHeap<K, F> {
    type Item = K;
    type IntoIter = IntoIter<K, F>;

    fn into_iter(self) -> IntoIter<K, F> {
        IntoIter { heap: self }
    }
}

/// Draining iterator yielding keys best-first
///
/// Created by [`BinomialHeap::drain_best`]. Keys not consumed before the
/// iterator is dropped are removed as well.
pub struct DrainBest<'a, K, F: Preference<K>> {
    heap: &'a mut BinomialHeap<K, F>,
}

impl<K, F: Preference<K>> Iterator for DrainBest<'_, K, F> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.heap.extract_best().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<K, F: Preference<K>> ExactSizeIterator for DrainBest<'_, K, F> {}

impl<K, F: Preference<K>> FusedIterator for DrainBest<'_, K, F> {}

impl<K, F: Preference<K>> Drop for DrainBest<'_, K, F> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}

impl<K, F: Preference<K>> BinomialHeap<K, F> {
    /// Removes all keys, yielding them best-first.
    pub fn drain_best(&mut self) -> DrainBest<'_, K, F> {
        DrainBest { heap: self }
    }

    /// Consumes the heap, returning its keys best-first.
    pub fn into_vec_best_first(self) -> Vec<K> {
        self.into_iter().collect()
    }
}
