//! Key search over a binomial forest
//!
//! The walk visits nodes depth-first, left to right: root list first, each
//! node before its children. Heap order lets it skip whole subtrees. Every
//! descendant is at most as preferred as its ancestor, so once the target is
//! strictly preferred over a node's key, nothing below that node can equal
//! the target.

use crate::arena::{Arena, EntryKey, NodeKey};
use crate::binomial::{BinomialHeap, NodeHandle};
use crate::preference::Preference;
use crate::traits::HeapError;
use rustc_hash::FxHashSet;
use std::iter::FusedIterator;

/// Finds the next node at or after `from` whose key equals `target`.
///
/// Returns the match and the position to resume from.
pub(crate) fn seek<K: PartialEq, F: Preference<K>>(
    arena: &Arena<K>,
    pref: &F,
    target: &K,
    mut from: Option<NodeKey>,
) -> Option<(NodeKey, Option<NodeKey>)> {
    while let Some(node) = from {
        let current = arena.node(node);
        let descend = current
            .son
            .filter(|_| !pref.strictly_prefers(target, &current.key));
        let resume = descend.or_else(|| arena.successor(node));

        if current.key == *target {
            return Some((node, resume));
        }
        from = resume;
    }
    None
}

/// Cursor over the nodes of a heap whose key equals a target
///
/// Created by [`BinomialHeap::find`]. Yields [`NodeHandle`]s; the element
/// yielded last can be removed through the cursor with
/// [`remove_current`](Find::remove_current).
///
/// Removing reshapes the forest, so the cursor then restarts its walk from
/// the root list. Every matching element is still yielded at most once:
/// elements the caller kept are remembered by entry and skipped on the
/// rescan.
pub struct Find<'a, K, F> {
    heap: &'a mut BinomialHeap<K, F>,
    target: K,
    /// Next node to examine
    next: Option<NodeKey>,
    /// Last yielded node, while it is still removable
    pending: Option<NodeKey>,
    /// Entries yielded and not removed
    kept: FxHashSet<EntryKey>,
}

impl<'a, K: PartialEq, F: Preference<K>> Find<'a, K, F> {
    pub(crate) fn new(heap: &'a mut BinomialHeap<K, F>, target: K, start: Option<NodeKey>) -> Self {
        Find {
            heap,
            target,
            next: start,
            pending: None,
            kept: FxHashSet::default(),
        }
    }

    /// The key being searched for
    pub fn target(&self) -> &K {
        &self.target
    }

    /// Removes the element yielded by the last call to `next` and returns
    /// its key.
    ///
    /// # Errors
    /// [`HeapError::InvalidState`] if nothing has been yielded since the
    /// cursor was created or since the previous removal.
    pub fn remove_current(&mut self) -> Result<K, HeapError> {
        let node = self.pending.take().ok_or(HeapError::InvalidState)?;
        let handle = self.heap.handle(node);
        let key = self.heap.remove_node(&handle)?;
        self.next = self.heap.head();
        Ok(key)
    }
}

impl<K: PartialEq, F: Preference<K>> Iterator for Find<'_, K, F> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<NodeHandle> {
        if let Some(skipped) = self.pending.take() {
            self.kept.insert(self.heap.arena().node(skipped).entry);
        }

        loop {
            let found = seek(
                self.heap.arena(),
                self.heap.preference(),
                &self.target,
                self.next,
            );
            let Some((node, resume)) = found else {
                self.next = None;
                return None;
            };
            self.next = resume;
            if !self.kept.contains(&self.heap.arena().node(node).entry) {
                self.pending = Some(node);
                return Some(self.heap.handle(node));
            }
        }
    }
}

impl<K: PartialEq, F: Preference<K>> FusedIterator for Find<'_, K, F> {}
