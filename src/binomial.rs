//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) insert and extract-best
//! - O(log n) union of root lists, plus moving the other heap's nodes in
//! - O(log n) key improvement and delete-anywhere
//! - O(n) worst-case search, pruned by heap order
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: B₀ is a single node; Bₖ is two B_{k-1} trees with
//! one root absorbed under the other. Bₖ has exactly 2ᵏ nodes and its root
//! has children of degrees k-1, ..., 1, 0.
//!
//! **Root list**: the trees of a heap are chained in strictly increasing
//! degree order, so the list mirrors the binary representation of `len`.
//!
//! **Heap order**: every parent is preferred over, or tied with, each of its
//! children under the heap's [`Preference`]. The best key is therefore at
//! one of the O(log n) roots.
//!
//! **Key Operations**:
//! - **Insert**: meld a one-node list into the root list (binary increment)
//! - **Union**: meld two root lists (binary addition with carries)
//! - **Extract-best**: unlink the best root; its children, reversed, form a
//!   root list that is melded back
//! - **Change-key**: overwrite the key, then move it toward the root by
//!   shifting ancestors' keys down one level. No links change.
//! - **Remove**: shift the key all the way to its tree's root regardless of
//!   preference, then extract that root
//!
//! Consolidation runs eagerly after every meld, so the root list always
//! holds at most one tree per degree.
//!
//! # Handles
//!
//! Change-key and remove move keys between nodes along a root path. A
//! [`NodeHandle`] names an inserted key rather than a node slot, so it keeps
//! following its key through those moves and stops resolving exactly when
//! that key leaves the heap.

use crate::arena::{Arena, EntryKey, HeapId, NodeKey};
use crate::find::{self, Find};
use crate::merge::meld;
use crate::preference::{FnPreference, Natural, Preference};
use crate::traits::{AddressableHeap, Heap, HeapError};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};

/// Handle to an element of a [`BinomialHeap`]
///
/// Handles are cheap to copy. A handle stops resolving once its element is
/// removed, and a handle from one heap is rejected by every other heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    heap: HeapId,
    entry: EntryKey,
}

/// Binomial Heap
///
/// `F` selects which keys are "best". The default [`Natural`] strategy makes
/// this a max-heap.
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(3);
/// let handle = heap.insert(1);
/// heap.insert(8);
///
/// heap.change_key(&handle, 10).unwrap();
/// assert_eq!(heap.best(), Ok(&10));
/// assert_eq!(heap.extract_best(), Ok(10));
/// assert_eq!(heap.len(), 2);
/// ```
pub struct BinomialHeap<K, F = Natural> {
    arena: Arena<K>,
    /// First root of the root list (lowest degree)
    head: Option<NodeKey>,
    len: usize,
    pref: F,
    id: HeapId,
}

/// Structural defect reported by [`BinomialHeap::check_invariants`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// Two roots out of degree order, or sharing a degree
    #[error("root list degrees not strictly increasing: {previous} then {next}")]
    RootOrder { previous: u8, next: u8 },
    #[error("root has a parent link")]
    RootHasParent,
    /// Children must have degrees `d-1, ..., 0`, first child first
    #[error("node of degree {degree} has a child of degree {found}, expected {expected}")]
    TreeShape { degree: u8, expected: u8, found: u8 },
    #[error("node of degree {degree} has {children} children")]
    ChildCount { degree: u8, children: usize },
    #[error("child does not point back to its parent")]
    ParentLink,
    #[error("child key is preferred over its parent's key")]
    HeapOrder,
    #[error("size is {recorded} but {reachable} nodes are reachable from the root list")]
    SizeMismatch { recorded: usize, reachable: usize },
    /// Arena slots that no root list path reaches
    #[error("arena holds {allocated} nodes but {reachable} are reachable")]
    LeakedNodes { allocated: usize, reachable: usize },
}

impl<K: Ord> BinomialHeap<K, Natural> {
    /// Creates an empty max-heap.
    pub fn new() -> Self {
        Self::with_preference(Natural)
    }

    /// Creates an empty max-heap with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_preference(capacity, Natural)
    }

    /// Creates a max-heap holding a single key.
    pub fn from_key(key: K) -> Self {
        Self::from_key_with_preference(key, Natural)
    }
}

impl<K, C> BinomialHeap<K, FnPreference<C>>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Creates an empty heap ordered by a comparison closure.
    ///
    /// The closure returns `Greater` when its first argument is preferred.
    ///
    /// ```rust
    /// use rust_binomial_heap::binomial::BinomialHeap;
    ///
    /// // Prefer the shortest string.
    /// let mut heap = BinomialHeap::with_comparator(|a: &String, b: &String| b.len().cmp(&a.len()));
    /// heap.insert("three".to_string());
    /// heap.insert("a".to_string());
    /// assert_eq!(heap.best().map(String::as_str), Ok("a"));
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self::with_preference(FnPreference(compare))
    }
}

impl<K, F: Preference<K>> BinomialHeap<K, F> {
    /// Creates an empty heap ordered by `pref`.
    pub fn with_preference(pref: F) -> Self {
        Self::with_capacity_and_preference(0, pref)
    }

    /// Creates an empty heap ordered by `pref` with room for `capacity` keys.
    pub fn with_capacity_and_preference(capacity: usize, pref: F) -> Self {
        BinomialHeap {
            arena: Arena::with_capacity(capacity),
            head: None,
            len: 0,
            pref,
            id: HeapId::fresh(),
        }
    }

    /// Creates a heap ordered by `pref` holding a single key.
    pub fn from_key_with_preference(key: K, pref: F) -> Self {
        let mut heap = Self::with_preference(pref);
        heap.insert(key);
        heap
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of keys in the heap
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the heap's ordering strategy
    pub fn preference(&self) -> &F {
        &self.pref
    }

    /// Returns the most preferred key.
    ///
    /// **Time Complexity**: O(log n), one pass over the root list.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no keys.
    pub fn best(&self) -> Result<&K, HeapError> {
        let root = self.best_root().ok_or(HeapError::Empty)?;
        Ok(&self.arena.node(root).key)
    }

    /// Returns a handle to the node holding the most preferred key.
    pub fn best_handle(&self) -> Result<NodeHandle, HeapError> {
        self.best_root()
            .map(|root| self.handle(root))
            .ok_or(HeapError::Empty)
    }

    /// Inserts a key and returns a handle to it.
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The new degree-0 tree is melded into the root list immediately, like
    /// adding one to a binary counter: each carry is one link.
    pub fn insert(&mut self, key: K) -> NodeHandle {
        let node = self.arena.alloc(key);
        self.head = meld(&mut self.arena, &self.pref, Some(node), self.head);
        self.len += 1;
        trace!(len = self.len, "inserted key");
        self.handle(node)
    }

    /// Moves every key of `other` into this heap, leaving `other` empty.
    ///
    /// **Time Complexity**: O(log n) for the meld, plus O(|other|) to move
    /// `other`'s nodes into this heap's arena.
    ///
    /// Handles issued by `other` do not follow their keys: afterwards they
    /// are rejected by both heaps. Self-union cannot be expressed, since
    /// `self` and `other` are distinct exclusive borrows.
    pub fn union(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        let adopted = self.arena.adopt(&mut other.arena, other.head.take());
        self.head = meld(&mut self.arena, &self.pref, self.head, adopted);
        self.len += other.len;
        debug!(moved = other.len, len = self.len, "merged heap");
        other.len = 0;
    }

    /// Removes and returns the most preferred key.
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Scan the root list for the best root and unlink it
    /// 2. Its children (degrees k-1, ..., 0) reversed form a valid root list
    /// 3. Meld that list back into the remaining roots
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no keys. The heap is unchanged.
    pub fn extract_best(&mut self) -> Result<K, HeapError> {
        let root = self.best_root().ok_or(HeapError::Empty)?;
        Ok(self.take_root(root))
    }

    /// Replaces the key of the node named by `handle` with a key that is at
    /// least as preferred, restoring heap order.
    ///
    /// **Time Complexity**: O(log n), bounded by tree height
    ///
    /// The new key moves toward the root while it is strictly preferred over
    /// its parent's key; each step shifts the parent's key down one level.
    /// No links change. Returns the handle of the node that ends up holding
    /// `new_key`, which is `handle` itself since handles follow their keys.
    ///
    /// # Errors
    /// - [`HeapError::KeyNotImproved`] if `new_key` is less preferred than
    ///   the current key. Nothing is modified.
    /// - [`HeapError::InvalidHandle`] or [`HeapError::ForeignHandle`] if the
    ///   handle does not resolve in this heap.
    pub fn change_key(&mut self, handle: &NodeHandle, new_key: K) -> Result<NodeHandle, HeapError> {
        let node = self.resolve(handle)?;
        let current = &self.arena.node(node).key;
        if !self.pref.prefers(&new_key, current) {
            debug!("rejected key change to a less preferred key");
            return Err(HeapError::KeyNotImproved);
        }

        self.arena.node_mut(node).key = new_key;
        let settled = self.sift_up(node, false);
        Ok(self.handle(settled))
    }

    /// Removes the node named by `handle` and returns its key.
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The key is shifted to the root of its tree ignoring preference, and
    /// that root is then extracted like [`extract_best`](Self::extract_best).
    pub fn remove_node(&mut self, handle: &NodeHandle) -> Result<K, HeapError> {
        let node = self.resolve(handle)?;
        let root = self.sift_up(node, true);
        let key = self.take_root(root);
        debug!(len = self.len, "removed node");
        Ok(key)
    }

    /// Returns the key held by the node named by `handle`.
    pub fn get(&self, handle: &NodeHandle) -> Result<&K, HeapError> {
        let node = self.resolve(handle)?;
        Ok(&self.arena.node(node).key)
    }

    /// Returns true if `handle` names a live node of this heap.
    pub fn contains(&self, handle: &NodeHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.len = 0;
    }

    /// Iterates over all keys in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.arena.keys()
    }

    /// Verifies every structural invariant of the forest.
    ///
    /// Checks root-list degree order, binomial tree shape, parent links,
    /// heap order and size consistency. Runs in O(n); intended for tests and
    /// debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut reachable = 0usize;
        let mut previous_degree: Option<u8> = None;
        let mut root = self.head;

        while let Some(r) = root {
            let node = self.arena.node(r);
            if node.parent.is_some() {
                return Err(InvariantViolation::RootHasParent);
            }
            if let Some(previous) = previous_degree {
                if node.degree <= previous {
                    return Err(InvariantViolation::RootOrder {
                        previous,
                        next: node.degree,
                    });
                }
            }
            previous_degree = Some(node.degree);
            reachable += self.check_tree(r)?;
            root = node.brother;
        }

        if reachable != self.len {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.len,
                reachable,
            });
        }
        if self.arena.len() != reachable {
            return Err(InvariantViolation::LeakedNodes {
                allocated: self.arena.len(),
                reachable,
            });
        }
        Ok(())
    }

    /// Checks one tree and returns its node count.
    fn check_tree(&self, root: NodeKey) -> Result<usize, InvariantViolation> {
        let mut stack: SmallVec<[NodeKey; 32]> = SmallVec::new();
        stack.push(root);
        let mut count = 0usize;

        while let Some(parent) = stack.pop() {
            count += 1;
            let parent_node = self.arena.node(parent);
            let mut expected = parent_node.degree;
            let mut children = 0usize;
            let mut child = parent_node.son;

            while let Some(c) = child {
                let child_node = self.arena.node(c);
                if expected == 0 {
                    return Err(InvariantViolation::ChildCount {
                        degree: parent_node.degree,
                        children: children + 1,
                    });
                }
                expected -= 1;
                if child_node.degree != expected {
                    return Err(InvariantViolation::TreeShape {
                        degree: parent_node.degree,
                        expected,
                        found: child_node.degree,
                    });
                }
                if child_node.parent != Some(parent) {
                    return Err(InvariantViolation::ParentLink);
                }
                if !self.pref.prefers(&parent_node.key, &child_node.key) {
                    return Err(InvariantViolation::HeapOrder);
                }
                children += 1;
                stack.push(c);
                child = child_node.brother;
            }

            if expected != 0 {
                return Err(InvariantViolation::ChildCount {
                    degree: parent_node.degree,
                    children,
                });
            }
        }
        Ok(count)
    }

    pub(crate) fn arena(&self) -> &Arena<K> {
        &self.arena
    }

    pub(crate) fn head(&self) -> Option<NodeKey> {
        self.head
    }

    pub(crate) fn handle(&self, node: NodeKey) -> NodeHandle {
        NodeHandle {
            heap: self.id,
            entry: self.arena.node(node).entry,
        }
    }

    fn resolve(&self, handle: &NodeHandle) -> Result<NodeKey, HeapError> {
        if handle.heap != self.id {
            return Err(HeapError::ForeignHandle);
        }
        self.arena.resolve(handle.entry).ok_or(HeapError::InvalidHandle)
    }

    /// Scans the root list; on ties the earliest root wins.
    fn best_root(&self) -> Option<NodeKey> {
        let mut best = self.head?;
        let mut root = self.arena.node(best).brother;
        while let Some(r) = root {
            let node = self.arena.node(r);
            if self.pref.strictly_prefers(&node.key, &self.arena.node(best).key) {
                best = r;
            }
            root = node.brother;
        }
        Some(best)
    }

    /// Moves the key at `node` upward by swapping it with its parent's key.
    ///
    /// With `to_root` unset, stops once the key is no longer strictly
    /// preferred over the parent's key. Returns the node finally holding it.
    fn sift_up(&mut self, node: NodeKey, to_root: bool) -> NodeKey {
        let mut current = node;
        while let Some(parent) = self.arena.node(current).parent {
            if !to_root
                && !self
                    .pref
                    .strictly_prefers(&self.arena.node(current).key, &self.arena.node(parent).key)
            {
                break;
            }
            self.arena.swap_keys(current, parent);
            current = parent;
        }
        current
    }

    /// Unlinks `root` from the root list, melds its children back in and
    /// frees it.
    fn take_root(&mut self, root: NodeKey) -> K {
        self.unlink_root(root);
        let children = self.arena.detach_children(root);
        self.head = meld(&mut self.arena, &self.pref, self.head, children);
        self.len -= 1;
        self.arena.free(root)
    }

    fn unlink_root(&mut self, root: NodeKey) {
        let brother = self.arena.node_mut(root).brother.take();
        if self.head == Some(root) {
            self.head = brother;
            return;
        }

        let mut cursor = self.head;
        while let Some(r) = cursor {
            let node = self.arena.node_mut(r);
            if node.brother == Some(root) {
                node.brother = brother;
                return;
            }
            cursor = node.brother;
        }
        unreachable!("root missing from root list");
    }
}

impl<K: PartialEq, F: Preference<K>> BinomialHeap<K, F> {
    /// Returns a cursor over the nodes whose key equals `key`.
    ///
    /// **Time Complexity**: O(n) worst-case. Subtrees whose root is less
    /// preferred than `key` are skipped, since heap order guarantees that
    /// none of their keys can equal it.
    ///
    /// The cursor can remove the element it last yielded with
    /// [`Find::remove_current`].
    ///
    /// ```rust
    /// use rust_binomial_heap::binomial::BinomialHeap;
    ///
    /// let mut heap: BinomialHeap<i32> = [4, 9, 4, 1].into_iter().collect();
    /// let mut matches = heap.find(4);
    /// while matches.next().is_some() {
    ///     matches.remove_current().unwrap();
    /// }
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn find(&mut self, key: K) -> Find<'_, K, F> {
        let start = self.head;
        Find::new(self, key, start)
    }

    /// Collects handles to every node whose key equals `key`.
    pub fn find_handles(&self, key: &K) -> Vec<NodeHandle> {
        let mut found = Vec::new();
        let mut cursor = self.head;
        while let Some((node, resume)) = find::seek(&self.arena, &self.pref, key, cursor) {
            found.push(self.handle(node));
            cursor = resume;
        }
        found
    }
}

impl<K, F: Preference<K> + Default> Default for BinomialHeap<K, F> {
    fn default() -> Self {
        Self::with_preference(F::default())
    }
}

impl<K: Clone, F: Clone> Clone for BinomialHeap<K, F> {
    /// Clones the forest into a new heap with its own identity; handles of
    /// the source heap are rejected by the clone.
    fn clone(&self) -> Self {
        BinomialHeap {
            arena: self.arena.clone(),
            head: self.head,
            len: self.len,
            pref: self.pref.clone(),
            id: HeapId::fresh(),
        }
    }
}

impl<K: fmt::Debug, F> fmt::Debug for BinomialHeap<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("len", &self.len)
            .field("keys", &DebugKeys(&self.arena))
            .finish()
    }
}

struct DebugKeys<'a, K>(&'a Arena<K>);

impl<K: fmt::Debug> fmt::Debug for DebugKeys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.keys()).finish()
    }
}

impl<K, F: Preference<K> + Default> Heap<K> for BinomialHeap<K, F> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, key: K) {
        self.insert(key);
    }

    fn peek(&self) -> Option<&K> {
        self.best().ok()
    }

    fn pop(&mut self) -> Option<K> {
        self.extract_best().ok()
    }

    fn merge(&mut self, mut other: Self) {
        self.union(&mut other);
    }
}

impl<K, F: Preference<K> + Default> AddressableHeap<K> for BinomialHeap<K, F> {
    type Handle = NodeHandle;

    fn push_with_handle(&mut self, key: K) -> NodeHandle {
        self.insert(key)
    }

    fn change_key(&mut self, handle: &NodeHandle, new_key: K) -> Result<NodeHandle, HeapError> {
        BinomialHeap::change_key(self, handle, new_key)
    }

    fn remove(&mut self, handle: &NodeHandle) -> Result<K, HeapError> {
        self.remove_node(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::Reversed;

    fn heap_of(keys: &[i32]) -> BinomialHeap<i32> {
        let mut heap = BinomialHeap::new();
        for &key in keys {
            heap.insert(key);
            heap.check_invariants().unwrap();
        }
        heap
    }

    fn root_degrees<K, F: Preference<K>>(heap: &BinomialHeap<K, F>) -> Vec<u8> {
        let mut degrees = Vec::new();
        let mut root = heap.head;
        while let Some(r) = root {
            degrees.push(heap.arena.degree(r));
            root = heap.arena.node(r).brother;
        }
        degrees
    }

    #[test]
    fn test_root_list_mirrors_binary_length() {
        let mut heap = BinomialHeap::new();
        for i in 0..13 {
            heap.insert(i);
        }
        // 13 = 0b1101
        assert_eq!(root_degrees(&heap), vec![0, 2, 3]);
        heap.check_invariants().unwrap();
    }

    #[test]
    fn test_from_key() {
        let heap = BinomialHeap::from_key(7);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.best(), Ok(&7));
    }

    #[test]
    fn test_best_on_empty() {
        let heap: BinomialHeap<i32> = BinomialHeap::new();
        assert_eq!(heap.best(), Err(HeapError::Empty));
        assert_eq!(heap.best_handle(), Err(HeapError::Empty));
    }

    #[test]
    fn test_change_key_moves_key_toward_root() {
        let mut heap = BinomialHeap::new();
        let handles: Vec<_> = (1..=8).map(|k| heap.insert(k)).collect();
        assert_eq!(root_degrees(&heap), vec![3]);

        let moved = heap.change_key(&handles[0], 100).unwrap();
        heap.check_invariants().unwrap();
        assert_eq!(moved, handles[0]);
        assert_eq!(heap.get(&moved), Ok(&100));
        assert_eq!(heap.best_handle(), Ok(moved));

        // Keys shifted down along the path keep their handles.
        for (key, handle) in (2..=8).zip(&handles[1..]) {
            assert_eq!(heap.get(handle), Ok(&key));
        }
    }

    #[test]
    fn test_change_key_equal_is_accepted() {
        let mut heap = heap_of(&[5, 3]);
        let handle = heap.find_handles(&3)[0];
        assert_eq!(heap.change_key(&handle, 3), Ok(handle));
        heap.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_node_from_inner_position() {
        let mut heap = BinomialHeap::with_preference(Reversed);
        let handles: Vec<_> = (0..16).map(|k| heap.insert(k)).collect();

        assert_eq!(heap.remove_node(&handles[9]), Ok(9));
        heap.check_invariants().unwrap();
        assert_eq!(heap.len(), 15);
        assert!(heap.find_handles(&9).is_empty());
    }

    #[test]
    fn test_stale_and_foreign_handles() {
        let mut a = heap_of(&[1, 2]);
        let b = heap_of(&[1, 2]);
        let handle = a.best_handle().unwrap();

        assert_eq!(b.get(&handle), Err(HeapError::ForeignHandle));
        a.extract_best().unwrap();
        assert_eq!(a.get(&handle), Err(HeapError::InvalidHandle));
        assert_eq!(a.remove_node(&handle), Err(HeapError::InvalidHandle));
        assert!(!a.contains(&handle));
    }

    #[test]
    fn test_union_empties_other() {
        let mut a = heap_of(&[1, 5]);
        let mut b = heap_of(&[3, 4, 9]);
        let foreign = b.best_handle().unwrap();

        a.union(&mut b);
        a.check_invariants().unwrap();
        b.check_invariants().unwrap();
        assert_eq!(a.len(), 5);
        assert!(b.is_empty());
        assert_eq!(a.best(), Ok(&9));
        assert_eq!(a.get(&foreign), Err(HeapError::ForeignHandle));
        assert_eq!(b.get(&foreign), Err(HeapError::InvalidHandle));
    }

    #[test]
    fn test_clone_has_new_identity() {
        let heap = heap_of(&[4, 2]);
        let handle = heap.best_handle().unwrap();
        let copy = heap.clone();

        assert_eq!(copy.len(), 2);
        assert_eq!(copy.best(), Ok(&4));
        assert_eq!(copy.get(&handle), Err(HeapError::ForeignHandle));
    }

    #[test]
    fn test_clear() {
        let mut heap = heap_of(&[4, 2, 8]);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.best(), Err(HeapError::Empty));
        heap.check_invariants().unwrap();
        heap.insert(1);
        assert_eq!(heap.best(), Ok(&1));
    }

    #[test]
    fn test_invariant_checker_detects_heap_order_breach() {
        let mut heap = heap_of(&[1, 2]);
        let root = heap.head.unwrap();
        let son = heap.arena.node(root).son.unwrap();
        heap.arena.node_mut(son).key = 50;
        assert_eq!(heap.check_invariants(), Err(InvariantViolation::HeapOrder));
    }

    #[test]
    fn test_invariant_checker_detects_size_mismatch() {
        let mut heap = heap_of(&[1, 2, 3]);
        heap.len = 4;
        assert_eq!(
            heap.check_invariants(),
            Err(InvariantViolation::SizeMismatch {
                recorded: 4,
                reachable: 3
            })
        );
    }
}
