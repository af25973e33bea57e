//! Node arena and binomial forest primitives
//!
//! Every node of a heap lives in a generational [`SlotMap`] owned by that
//! heap. Structural links (`son`, `brother`, `parent`) are arena keys rather
//! than references, which keeps the parent back-pointer from forming an
//! ownership cycle.
//!
//! **Link roles**:
//! - `son`: first child. The child list is chained through `brother` and is
//!   ordered by strictly decreasing degree.
//! - `brother`: next entry of the same root list or child list.
//! - `parent`: back-reference for upward walks only (`None` for roots).
//!
//! **Entries**: sifting moves keys between nodes, so callers never hold a
//! [`NodeKey`]. Each key is paired with an [`EntryKey`] that travels with it
//! and maps back to whichever node currently holds the key. Freeing a node
//! frees its entry; the generational key then fails to resolve.
//!
//! [`Arena::absorb`] is the only primitive that changes tree shape. Merging,
//! extraction and removal are all expressed through it plus
//! [`Arena::detach_children`].

use crate::degree::{checked_increment, Degree};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    /// Arena key addressing one heap node
    pub(crate) struct NodeKey;

    /// Stable identity of one inserted key
    pub(crate) struct EntryKey;
}

/// Process-unique identity of a heap, stamped into every handle it issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct HeapId(u64);

impl HeapId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        HeapId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A binomial tree node
///
/// A node of degree `d` roots a tree of exactly `2^d` nodes whose children
/// have degrees `d-1, d-2, ..., 0`, first child first.
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    /// Entry travelling with `key`
    pub(crate) entry: EntryKey,
    pub(crate) degree: Degree,
    /// First child (highest degree), `None` for leaves
    pub(crate) son: Option<NodeKey>,
    /// Next root or next sibling in the parent's child list
    pub(crate) brother: Option<NodeKey>,
    /// Structural parent, `None` for roots
    pub(crate) parent: Option<NodeKey>,
}

/// Generational storage for the nodes of one heap
#[derive(Debug, Clone)]
pub(crate) struct Arena<K> {
    nodes: SlotMap<NodeKey, Node<K>>,
    entries: SlotMap<EntryKey, NodeKey>,
}

impl<K> Arena<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: SlotMap::with_capacity_and_key(capacity),
            entries: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Allocates a detached degree-0 node.
    pub(crate) fn alloc(&mut self, key: K) -> NodeKey {
        let entry = self.entries.insert(NodeKey::default());
        let node = self.nodes.insert(Node {
            key,
            entry,
            degree: 0,
            son: None,
            brother: None,
            parent: None,
        });
        self.entries[entry] = node;
        node
    }

    /// Frees a node together with its entry and returns its key.
    ///
    /// The caller must already have unlinked the node from every list.
    pub(crate) fn free(&mut self, node: NodeKey) -> K {
        let removed = self
            .nodes
            .remove(node)
            .expect("freed node must be live in the arena");
        debug_assert!(removed.son.is_none() && removed.parent.is_none());
        self.entries.remove(removed.entry);
        removed.key
    }

    /// Returns the node currently holding the entry's key.
    pub(crate) fn resolve(&self, entry: EntryKey) -> Option<NodeKey> {
        self.entries.get(entry).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.entries.clear();
    }

    /// Resolves a structural link.
    ///
    /// # Panics
    ///
    /// Panics on a dangling link, which means the forest is corrupt.
    #[inline]
    pub(crate) fn node(&self, node: NodeKey) -> &Node<K> {
        self.nodes.get(node).expect("dangling node link in binomial forest")
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, node: NodeKey) -> &mut Node<K> {
        self.nodes
            .get_mut(node)
            .expect("dangling node link in binomial forest")
    }

    #[inline]
    pub(crate) fn degree(&self, node: NodeKey) -> Degree {
        self.node(node).degree
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.nodes.values().map(|node| &node.key)
    }

    /// Makes `child` the first child of `parent`.
    ///
    /// Both must be roots of equal degree. `child`'s previous `brother` link
    /// is overwritten, so the caller must have spliced it out of its list.
    ///
    /// # Panics
    ///
    /// Panics if the degrees differ.
    pub(crate) fn absorb(&mut self, parent: NodeKey, child: NodeKey) {
        let parent_degree = self.degree(parent);
        assert_eq!(
            parent_degree,
            self.degree(child),
            "absorb requires roots of equal degree"
        );

        let first_son = self.node(parent).son;
        let child_node = self.node_mut(child);
        child_node.parent = Some(parent);
        child_node.brother = first_son;

        let parent_node = self.node_mut(parent);
        parent_node.son = Some(child);
        parent_node.degree = checked_increment(parent_degree);
    }

    /// Detaches all children of `node` and returns them as a root list.
    ///
    /// Children are stored in decreasing degree order; the returned list is
    /// reversed into increasing order with every `parent` cleared. `node` is
    /// left as a degree-0 leaf.
    pub(crate) fn detach_children(&mut self, node: NodeKey) -> Option<NodeKey> {
        let detached = self.node_mut(node);
        let mut child = detached.son.take();
        detached.degree = 0;

        let mut reversed = None;
        while let Some(current) = child {
            let current_node = self.node_mut(current);
            child = current_node.brother;
            current_node.brother = reversed;
            current_node.parent = None;
            reversed = Some(current);
        }
        reversed
    }

    /// Next node of a left-to-right walk that skips `node`'s subtree: its
    /// brother, or the brother of the nearest ancestor that has one.
    pub(crate) fn successor(&self, node: NodeKey) -> Option<NodeKey> {
        let mut current = node;
        loop {
            let current_node = self.node(current);
            if let Some(brother) = current_node.brother {
                return Some(brother);
            }
            current = current_node.parent?;
        }
    }

    /// Exchanges the keys of two distinct nodes; entries follow their keys.
    pub(crate) fn swap_keys(&mut self, a: NodeKey, b: NodeKey) {
        let [first, second] = self
            .nodes
            .get_disjoint_mut([a, b])
            .expect("key swap requires two distinct live nodes");
        std::mem::swap(&mut first.key, &mut second.key);
        std::mem::swap(&mut first.entry, &mut second.entry);
        let (entry_a, entry_b) = (first.entry, second.entry);

        self.entries[entry_a] = a;
        self.entries[entry_b] = b;
    }

    /// Moves every node of `other` into this arena, leaving `other` empty.
    ///
    /// Links are rewritten to the new node keys and every moved key gets a
    /// fresh entry. Returns `root` translated into this arena.
    pub(crate) fn adopt(&mut self, other: &mut Arena<K>, root: Option<NodeKey>) -> Option<NodeKey> {
        other.entries.clear();
        let mut moved: SecondaryMap<NodeKey, NodeKey> = SecondaryMap::with_capacity(other.len());
        for (old, node) in other.nodes.drain() {
            let entry = self.entries.insert(NodeKey::default());
            let new = self.nodes.insert(Node { entry, ..node });
            self.entries[entry] = new;
            moved.insert(old, new);
        }

        let translate = |link: Option<NodeKey>| {
            link.map(|old| *moved.get(old).expect("link must point into the adopted arena"))
        };
        for &new in moved.values() {
            let node = self.node_mut(new);
            node.son = translate(node.son);
            node.brother = translate(node.brother);
            node.parent = translate(node.parent);
        }
        translate(root)
    }
}
