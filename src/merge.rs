//! Root-list merging and consolidation
//!
//! A heap's root list is a `brother`-chained list of binomial trees in
//! strictly increasing degree order. Combining two heaps (or re-inserting the
//! children of an extracted root) happens in two passes:
//!
//! 1. [`merge_root_lists`]: a sorted-list merge on degree alone. No keys are
//!    compared, and equal-degree roots are left next to each other.
//! 2. [`consolidate`]: a left-to-right scan that links equal-degree
//!    neighbours until every degree appears at most once.
//!
//! Linking two trees of degree `d` yields one of degree `d + 1`, which may
//! land right before an existing tree of degree `d + 1` that itself has an
//! equal-degree partner following it. Consolidation therefore looks one root
//! ahead and skips a position when three roots of one degree are adjacent,
//! so that the last two are the ones linked.

use crate::arena::{Arena, NodeKey};
use crate::preference::Preference;
use tracing::trace;

/// Merges two increasing-degree root lists into one non-decreasing list.
///
/// **Time Complexity**: O(log n), one step per root.
pub(crate) fn merge_root_lists<K>(
    arena: &mut Arena<K>,
    mut a: Option<NodeKey>,
    mut b: Option<NodeKey>,
) -> Option<NodeKey> {
    let mut head = None;
    let mut tail: Option<NodeKey> = None;

    while let (Some(x), Some(y)) = (a, b) {
        let picked = if arena.degree(x) <= arena.degree(y) {
            a = arena.node(x).brother;
            x
        } else {
            b = arena.node(y).brother;
            y
        };
        match tail {
            Some(t) => arena.node_mut(t).brother = Some(picked),
            None => head = Some(picked),
        }
        tail = Some(picked);
    }

    let rest = a.or(b);
    match tail {
        Some(t) => {
            arena.node_mut(t).brother = rest;
            head
        }
        None => rest,
    }
}

/// Links equal-degree roots until the list is strictly increasing in degree.
///
/// At each position (`curr`, `next`):
/// - degrees differ, or `next` and the root after it share a degree:
///   advance without linking
/// - `curr` is preferred over or tied with `next`: `curr` absorbs `next`
///   and stays in place
/// - otherwise `next` absorbs `curr` and takes its position
///
/// Returns the new head of the list.
pub(crate) fn consolidate<K, F: Preference<K>>(
    arena: &mut Arena<K>,
    pref: &F,
    head: Option<NodeKey>,
) -> Option<NodeKey> {
    let mut head = head?;
    let mut prev: Option<NodeKey> = None;
    let mut curr = head;
    let mut links = 0usize;

    while let Some(next) = arena.node(curr).brother {
        let degree = arena.degree(curr);
        let after = arena.node(next).brother;

        if arena.degree(next) != degree || after.is_some_and(|a| arena.degree(a) == degree) {
            prev = Some(curr);
            curr = next;
            continue;
        }

        links += 1;
        if pref.prefers(&arena.node(curr).key, &arena.node(next).key) {
            arena.node_mut(curr).brother = after;
            arena.absorb(curr, next);
        } else {
            match prev {
                Some(p) => arena.node_mut(p).brother = Some(next),
                None => head = next,
            }
            arena.absorb(next, curr);
            curr = next;
        }
    }

    trace!(links, "consolidated root list");
    Some(head)
}

/// Merges two root lists and consolidates the result.
pub(crate) fn meld<K, F: Preference<K>>(
    arena: &mut Arena<K>,
    pref: &F,
    a: Option<NodeKey>,
    b: Option<NodeKey>,
) -> Option<NodeKey> {
    let merged = merge_root_lists(arena, a, b);
    consolidate(arena, pref, merged)
}
