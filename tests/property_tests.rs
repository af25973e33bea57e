//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations, replay them against
//! both the heap and a plain multiset model, and verify after every step
//! that the heap agrees with the model and that all structural invariants
//! hold.

use proptest::prelude::*;
use rust_binomial_heap::{BinomialHeap, HeapError, NodeHandle, Natural, Preference, Reversed};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Extract,
    /// Improve the key behind the n-th tracked handle by `delta`
    Improve(usize, i32),
    /// Try to worsen the key behind the n-th tracked handle by `delta`
    Worsen(usize, i32),
    Remove(usize),
    Find(i32),
    Union(Vec<i32>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-50i32..50).prop_map(Op::Insert),
        2 => Just(Op::Extract),
        2 => (any::<usize>(), 0i32..40).prop_map(|(i, d)| Op::Improve(i, d)),
        1 => (any::<usize>(), 1i32..40).prop_map(|(i, d)| Op::Worsen(i, d)),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => (-50i32..50).prop_map(Op::Find),
        1 => prop::collection::vec(-50i32..50, 0..12).prop_map(Op::Union),
    ]
}

/// Keys the heap should hold: tracked ones by handle, plus keys that arrived
/// through a union and have no handle.
struct Model {
    tracked: FxHashMap<NodeHandle, i32>,
    order: Vec<NodeHandle>,
    anonymous: Vec<i32>,
}

impl Model {
    fn new() -> Self {
        Model {
            tracked: FxHashMap::default(),
            order: Vec::new(),
            anonymous: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.tracked.len() + self.anonymous.len()
    }

    fn pick(&self, index: usize) -> Option<NodeHandle> {
        if self.order.is_empty() {
            None
        } else {
            Some(self.order[index % self.order.len()])
        }
    }

    fn forget(&mut self, handle: NodeHandle) {
        self.tracked.remove(&handle);
        self.order.retain(|h| *h != handle);
    }

    fn count(&self, key: i32) -> usize {
        self.tracked.values().filter(|&&k| k == key).count()
            + self.anonymous.iter().filter(|&&k| k == key).count()
    }

    fn best<F: Preference<i32>>(&self, pref: &F) -> Option<i32> {
        self.tracked
            .values()
            .chain(self.anonymous.iter())
            .copied()
            .reduce(|a, b| if pref.prefers(&a, &b) { a } else { b })
    }
}

/// Signed offset that moves a key toward "more preferred" under `pref`.
fn toward_best<F: Preference<i32>>(pref: &F, delta: i32) -> i32 {
    if pref.prefers(&1, &0) {
        delta
    } else {
        -delta
    }
}

fn check_model<F: Preference<i32>>(
    heap: &BinomialHeap<i32, F>,
    model: &Model,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(heap.check_invariants(), Ok(()));
    prop_assert_eq!(heap.len(), model.len());
    for (handle, key) in &model.tracked {
        prop_assert_eq!(heap.get(handle), Ok(key));
    }
    match model.best(heap.preference()) {
        Some(best) => prop_assert_eq!(heap.best(), Ok(&best)),
        None => prop_assert_eq!(heap.best(), Err(HeapError::Empty)),
    }
    Ok(())
}

fn run_ops<F: Preference<i32> + Default>(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap: BinomialHeap<i32, F> = BinomialHeap::default();
    let mut model = Model::new();

    for op in ops {
        match op {
            Op::Insert(key) => {
                let handle = heap.insert(key);
                model.tracked.insert(handle, key);
                model.order.push(handle);
            }
            Op::Extract => {
                let expected = model.best(heap.preference());
                match heap.extract_best() {
                    Ok(key) => {
                        prop_assert_eq!(Some(key), expected);
                        let gone = model
                            .order
                            .iter()
                            .copied()
                            .find(|h| heap.get(h) == Err(HeapError::InvalidHandle));
                        match gone {
                            Some(handle) => model.forget(handle),
                            None => {
                                let pos = model.anonymous.iter().position(|&k| k == key);
                                prop_assert!(pos.is_some());
                                model.anonymous.swap_remove(pos.unwrap());
                            }
                        }
                    }
                    Err(err) => {
                        prop_assert_eq!(err, HeapError::Empty);
                        prop_assert_eq!(model.len(), 0);
                    }
                }
            }
            Op::Improve(index, delta) => {
                if let Some(handle) = model.pick(index) {
                    let new_key = model.tracked[&handle] + toward_best(heap.preference(), delta);
                    prop_assert_eq!(heap.change_key(&handle, new_key), Ok(handle));
                    model.tracked.insert(handle, new_key);
                }
            }
            Op::Worsen(index, delta) => {
                if let Some(handle) = model.pick(index) {
                    let new_key = model.tracked[&handle] - toward_best(heap.preference(), delta);
                    prop_assert_eq!(
                        heap.change_key(&handle, new_key),
                        Err(HeapError::KeyNotImproved)
                    );
                }
            }
            Op::Remove(index) => {
                if let Some(handle) = model.pick(index) {
                    prop_assert_eq!(heap.remove_node(&handle), Ok(model.tracked[&handle]));
                    prop_assert_eq!(heap.remove_node(&handle), Err(HeapError::InvalidHandle));
                    model.forget(handle);
                }
            }
            Op::Find(key) => {
                let found = heap.find_handles(&key);
                prop_assert_eq!(found.len(), model.count(key));
                for handle in &found {
                    prop_assert_eq!(heap.get(handle), Ok(&key));
                }
            }
            Op::Union(keys) => {
                let mut other: BinomialHeap<i32, F> = keys.iter().copied().collect();
                heap.union(&mut other);
                prop_assert!(other.is_empty());
                prop_assert_eq!(other.check_invariants(), Ok(()));
                model.anonymous.extend(keys);
            }
        }
        check_model(&heap, &model)?;
    }
    Ok(())
}

/// Test that all extracted keys come out best-first
fn test_extract_order<F: Preference<i32> + Default>(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap: BinomialHeap<i32, F> = values.iter().copied().collect();
    let pref = F::default();

    let mut previous: Option<i32> = None;
    while let Ok(key) = heap.extract_best() {
        if let Some(prev) = previous {
            prop_assert!(pref.prefers(&prev, &key), "{} extracted before {}", prev, key);
        }
        previous = Some(key);
    }
    Ok(())
}

/// Test that removing every match through a cursor removes exactly those keys
fn test_find_remove_all<F: Preference<i32> + Default>(
    values: Vec<i32>,
    target: i32,
) -> Result<(), TestCaseError> {
    let mut heap: BinomialHeap<i32, F> = values.iter().copied().collect();
    let expected = values.iter().filter(|&&k| k == target).count();

    let mut removed = 0;
    let mut cursor = heap.find(target);
    while cursor.next().is_some() {
        prop_assert_eq!(cursor.remove_current(), Ok(target));
        removed += 1;
    }
    drop(cursor);

    prop_assert_eq!(removed, expected);
    prop_assert_eq!(heap.len(), values.len() - expected);
    prop_assert!(heap.find_handles(&target).is_empty());
    prop_assert_eq!(heap.check_invariants(), Ok(()));
    Ok(())
}

proptest! {
    #[test]
    fn test_natural_random_ops(ops in prop::collection::vec(op_strategy(), 0..120)) {
        run_ops::<Natural>(ops)?;
    }

    #[test]
    fn test_reversed_random_ops(ops in prop::collection::vec(op_strategy(), 0..120)) {
        run_ops::<Reversed>(ops)?;
    }

    #[test]
    fn test_natural_extract_order(values in prop::collection::vec(-100i32..100, 0..200)) {
        test_extract_order::<Natural>(values)?;
    }

    #[test]
    fn test_reversed_extract_order(values in prop::collection::vec(-100i32..100, 0..200)) {
        test_extract_order::<Reversed>(values)?;
    }

    #[test]
    fn test_natural_find_remove_all(
        values in prop::collection::vec(-10i32..10, 0..100),
        target in -10i32..10
    ) {
        test_find_remove_all::<Natural>(values, target)?;
    }

    #[test]
    fn test_reversed_find_remove_all(
        values in prop::collection::vec(-10i32..10, 0..100),
        target in -10i32..10
    ) {
        test_find_remove_all::<Reversed>(values, target)?;
    }
}
