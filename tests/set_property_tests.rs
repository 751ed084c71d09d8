//! Property-based testing for the ordix containers
//!
//! Validates the algebra laws, the sequence/lookup bijection invariant under
//! arbitrary operation sequences (including operations that fail), and
//! model-based equivalence against plain std collections.

use proptest::prelude::*;
use std::collections::HashSet;

use ordix::{IndexedDictionary, IndexedSet, Pair, PairedSet, UnorderedSet};

// =============================================================================
// OPERATION GENERATORS
// =============================================================================

#[derive(Debug, Clone)]
enum SetOp {
    Add(u8),
    Include(u8),
    Remove(u8),
    TryRemove(u8),
    Insert(usize, u8),
    Set(usize, u8),
    RemoveAt(usize),
    Clear,
}

fn set_ops_strategy() -> impl Strategy<Value = Vec<SetOp>> {
    prop::collection::vec(
        prop_oneof![
            any::<u8>().prop_map(SetOp::Add),
            any::<u8>().prop_map(SetOp::Include),
            any::<u8>().prop_map(SetOp::Remove),
            any::<u8>().prop_map(SetOp::TryRemove),
            (0usize..64, any::<u8>()).prop_map(|(i, v)| SetOp::Insert(i, v)),
            (0usize..64, any::<u8>()).prop_map(|(i, v)| SetOp::Set(i, v)),
            (0usize..64).prop_map(SetOp::RemoveAt),
            Just(SetOp::Clear),
        ],
        0..200,
    )
}

/// `index_of(get(i)) == i` for every valid index
fn assert_bijection(set: &IndexedSet<u8>) {
    assert!(set.is_consistent());
    for i in 0..set.len() {
        let element = set.get(i).unwrap();
        assert_eq!(set.index_of(element).unwrap(), i);
    }
}

// =============================================================================
// UNORDERED SET ALGEBRA LAWS
// =============================================================================

proptest! {
    #[test]
    fn prop_union_cardinality(
        a in prop::collection::vec(any::<u8>(), 0..100),
        b in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let left: UnorderedSet<u8> = a.iter().copied().collect();
        let right: UnorderedSet<u8> = b.iter().copied().collect();

        let union = left.union_with(&right);
        let inter = left.intersect_with(&right);
        prop_assert_eq!(union.len(), left.len() + right.len() - inter.len());
    }

    #[test]
    fn prop_intersection_commutes(
        a in prop::collection::vec(any::<u8>(), 0..100),
        b in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let left: UnorderedSet<u8> = a.iter().copied().collect();
        let right: UnorderedSet<u8> = b.iter().copied().collect();
        prop_assert_eq!(left.intersect_with(&right), right.intersect_with(&left));
    }

    #[test]
    fn prop_symmetric_difference_law(
        a in prop::collection::vec(any::<u8>(), 0..100),
        b in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let left: UnorderedSet<u8> = a.iter().copied().collect();
        let right: UnorderedSet<u8> = b.iter().copied().collect();

        let sym = left.symmetric_difference_with(&right);
        let by_parts = left
            .difference_with(&right)
            .union_with(&right.difference_with(&left));
        prop_assert_eq!(sym, by_parts);
    }

    #[test]
    fn prop_sequence_algebra_matches_dedup_models(
        a in prop::collection::vec(any::<u8>(), 0..100),
        b in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        // The associated-function forms take raw sequences, which may carry
        // repeats; membership must follow the deduplicated operands.
        let model_a: HashSet<u8> = a.iter().copied().collect();
        let model_b: HashSet<u8> = b.iter().copied().collect();

        let union: UnorderedSet<u8> = UnorderedSet::union_of(a.clone(), b.clone());
        let inter: UnorderedSet<u8> = UnorderedSet::intersect_of(a.clone(), b.clone());
        let diff: UnorderedSet<u8> = UnorderedSet::difference_of(a.clone(), b.clone());
        let sym: UnorderedSet<u8> = UnorderedSet::symmetric_difference_of(a.clone(), b.clone());
        let sym_indexed: IndexedSet<u8> =
            IndexedSet::symmetric_difference_of(a.clone(), b.clone());

        for value in 0..=u8::MAX {
            let in_a = model_a.contains(&value);
            let in_b = model_b.contains(&value);
            prop_assert_eq!(union.contains(&value), in_a || in_b);
            prop_assert_eq!(inter.contains(&value), in_a && in_b);
            prop_assert_eq!(diff.contains(&value), in_a && !in_b);
            prop_assert_eq!(sym.contains(&value), in_a != in_b);
            prop_assert_eq!(sym_indexed.contains(&value), in_a != in_b);
        }
    }

    #[test]
    fn prop_unordered_set_matches_std_hashset(
        values in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let set: UnorderedSet<u8> = values.iter().copied().collect();
        let model: HashSet<u8> = values.iter().copied().collect();

        prop_assert_eq!(set.len(), model.len());
        for value in &model {
            prop_assert!(set.contains(value));
        }
    }
}

// =============================================================================
// INDEXED SET BIJECTION INVARIANT
// =============================================================================

proptest! {
    #[test]
    fn prop_indexed_set_bijection_under_ops(ops in set_ops_strategy()) {
        let mut set: IndexedSet<u8> = IndexedSet::new();

        for op in ops {
            // Failed operations are part of the property: a rejected
            // mutation must leave the bijection intact too.
            match op {
                SetOp::Add(v) => {
                    let _ = set.add(v);
                }
                SetOp::Include(v) => {
                    set.include(v);
                }
                SetOp::Remove(v) => {
                    let _ = set.remove(&v);
                }
                SetOp::TryRemove(v) => {
                    set.try_remove(&v);
                }
                SetOp::Insert(i, v) => {
                    let _ = set.insert(i, v);
                }
                SetOp::Set(i, v) => {
                    let _ = set.set(i, v);
                }
                SetOp::RemoveAt(i) => {
                    let _ = set.remove_at(i);
                }
                SetOp::Clear => set.clear(),
            }
            assert_bijection(&set);
        }
    }

    #[test]
    fn prop_indexed_set_order_is_first_seen(
        values in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let set: IndexedSet<u8> = values.iter().copied().collect();

        let mut expected = Vec::new();
        let mut seen = HashSet::new();
        for value in &values {
            if seen.insert(*value) {
                expected.push(*value);
            }
        }
        prop_assert_eq!(set.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_indexed_algebra_membership(
        a in prop::collection::vec(any::<u8>(), 0..100),
        b in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let left: IndexedSet<u8> = a.iter().copied().collect();
        let right: IndexedSet<u8> = b.iter().copied().collect();
        let model_left: HashSet<u8> = a.iter().copied().collect();
        let model_right: HashSet<u8> = b.iter().copied().collect();

        let union = left.union_with(&right);
        let inter = left.intersect_with(&right);
        let diff = left.difference_with(&right);
        let sym = left.symmetric_difference_with(&right);

        for value in 0..=u8::MAX {
            let in_left = model_left.contains(&value);
            let in_right = model_right.contains(&value);
            prop_assert_eq!(union.contains(&value), in_left || in_right);
            prop_assert_eq!(inter.contains(&value), in_left && in_right);
            prop_assert_eq!(diff.contains(&value), in_left && !in_right);
            prop_assert_eq!(sym.contains(&value), in_left != in_right);
        }

        assert_bijection(&union);
        assert_bijection(&inter);
        assert_bijection(&diff);
        assert_bijection(&sym);
    }

    #[test]
    fn prop_algebra_never_mutates_operands(
        a in prop::collection::vec(any::<u8>(), 0..50),
        b in prop::collection::vec(any::<u8>(), 0..50),
    ) {
        let left: IndexedSet<u8> = a.iter().copied().collect();
        let right: IndexedSet<u8> = b.iter().copied().collect();
        let left_before: Vec<u8> = left.as_slice().to_vec();
        let right_before: Vec<u8> = right.as_slice().to_vec();

        let _ = left.union_with(&right);
        let _ = left.intersect_with(&right);
        let _ = left.difference_with(&right);
        let _ = left.symmetric_difference_with(&right);

        prop_assert_eq!(left.as_slice(), left_before.as_slice());
        prop_assert_eq!(right.as_slice(), right_before.as_slice());
    }
}

// =============================================================================
// PAIRED SET CONSISTENCY
// =============================================================================

#[derive(Debug, Clone)]
enum PairOp {
    Add(u8, i32),
    Set(usize, u8, i32),
    Insert(usize, u8, i32),
    RemoveAt(usize),
    RemoveByKey(u8),
}

fn pair_ops_strategy() -> impl Strategy<Value = Vec<PairOp>> {
    prop::collection::vec(
        prop_oneof![
            (any::<u8>(), any::<i32>()).prop_map(|(k, v)| PairOp::Add(k, v)),
            (0usize..32, any::<u8>(), any::<i32>()).prop_map(|(i, k, v)| PairOp::Set(i, k, v)),
            (0usize..32, any::<u8>(), any::<i32>()).prop_map(|(i, k, v)| PairOp::Insert(i, k, v)),
            (0usize..32).prop_map(PairOp::RemoveAt),
            any::<u8>().prop_map(PairOp::RemoveByKey),
        ],
        0..150,
    )
}

proptest! {
    #[test]
    fn prop_paired_set_stays_consistent(ops in pair_ops_strategy()) {
        let mut set: PairedSet<u8, i32> = PairedSet::new();

        for op in ops {
            match op {
                PairOp::Add(k, v) => {
                    let _ = set.add(k, v);
                }
                PairOp::Set(i, k, v) => {
                    let _ = set.set(i, Pair::new(k, v));
                }
                PairOp::Insert(i, k, v) => {
                    let _ = set.insert(i, Pair::new(k, v));
                }
                PairOp::RemoveAt(i) => {
                    let _ = set.remove_at(i);
                }
                PairOp::RemoveByKey(k) => {
                    let _ = set.remove_by_key(&k);
                }
            }
            assert!(set.is_consistent());
        }

        // Every pair is reachable both ways.
        for i in 0..set.len() {
            let pair = set.get(i).unwrap().clone();
            assert_eq!(set.get_by_key(&pair.key).unwrap(), (&pair.key, &pair.value));
            assert_eq!(set.index_of_key(&pair.key).unwrap(), i);
        }
    }
}

// =============================================================================
// INDEXED DICTIONARY MODEL EQUIVALENCE
// =============================================================================

#[derive(Debug, Clone)]
enum DictOp {
    Add(u8, i32),
    Insert(u8, i32),
    Remove(u8),
}

fn dict_ops_strategy() -> impl Strategy<Value = Vec<DictOp>> {
    prop::collection::vec(
        prop_oneof![
            (any::<u8>(), any::<i32>()).prop_map(|(k, v)| DictOp::Add(k, v)),
            (any::<u8>(), any::<i32>()).prop_map(|(k, v)| DictOp::Insert(k, v)),
            any::<u8>().prop_map(DictOp::Remove),
        ],
        0..200,
    )
}

proptest! {
    #[test]
    fn prop_dictionary_matches_ordered_model(ops in dict_ops_strategy()) {
        let mut dict: IndexedDictionary<u8, i32> = IndexedDictionary::new();
        // Model: association list in insertion order.
        let mut model: Vec<(u8, i32)> = Vec::new();

        for op in ops {
            match op {
                DictOp::Add(k, v) => {
                    let added = dict.add(k, v).is_ok();
                    let fresh = !model.iter().any(|(key, _)| *key == k);
                    assert_eq!(added, fresh);
                    if fresh {
                        model.push((k, v));
                    }
                }
                DictOp::Insert(k, v) => {
                    dict.insert(k, v);
                    match model.iter_mut().find(|(key, _)| *key == k) {
                        Some(slot) => slot.1 = v,
                        None => model.push((k, v)),
                    }
                }
                DictOp::Remove(k) => {
                    let removed = dict.remove(&k);
                    let expected = model
                        .iter()
                        .position(|(key, _)| *key == k)
                        .map(|i| model.remove(i).1);
                    assert_eq!(removed, expected);
                }
            }
            assert!(dict.is_consistent());
        }

        prop_assert_eq!(dict.len(), model.len());
        for (i, (key, value)) in model.iter().enumerate() {
            prop_assert_eq!(dict.key_at(i).unwrap(), key);
            prop_assert_eq!(dict.value_at(i).unwrap(), value);
            prop_assert_eq!(dict.index_of_key(key).unwrap(), i);
        }
    }
}
