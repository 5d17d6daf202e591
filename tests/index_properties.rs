//! Property tests for TaggedIndex
//!
//! Random mutation sequences over a small tag/value universe, checked
//! against the index invariants and the set-algebra identities.

use proptest::prelude::*;
use std::collections::HashSet;
use tagdex::TaggedIndex;

// =============================================================================
// Strategies
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Assign(u8, Vec<u8>),
    Add(u8, Vec<u8>),
    Remove(u8, Vec<u8>),
    RemoveValue(u8),
    DeleteTags(Vec<u8>),
}

fn tag_list() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..6, 0..4)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..8, tag_list()).prop_map(|(v, t)| Op::Assign(v, t)),
        3 => (0u8..8, tag_list()).prop_map(|(v, t)| Op::Add(v, t)),
        2 => (0u8..8, tag_list()).prop_map(|(v, t)| Op::Remove(v, t)),
        1 => (0u8..8).prop_map(Op::RemoveValue),
        1 => tag_list().prop_map(Op::DeleteTags),
    ]
}

fn build(ops: &[Op]) -> TaggedIndex<u8, u8> {
    let mut index = TaggedIndex::new();
    for op in ops {
        apply(&mut index, op);
    }
    index
}

fn apply(index: &mut TaggedIndex<u8, u8>, op: &Op) {
    match op {
        Op::Assign(v, tags) => index.assign(*v, tags.iter().copied()),
        Op::Add(v, tags) => index.add(*v, tags.iter().copied()),
        Op::Remove(v, tags) => index.remove(v, tags),
        Op::RemoveValue(v) => {
            index.remove_value(v);
        }
        Op::DeleteTags(tags) => index.delete_tags(tags),
    }
}

fn set(items: Vec<u8>) -> HashSet<u8> {
    items.into_iter().collect()
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    /// v is a value of t exactly when t is a tag of v
    #[test]
    fn bidirectional_consistency(ops in prop::collection::vec(op(), 0..40)) {
        let index = build(&ops);

        for tag in 0u8..6 {
            for value in 0u8..8 {
                prop_assert_eq!(
                    index.values_of(&tag).contains(&value),
                    index.tags_of(&value).contains(&tag)
                );
            }
        }
    }

    /// Registered tags and values always carry at least one association
    #[test]
    fn no_empty_residue(ops in prop::collection::vec(op(), 0..40)) {
        let index = build(&ops);

        for tag in index.all_tags() {
            prop_assert!(!index.values_of(&tag).is_empty());
        }
        for value in index.all_values() {
            prop_assert!(!index.tags_of(&value).is_empty());
        }
        prop_assert_eq!(index.is_empty(), index.tag_count() == 0);
    }

    /// Assigning the same tags twice changes nothing
    #[test]
    fn assign_is_idempotent(
        ops in prop::collection::vec(op(), 0..30),
        value in 0u8..8,
        tags in tag_list()
    ) {
        let mut index = build(&ops);
        index.assign(value, tags.iter().copied());
        let once = index.clone();
        index.assign(value, tags.iter().copied());

        prop_assert_eq!(index, once);
    }

    /// add then remove of fresh tags restores the previous tag set
    #[test]
    fn add_remove_partial_inverse(
        ops in prop::collection::vec(op(), 0..30),
        value in 0u8..8,
        extra in prop::collection::vec(10u8..14, 1..4)
    ) {
        let mut index = build(&ops);
        let before = set(index.tags_of(&value));

        index.add(value, extra.iter().copied());
        index.remove(&value, &extra);

        prop_assert_eq!(set(index.tags_of(&value)), before);
    }

    /// intersect and union match set algebra over the two value sets
    #[test]
    fn intersect_union_duality(
        ops in prop::collection::vec(op(), 0..40),
        a in 0u8..6,
        b in 0u8..6
    ) {
        let index = build(&ops);
        let va = set(index.values_of(&a));
        let vb = set(index.values_of(&b));

        let intersect = set(index.intersect(&[a, b]));
        prop_assert_eq!(&intersect, &va.intersection(&vb).copied().collect::<HashSet<u8>>());
        prop_assert_eq!(set(index.union(&[a, b])), va.union(&vb).copied().collect::<HashSet<u8>>());
        prop_assert!(set(index.exact(&[a, b])).is_subset(&intersect));
    }

    /// complement(t) and values_of(t) partition all values
    #[test]
    fn complement_partitions_values(
        ops in prop::collection::vec(op(), 0..40),
        tag in 0u8..7
    ) {
        let index = build(&ops);
        let tagged = set(index.values_of(&tag));
        let rest = set(index.complement(&tag));

        prop_assert!(tagged.is_disjoint(&rest));
        prop_assert_eq!(
            tagged.union(&rest).copied().collect::<HashSet<u8>>(),
            set(index.all_values())
        );
    }

    /// Every exact match carries precisely the requested tags
    #[test]
    fn exact_matches_whole_tag_set(
        ops in prop::collection::vec(op(), 0..40),
        tags in prop::collection::vec(0u8..6, 1..4)
    ) {
        let index = build(&ops);
        let wanted = set(tags.clone());

        for value in index.exact(&tags) {
            prop_assert_eq!(set(index.tags_of(&value)), wanted.clone());
        }
    }

    /// symmetric_difference keeps values with exactly one listed tag
    #[test]
    fn symmetric_difference_exactly_one(
        ops in prop::collection::vec(op(), 0..40),
        tags in prop::collection::vec(0u8..6, 0..4)
    ) {
        let index = build(&ops);
        let listed = set(tags.clone());
        let result = set(index.symmetric_difference(&tags));

        for value in index.all_values() {
            let held = set(index.tags_of(&value));
            let hits = held.intersection(&listed).count();
            prop_assert_eq!(result.contains(&value), hits == 1);
        }
    }

    /// difference(from, excluding) keeps values of `from` avoiding all exclusions
    #[test]
    fn difference_avoids_exclusions(
        ops in prop::collection::vec(op(), 0..40),
        from in 0u8..6,
        excluding in tag_list()
    ) {
        let index = build(&ops);
        let result = set(index.difference(&from, &excluding));

        for value in index.values_of(&from) {
            let avoids = !excluding.iter().any(|t| index.has_tags(&value, &[*t]));
            prop_assert_eq!(result.contains(&value), avoids);
        }
        prop_assert!(result.is_subset(&set(index.values_of(&from))));
    }
}
