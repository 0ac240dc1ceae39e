//! Property-based tests for the membership differ.

use std::collections::BTreeSet;

use grafana_client::diff_members;
use proptest::prelude::*;

fn members() -> impl Strategy<Value = Vec<String>> {
    // A small alphabet keeps overlaps between the two lists frequent.
    prop::collection::vec("[a-e]{1,2}@x\\.com", 0..12)
}

fn as_set(members: &[String]) -> BTreeSet<String> {
    members.iter().cloned().collect()
}

proptest! {
    #[test]
    fn applying_delta_reaches_desired(desired in members(), current in members()) {
        let delta = diff_members(&desired, &current);
        prop_assert_eq!(delta.apply(&current), as_set(&desired));
    }

    #[test]
    fn deltas_are_disjoint_from_their_sources(desired in members(), current in members()) {
        let delta = diff_members(&desired, &current);
        let desired = as_set(&desired);
        let current = as_set(&current);

        prop_assert!(delta.to_add().is_disjoint(&current));
        prop_assert!(delta.to_remove().is_disjoint(&desired));
        prop_assert!(delta.to_remove().is_subset(&current));
    }

    #[test]
    fn diff_with_itself_is_empty(list in members()) {
        prop_assert!(diff_members(&list, &list).is_empty());
    }

    #[test]
    fn swapping_arguments_swaps_deltas(a in members(), b in members()) {
        let forward = diff_members(&a, &b);
        let backward = diff_members(&b, &a);

        prop_assert_eq!(forward.to_add(), backward.to_remove());
        prop_assert_eq!(forward.to_remove(), backward.to_add());
    }

    #[test]
    fn duplicates_do_not_matter(a in members()) {
        let doubled: Vec<String> = a.iter().chain(a.iter()).cloned().collect();
        prop_assert_eq!(diff_members(&a, &doubled), diff_members(&a, &a));
    }
}
