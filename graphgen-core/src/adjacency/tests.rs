//! Unit tests for the adjacency tree, cursor, and manager.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rstest::rstest;

use super::{Adjacency, AdjacencyManager, AdjacencyTree};
use crate::rng::XorShift64;

fn tree_of(pairs: &[(u64, u64)]) -> AdjacencyTree {
    let mut tree = AdjacencyTree::new();
    for &(from, to) in pairs {
        tree.insert(Adjacency::new(from, to));
    }
    tree
}

fn manager_of(order: u64, pairs: &[(u64, u64)]) -> AdjacencyManager {
    let mut manager = AdjacencyManager::new(order);
    for &(from, to) in pairs {
        manager.insert(Adjacency::new(from, to));
    }
    manager
}

#[test]
fn iteration_is_sorted_and_deduplicated() {
    let tree = tree_of(&[(3, 1), (0, 2), (3, 1), (1, 9), (1, 0), (0, 2)]);
    let collected: Vec<Adjacency> = tree.iter().copied().collect();
    assert_eq!(
        collected,
        vec![
            Adjacency::new(0, 2),
            Adjacency::new(1, 0),
            Adjacency::new(1, 9),
            Adjacency::new(3, 1),
        ]
    );
    assert_eq!(tree.len(), 4);
    tree.audit();
}

#[test]
fn duplicate_insert_returns_the_existing_node() {
    let mut tree = AdjacencyTree::new();
    let (first, inserted) = tree.insert(Adjacency::new(5, 6));
    assert!(inserted);
    let (second, inserted) = tree.insert(Adjacency::new(5, 6));
    assert!(!inserted);
    assert_eq!(first, second);
}

#[test]
fn erase_joins_the_halves_and_keeps_sizes() {
    let mut tree = tree_of(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
    let id = tree.find_id(Adjacency::new(2, 3));
    tree.erase(id);
    tree.audit();
    assert_eq!(tree.len(), 5);
    assert!(tree.iter().all(|a| *a != Adjacency::new(2, 3)));

    // erase the extremes
    tree.erase(tree.min_id());
    tree.erase(tree.max_id());
    tree.audit();
    assert_eq!(tree.len(), 3);
}

#[test]
fn erasing_the_only_node_empties_the_tree() {
    let mut tree = tree_of(&[(1, 2)]);
    tree.erase(tree.find_id(Adjacency::new(1, 2)));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[test]
fn rank_and_select_are_inverse() {
    let mut rng = XorShift64::new(17);
    let pairs: Vec<(u64, u64)> = (0..200)
        .map(|_| (rng.randrange(0, 40), rng.randrange(0, 40)))
        .collect();
    let tree = tree_of(&pairs);
    tree.audit();

    for k in 1..=tree.len() {
        let id = tree.select_id(k);
        assert_eq!(tree.rank_of(id), k, "rank(select({k})) must be {k}");
    }
    let mut expected = 1;
    let mut current = tree.min_id();
    while current != super::tree::NIL {
        assert_eq!(tree.rank_of(current), expected);
        assert_eq!(tree.select_id(expected), current);
        expected += 1;
        current = tree.successor(current);
    }
}

#[rstest]
#[case(0)]
#[case(100)]
fn select_out_of_range_is_past_the_end(#[case] k: u64) {
    let tree = tree_of(&[(0, 1), (0, 2), (1, 0)]);
    assert_eq!(tree.select_id(k), super::tree::NIL);
}

#[test]
fn bounds_bracket_missing_keys() {
    let tree = tree_of(&[(1, 1), (1, 3), (2, 0), (4, 4)]);
    let lb = tree.lower_bound_id(Adjacency::new(1, 2));
    assert_eq!(*tree.adjacency(lb), Adjacency::new(1, 3));
    let ub = tree.upper_bound_id(Adjacency::new(1, 3));
    assert_eq!(*tree.adjacency(ub), Adjacency::new(2, 0));
    let past = tree.lower_bound_id(Adjacency::new(9, 0));
    assert_eq!(past, super::tree::NIL);
}

#[test]
fn cursor_walks_and_measures_distance() {
    let manager = manager_of(10, &[(0, 1), (0, 3), (2, 1), (5, 0), (5, 9)]);
    let mut cursor = manager.begin();
    assert_eq!(cursor.get(), Some(&Adjacency::new(0, 1)));
    cursor.step_forward();
    assert_eq!(cursor.get(), Some(&Adjacency::new(0, 3)));
    cursor.advance(2);
    assert_eq!(cursor.get(), Some(&Adjacency::new(5, 0)));
    cursor.advance(-3);
    assert_eq!(cursor.get(), Some(&Adjacency::new(0, 1)));

    let end = manager.end();
    assert_eq!(end - manager.begin(), manager.len() as i64);
    assert_eq!(manager.select(3) - manager.select(1), 2);

    let mut from_end = manager.end();
    from_end.step_back();
    assert_eq!(from_end.get(), Some(&Adjacency::new(5, 9)));
}

#[test]
fn cursor_advance_past_either_end_parks_at_the_sentinel() {
    let manager = manager_of(4, &[(0, 1), (1, 2)]);
    let mut cursor = manager.begin();
    cursor.advance(10);
    assert!(cursor.is_end());
    cursor.advance(-1);
    assert_eq!(cursor.get(), Some(&Adjacency::new(1, 2)));
    cursor.advance(-10);
    assert!(cursor.is_end());
}

#[test]
fn manager_tracks_prefix_extremes_across_inserts() {
    let manager = manager_of(8, &[(3, 4), (3, 1), (3, 7), (5, 2)]);
    assert_eq!(manager.first_of(3), Some(&Adjacency::new(3, 1)));
    assert_eq!(manager.last_of(3), Some(&Adjacency::new(3, 7)));
    assert_eq!(manager.first_of(5), Some(&Adjacency::new(5, 2)));
    assert_eq!(manager.last_of(5), Some(&Adjacency::new(5, 2)));
    assert_eq!(manager.first_of(0), None);
    manager.audit();
}

#[test]
fn manager_erase_retargets_or_clears_the_index() {
    let mut manager = manager_of(8, &[(2, 0), (2, 3), (2, 6), (4, 1)]);

    assert!(manager.erase(Adjacency::new(2, 0)));
    assert_eq!(manager.first_of(2), Some(&Adjacency::new(2, 3)));
    manager.audit();

    assert!(manager.erase(Adjacency::new(2, 6)));
    assert_eq!(manager.last_of(2), Some(&Adjacency::new(2, 3)));
    manager.audit();

    assert!(manager.erase(Adjacency::new(2, 3)));
    assert_eq!(manager.first_of(2), None);
    assert_eq!(manager.last_of(2), None);
    manager.audit();

    assert!(!manager.erase(Adjacency::new(2, 3)));
    assert_eq!(manager.len(), 1);
}

#[test]
fn neighbors_scans_one_prefix_in_target_order() {
    let manager = manager_of(
        6,
        &[(1, 0), (2, 5), (2, 1), (2, 4), (3, 0), (2, 0), (4, 2)],
    );
    let targets: Vec<u64> = manager.neighbors(2).map(|a| a.to).collect();
    assert_eq!(targets, vec![0, 1, 4, 5]);
    assert_eq!(manager.neighbors(0).count(), 0);
    assert_eq!(manager.neighbors(5).count(), 0);
}

proptest! {
    #[test]
    fn tree_matches_a_btreeset_model(ops in proptest::collection::vec(
        (any::<bool>(), 0u64..12, 0u64..12),
        1..200,
    )) {
        let mut manager = AdjacencyManager::new(12);
        let mut model: BTreeSet<(u64, u64)> = BTreeSet::new();
        for (insert, from, to) in ops {
            let adjacency = Adjacency::new(from, to);
            if insert {
                prop_assert_eq!(manager.insert(adjacency), model.insert((from, to)));
            } else {
                prop_assert_eq!(manager.erase(adjacency), model.remove(&(from, to)));
            }
        }
        manager.audit();
        prop_assert_eq!(manager.len() as usize, model.len());
        let stored: Vec<(u64, u64)> = manager.iter().map(|a| (a.from, a.to)).collect();
        let expected: Vec<(u64, u64)> = model.into_iter().collect();
        prop_assert_eq!(stored, expected);
    }
}
