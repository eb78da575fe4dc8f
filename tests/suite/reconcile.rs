//! Reconciler properties over generated snapshots

use itemlist_core::reconcile;

use crate::common::{Lcg, Row, row, rows};

fn applied(old: &[Row], new: &[Row], force: bool) -> Vec<Row> {
    let mut list = old.to_vec();
    reconcile(old, new, force).apply(&mut list).unwrap();
    list
}

#[test]
fn apply_yields_new_snapshot() {
    let mut rng = Lcg::new(7);
    for _ in 0..300 {
        let old = rows(&rng.ids(12));
        let mut new = rows(&rng.ids(12));
        // Change some payloads so updates are exercised too.
        for entry in &mut new {
            if rng.below(4) == 0 {
                entry.payload = format!("changed-{}", entry.id);
            }
        }

        assert_eq!(applied(&old, &new, false), new);
        assert_eq!(applied(&old, &new, true), new);
    }
}

#[test]
fn positions_are_sorted_and_in_range() {
    let mut rng = Lcg::new(99);
    for _ in 0..200 {
        let old = rows(&rng.ids(10));
        let new = rows(&rng.ids(10));
        let transition = reconcile(&old, &new, false);

        let deletions: Vec<usize> = transition.deletions.iter().map(|d| d.index).collect();
        assert!(deletions.windows(2).all(|w| w[0] < w[1]));
        assert!(deletions.iter().all(|&i| i < old.len()));

        let insertions: Vec<usize> = transition.insertions.iter().map(|i| i.index).collect();
        assert!(insertions.windows(2).all(|w| w[0] < w[1]));
        assert!(insertions.iter().all(|&i| i < new.len()));

        for insert in &transition.insertions {
            if let Some(previous) = insert.previous_index {
                assert_eq!(old[previous].id, insert.item.id);
            }
        }
    }
}

#[test]
fn unchanged_snapshot_is_empty_transition() {
    let mut rng = Lcg::new(3);
    for _ in 0..50 {
        let list = rows(&rng.ids(15));
        assert!(reconcile(&list, &list, false).is_empty());
    }
}

#[test]
fn forced_update_touches_every_row_without_moving_any() {
    let list = rows(&[4, 8, 15, 16, 23, 42]);
    let transition = reconcile(&list, &list, true);

    assert!(!transition.is_structural());
    let positions: Vec<(usize, usize)> = transition
        .updates
        .iter()
        .map(|u| (u.index, u.previous_index))
        .collect();
    assert_eq!(positions, (0..6).map(|i| (i, i)).collect::<Vec<_>>());
}

#[test]
fn empty_to_three_inserts_in_order() {
    let new = vec![row(1, "a"), row(2, "b"), row(3, "c")];
    let transition = reconcile(&[], &new, false);

    let inserted: Vec<(usize, Option<usize>)> = transition
        .insertions
        .iter()
        .map(|i| (i.index, i.previous_index))
        .collect();
    assert_eq!(inserted, vec![(0, None), (1, None), (2, None)]);
    assert!(transition.deletions.is_empty());
    assert!(transition.updates.is_empty());
}

#[test]
fn three_to_empty_deletes_old_positions() {
    let old = vec![row(1, "a"), row(2, "b"), row(3, "c")];
    let transition = reconcile(&old, &[], false);

    let deleted: Vec<usize> = transition.deletions.iter().map(|d| d.index).collect();
    assert_eq!(deleted, vec![0, 1, 2]);
    assert!(transition.insertions.is_empty());
    assert!(transition.updates.is_empty());
}

#[test]
fn permutation_with_same_values_never_updates() {
    let mut rng = Lcg::new(1234);
    for _ in 0..100 {
        let old = rows(&rng.ids(10));
        let mut ids: Vec<u32> = old.iter().map(|r| r.id).collect();
        for i in (1..ids.len()).rev() {
            let j = rng.below(i as u64 + 1) as usize;
            ids.swap(i, j);
        }
        let new = rows(&ids);
        let transition = reconcile(&old, &new, false);

        assert!(transition.updates.is_empty());
        // Every structural change is a move: each delete pairs with an insert.
        assert_eq!(transition.deletions.len(), transition.insertions.len());
        assert_eq!(transition.moved_count(), transition.insertions.len());
        assert_eq!(applied(&old, &new, false), new);
    }
}
