//! Ordered-list reconciliation.
//!
//! [`reconcile`] compares two snapshots by stable identity and produces the
//! [`ListTransition`] that turns the old one into the new one.
//!
//! Entries present in both snapshots are split into two groups:
//!
//! - **kept**: the largest set whose old positions already increase along the
//!   new order. These stay in place and only become updates (when their value
//!   changed or every row is forced).
//! - **moved**: everything else. A moved entry is a deletion of its old
//!   position plus an insertion that carries `previous_index`.
//!
//! Lookups are hashed and the kept set is found by patience sorting, so the
//! whole pass is O(n log n) in the combined length.

use std::collections::{HashMap, HashSet};

use itemlist_types::{DeleteItem, InsertItem, ListEntry, ListTransition, UpdateItem};

#[derive(Debug, Clone, Copy)]
enum Origin {
    Fresh,
    Kept(usize),
    Moved(usize),
}

/// Compute the transition from `old` to `new`.
///
/// With `force_update_all`, every kept entry is reported as updated even when
/// it compares equal. Callers use this when shared presentation (theme,
/// strings) changed underneath unchanged content.
///
/// Identifiers must be unique within each snapshot; duplicates are caught by
/// debug assertions only.
pub fn reconcile<E>(old: &[E], new: &[E], force_update_all: bool) -> ListTransition<E>
where
    E: ListEntry + Clone,
{
    let old_positions: HashMap<E::Id, usize> = old
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.stable_id(), index))
        .collect();
    debug_assert_eq!(
        old_positions.len(),
        old.len(),
        "duplicate stable ids in old snapshot"
    );

    let new_ids: HashSet<E::Id> = new.iter().map(ListEntry::stable_id).collect();
    debug_assert_eq!(new_ids.len(), new.len(), "duplicate stable ids in new snapshot");

    // Old positions of carried entries, in new order.
    let carried: Vec<(usize, usize)> = new
        .iter()
        .enumerate()
        .filter_map(|(new_index, entry)| {
            old_positions
                .get(&entry.stable_id())
                .map(|&old_index| (new_index, old_index))
        })
        .collect();
    let old_order: Vec<usize> = carried.iter().map(|&(_, old_index)| old_index).collect();
    let keep = increasing_subsequence(&old_order);

    let mut origins = vec![Origin::Fresh; new.len()];
    for (&(new_index, old_index), kept) in carried.iter().zip(keep) {
        origins[new_index] = if kept {
            Origin::Kept(old_index)
        } else {
            Origin::Moved(old_index)
        };
    }

    let mut transition = ListTransition::default();

    for (old_index, entry) in old.iter().enumerate() {
        if !new_ids.contains(&entry.stable_id()) {
            transition.deletions.push(DeleteItem { index: old_index });
        }
    }

    for (new_index, (entry, origin)) in new.iter().zip(&origins).enumerate() {
        match *origin {
            Origin::Fresh => transition.insertions.push(InsertItem {
                index: new_index,
                previous_index: None,
                item: entry.clone(),
            }),
            Origin::Moved(old_index) => {
                transition.deletions.push(DeleteItem { index: old_index });
                transition.insertions.push(InsertItem {
                    index: new_index,
                    previous_index: Some(old_index),
                    item: entry.clone(),
                });
            }
            Origin::Kept(old_index) => {
                if force_update_all || old[old_index] != *entry {
                    transition.updates.push(UpdateItem {
                        index: new_index,
                        previous_index: old_index,
                        item: entry.clone(),
                    });
                }
            }
        }
    }

    transition.deletions.sort_unstable_by_key(|delete| delete.index);

    tracing::debug!(
        old = old.len(),
        new = new.len(),
        deleted = transition.deletions.len(),
        inserted = transition.insertions.len(),
        moved = transition.moved_count(),
        updated = transition.updates.len(),
        forced = force_update_all,
        "Reconciled list"
    );

    transition
}

/// Mark one longest strictly increasing subsequence of `values`.
///
/// Values are distinct old positions, so "strictly" never drops ties.
fn increasing_subsequence(values: &[usize]) -> Vec<bool> {
    // tails[k]: index of the smallest tail of an increasing run of length k + 1.
    let mut tails: Vec<usize> = Vec::new();
    let mut predecessor: Vec<Option<usize>> = vec![None; values.len()];

    for (index, &value) in values.iter().enumerate() {
        let slot = tails.partition_point(|&tail| values[tail] < value);
        if slot > 0 {
            predecessor[index] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(index);
        } else {
            tails[slot] = index;
        }
    }

    let mut keep = vec![false; values.len()];
    let mut cursor = tails.last().copied();
    while let Some(index) = cursor {
        keep[index] = true;
        cursor = predecessor[index];
    }
    keep
}
