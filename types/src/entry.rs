//! The capability set every list row shares: identity, order, equality.

use std::fmt::Debug;
use std::hash::Hash;

use crate::SectionId;

/// One row of a list snapshot.
///
/// `PartialEq` is value equality and decides "updated" vs "unchanged" when the
/// same identity appears in two snapshots. Display order is decided by
/// [`ListEntry::sort_key`], not by `Ord` on the entry itself, so rows whose
/// content differs can still share a position.
///
/// Identifiers must be unique within one snapshot.
pub trait ListEntry: PartialEq {
    type Id: Eq + Hash + Clone + Debug;
    type Key: Ord;

    fn stable_id(&self) -> Self::Id;

    fn section(&self) -> SectionId;

    fn sort_key(&self) -> Self::Key;
}

/// Whether a snapshot is laid out by its own sort keys.
///
/// Builders emit entries already sorted; snapshots read from files are not and
/// go through [`sort_entries`] first.
#[must_use]
pub fn is_sorted_by_key<E: ListEntry>(entries: &[E]) -> bool {
    entries.windows(2).all(|pair| {
        (pair[0].section(), pair[0].sort_key()) <= (pair[1].section(), pair[1].sort_key())
    })
}

/// Sort a snapshot by section, then by sort key. Stable for equal keys.
pub fn sort_entries<E: ListEntry>(entries: &mut [E]) {
    entries.sort_by(|a, b| (a.section(), a.sort_key()).cmp(&(b.section(), b.sort_key())));
}
