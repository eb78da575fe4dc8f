//! The delete/insert/update set that turns one list snapshot into the next.
//!
//! A transition is produced once per reconcile and consumed once. Positions
//! follow a fixed convention:
//!
//! - deletions use positions in the OLD list
//! - insertions and updates use positions in the NEW list
//!
//! Apply order is deletions (descending), then insertions (ascending), then
//! updates. [`ListTransition::apply`] does exactly that.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItem {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertItem<T> {
    pub index: usize,
    /// Old position when the row moved rather than appeared.
    pub previous_index: Option<usize>,
    pub item: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateItem<T> {
    pub index: usize,
    pub previous_index: usize,
    pub item: T,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("delete position {index} out of range for list of {len}")]
    DeleteOutOfRange { index: usize, len: usize },
    #[error("insert position {index} out of range for list of {len}")]
    InsertOutOfRange { index: usize, len: usize },
    #[error("update position {index} out of range for list of {len}")]
    UpdateOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTransition<T> {
    /// Ascending by old position.
    pub deletions: Vec<DeleteItem>,
    /// Ascending by new position.
    pub insertions: Vec<InsertItem<T>>,
    /// Ascending by new position.
    pub updates: Vec<UpdateItem<T>>,
}

impl<T> Default for ListTransition<T> {
    fn default() -> Self {
        Self {
            deletions: Vec::new(),
            insertions: Vec::new(),
            updates: Vec::new(),
        }
    }
}

impl<T> ListTransition<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.insertions.is_empty() && self.updates.is_empty()
    }

    /// Whether the transition changes the number or order of rows.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        !self.deletions.is_empty() || !self.insertions.is_empty()
    }

    /// Count of rows that moved (an insertion carrying its old position).
    #[must_use]
    pub fn moved_count(&self) -> usize {
        self.insertions
            .iter()
            .filter(|insert| insert.previous_index.is_some())
            .count()
    }

    /// Convert the carried items, keeping every position untouched.
    ///
    /// Used to turn entries into rendered rows once per transition.
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> ListTransition<U> {
        ListTransition {
            deletions: self.deletions,
            insertions: self
                .insertions
                .into_iter()
                .map(|insert| InsertItem {
                    index: insert.index,
                    previous_index: insert.previous_index,
                    item: f(insert.item),
                })
                .collect(),
            updates: self
                .updates
                .into_iter()
                .map(|update| UpdateItem {
                    index: update.index,
                    previous_index: update.previous_index,
                    item: f(update.item),
                })
                .collect(),
        }
    }

    /// Apply to `list` in place.
    ///
    /// Every position is checked before the list is touched, so a failed apply
    /// leaves `list` unchanged.
    pub fn apply(self, list: &mut Vec<T>) -> Result<(), TransitionError> {
        self.validate(list.len())?;

        let mut deletions: Vec<usize> = self.deletions.iter().map(|d| d.index).collect();
        deletions.sort_unstable();
        for index in deletions.into_iter().rev() {
            list.remove(index);
        }

        let mut insertions = self.insertions;
        insertions.sort_by_key(|insert| insert.index);
        for insert in insertions {
            list.insert(insert.index, insert.item);
        }

        for update in self.updates {
            list[update.index] = update.item;
        }

        Ok(())
    }

    fn validate(&self, len: usize) -> Result<(), TransitionError> {
        let mut deleted = vec![false; len];
        for delete in &self.deletions {
            match deleted.get_mut(delete.index) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(TransitionError::DeleteOutOfRange {
                        index: delete.index,
                        len,
                    });
                }
            }
        }

        let mut current = len - self.deletions.len();
        let mut positions: Vec<usize> = self.insertions.iter().map(|i| i.index).collect();
        positions.sort_unstable();
        for index in positions {
            if index > current {
                return Err(TransitionError::InsertOutOfRange {
                    index,
                    len: current,
                });
            }
            current += 1;
        }

        for update in &self.updates {
            if update.index >= current {
                return Err(TransitionError::UpdateOutOfRange {
                    index: update.index,
                    len: current,
                });
            }
        }

        Ok(())
    }
}
