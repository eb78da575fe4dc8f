//! Display list: the rows currently on screen.

use itemlist_types::{ListTransition, TransitionError};
use thiserror::Error;

/// How a transaction should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionOptions {
    /// Apply before the next frame instead of on the animation queue.
    pub synchronous: bool,
    pub low_latency: bool,
    pub animate_insertion: bool,
}

impl TransactionOptions {
    /// First fill of an empty list: no animation, no delay.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            synchronous: true,
            low_latency: true,
            animate_insertion: false,
        }
    }

    #[must_use]
    pub const fn animated() -> Self {
        Self {
            synchronous: false,
            low_latency: false,
            animate_insertion: true,
        }
    }
}

/// Summary of an applied transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionOutcome {
    pub deleted: usize,
    pub inserted: usize,
    pub updated: usize,
    pub animated: bool,
    /// Revision after the transaction.
    pub revision: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("transaction rejected at revision {revision}: {source}")]
pub struct TransactionError {
    pub revision: usize,
    #[source]
    pub source: TransitionError,
}

/// Where the list should scroll to on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
    pub animated: bool,
}

/// Rows with a monotonic revision counter.
///
/// The revision is bumped whenever rows change, so renderers can use it as a
/// cache key. Keeping it next to the rows means no mutation can forget it.
#[derive(Debug, Clone)]
pub struct DisplayList<T> {
    rows: Vec<T>,
    revision: usize,
    pending_scroll: Option<ScrollRequest>,
}

impl<T> Default for DisplayList<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            revision: 0,
            pending_scroll: None,
        }
    }
}

impl<T> DisplayList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn revision(&self) -> usize {
        self.revision
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// Apply `transition`. On error the rows are left as they were.
    pub fn transaction(
        &mut self,
        transition: ListTransition<T>,
        options: TransactionOptions,
    ) -> Result<TransactionOutcome, TransactionError> {
        let deleted = transition.deletions.len();
        let inserted = transition.insertions.len();
        let updated = transition.updates.len();
        let changed = !transition.is_empty();

        transition
            .apply(&mut self.rows)
            .map_err(|source| TransactionError {
                revision: self.revision,
                source,
            })?;

        if changed {
            self.bump();
        }

        tracing::debug!(
            deleted,
            inserted,
            updated,
            synchronous = options.synchronous,
            animated = options.animate_insertion,
            revision = self.revision,
            "Applied list transaction"
        );

        Ok(TransactionOutcome {
            deleted,
            inserted,
            updated,
            animated: options.animate_insertion && inserted > 0,
            revision: self.revision,
        })
    }

    /// Drop every row.
    pub fn clear(&mut self) {
        if !self.rows.is_empty() {
            self.rows.clear();
            self.bump();
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.pending_scroll = Some(ScrollRequest {
            index: 0,
            animated: true,
        });
    }

    /// Hand the pending scroll request to the renderer.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }

    #[inline]
    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a, T> IntoIterator for &'a DisplayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
