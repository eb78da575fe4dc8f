//! Per-screen list controller.
//!
//! Turns a stream of entry snapshots into display transactions:
//!
//! ```text
//! update(entries, presentation) -> reconcile(prev, entries) -> queue
//!                                                                |
//!                      container_layout_updated() -----> dequeue_transitions()
//!                                                                |
//!                                                                v
//!                                                 DisplayList::transaction()
//! ```
//!
//! Transitions wait in the queue until the first container layout arrives,
//! then drain in the order they were computed. A rejected transaction clears
//! the display and the remembered snapshot, so the next snapshot replaces the
//! list from scratch.

use std::collections::VecDeque;

use itemlist_types::{
    ItemListEntry, ListRow, ListTransition, PresentationData, is_sorted_by_key,
};

use crate::display::{DisplayList, TransactionError, TransactionOptions, TransactionOutcome};
use crate::merge::reconcile;

/// Size the list is laid out in. Only its presence matters to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerLayout {
    pub width: u16,
    pub height: u16,
    pub top_inset: u16,
}

/// A reconciled transition plus how it should be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTransition<T> {
    pub transition: ListTransition<T>,
    /// No snapshot has been shown before this one.
    pub first_time: bool,
    /// The snapshot was empty; show the activity indicator.
    pub is_loading: bool,
    /// Rows may animate in. Only set when the list did not grow.
    pub animated: bool,
}

/// Reconcile `from` -> `to` and render the carried entries as rows.
pub fn prepare_transition<E: ItemListEntry>(
    from: &[E],
    to: &[E],
    first_time: bool,
    force_update: bool,
) -> PreparedTransition<ListRow> {
    let transition = reconcile(from, to, force_update).map_items(|entry| entry.row());
    PreparedTransition {
        transition,
        first_time,
        is_loading: to.is_empty(),
        animated: from.len() >= to.len(),
    }
}

#[derive(Debug)]
pub struct ListController<E> {
    previous: Option<(Vec<E>, PresentationData)>,
    queued: VecDeque<PreparedTransition<ListRow>>,
    layout: Option<ContainerLayout>,
    list: DisplayList<ListRow>,
    ready: bool,
    activity_indicator: bool,
    reduced_motion: bool,
}

impl<E> Default for ListController<E> {
    fn default() -> Self {
        Self {
            previous: None,
            queued: VecDeque::new(),
            layout: None,
            list: DisplayList::new(),
            ready: false,
            activity_indicator: false,
            reduced_motion: false,
        }
    }
}

impl<E: ItemListEntry> ListController<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Never animate insertions, regardless of the transition.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Accept a new snapshot.
    ///
    /// Every row is force-updated when the theme or strings object changed
    /// since the previous snapshot.
    pub fn update(
        &mut self,
        entries: Vec<E>,
        presentation: PresentationData,
    ) -> Result<Vec<TransactionOutcome>, TransactionError> {
        debug_assert!(is_sorted_by_key(&entries), "snapshot not in display order");
        let previous = self.previous.take();
        let prepared = match &previous {
            Some((previous_entries, previous_presentation)) => prepare_transition(
                previous_entries,
                &entries,
                false,
                presentation.invalidates(previous_presentation),
            ),
            None => prepare_transition(&[], &entries, true, false),
        };
        self.previous = Some((entries, presentation));
        self.enqueue_transition(prepared)
    }

    pub fn container_layout_updated(
        &mut self,
        layout: ContainerLayout,
    ) -> Result<Vec<TransactionOutcome>, TransactionError> {
        let had_valid_layout = self.layout.is_some();
        self.layout = Some(layout);

        if had_valid_layout {
            Ok(Vec::new())
        } else {
            self.dequeue_transitions()
        }
    }

    fn enqueue_transition(
        &mut self,
        transition: PreparedTransition<ListRow>,
    ) -> Result<Vec<TransactionOutcome>, TransactionError> {
        self.queued.push_back(transition);

        if self.layout.is_some() {
            self.dequeue_transitions()
        } else {
            tracing::trace!(queued = self.queued.len(), "Waiting for container layout");
            Ok(Vec::new())
        }
    }

    fn dequeue_transitions(&mut self) -> Result<Vec<TransactionOutcome>, TransactionError> {
        if self.layout.is_none() {
            return Ok(Vec::new());
        }

        let mut outcomes = Vec::with_capacity(self.queued.len());
        while let Some(prepared) = self.queued.pop_front() {
            let options = if prepared.first_time {
                TransactionOptions::immediate()
            } else if prepared.animated && !self.reduced_motion {
                TransactionOptions::animated()
            } else {
                TransactionOptions::default()
            };

            match self.list.transaction(prepared.transition, options) {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        dropped = self.queued.len(),
                        "List transaction rejected, resetting"
                    );
                    self.queued.clear();
                    self.previous = None;
                    self.list.clear();
                    return Err(err);
                }
            }

            if !self.ready {
                self.ready = true;
                tracing::debug!("List ready");
            }
            self.activity_indicator = prepared.is_loading;
        }
        Ok(outcomes)
    }

    pub fn scroll_to_top(&mut self) {
        self.list.scroll_to_top();
    }

    #[must_use]
    pub fn list(&self) -> &DisplayList<ListRow> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut DisplayList<ListRow> {
        &mut self.list
    }

    #[must_use]
    pub fn rows(&self) -> &[ListRow] {
        self.list.rows()
    }

    /// The latest accepted snapshot, whether or not it has been applied.
    #[must_use]
    pub fn entries(&self) -> &[E] {
        self.previous
            .as_ref()
            .map(|(entries, _)| entries.as_slice())
            .unwrap_or_default()
    }

    /// Set once the first transaction has been applied.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn shows_activity_indicator(&self) -> bool {
        self.activity_indicator
    }

    #[must_use]
    pub fn pending_transitions(&self) -> usize {
        self.queued.len()
    }
}
