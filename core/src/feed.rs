//! Snapshot feeds: upstream state in, one reconcile per change out.
//!
//! Each upstream source is a `tokio::sync::watch` channel. Whenever any of
//! them changes, the latest value of every source is combined into one
//! snapshot and handed to the screen's [`ListController`]. A feed runs on a
//! single task, so transitions are applied in the order they were computed.
//! It ends once every sender has been dropped.

use thiserror::Error;
use tokio::sync::watch;

use itemlist_types::{ItemListEntry, LanguageEntry, LanguageInfo, PresentationData};

use crate::controller::ListController;
use crate::display::TransactionError;
use crate::screens::{
    LanguageInteraction, LocalizationListState, LocalizationSettings, language_entries,
};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to apply list snapshot {snapshot}")]
    Transaction {
        snapshot: usize,
        #[source]
        source: TransactionError,
    },
}

/// Stored localization state, published together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizationView {
    pub list: LocalizationListState,
    pub settings: LocalizationSettings,
}

/// Everything the language list is derived from.
#[derive(Debug, Clone)]
pub struct LanguageSnapshot {
    pub localization: LocalizationView,
    pub presentation: PresentationData,
    pub interaction: LanguageInteraction,
}

impl LanguageSnapshot {
    #[must_use]
    pub fn entries(&self, catalog: &[LanguageInfo]) -> Vec<LanguageEntry> {
        language_entries(
            catalog,
            &self.localization.list,
            &self.localization.settings,
            &self.interaction,
        )
    }
}

pub struct LanguageSources {
    pub localization: watch::Receiver<LocalizationView>,
    pub presentation: watch::Receiver<PresentationData>,
    pub interaction: watch::Receiver<LanguageInteraction>,
}

impl LanguageSources {
    fn snapshot(&mut self) -> LanguageSnapshot {
        LanguageSnapshot {
            localization: self.localization.borrow_and_update().clone(),
            presentation: self.presentation.borrow_and_update().clone(),
            interaction: self.interaction.borrow_and_update().clone(),
        }
    }

    /// Wait until any source changes. Returns `false` once all are closed.
    async fn changed(&mut self, open: &mut [bool; 3]) -> bool {
        loop {
            if !open.iter().any(|source| *source) {
                return false;
            }
            let (index, result) = tokio::select! {
                result = self.localization.changed(), if open[0] => (0, result),
                result = self.presentation.changed(), if open[1] => (1, result),
                result = self.interaction.changed(), if open[2] => (2, result),
            };
            match result {
                Ok(()) => return true,
                Err(_) => open[index] = false,
            }
        }
    }
}

/// Drive the language list until every source closes.
///
/// Returns the number of snapshots delivered.
pub async fn run_language_feed(
    catalog: &[LanguageInfo],
    mut sources: LanguageSources,
    controller: &mut ListController<LanguageEntry>,
) -> Result<usize, FeedError> {
    let mut open = [true; 3];
    let mut delivered = 0;

    loop {
        let snapshot = sources.snapshot();
        let entries = snapshot.entries(catalog);
        tracing::debug!(
            snapshot = delivered,
            entries = entries.len(),
            "Language list snapshot"
        );
        controller
            .update(entries, snapshot.presentation)
            .map_err(|source| FeedError::Transaction {
                snapshot: delivered,
                source,
            })?;
        delivered += 1;

        if !sources.changed(&mut open).await {
            tracing::debug!(delivered, "Language list sources closed");
            return Ok(delivered);
        }
    }
}

/// Drive a screen whose entries depend only on presentation data.
///
/// Used by the Discover and Help screens.
pub async fn run_presentation_feed<E, F>(
    mut presentation: watch::Receiver<PresentationData>,
    mut build: F,
    controller: &mut ListController<E>,
) -> Result<usize, FeedError>
where
    E: ItemListEntry,
    F: FnMut(&PresentationData) -> Vec<E>,
{
    let mut delivered = 0;

    loop {
        let data = presentation.borrow_and_update().clone();
        controller
            .update(build(&data), data)
            .map_err(|source| FeedError::Transaction {
                snapshot: delivered,
                source,
            })?;
        delivered += 1;

        if presentation.changed().await.is_err() {
            return Ok(delivered);
        }
    }
}
