//! Core domain types for itemlist.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod entry;
mod ids;
mod presentation;
mod screens;
mod transition;

pub use entry::{ListEntry, is_sorted_by_key, sort_entries};
pub use ids::{SectionId, StableId};
pub use presentation::{PresentationData, PresentationStrings, Theme};
pub use screens::{
    DEVICES_SECTION, DiscoverEntry, HELP_LANGUAGE_SECTION, HelperEntry, ItemListEntry,
    LANGUAGE_SECTION, LanguageEntry, LanguageInfo, ListRow, PEOPLE_NEARBY_SECTION, RowAction,
    RowStyle,
};
pub use transition::{DeleteItem, InsertItem, ListTransition, TransitionError, UpdateItem};
