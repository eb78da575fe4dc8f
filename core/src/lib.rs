//! Core list logic for itemlist.
//!
//! - [`reconcile`]: the pure ordered-list diff
//! - [`DisplayList`]: the rows on screen, mutated only through transactions
//! - [`ListController`]: per-screen snapshot bookkeeping and transition queue
//! - entry builders and async snapshot feeds for the settings screens

mod controller;
mod display;
pub mod feed;
mod merge;
pub mod screens;

pub use controller::{ContainerLayout, ListController, PreparedTransition, prepare_transition};
pub use display::{
    DisplayList, ScrollRequest, TransactionError, TransactionOptions, TransactionOutcome,
};
pub use feed::{
    FeedError, LanguageSnapshot, LanguageSources, LocalizationView, run_language_feed,
    run_presentation_feed,
};
pub use merge::reconcile;
pub use screens::{
    LanguageInteraction, LocalizationListState, LocalizationSettings, discover_entries,
    helper_entries, language_entries,
};
