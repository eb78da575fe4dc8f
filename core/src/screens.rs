//! Entry builders for the settings screens.
//!
//! Builders are pure: they take the current upstream state and return a full
//! snapshot, sorted and uniquely identified.

use itemlist_types::{DiscoverEntry, HelperEntry, LanguageEntry, LanguageInfo, PresentationStrings};

/// Localizations the server currently offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizationListState {
    pub available_official: Vec<String>,
}

/// The user's language preference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizationSettings {
    pub primary_language_code: Option<String>,
}

/// Transient row interaction state for the language list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageInteraction {
    /// Localization currently being downloaded and applied.
    pub applying_code: Option<String>,
    /// Row whose swipe options are open.
    pub revealed_code: Option<String>,
    pub editing: bool,
}

impl LanguageInteraction {
    /// Record that row `id` revealed its options, or that `from_id` closed.
    ///
    /// Only a close from the currently revealed row, or an open with no
    /// predecessor, is accepted. Returns whether the state changed.
    pub fn set_revealed(&mut self, id: Option<String>, from_id: Option<String>) -> bool {
        let accepted = (id.is_none() && from_id == self.revealed_code)
            || (id.is_some() && from_id.is_none());
        if accepted && self.revealed_code != id {
            self.revealed_code = id;
            return true;
        }
        false
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }
}

/// Language rows, one per catalog entry.
///
/// Nothing is listed until the server has reported at least one official
/// localization; an empty result makes the screen show its loading state.
#[must_use]
pub fn language_entries(
    catalog: &[LanguageInfo],
    state: &LocalizationListState,
    settings: &LocalizationSettings,
    interaction: &LanguageInteraction,
) -> Vec<LanguageEntry> {
    if state.available_official.is_empty() {
        return Vec::new();
    }

    let active = settings.primary_language_code.as_deref();
    catalog
        .iter()
        .enumerate()
        .map(|(index, info)| LanguageEntry::Localization {
            index,
            title: info.title.clone(),
            subtitle: info.subtitle.clone(),
            code: info.code.clone(),
            selected: active == Some(info.code.as_str()),
            activity: interaction.applying_code.as_deref() == Some(info.code.as_str()),
            revealed: interaction.revealed_code.as_deref() == Some(info.code.as_str()),
            editing: interaction.editing,
        })
        .collect()
}

#[must_use]
pub fn discover_entries(strings: &PresentationStrings) -> Vec<DiscoverEntry> {
    vec![
        DiscoverEntry::DevicesTips(strings.add_device_intro_text.clone()),
        DiscoverEntry::Devices(strings.add_device_intro_title.clone()),
        DiscoverEntry::PeopleNearby(strings.people_nearby_title.clone()),
        DiscoverEntry::Tools(strings.bot_help.clone()),
    ]
}

#[must_use]
pub fn helper_entries(strings: &PresentationStrings) -> Vec<HelperEntry> {
    vec![HelperEntry::Language(strings.app_language.clone())]
}
