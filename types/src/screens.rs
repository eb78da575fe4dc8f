//! Entry types for the settings screens: language list, Discover, Help.
//!
//! Each screen has a closed set of rows, so each is a sum type implementing
//! [`ListEntry`]. Theme is deliberately not part of any entry; a theme change
//! reaches the rows through a forced update instead.

use serde::{Deserialize, Serialize};

use crate::{ListEntry, SectionId, StableId};

// ============================================================================
// Rendered rows
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStyle {
    /// Plain footnote text, not tappable.
    Text,
    /// Title with a trailing chevron.
    Disclosure,
    /// Title and subtitle with a checkmark slot.
    Check,
}

/// What tapping a row asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "code")]
pub enum RowAction {
    OpenScan,
    OpenPeopleNearby,
    OpenTools,
    OpenLanguage,
    SelectLocalization(String),
}

/// An entry that knows how to render itself as a row.
pub trait ItemListEntry: ListEntry + Clone {
    fn row(&self) -> ListRow;
}

/// Display-ready row produced from an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    pub section: SectionId,
    pub style: RowStyle,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub activity: bool,
    /// Row shows its trailing options (e.g. delete) while swiped open.
    #[serde(default)]
    pub revealed: bool,
    /// List is in editing mode; the row shows its edit controls.
    #[serde(default)]
    pub editing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<RowAction>,
}

// ============================================================================
// Language list
// ============================================================================

pub const LANGUAGE_SECTION: SectionId = SectionId::new(0);

/// Offset keeping localization ids clear of other row kinds.
const LOCALIZATION_ID_BASE: usize = 10_000;

/// One selectable localization in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub title: String,
    pub subtitle: String,
    pub code: String,
}

impl LanguageInfo {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            code: code.into(),
        }
    }

    /// Built-in catalog used when no `[[languages]]` are configured.
    #[must_use]
    pub fn default_catalog() -> Vec<Self> {
        vec![
            Self::new("Chinese", "简体中文", "classic-zh-cn"),
            Self::new("Japanese", "日本語", "ja-beta"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LanguageEntry {
    Localization {
        index: usize,
        title: String,
        subtitle: String,
        code: String,
        selected: bool,
        activity: bool,
        revealed: bool,
        editing: bool,
    },
}

impl LanguageEntry {
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            LanguageEntry::Localization { code, .. } => code,
        }
    }
}

impl ItemListEntry for LanguageEntry {
    fn row(&self) -> ListRow {
        match self {
            LanguageEntry::Localization {
                title,
                subtitle,
                code,
                selected,
                activity,
                revealed,
                editing,
                ..
            } => ListRow {
                section: self.section(),
                style: RowStyle::Check,
                title: title.clone(),
                subtitle: Some(subtitle.clone()),
                checked: *selected,
                activity: *activity,
                revealed: *revealed,
                editing: *editing,
                action: Some(RowAction::SelectLocalization(code.clone())),
            },
        }
    }
}

impl ListEntry for LanguageEntry {
    type Id = usize;
    type Key = usize;

    fn stable_id(&self) -> usize {
        match self {
            LanguageEntry::Localization { index, .. } => LOCALIZATION_ID_BASE + index,
        }
    }

    fn section(&self) -> SectionId {
        LANGUAGE_SECTION
    }

    fn sort_key(&self) -> usize {
        match self {
            LanguageEntry::Localization { index, .. } => *index,
        }
    }
}

// ============================================================================
// Discover
// ============================================================================

pub const DEVICES_SECTION: SectionId = SectionId::new(0);
pub const PEOPLE_NEARBY_SECTION: SectionId = SectionId::new(1);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum DiscoverEntry {
    DevicesTips(String),
    Devices(String),
    PeopleNearby(String),
    Tools(String),
}

impl ItemListEntry for DiscoverEntry {
    fn row(&self) -> ListRow {
        let (style, title, action) = match self {
            DiscoverEntry::DevicesTips(text) => (RowStyle::Text, text, None),
            DiscoverEntry::Devices(text) => (RowStyle::Disclosure, text, Some(RowAction::OpenScan)),
            DiscoverEntry::PeopleNearby(text) => (
                RowStyle::Disclosure,
                text,
                Some(RowAction::OpenPeopleNearby),
            ),
            DiscoverEntry::Tools(text) => (RowStyle::Disclosure, text, Some(RowAction::OpenTools)),
        };
        ListRow {
            section: self.section(),
            style,
            title: title.clone(),
            subtitle: None,
            checked: false,
            activity: false,
            revealed: false,
            editing: false,
            action,
        }
    }
}

impl ListEntry for DiscoverEntry {
    type Id = StableId;
    type Key = StableId;

    fn stable_id(&self) -> StableId {
        match self {
            DiscoverEntry::DevicesTips(_) => StableId::new(1000),
            DiscoverEntry::Devices(_) => StableId::new(1001),
            DiscoverEntry::PeopleNearby(_) => StableId::new(1002),
            DiscoverEntry::Tools(_) => StableId::new(1003),
        }
    }

    fn section(&self) -> SectionId {
        match self {
            DiscoverEntry::DevicesTips(_) | DiscoverEntry::Devices(_) => DEVICES_SECTION,
            DiscoverEntry::PeopleNearby(_) | DiscoverEntry::Tools(_) => PEOPLE_NEARBY_SECTION,
        }
    }

    fn sort_key(&self) -> StableId {
        self.stable_id()
    }
}

// ============================================================================
// Help
// ============================================================================

pub const HELP_LANGUAGE_SECTION: SectionId = SectionId::new(0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum HelperEntry {
    Language(String),
}

impl ItemListEntry for HelperEntry {
    fn row(&self) -> ListRow {
        match self {
            HelperEntry::Language(text) => ListRow {
                section: self.section(),
                style: RowStyle::Disclosure,
                title: text.clone(),
                subtitle: None,
                checked: false,
                activity: false,
                revealed: false,
                editing: false,
                action: Some(RowAction::OpenLanguage),
            },
        }
    }
}

impl ListEntry for HelperEntry {
    type Id = StableId;
    type Key = StableId;

    fn stable_id(&self) -> StableId {
        match self {
            HelperEntry::Language(_) => StableId::new(0),
        }
    }

    fn section(&self) -> SectionId {
        HELP_LANGUAGE_SECTION
    }

    fn sort_key(&self) -> StableId {
        self.stable_id()
    }
}
