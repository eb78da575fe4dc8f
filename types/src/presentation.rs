//! Shared presentation context handed to every list screen.
//!
//! Theme and strings are compared by identity (`Arc::ptr_eq`), not by value:
//! a new theme object means rows must be redrawn even when their content is
//! the same.

use std::sync::Arc;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
}

impl Theme {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("day")
    }
}

/// User-facing strings used by the list screens.
///
/// Every field has an English default, so a partial `[strings]` table in the
/// config only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PresentationStrings {
    pub add_device_intro_text: String,
    pub add_device_intro_title: String,
    pub people_nearby_title: String,
    pub bot_help: String,
    pub app_language: String,
    pub common_back: String,
}

impl Default for PresentationStrings {
    fn default() -> Self {
        Self {
            add_device_intro_text: "Scan a QR code to log in to your account on another device."
                .to_string(),
            add_device_intro_title: "Link Desktop Device".to_string(),
            people_nearby_title: "People Nearby".to_string(),
            bot_help: "Help".to_string(),
            app_language: "Language".to_string(),
            common_back: "Back".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PresentationData {
    pub theme: Arc<Theme>,
    pub strings: Arc<PresentationStrings>,
}

impl PresentationData {
    #[must_use]
    pub fn new(theme: Theme, strings: PresentationStrings) -> Self {
        Self {
            theme: Arc::new(theme),
            strings: Arc::new(strings),
        }
    }

    /// Same strings, new theme object.
    #[must_use]
    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme: Arc::new(theme),
            strings: Arc::clone(&self.strings),
        }
    }

    /// Whether rows rendered under `other` must all be redrawn under `self`.
    #[must_use]
    pub fn invalidates(&self, other: &PresentationData) -> bool {
        !Arc::ptr_eq(&self.theme, &other.theme) || !Arc::ptr_eq(&self.strings, &other.strings)
    }
}
