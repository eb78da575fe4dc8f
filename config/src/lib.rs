//! Configuration loading, parsing, and persistence for itemlist.
//!
//! The config lives at `~/.itemlist/config.toml`:
//!
//! ```toml
//! [app]
//! theme = "night"
//! reduced_motion = false
//!
//! [[languages]]
//! title = "Chinese"
//! subtitle = "简体中文"
//! code = "classic-zh-cn"
//!
//! [strings]
//! app_language = "Language"
//! ```
//!
//! String values may reference environment variables as `${NAME}`.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tempfile::NamedTempFile;
use thiserror::Error;

use itemlist_types::{LanguageInfo, PresentationData, PresentationStrings, Theme};

#[derive(Debug, Default, Deserialize)]
pub struct ItemListConfig {
    pub app: Option<AppConfig>,
    /// Language catalog. Empty means the built-in catalog.
    #[serde(default)]
    pub languages: Vec<LanguageInfo>,
    pub strings: Option<PresentationStrings>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    pub theme: Option<String>,
    /// Disable insertion animations.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to write config at {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config at {} is not valid TOML", path.display())]
    Edit {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },
    #[error("could not determine config path")]
    NoPath,
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Write { path, .. }
            | ConfigError::Edit { path, .. } => Some(path),
            ConfigError::NoPath => None,
        }
    }
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(end_rel) = rest[start + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &rest[start + 2..start + 2 + end_rel];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &rest[start + 2 + end_rel + 1..];
    }

    out.push_str(rest);
    out
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".itemlist").join("config.toml"))
}

impl ItemListConfig {
    /// Load from the default path. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Configured languages, or the built-in catalog when none are set.
    #[must_use]
    pub fn catalog(&self) -> Vec<LanguageInfo> {
        if self.languages.is_empty() {
            return LanguageInfo::default_catalog();
        }
        self.languages
            .iter()
            .map(|info| LanguageInfo {
                title: expand_env_vars(&info.title),
                subtitle: expand_env_vars(&info.subtitle),
                code: expand_env_vars(&info.code),
            })
            .collect()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.app
            .as_ref()
            .and_then(|app| app.theme.as_deref())
            .map(expand_env_vars)
            .filter(|name| !name.trim().is_empty())
            .map_or_else(Theme::default, Theme::new)
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.reduced_motion)
    }

    #[must_use]
    pub fn presentation(&self) -> PresentationData {
        let strings = self.strings.clone().unwrap_or_default();
        PresentationData::new(self.theme(), strings)
    }

    /// Persist the theme name to the default config file.
    pub fn persist_theme(theme: &str) -> Result<(), ConfigError> {
        let path = config_path().ok_or(ConfigError::NoPath)?;
        Self::persist_theme_to(&path, theme)
    }

    /// Persist the theme name to `path`.
    ///
    /// Uses `toml_edit` to preserve comments and formatting. Creates the file
    /// and parent directory if they don't exist.
    pub fn persist_theme_to(path: &Path, theme: &str) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(parent).map_err(write_err)?;

        let content = if path.exists() {
            fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            String::new()
        };

        let mut doc = content
            .parse::<toml_edit::DocumentMut>()
            .map_err(|source| ConfigError::Edit {
                path: path.to_path_buf(),
                source,
            })?;

        if !doc.contains_key("app") {
            doc["app"] = toml_edit::Item::Table(toml_edit::Table::new());
        }
        doc["app"]["theme"] = toml_edit::value(theme);

        // Write to a sibling temp file, then rename over the target.
        let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
        tmp.write_all(doc.to_string().as_bytes())
            .map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|err| write_err(err.error))?;

        tracing::info!(path = %path.display(), theme, "Persisted theme");
        Ok(())
    }
}
