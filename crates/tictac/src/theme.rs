//! Theme preference with an injected persistence port.
//!
//! The current theme is an explicit value owned by [`ThemePreference`]. Where
//! it is stored is decided by the composition root through [`ThemeStore`].

use crate::error::ThemeStoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Key under which the theme name is stored.
pub const THEME_KEY: &str = "gameOptionsTheme";

/// Visual theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Theme {
    /// `light`
    #[default]
    Light,
    /// `dark`
    Dark,
    /// `colorful-rgb`
    ColorfulRgb,
}

impl Theme {
    /// Next theme in the toggle cycle: light, dark, colorful-rgb, light.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::ColorfulRgb,
            Theme::ColorfulRgb => Theme::Light,
        }
    }

    /// Parses a stored name; unknown names fall back to [`Theme::Light`].
    #[instrument]
    pub fn from_name(name: &str) -> Self {
        Theme::from_str(name.trim()).unwrap_or_else(|_| {
            debug!(name, "Unknown theme name, using light");
            Theme::Light
        })
    }
}

/// Port for persisting the theme name.
pub trait ThemeStore {
    /// Reads the stored theme name, if any.
    fn load(&self) -> Result<Option<String>, ThemeStoreError>;

    /// Stores the theme name.
    fn save(&mut self, name: &str) -> Result<(), ThemeStoreError>;
}

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    values: HashMap<String, String>,
}

impl MemoryThemeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `name`.
    pub fn with_name(name: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(THEME_KEY.to_string(), name.into());
        Self { values }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, ThemeStoreError> {
        Ok(self.values.get(THEME_KEY).cloned())
    }

    fn save(&mut self, name: &str) -> Result<(), ThemeStoreError> {
        self.values.insert(THEME_KEY.to_string(), name.to_string());
        Ok(())
    }
}

/// On-disk layout of the theme file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ThemeFile {
    #[serde(rename = "gameOptionsTheme", default)]
    theme: Option<String>,
}

/// Theme store backed by a small TOML file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Creates a store for `path`; the file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<String>, ThemeStoreError> {
        if !self.path.exists() {
            debug!("Theme file not found");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let file: ThemeFile = toml::from_str(&content)
            .map_err(|e| ThemeStoreError::new(format!("Failed to parse theme file: {}", e)))?;
        Ok(file.theme)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(&mut self, name: &str) -> Result<(), ThemeStoreError> {
        let file = ThemeFile {
            theme: Some(name.to_string()),
        };
        let content = toml::to_string(&file)
            .map_err(|e| ThemeStoreError::new(format!("Failed to encode theme file: {}", e)))?;
        std::fs::write(&self.path, content)?;
        debug!(name, "Theme saved");
        Ok(())
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    current: Theme,
    store: S,
}

impl<S: ThemeStore> ThemePreference<S> {
    /// Loads the preference from `store`.
    ///
    /// A missing, unreadable or unknown value falls back to
    /// [`Theme::Light`].
    #[instrument(skip(store))]
    pub fn load(store: S) -> Self {
        let current = match store.load() {
            Ok(Some(name)) => Theme::from_name(&name),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "Failed to load theme, using light");
                Theme::default()
            }
        };
        info!(theme = %current, "Theme loaded");
        Self { current, store }
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Sets and persists the theme.
    ///
    /// The in-memory theme changes even if persisting fails.
    #[instrument(skip(self))]
    pub fn set(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        self.current = theme;
        self.store.save(&theme.to_string())
    }

    /// Advances to the next theme in the cycle and persists it.
    pub fn toggle(&mut self) -> Result<Theme, ThemeStoreError> {
        let next = self.current.next();
        self.set(next)?;
        Ok(next)
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
