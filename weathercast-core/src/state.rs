//! Small amount of state remembered between runs: the theme and recent searches.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::project_dirs;

/// Number of cities kept in the recent-search list.
pub const MAX_RECENT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Theme {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(anyhow::anyhow!("Unknown theme '{value}'. Supported themes: light, dark.")),
        }
    }
}

/// Most recently searched cities, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches(Vec<String>);

impl RecentSearches {
    /// Moves `city` to the front, dropping any entry that differs only in case.
    pub fn record(&mut self, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }

        let lower = city.to_lowercase();
        self.0.retain(|c| c.to_lowercase() != lower);
        self.0.insert(0, city.to_string());
        self.0.truncate(MAX_RECENT);
    }

    pub fn cities(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub recent: RecentSearches,
}

impl AppState {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::state_file_path()?)
    }

    /// Load state from `path`; a missing file means a fresh start.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse state file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::state_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize app state")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write state file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "app state saved");
        Ok(())
    }

    pub fn state_file_path() -> Result<PathBuf> {
        let dirs = project_dirs()?;
        Ok(dirs.data_dir().join("state.json"))
    }
}
