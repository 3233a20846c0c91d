//! Process Preferences
//!
//! Ambient UI settings (theme, interface language) modeled as explicit
//! process-wide configuration: loaded once at startup, updated only through
//! `update`, persisted as TOML under the crabflow home directory. Nothing
//! else in the crate mutates this state.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Color theme rendered by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Interface language; validator message keys are resolved against it by
/// the host's localization layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }
}

/// Persisted process preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub language: Language,
}

impl Preferences {
    /// Load preferences from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences file: {path:?}"))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse preferences file: {path:?}"))
    }

    /// Load preferences, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save preferences to a TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize preferences to TOML")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preferences directory: {parent:?}"))?;
        }

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write preferences file: {path:?}"))?;

        tracing::info!("Preferences saved to: {:?}", path);
        Ok(())
    }
}

/// Crabflow home directory (~/.crabflow)
pub fn crabflow_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".crabflow")
}

/// Path of the persisted preferences file
pub fn preferences_path() -> PathBuf {
    crabflow_home().join("preferences.toml")
}

/// Directory debug log files are written to
pub fn logs_dir() -> PathBuf {
    crabflow_home().join("logs")
}

static ACTIVE: Lazy<RwLock<Preferences>> = Lazy::new(|| RwLock::new(Preferences::default()));
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install the active preferences. Called once at startup; a second call
/// replaces the value and logs a warning.
pub fn init(prefs: Preferences) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        tracing::warn!("Preferences re-initialized after startup");
    }
    let mut active = ACTIVE.write().unwrap_or_else(|e| e.into_inner());
    *active = prefs;
}

/// Snapshot of the active preferences
pub fn active() -> Preferences {
    *ACTIVE.read().unwrap_or_else(|e| e.into_inner())
}

/// Explicitly mutate the active preferences, e.g. from a settings dialog
pub fn update(f: impl FnOnce(&mut Preferences)) {
    let mut active = ACTIVE.write().unwrap_or_else(|e| e.into_inner());
    f(&mut active);
}
