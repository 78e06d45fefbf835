//! User preference persistence for the PlantNxt navigation panel.
//!
//! A tiny JSON-backed store that remembers whether the sidebar was pinned.
//! The file lives in the standard configuration directory
//! (`~/.config/plantnxt/preferences.json` on most platforms) unless
//! `PLANTNXT_PREFERENCES_PATH` points elsewhere. The store implements
//! [`PinStore`], so the panel controller can read its initial pin state from it
//! and write changes back without knowing about files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use dirs_next::config_dir;
use plantnxt_nav::PinStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::env_path_override;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "PLANTNXT_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Whether the navigation panel was left pinned open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_pinned: Option<bool>,
}

/// Preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Opens the store at the default location, honouring `PLANTNXT_PREFERENCES_PATH`.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::at_path(default_preferences_path())
    }

    /// Opens the store at an explicit path. A missing file yields defaults.
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sidebar_pinned(&self) -> Option<bool> {
        self.lock().sidebar_pinned
    }

    /// Persist the sidebar pin preference.
    pub fn set_sidebar_pinned(&self, pinned: bool) -> Result<(), PreferencesError> {
        let mut payload = self.lock();
        payload.sidebar_pinned = Some(pinned);
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, PreferencesPayload> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

impl PinStore for UserPreferences {
    fn load_pinned(&self) -> Option<bool> {
        self.sidebar_pinned()
    }

    fn store_pinned(&self, pinned: bool) {
        if let Err(error) = self.set_sidebar_pinned(pinned) {
            warn!(path = %self.path.display(), error = %error, "Failed to persist sidebar pin preference");
        }
    }
}

fn default_preferences_path() -> PathBuf {
    if let Some(path) = env_path_override(PREFERENCES_PATH_ENV) {
        return path;
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plantnxt")
        .join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use plantnxt_nav::{NavigationPanelController, PersistPin};

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = UserPreferences::at_path(dir.path().join("nested").join(PREFERENCES_FILE_NAME)).expect("open");
        assert_eq!(prefs.sidebar_pinned(), None);
    }

    #[test]
    fn pin_preference_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(PREFERENCES_FILE_NAME);

        let prefs = UserPreferences::at_path(&path).expect("open");
        prefs.set_sidebar_pinned(true).expect("save");

        let reopened = UserPreferences::at_path(&path).expect("reopen");
        assert_eq!(reopened.sidebar_pinned(), Some(true));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "{ not json").expect("write");

        let prefs = UserPreferences::at_path(&path).expect("open");
        assert_eq!(prefs.payload.lock().expect("lock").clone(), PreferencesPayload::default());
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let prefs = UserPreferences::ephemeral();
        prefs.set_sidebar_pinned(true).expect("in-memory set");
        assert_eq!(prefs.sidebar_pinned(), Some(true));
        assert_eq!(prefs.path(), Path::new(""));
    }

    #[test]
    fn env_override_selects_preferences_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.json");
        temp_env::with_var(PREFERENCES_PATH_ENV, Some(path.as_os_str()), || {
            let prefs = UserPreferences::new().expect("open");
            assert_eq!(prefs.path(), path.as_path());
        });
    }

    #[test]
    fn controller_pin_changes_persist_via_observer() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        let prefs = Arc::new(UserPreferences::at_path(&path).expect("open"));

        let mut controller = NavigationPanelController::from_store(&prefs);
        controller.subscribe(PersistPin(Arc::clone(&prefs)));
        controller.toggle_pin();

        let reopened = UserPreferences::at_path(&path).expect("reopen");
        assert_eq!(reopened.sidebar_pinned(), Some(true));
        assert!(NavigationPanelController::from_store(&reopened).state().pinned());
    }
}
