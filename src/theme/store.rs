//! File-backed persistence for the theme preference.
//!
//! The store keeps a single JSON object with one key, `theme`, mapped to
//! the preference's string form. A missing file or missing key reads the
//! same as never having chosen: the caller falls back to `System`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ThemeError;
use super::preference::ThemePreference;

const APP_DIR: &str = "ambiance";
const STATE_FILE: &str = "state.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Durable storage for the persisted preference.
///
/// # Example
///
/// ```rust
/// use ambiance::{PreferenceStore, ThemePreference};
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = PreferenceStore::at(dir.path().join("state.json"));
///
/// assert_eq!(store.load().unwrap(), None);
/// store.save(ThemePreference::Dark).unwrap();
/// assert_eq!(store.load().unwrap(), Some(ThemePreference::Dark));
/// ```
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store at the per-user config location, or `None` when the platform
    /// exposes no config directory.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::at(dir.join(APP_DIR).join(STATE_FILE)))
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted preference.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPreference` for an out-of-enum stored value and
    /// `PersistenceUnavailable` when the file exists but cannot be read
    /// or parsed. A missing file or missing key is `Ok(None)`, not an
    /// error.
    pub fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|err| ThemeError::persistence(&self.path, err))?;
        let state: StateFile = serde_json::from_str(&raw).map_err(|err| {
            ThemeError::persistence(&self.path, io::Error::new(io::ErrorKind::InvalidData, err))
        })?;
        state.theme.as_deref().map(str::parse).transpose()
    }

    /// Writes the preference, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceUnavailable` when the write fails. Callers
    /// treat this as non-fatal and keep their in-memory state.
    pub fn save(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        let state = StateFile {
            theme: Some(preference.as_str().to_string()),
        };
        let json = serde_json::to_string_pretty(&state).map_err(|err| {
            ThemeError::persistence(&self.path, io::Error::new(io::ErrorKind::InvalidData, err))
        })?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|err| ThemeError::persistence(&self.path, err))?;
        }
        fs::write(&self.path, json).map_err(|err| ThemeError::persistence(&self.path, err))
    }
}
