//! Theme state errors.

use std::io;
use std::path::{Path, PathBuf};

/// Error raised at the theme parse and persistence boundaries.
#[derive(Debug)]
pub enum ThemeError {
    /// A value outside the closed preference enum.
    ///
    /// Unreachable through the typed API; surfaces when parsing persisted
    /// or user-supplied strings, and fails loudly rather than coercing.
    InvalidPreference { value: String },
    /// The preference store could not be read or written.
    ///
    /// Non-fatal by contract: callers log it and continue with
    /// session-only state.
    PersistenceUnavailable { path: PathBuf, source: io::Error },
}

impl ThemeError {
    pub(crate) fn persistence(path: &Path, source: io::Error) -> Self {
        ThemeError::PersistenceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::InvalidPreference { value } => {
                write!(
                    f,
                    "invalid theme preference '{}', expected one of: light, dark, system",
                    value
                )
            }
            ThemeError::PersistenceUnavailable { path, source } => {
                write!(
                    f,
                    "preference store at '{}' is unavailable: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::InvalidPreference { .. } => None,
            ThemeError::PersistenceUnavailable { source, .. } => Some(source),
        }
    }
}
