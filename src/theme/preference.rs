//! Preference and resolved-mode value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ThemeError;

/// The user's explicit theme choice, persisted across sessions.
///
/// `System` defers to the OS color scheme; the other two variants are
/// concrete overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS color scheme.
    System,
}

/// A concrete light or dark mode.
///
/// This is the result of resolving a [`ThemePreference`] against the OS
/// color scheme; it is what styling actually keys off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ThemePreference {
    /// The persisted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Resolves this preference against the given OS mode.
    ///
    /// Pure: concrete preferences resolve to themselves, `System` resolves
    /// to whatever the OS reports.
    pub fn resolve(&self, os_mode: ColorMode) -> ColorMode {
        match self {
            ThemePreference::Light => ColorMode::Light,
            ThemePreference::Dark => ColorMode::Dark,
            ThemePreference::System => os_mode,
        }
    }
}

impl Default for ThemePreference {
    /// Absent persisted state reads as `System`.
    fn default() -> Self {
        ThemePreference::System
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(ThemeError::InvalidPreference {
                value: other.to_string(),
            }),
        }
    }
}

impl ColorMode {
    /// Whether this mode is the dark one.
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}
