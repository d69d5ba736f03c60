//! Process-wide theme state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use super::detect::detect_color_mode;
use super::preference::{ColorMode, ThemePreference};
use super::store::PreferenceStore;

/// The shared marker every rendering surface reads to pick light or dark
/// styling.
///
/// This is the sole contract between the controller and the rest of the
/// program: surfaces re-derive their appearance from this flag on every
/// draw and never keep a private copy. Cloning hands out another handle
/// to the same flag.
#[derive(Debug, Clone, Default)]
pub struct VisualRoot {
    dark: Arc<AtomicBool>,
}

impl VisualRoot {
    /// Whether the dark marker is set.
    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }

    /// The marker as a concrete mode.
    pub fn mode(&self) -> ColorMode {
        if self.is_dark() {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    fn set(&self, mode: ColorMode) {
        self.dark.store(mode.is_dark(), Ordering::Relaxed);
    }
}

/// Owns the user's theme preference and keeps the visual root in sync.
///
/// One controller exists per process; every consumer that needs theme
/// state holds a handle to it (or to its [`VisualRoot`]) rather than
/// reaching for a global. Mutations arrive one at a time from the UI
/// event loop, so the controller takes `&mut self` and needs no locking.
///
/// # Example
///
/// ```rust,no_run
/// use ambiance::{ThemeController, ThemePreference};
///
/// let mut controller = ThemeController::from_default_store();
/// let root = controller.visual_root();
///
/// controller.toggle();
/// let (preference, resolved) = controller.state();
/// assert_eq!(resolved, root.mode());
/// # let _ = preference;
/// ```
pub struct ThemeController {
    preference: ThemePreference,
    os_mode: ColorMode,
    root: VisualRoot,
    store: Option<PreferenceStore>,
}

impl ThemeController {
    /// Creates a controller backed by the given store.
    ///
    /// Loads the persisted preference (absent state reads as `System`,
    /// an unreadable or out-of-enum value is logged and dropped), reads
    /// the OS scheme, and applies the resolved mode to the visual root
    /// before returning.
    pub fn new(store: Option<PreferenceStore>) -> Self {
        let preference = match store.as_ref().map(PreferenceStore::load) {
            Some(Ok(Some(preference))) => preference,
            Some(Ok(None)) | None => ThemePreference::default(),
            Some(Err(err)) => {
                warn!(%err, "ignoring persisted theme preference");
                ThemePreference::default()
            }
        };
        let controller = Self {
            preference,
            os_mode: detect_color_mode(),
            root: VisualRoot::default(),
            store,
        };
        controller.apply();
        controller
    }

    /// Controller backed by the per-user config location, falling back to
    /// session-only state when the platform has no config directory.
    pub fn from_default_store() -> Self {
        Self::new(PreferenceStore::default_location())
    }

    /// Session-only controller; nothing is persisted.
    pub fn ephemeral() -> Self {
        Self::new(None)
    }

    /// The committed preference and the mode resolved from it.
    ///
    /// Pure read, no side effects.
    pub fn state(&self) -> (ThemePreference, ColorMode) {
        (self.preference, self.resolved())
    }

    /// The mode currently resolved from the preference and the OS scheme.
    pub fn resolved(&self) -> ColorMode {
        self.preference.resolve(self.os_mode)
    }

    /// A handle to the shared marker, for rendering surfaces.
    pub fn visual_root(&self) -> VisualRoot {
        self.root.clone()
    }

    /// Commits a preference: persists it, recomputes the resolved mode,
    /// and updates the visual root.
    ///
    /// A persistence failure is non-fatal and never retried; storage is
    /// either available or structurally absent, and the session keeps its
    /// in-memory state either way.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
        if let Some(store) = &self.store {
            if let Err(err) = store.save(preference) {
                warn!(%err, "theme preference not persisted, keeping session state");
            }
        }
        self.apply();
    }

    /// Flips to the opposite of the currently resolved mode.
    ///
    /// Toggling while on `System` commits a concrete override opposing
    /// the OS scheme, so repeated toggles alternate stably instead of
    /// oscillating the system flag:
    ///
    /// | preference | resolved | next preference |
    /// |------------|----------|-----------------|
    /// | `System`   | `Dark`   | `Light`         |
    /// | `System`   | `Light`  | `Dark`          |
    /// | `Dark`     | any      | `Light`         |
    /// | `Light`    | any      | `Dark`          |
    pub fn toggle(&mut self) {
        let next = match (self.preference, self.resolved()) {
            (ThemePreference::System, ColorMode::Dark) => ThemePreference::Light,
            (ThemePreference::System, ColorMode::Light) => ThemePreference::Dark,
            (ThemePreference::Dark, _) => ThemePreference::Light,
            (ThemePreference::Light, _) => ThemePreference::Dark,
        };
        self.set_preference(next);
    }

    /// Re-reads the OS scheme so `System` sessions follow live changes.
    ///
    /// Returns whether the resolved mode changed; the visual root is
    /// touched only when it did.
    pub fn sync_os_mode(&mut self) -> bool {
        let before = self.resolved();
        self.os_mode = detect_color_mode();
        let changed = self.resolved() != before;
        if changed {
            self.apply();
        }
        changed
    }

    fn apply(&self) {
        let mode = self.resolved();
        self.root.set(mode);
        debug!(?mode, "applied theme to visual root");
    }
}
