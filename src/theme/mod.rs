//! Theme preference resolution, persistence, and application.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: The user's explicit light/dark/system choice
//! - [`ColorMode`]: A concrete light or dark mode
//! - [`ThemeController`]: Owns the preference and keeps the visual root in sync
//! - [`VisualRoot`]: The shared marker all rendering surfaces read
//! - [`PreferenceStore`]: File-backed persistence for the preference
//! - [`Palette`]: Mode-aware `console` style collections
//!
//! The resolved mode is never stored on its own: it is always recomputed
//! from the preference and the OS color scheme whenever either changes.

mod controller;
mod detect;
mod error;
mod palette;
mod preference;
mod store;

pub use controller::{ThemeController, VisualRoot};
pub use detect::set_mode_detector;
pub use error::ThemeError;
pub use palette::{Palette, StyleSet};
pub use preference::{ColorMode, ThemePreference};
pub use store::PreferenceStore;
