//! Adaptive light/dark theming and width breakpoints for terminal apps.
//!
//! Two small, independent utilities for TUI and CLI programs:
//!
//! - [`ThemeController`] resolves a persisted light/dark/system preference
//!   against the OS color scheme and keeps a single shared [`VisualRoot`]
//!   marker in sync; every rendering surface reads the marker instead of
//!   tracking the mode itself.
//! - [`Viewport`] tracks the terminal width and answers
//!   [`BreakpointQuery`] conditions through live, self-releasing
//!   [`BreakpointWatch`] subscriptions.
//!
//! # Example
//!
//! ```rust,no_run
//! use ambiance::{BreakpointQuery, ThemeController, Viewport};
//!
//! let mut theme = ThemeController::from_default_store();
//! let root = theme.visual_root();
//!
//! let viewport = Viewport::detect();
//! let wide = viewport.observe(BreakpointQuery::MinWidth(100));
//!
//! // In the draw loop:
//! let two_columns = wide.matches();
//! let dark = root.is_dark();
//! # let _ = (two_columns, dark);
//!
//! // On the toggle keybinding:
//! theme.toggle();
//! ```

pub mod theme;
pub mod viewport;

pub use theme::{
    set_mode_detector, ColorMode, Palette, PreferenceStore, StyleSet, ThemeController, ThemeError,
    ThemePreference, VisualRoot,
};
pub use viewport::{BreakpointQuery, BreakpointWatch, ParseQueryError, Viewport};
