//! Mode-aware style palettes.

use std::collections::BTreeMap;

use console::Style;

use super::controller::VisualRoot;
use super::preference::ColorMode;

/// A named collection of styles for one color mode.
///
/// # Example
///
/// ```rust
/// use ambiance::StyleSet;
/// use console::Style;
///
/// let light = StyleSet::new()
///     .add("accent", Style::new().cyan().bold())
///     .add("muted", Style::new().dim());
///
/// assert!(light.has("accent"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    styles: BTreeMap<String, Style>,
}

impl StyleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated set for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Looks up a style by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Whether a style with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Whether the set holds no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A light/dark pair of style sets selected through the shared marker.
///
/// Surfaces hold the palette and a [`VisualRoot`] handle and pick the
/// active set at draw time, so a theme change is visible on the next
/// draw without any surface keeping its own copy of the mode.
///
/// # Example
///
/// ```rust
/// use ambiance::{ColorMode, Palette, StyleSet};
/// use console::Style;
///
/// let palette = Palette::new(
///     StyleSet::new().add("accent", Style::new().blue()),
///     StyleSet::new().add("accent", Style::new().yellow()),
/// );
///
/// assert!(palette.style("accent", ColorMode::Dark).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    light: StyleSet,
    dark: StyleSet,
}

impl Palette {
    /// Creates a palette from light and dark variants.
    pub fn new(light: StyleSet, dark: StyleSet) -> Self {
        Self { light, dark }
    }

    /// The set for a concrete mode.
    pub fn for_mode(&self, mode: ColorMode) -> &StyleSet {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// The set the shared marker currently selects.
    pub fn current(&self, root: &VisualRoot) -> &StyleSet {
        self.for_mode(root.mode())
    }

    /// Looks up a style by name in the set for the given mode.
    pub fn style(&self, name: &str, mode: ColorMode) -> Option<&Style> {
        self.for_mode(mode).get(name)
    }
}
