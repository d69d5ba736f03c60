//! Resize backends.
//!
//! Width changes reach a viewport one of two ways: resize events pushed by
//! the host's terminal event loop, or a legacy size query repeated on
//! demand. The backend is selected once, by capability check, when the
//! viewport is built; callers never see the branch.

use tracing::debug;

/// Width assumed when no terminal is attached at all.
pub(crate) const FALLBACK_WIDTH: u16 = 80;

/// How a viewport learns about width changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResizeBackend {
    /// The host event loop forwards resize events into the viewport.
    Events,
    /// No event stream; `refresh()` re-queries the size.
    Polling,
    /// No terminal behind the viewport; the width only moves when pushed
    /// explicitly. Used for simulations and tests.
    Manual,
}

/// Picks a backend for the attached terminal and reports the width seen
/// at selection time.
pub(crate) fn select_backend() -> (ResizeBackend, u16) {
    if let Ok((cols, _)) = crossterm::terminal::size() {
        debug!(cols, "viewport backend: resize events");
        return (ResizeBackend::Events, cols);
    }
    match legacy_width() {
        Some(cols) => {
            debug!(cols, "viewport backend: legacy polling");
            (ResizeBackend::Polling, cols)
        }
        None => {
            debug!(cols = FALLBACK_WIDTH, "viewport backend: no terminal");
            (ResizeBackend::Manual, FALLBACK_WIDTH)
        }
    }
}

/// Queries the current width through the given backend, if it has one.
pub(crate) fn query_width(backend: ResizeBackend) -> Option<u16> {
    match backend {
        ResizeBackend::Events => crossterm::terminal::size().ok().map(|(cols, _)| cols),
        ResizeBackend::Polling => legacy_width(),
        ResizeBackend::Manual => None,
    }
}

fn legacy_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(terminal_size::Width(cols), _)| cols)
}
