//! Live width observation.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crossterm::event::Event;
use tracing::debug;

use super::backend::{query_width, select_backend, ResizeBackend};
use super::query::BreakpointQuery;

type ChangeCallback = Box<dyn FnMut(bool) + Send>;

struct Subscriber {
    id: u64,
    query: BreakpointQuery,
    matched: Arc<AtomicBool>,
    transitions: Arc<AtomicUsize>,
    callback: Option<ChangeCallback>,
}

struct Registry {
    width: u16,
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

/// Owns the current terminal width and fans out changes to breakpoint
/// watches.
///
/// The host event loop owns one viewport and feeds it: on the event
/// backend it forwards resize events via [`Viewport::handle_event`], on
/// the legacy backend it calls [`Viewport::refresh`] between events.
/// Which of the two is in effect is decided once at construction and
/// never visible to observers. Cloning hands out another handle to the
/// same viewport.
///
/// # Example
///
/// ```rust
/// use ambiance::{BreakpointQuery, Viewport};
///
/// let viewport = Viewport::fixed(120);
/// let wide = viewport.observe(BreakpointQuery::MinWidth(80));
///
/// // Evaluated synchronously at creation; never an initial stale read.
/// assert!(wide.matches());
///
/// viewport.set_width(50);
/// assert!(!wide.matches());
/// assert_eq!(wide.transitions(), 1);
/// ```
#[derive(Clone)]
pub struct Viewport {
    backend: ResizeBackend,
    registry: Arc<Mutex<Registry>>,
}

impl Viewport {
    /// Builds a viewport against the attached terminal, picking the
    /// resize backend by capability check.
    pub fn detect() -> Self {
        let (backend, width) = select_backend();
        Self::with_width(backend, width)
    }

    /// Builds a detached viewport with a fixed starting width.
    ///
    /// The width only moves through [`Viewport::set_width`]; useful for
    /// simulations and tests.
    pub fn fixed(width: u16) -> Self {
        Self::with_width(ResizeBackend::Manual, width)
    }

    fn with_width(backend: ResizeBackend, width: u16) -> Self {
        Self {
            backend,
            registry: Arc::new(Mutex::new(Registry {
                width,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// The width as of the last update.
    pub fn width(&self) -> u16 {
        self.registry.lock().unwrap().width
    }

    /// Starts observing a breakpoint.
    ///
    /// The query is evaluated against the current width before this
    /// returns, so the watch's first read reflects the viewport at call
    /// time. Watches on the same query are independent.
    pub fn observe(&self, query: BreakpointQuery) -> BreakpointWatch {
        let mut registry = self.registry.lock().unwrap();
        let matched = Arc::new(AtomicBool::new(query.matches(registry.width)));
        let transitions = Arc::new(AtomicUsize::new(0));
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push(Subscriber {
            id,
            query,
            matched: matched.clone(),
            transitions: transitions.clone(),
            callback: None,
        });
        BreakpointWatch {
            id,
            matched,
            transitions,
            registry: self.registry.clone(),
        }
    }

    /// Pushes a new width, re-evaluating every live watch.
    ///
    /// A watch is notified only when its boolean value actually flips;
    /// width changes that don't cross its breakpoint are silent.
    pub fn set_width(&self, width: u16) {
        let mut registry = self.registry.lock().unwrap();
        if registry.width == width {
            return;
        }
        registry.width = width;
        debug!(width, "viewport width changed");
        for subscriber in &mut registry.subscribers {
            let now = subscriber.query.matches(width);
            if now != subscriber.matched.load(Ordering::Relaxed) {
                subscriber.matched.store(now, Ordering::Relaxed);
                subscriber.transitions.fetch_add(1, Ordering::Relaxed);
                if let Some(callback) = &mut subscriber.callback {
                    // Runs under the registry lock; callbacks must not
                    // call back into the viewport.
                    callback(now);
                }
            }
        }
    }

    /// Feeds a terminal event; anything but a resize is ignored.
    pub fn handle_event(&self, event: &Event) {
        if let Event::Resize(cols, _) = event {
            self.set_width(*cols);
        }
    }

    /// Re-queries the terminal size on the polling backend.
    ///
    /// A no-op for detached viewports; on the event backend it serves as
    /// a reconciliation point for hosts that drop resize events.
    pub fn refresh(&self) {
        if let Some(width) = query_width(self.backend) {
            self.set_width(width);
        }
    }
}

/// A live subscription to one breakpoint.
///
/// Reading [`BreakpointWatch::matches`] is always current. Dropping the
/// watch unregisters its listener; later width changes no longer reach
/// it.
pub struct BreakpointWatch {
    id: u64,
    matched: Arc<AtomicBool>,
    transitions: Arc<AtomicUsize>,
    registry: Arc<Mutex<Registry>>,
}

impl BreakpointWatch {
    /// Whether the breakpoint currently matches.
    pub fn matches(&self) -> bool {
        self.matched.load(Ordering::Relaxed)
    }

    /// How many times the match state has flipped since creation.
    pub fn transitions(&self) -> usize {
        self.transitions.load(Ordering::Relaxed)
    }

    /// Registers a callback invoked with the new value on every flip.
    ///
    /// At most one callback per watch; a second registration replaces
    /// the first.
    pub fn on_change<F>(&self, callback: F)
    where
        F: FnMut(bool) + Send + 'static,
    {
        let mut registry = self.registry.lock().unwrap();
        if let Some(subscriber) = registry.subscribers.iter_mut().find(|s| s.id == self.id) {
            subscriber.callback = Some(Box::new(callback));
        }
    }
}

impl Drop for BreakpointWatch {
    fn drop(&mut self) {
        if let Ok(mut registry) = self.registry.lock() {
            registry.subscribers.retain(|s| s.id != self.id);
        }
    }
}
