//! Terminal-width observation and breakpoint matching.
//!
//! This module provides:
//!
//! - [`BreakpointQuery`]: An immutable width condition
//! - [`Viewport`]: Owns the current width and fans out changes
//! - [`BreakpointWatch`]: A live, self-releasing match subscription
//! - [`ParseQueryError`]: Errors from the textual query form
//!
//! A watch is evaluated synchronously at creation, so its first read is
//! never stale, and is notified again only when its boolean value actually
//! flips. Dropping the watch releases its listener.

mod backend;
mod observer;
mod query;

pub use observer::{BreakpointWatch, Viewport};
pub use query::{BreakpointQuery, ParseQueryError};
