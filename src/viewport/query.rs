//! Breakpoint conditions over terminal width.

use std::fmt;
use std::str::FromStr;

/// An immutable condition over the terminal width, in columns.
///
/// Evaluation is a pure predicate; the query itself never changes. The
/// textual form mirrors the usual media-query shorthand:
///
/// - `"min-width: 80"` — at least 80 columns
/// - `"max-width: 119"` — at most 119 columns
/// - `"80..120"` — at least 80 and below 120 columns
/// - `"80"` — shorthand for `min-width: 80`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointQuery {
    /// Width is at least this many columns.
    MinWidth(u16),
    /// Width is at most this many columns.
    MaxWidth(u16),
    /// Width is within `min..max` (half-open, like adjacent breakpoints).
    Between(u16, u16),
}

impl BreakpointQuery {
    /// Evaluates the condition against a width.
    pub fn matches(&self, width: u16) -> bool {
        match *self {
            BreakpointQuery::MinWidth(min) => width >= min,
            BreakpointQuery::MaxWidth(max) => width <= max,
            BreakpointQuery::Between(min, max) => width >= min && width < max,
        }
    }
}

impl fmt::Display for BreakpointQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BreakpointQuery::MinWidth(min) => write!(f, "min-width: {}", min),
            BreakpointQuery::MaxWidth(max) => write!(f, "max-width: {}", max),
            BreakpointQuery::Between(min, max) => write!(f, "{}..{}", min, max),
        }
    }
}

/// Error returned for textual forms that don't describe a breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQueryError {
    value: String,
}

impl fmt::Display for ParseQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid breakpoint query '{}', expected 'min-width: N', 'max-width: N', 'N..M', or 'N'",
            self.value
        )
    }
}

impl std::error::Error for ParseQueryError {}

impl FromStr for BreakpointQuery {
    type Err = ParseQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseQueryError {
            value: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(rest) = trimmed.strip_prefix("min-width:") {
            let min = rest.trim().parse().map_err(|_| invalid())?;
            return Ok(BreakpointQuery::MinWidth(min));
        }
        if let Some(rest) = trimmed.strip_prefix("max-width:") {
            let max = rest.trim().parse().map_err(|_| invalid())?;
            return Ok(BreakpointQuery::MaxWidth(max));
        }
        if let Some((lo, hi)) = trimmed.split_once("..") {
            let min = lo.trim().parse().map_err(|_| invalid())?;
            let max = hi.trim().parse().map_err(|_| invalid())?;
            if min >= max {
                return Err(invalid());
            }
            return Ok(BreakpointQuery::Between(min, max));
        }
        trimmed
            .parse()
            .map(BreakpointQuery::MinWidth)
            .map_err(|_| invalid())
    }
}
