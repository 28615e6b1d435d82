//! Client cursor timestamp parsing.
//!
//! Ticker clients mark "everything I've already seen" with a textual timestamp
//! in the fixed format `DD.MM.YYYY HH:MM:SS.fff` (e.g. `25.04.2018
//! 12:34:30.314`), interpreted as UTC. Parsing failures are client errors;
//! they never reach the windowing computation.

use chrono::NaiveDateTime;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Format used when rendering a timestamp back into cursor form.
/// Always emits milliseconds.
pub const CURSOR_FORMAT: &str = "%d.%m.%Y %H:%M:%S%.3f";

/// Format used when parsing. `%.f` accepts any fraction length, including
/// none, so `12:34:30` and `12:34:30.314` both parse.
const CURSOR_PARSE_FORMAT: &str = "%d.%m.%Y %H:%M:%S%.f";

/// Parse a client-supplied cursor string.
///
/// Returns [`CoreError::MalformedInput`] when the string does not match the
/// cursor format.
pub fn parse_cursor(raw: &str) -> Result<Timestamp, CoreError> {
    NaiveDateTime::parse_from_str(raw, CURSOR_PARSE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| CoreError::MalformedInput(format!("invalid cursor timestamp '{raw}': {e}")))
}

/// Render a timestamp in cursor form, e.g. for echoing back to clients.
pub fn format_cursor(ts: Timestamp) -> String {
    ts.format(CURSOR_FORMAT).to_string()
}
