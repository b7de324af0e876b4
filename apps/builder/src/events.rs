//! UI events drained by the page event loop.
//!
//! The engine consumes user actions as a serial stream, one JSON object per
//! stdin line. Handlers run to completion in arrival order; only a
//! submission's network round-trip suspends.

use serde::Deserialize;

/// One user action on the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// A click anywhere on the page, identified by the target element id.
    Click { target: String },
    /// An input edit on a named control.
    Input { name: String, value: String },
    /// The form's submit action (default submission is suppressed).
    Submit,
}

pub fn parse_event(line: &str) -> Result<UiEvent, serde_json::Error> {
    serde_json::from_str(line.trim())
}
