//! Delegated removal.
//!
//! One page-scope click handler covers every remove control, including
//! those on groups added after load: it matches the marker class on the
//! clicked element and resolves the target group through its `remove` data
//! attribute. Clicks that do not match fall through untouched, and removal
//! never renumbers surviving groups or rewinds a kind's counter.

use tracing::debug;

use super::{REMOVE_BTN_CLASS, REMOVE_DATA_KEY};
use crate::surface::Surface;

/// Handles one click at page scope. Returns `true` when a group was
/// detached; every other case (unknown target, non-remove element, missing
/// attribute, already-removed entry) is a safe no-op.
pub fn handle_click(surface: &mut Surface, target_id: &str) -> bool {
    let Some(target) = surface.by_id(target_id) else {
        return false;
    };
    if !target.has_class(REMOVE_BTN_CLASS) {
        return false;
    }
    let Some(entry_id) = target.data.get(REMOVE_DATA_KEY).cloned() else {
        return false;
    };
    let removed = surface.remove_by_id(&entry_id);
    if removed {
        debug!(entry = %entry_id, "entry group removed");
    }
    removed
}
