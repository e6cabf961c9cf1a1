//! Read-only queries exposed to collaborators.
//!
//! Queries never mutate session state and never touch the command log.

use roomscribe_core::model::{normalize_name, Room};

use crate::session::Session;

/// Look up a room by name (draft first, then the confirmed list).
///
/// The name is normalized the same way room creation normalizes it, so
/// "Living Room" finds `living_room`.
pub fn find_room<'a>(session: &'a Session, name: &str) -> Option<&'a Room> {
    let normalized = normalize_name(name);
    if let Some(draft) = session.draft() {
        if draft.name == normalized {
            return Some(draft);
        }
    }
    session.rooms().iter().find(|r| r.name == normalized)
}

/// The current structure-to-room display path, e.g. `Main House > kitchen`.
///
/// Sub-rooms include their parent: `Main House > kitchen > pantry`.
pub fn location_path(session: &Session) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(structure) = session.current_structure() {
        parts.push(structure.name.clone());
    }
    if let Some(draft) = session.draft() {
        if let Some(parent_id) = draft.parent_room_id.as_deref() {
            if let Some(parent) = session.rooms().iter().find(|r| r.id == parent_id) {
                parts.push(parent.name.clone());
            }
        }
        parts.push(draft.name.clone());
    }
    if parts.is_empty() {
        "no active location".to_string()
    } else {
        parts.join(" > ")
    }
}
