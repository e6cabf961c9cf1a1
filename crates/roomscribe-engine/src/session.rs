//! Session state owned by the command engine.
//!
//! The session is the single writer of all engine state: structures, the
//! confirmed room list, the one mutable draft room, the undo stack, the
//! command log, and the wall selection cursor. Collaborators read snapshots
//! or invoke the documented command operations; nothing else writes here.
//! Single-threaded by design - commands arrive serially from the dispatcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use roomscribe_core::errors::{Result, RoomscribeError};
use roomscribe_core::geometry::WallDirection;
use roomscribe_core::model::{normalize_name, Room, Structure};

use crate::history::GeometryCommand;

/// Externally persisted records used to hydrate a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimData {
    /// Structures recorded on the claim
    #[serde(default)]
    pub structures: Vec<Structure>,
    /// Confirmed rooms recorded on the claim
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// A full serializable view of the session for persistence or rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub structures: Vec<Structure>,
    pub current_structure_id: Option<String>,
    pub rooms: Vec<Room>,
    pub draft: Option<Room>,
    pub selected_wall: Option<WallDirection>,
    pub history: Vec<GeometryCommand>,
}

/// The command engine's session state
///
/// At most one room is the draft (current, mutable, undo-tracked); all others
/// live in the confirmed list and are edited in place, bypassing undo. The
/// undo stack holds full pre-mutation snapshots of the draft slot, including
/// the empty state, so undoing past the first `create_room` returns the
/// session to "no draft".
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) structures: Vec<Structure>,
    pub(crate) current_structure_id: Option<String>,
    pub(crate) rooms: Vec<Room>,
    pub(crate) draft: Option<Room>,
    pub(crate) undo_stack: Vec<Option<Room>>,
    pub(crate) history: Vec<GeometryCommand>,
    pub(crate) selected_wall: Option<WallDirection>,
}

impl Session {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Read access =====

    /// All structures, in creation order.
    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    /// The currently selected structure, if any.
    pub fn current_structure(&self) -> Option<&Structure> {
        let id = self.current_structure_id.as_deref()?;
        self.structures.iter().find(|s| s.id == id)
    }

    /// Confirmed rooms, in confirmation order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The draft room under active construction, if any.
    pub fn draft(&self) -> Option<&Room> {
        self.draft.as_ref()
    }

    /// The wall selection cursor, if any.
    pub fn selected_wall(&self) -> Option<WallDirection> {
        self.selected_wall
    }

    /// The append-only command log.
    pub fn history(&self) -> &[GeometryCommand] {
        &self.history
    }

    /// Number of snapshots currently on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    // ===== Internal state access for command operations =====

    /// Mutable access to the draft room.
    ///
    /// # Errors
    ///
    /// Returns `NoDraftRoom` when no room is in progress.
    pub(crate) fn require_draft(&mut self) -> Result<&mut Room> {
        self.draft.as_mut().ok_or(RoomscribeError::NoDraftRoom)
    }

    /// Read-only access to the draft room.
    pub(crate) fn require_draft_ref(&self) -> Result<&Room> {
        self.draft.as_ref().ok_or(RoomscribeError::NoDraftRoom)
    }

    /// Push the pre-mutation snapshot of the draft slot onto the undo stack.
    ///
    /// Called by every draft-mutating operation after validation and before
    /// committing the mutation.
    pub(crate) fn push_undo(&mut self) {
        self.undo_stack.push(self.draft.clone());
    }

    /// Locate a structure by id or case-insensitive name.
    pub(crate) fn find_structure_index(&self, reference: &str) -> Option<usize> {
        self.structures.iter().position(|s| s.matches(reference))
    }

    pub(crate) fn find_structure_mut(&mut self, reference: &str) -> Result<&mut Structure> {
        let idx = self.find_structure_index(reference).ok_or_else(|| {
            RoomscribeError::StructureNotFound {
                reference: reference.to_string(),
            }
        })?;
        Ok(&mut self.structures[idx])
    }

    /// Locate a confirmed room by id, then by normalized name.
    pub(crate) fn find_confirmed_index(&self, reference: &str) -> Option<usize> {
        let normalized = normalize_name(reference);
        self.rooms
            .iter()
            .position(|r| r.id == reference)
            .or_else(|| self.rooms.iter().position(|r| r.name == normalized))
    }

    /// Append a command-log entry.
    pub(crate) fn record(&mut self, kind: &str, params: Value, result: &str) {
        debug!(command = kind, result, "command applied");
        self.history.push(GeometryCommand::new(kind, params, result));
    }

    // ===== Session control =====

    /// Wipe every collection back to its empty initial form.
    ///
    /// Atomic from the caller's perspective: there is no observable
    /// intermediate state.
    pub fn reset(&mut self) {
        info!("session reset");
        *self = Self::default();
    }

    /// Hydrate confirmed rooms from externally persisted records, bypassing
    /// the command history. Existing rooms with the same id are replaced.
    ///
    /// Returns the number of rooms loaded.
    pub fn load_rooms(&mut self, rooms: Vec<Room>) -> usize {
        let count = rooms.len();
        for room in rooms {
            match self.rooms.iter().position(|r| r.id == room.id) {
                Some(i) => self.rooms[i] = room,
                None => self.rooms.push(room),
            }
        }
        info!(count, "rooms hydrated");
        count
    }

    /// Hydrate the whole session from externally persisted claim records,
    /// bypassing the command history. Replaces structures and confirmed
    /// rooms; the draft, undo stack, and wall cursor are cleared.
    pub fn load_from_claim_data(&mut self, data: ClaimData) -> (usize, usize) {
        let counts = (data.structures.len(), data.rooms.len());
        self.structures = data.structures;
        self.rooms = data.rooms;
        self.current_structure_id = self.structures.first().map(|s| s.id.clone());
        self.draft = None;
        self.undo_stack.clear();
        self.selected_wall = None;
        info!(
            structures = counts.0,
            rooms = counts.1,
            "session hydrated from claim data"
        );
        counts
    }

    /// Snapshot the full session state for persistence or rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            structures: self.structures.clone(),
            current_structure_id: self.current_structure_id.clone(),
            rooms: self.rooms.clone(),
            draft: self.draft.clone(),
            selected_wall: self.selected_wall,
            history: self.history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomscribe_core::geometry::ShapeKind;

    fn room(name: &str) -> Room {
        Room::new(name, ShapeKind::Rectangle, 10.0, 12.0, 8.0, None, None, None).unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.structures().is_empty());
        assert!(session.rooms().is_empty());
        assert!(session.draft().is_none());
        assert!(session.history().is_empty());
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_require_draft_errors_without_one() {
        let mut session = Session::new();
        assert_eq!(
            session.require_draft().unwrap_err(),
            RoomscribeError::NoDraftRoom
        );
    }

    #[test]
    fn test_load_rooms_replaces_by_id() {
        let mut session = Session::new();
        let r = room("kitchen");
        let id = r.id.clone();
        assert_eq!(session.load_rooms(vec![r.clone()]), 1);

        let mut updated = r;
        updated.width_ft = 20.0;
        session.load_rooms(vec![updated]);
        assert_eq!(session.rooms().len(), 1);
        assert_eq!(session.rooms()[0].id, id);
        assert_eq!(session.rooms()[0].width_ft, 20.0);
        // Hydration bypasses the command log
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::new();
        session.draft = Some(room("den"));
        session.push_undo();
        session.record("create_room", Value::Null, "ok");
        session.reset();
        assert!(session.draft().is_none());
        assert_eq!(session.undo_depth(), 0);
        assert!(session.history().is_empty());
    }
}
