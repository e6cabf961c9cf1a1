//! Room commands: create, edit, delete, confirm, dimension changes, notes,
//! and undo.

use serde::{Deserialize, Serialize};
use tracing::info;

use roomscribe_core::errors::{Result, RoomscribeError};
use roomscribe_core::geometry::{
    wall_length, Corner, LShapeConfig, Point, ShapeKind, TShapeConfig, WallDirection,
};
use roomscribe_core::model::{normalize_name, Note, NoteTarget, Room};

use super::{finish, fmt_ft, raw_params};
use crate::session::Session;

/// Default ceiling height when the operator does not state one, in feet.
const DEFAULT_CEILING_HEIGHT_FT: f64 = 8.0;

// ---------------------------------------------------------------------------
// create_room
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoomParams {
    /// Room name, as dictated (normalized on creation)
    pub name: String,
    /// Shape keyword; rectangle when omitted
    pub shape: Option<String>,
    pub width_ft: f64,
    pub length_ft: f64,
    /// Ceiling height; 8 ft when omitted, 0 permitted for exterior zones
    pub ceiling_height_ft: Option<f64>,
    pub flooring: Option<String>,
    /// Id or name of the owning structure; the current selection when omitted
    pub structure: Option<String>,
    /// Name or id of the parent room, for sub-rooms
    pub parent_room: Option<String>,
    // L-shape notch
    pub notch_corner: Option<String>,
    pub notch_width_ft: Option<f64>,
    pub notch_length_ft: Option<f64>,
    // T-shape stem
    pub stem_wall: Option<String>,
    pub stem_width_ft: Option<f64>,
    pub stem_length_ft: Option<f64>,
    pub stem_position_ft: Option<f64>,
    // Irregular outline
    pub vertices: Option<Vec<Point>>,
}

/// Start a new draft room, synthesizing its polygon.
///
/// The previous draft slot - even an empty one - is pushed onto the undo
/// stack first, so creating a room over an unconfirmed one is itself
/// undoable.
pub fn create_room(session: &mut Session, params: CreateRoomParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_create(session, params);
    finish(session, "create_room", raw, outcome)
}

fn apply_create(session: &mut Session, params: CreateRoomParams) -> Result<String> {
    let shape = match params.shape.as_deref() {
        Some(s) => ShapeKind::parse(s)?,
        None => ShapeKind::Rectangle,
    };

    let l_config = match shape {
        ShapeKind::LShape => Some(parse_l_config(&params)?),
        _ => None,
    };
    let t_config = match shape {
        ShapeKind::TShape => {
            let cfg = parse_t_config(&params)?;
            // Stem overflow is validated here, not in the synthesizer.
            let span = wall_length(cfg.stem_wall, params.width_ft, params.length_ft);
            if cfg.stem_position_ft + cfg.stem_width_ft > span {
                return Err(RoomscribeError::StemOverflowsWall {
                    stem_position_ft: cfg.stem_position_ft,
                    stem_width_ft: cfg.stem_width_ft,
                    wall_length_ft: span,
                });
            }
            Some(cfg)
        }
        _ => None,
    };

    let mut room = Room::new(
        &params.name,
        shape,
        params.width_ft,
        params.length_ft,
        params
            .ceiling_height_ft
            .unwrap_or(DEFAULT_CEILING_HEIGHT_FT),
        l_config,
        t_config,
        params.vertices.clone(),
    )?;
    room.flooring = params.flooring.clone();

    room.structure_id = match params.structure.as_deref() {
        Some(reference) => {
            let idx = session.find_structure_index(reference).ok_or_else(|| {
                RoomscribeError::StructureNotFound {
                    reference: reference.to_string(),
                }
            })?;
            Some(session.structures[idx].id.clone())
        }
        None => session.current_structure_id.clone(),
    };

    if let Some(parent) = params.parent_room.as_deref() {
        let idx =
            session
                .find_confirmed_index(parent)
                .ok_or_else(|| RoomscribeError::RoomNotFound {
                    reference: parent.to_string(),
                })?;
        room.parent_room_id = Some(session.rooms[idx].id.clone());
        room.hierarchy_level = "sub_room".to_string();
    }

    let message = format!(
        "Started {} room '{}' ({} x {})",
        room.shape,
        room.name,
        fmt_ft(room.width_ft),
        fmt_ft(room.length_ft)
    );
    session.push_undo();
    session.draft = Some(room);
    Ok(message)
}

fn parse_l_config(params: &CreateRoomParams) -> Result<LShapeConfig> {
    match (
        params.notch_corner.as_deref(),
        params.notch_width_ft,
        params.notch_length_ft,
    ) {
        (Some(corner), Some(w), Some(l)) => Ok(LShapeConfig {
            notch_corner: Corner::parse(corner)?,
            notch_width_ft: w,
            notch_length_ft: l,
        }),
        _ => Err(RoomscribeError::MissingShapeConfig {
            shape: "l_shape".to_string(),
        }),
    }
}

fn parse_t_config(params: &CreateRoomParams) -> Result<TShapeConfig> {
    match (
        params.stem_wall.as_deref(),
        params.stem_width_ft,
        params.stem_length_ft,
    ) {
        (Some(wall), Some(w), Some(l)) => Ok(TShapeConfig {
            stem_wall: WallDirection::parse(wall)?,
            stem_width_ft: w,
            stem_length_ft: l,
            stem_position_ft: params.stem_position_ft.unwrap_or(0.0),
        }),
        _ => Err(RoomscribeError::MissingShapeConfig {
            shape: "t_shape".to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// confirm_room
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfirmRoomParams {
    /// Clear the draft for the next room (true when omitted); false keeps
    /// the confirmed room as the still-editable draft
    pub ready_for_next: Option<bool>,
}

/// Commit the draft room to the confirmed list.
///
/// This is the undo commit boundary: the undo stack is cleared and prior
/// history cannot be undone across it.
pub fn confirm_room(session: &mut Session, params: ConfirmRoomParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_confirm(session, params);
    finish(session, "confirm_room", raw, outcome)
}

fn apply_confirm(session: &mut Session, params: ConfirmRoomParams) -> Result<String> {
    let ready_for_next = params.ready_for_next.unwrap_or(true);
    let room = session.require_draft_ref()?.clone();

    // Upsert: re-confirming the still-draft room replaces its earlier copy.
    match session.rooms.iter().position(|r| r.id == room.id) {
        Some(i) => session.rooms[i] = room.clone(),
        None => session.rooms.push(room.clone()),
    }

    if let Some(structure_id) = room.structure_id.clone() {
        if let Some(structure) = session.structures.iter_mut().find(|s| s.id == structure_id) {
            structure.add_room_id(room.id.clone());
        }
    }

    session.undo_stack.clear();
    if ready_for_next {
        session.draft = None;
    }
    info!(room = %room.name, ready_for_next, "room confirmed");

    Ok(if ready_for_next {
        format!("Confirmed room '{}' - ready for the next room", room.name)
    } else {
        format!("Confirmed room '{}' - still editing it", room.name)
    })
}

// ---------------------------------------------------------------------------
// edit_room / delete_room
// ---------------------------------------------------------------------------

/// Where a room reference resolved to.
enum RoomTarget {
    /// The draft room; mutations are undo-tracked
    Draft,
    /// A confirmed room, mutated in place and bypassing undo
    Confirmed(usize),
}

/// Resolve a room reference: by id, then by normalized name, else the draft.
fn resolve_room_target(session: &Session, reference: Option<&str>) -> Result<RoomTarget> {
    let Some(reference) = reference else {
        return if session.draft().is_some() {
            Ok(RoomTarget::Draft)
        } else {
            Err(RoomscribeError::NoDraftRoom)
        };
    };

    let normalized = normalize_name(reference);
    if let Some(draft) = session.draft() {
        if draft.id == reference || draft.name == normalized {
            return Ok(RoomTarget::Draft);
        }
    }
    session
        .find_confirmed_index(reference)
        .map(RoomTarget::Confirmed)
        .ok_or_else(|| RoomscribeError::RoomNotFound {
            reference: reference.to_string(),
        })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditRoomParams {
    /// Id or name of the room; the draft when omitted
    pub room: Option<String>,
    pub name: Option<String>,
    pub flooring: Option<String>,
    pub width_ft: Option<f64>,
    pub length_ft: Option<f64>,
    pub ceiling_height_ft: Option<f64>,
}

/// Edit a room, applying only the fields present.
///
/// Dimension changes re-synthesize the polygon. Editing the draft is
/// undo-tracked; editing an already-confirmed room mutates it in place.
pub fn edit_room(session: &mut Session, params: EditRoomParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_edit(session, params);
    finish(session, "edit_room", raw, outcome)
}

fn apply_edit(session: &mut Session, params: EditRoomParams) -> Result<String> {
    if params.name.is_none()
        && params.flooring.is_none()
        && params.width_ft.is_none()
        && params.length_ft.is_none()
        && params.ceiling_height_ft.is_none()
    {
        return Err(RoomscribeError::NoChangesSpecified);
    }

    let target = resolve_room_target(session, params.room.as_deref())?;
    let current = match &target {
        RoomTarget::Draft => session.require_draft_ref()?,
        RoomTarget::Confirmed(i) => &session.rooms[*i],
    };

    // Validate on a working copy so a bad dimension never half-applies.
    let mut updated = current.clone();
    if let Some(name) = params.name.as_deref() {
        updated.name = normalize_name(name);
    }
    if params.flooring.is_some() {
        updated.flooring = params.flooring.clone();
    }
    if let Some(w) = params.width_ft {
        updated.width_ft = w;
    }
    if let Some(l) = params.length_ft {
        updated.length_ft = l;
    }
    if let Some(h) = params.ceiling_height_ft {
        updated.ceiling_height_ft = h;
    }
    if params.width_ft.is_some() || params.length_ft.is_some() {
        updated.resynthesize()?;
    } else {
        updated.updated_at = chrono::Utc::now();
    }

    let message = format!(
        "Updated room '{}' ({} x {})",
        updated.name,
        fmt_ft(updated.width_ft),
        fmt_ft(updated.length_ft)
    );
    match target {
        RoomTarget::Draft => {
            session.push_undo();
            session.draft = Some(updated);
        }
        RoomTarget::Confirmed(i) => session.rooms[i] = updated,
    }
    Ok(message)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteRoomParams {
    /// Id or name of the room; the draft when omitted
    pub room: Option<String>,
}

/// Delete a room. Deleting the draft is undo-tracked; deleting a confirmed
/// room also drops it from its structure's ownership list.
pub fn delete_room(session: &mut Session, params: DeleteRoomParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_delete(session, params);
    finish(session, "delete_room", raw, outcome)
}

fn apply_delete(session: &mut Session, params: DeleteRoomParams) -> Result<String> {
    match resolve_room_target(session, params.room.as_deref())? {
        RoomTarget::Draft => {
            let name = session.require_draft_ref()?.name.clone();
            session.push_undo();
            session.draft = None;
            Ok(format!("Deleted draft room '{}'", name))
        }
        RoomTarget::Confirmed(i) => {
            let room = session.rooms.remove(i);
            if let Some(structure_id) = room.structure_id.as_deref() {
                if let Some(structure) =
                    session.structures.iter_mut().find(|s| s.id == structure_id)
                {
                    structure.remove_room_id(&room.id);
                }
            }
            Ok(format!("Deleted room '{}'", room.name))
        }
    }
}

// ---------------------------------------------------------------------------
// modify_dimension
// ---------------------------------------------------------------------------

/// Typed target for the generic dimension setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DimensionTarget {
    RoomWidth,
    RoomLength,
    CeilingHeight,
    Opening(usize),
    Feature(usize),
}

impl DimensionTarget {
    /// Parse the dictated target string.
    fn parse(target: &str) -> Result<Self> {
        let normalized = target.trim().to_lowercase();
        match normalized.as_str() {
            "room_width" => return Ok(DimensionTarget::RoomWidth),
            "room_length" => return Ok(DimensionTarget::RoomLength),
            "ceiling_height" => return Ok(DimensionTarget::CeilingHeight),
            _ => {}
        }
        if let Some(n) = normalized.strip_prefix("opening_") {
            if let Ok(i) = n.parse::<usize>() {
                return Ok(DimensionTarget::Opening(i));
            }
        }
        if let Some(n) = normalized.strip_prefix("feature_") {
            if let Ok(i) = n.parse::<usize>() {
                return Ok(DimensionTarget::Feature(i));
            }
        }
        Err(RoomscribeError::UnknownDimensionTarget {
            target: target.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifyDimensionParams {
    /// `room_width`, `room_length`, `ceiling_height`, `opening_N`, or
    /// `feature_N` (zero-based index into the draft's lists)
    pub target: String,
    pub value_ft: f64,
}

/// Set a single dimension on the draft room, addressed by target.
///
/// Width/length changes re-synthesize the polygon.
pub fn modify_dimension(session: &mut Session, params: ModifyDimensionParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_modify(session, params);
    finish(session, "modify_dimension", raw, outcome)
}

fn apply_modify(session: &mut Session, params: ModifyDimensionParams) -> Result<String> {
    let target = DimensionTarget::parse(&params.target)?;
    let value = params.value_ft;

    let mut updated = session.require_draft_ref()?.clone();
    match target {
        DimensionTarget::RoomWidth => {
            updated.width_ft = value;
            updated.resynthesize()?;
        }
        DimensionTarget::RoomLength => {
            updated.length_ft = value;
            updated.resynthesize()?;
        }
        DimensionTarget::CeilingHeight => updated.ceiling_height_ft = value,
        DimensionTarget::Opening(i) => {
            let opening = updated.openings.get_mut(i).ok_or_else(|| {
                RoomscribeError::EntityNotFound {
                    entity: "opening".to_string(),
                    tried: format!("index={}", i),
                }
            })?;
            opening.width_ft = value;
        }
        DimensionTarget::Feature(i) => {
            let feature = updated.features.get_mut(i).ok_or_else(|| {
                RoomscribeError::EntityNotFound {
                    entity: "feature".to_string(),
                    tried: format!("index={}", i),
                }
            })?;
            feature.width_ft = value;
        }
    }

    session.push_undo();
    session.draft = Some(updated);
    Ok(format!("Set {} to {}", params.target, fmt_ft(value)))
}

// ---------------------------------------------------------------------------
// add_note
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddNoteParams {
    pub text: String,
    /// `room`, a wall name, `feature:<ref>`, `damage:<ref>`, or free text
    pub target: Option<String>,
}

/// Attach a free-text note to the draft room.
///
/// Purely additive and deliberately not undo-tracked.
pub fn add_note(session: &mut Session, params: AddNoteParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_add_note(session, params);
    finish(session, "add_note", raw, outcome)
}

fn apply_add_note(session: &mut Session, params: AddNoteParams) -> Result<String> {
    let target = NoteTarget::parse(params.target.as_deref().unwrap_or(""));
    let note = Note::new(params.text.clone(), target.clone());
    let draft = session.require_draft()?;
    draft.notes.push(note);
    Ok(format!("Noted on {}: \"{}\"", target, params.text))
}

// ---------------------------------------------------------------------------
// undo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UndoParams {
    /// Number of steps to jump back; 1 when omitted
    pub steps: Option<u32>,
}

/// Undo up to `steps` draft mutations, restoring the oldest popped snapshot.
///
/// Jumps straight back N states; there is no redo. Undo itself is logged but
/// never undoable.
pub fn undo(session: &mut Session, params: UndoParams) -> String {
    let raw = raw_params(&params);
    let result = apply_undo(session, params);
    session.record("undo", raw, &result);
    result
}

fn apply_undo(session: &mut Session, params: UndoParams) -> String {
    if session.undo_stack.is_empty() {
        return "Nothing to undo".to_string();
    }
    let steps = params.steps.unwrap_or(1).max(1) as usize;

    let mut restored: Option<Room> = None;
    let mut popped = 0;
    while popped < steps {
        match session.undo_stack.pop() {
            Some(snapshot) => {
                restored = snapshot;
                popped += 1;
            }
            None => break,
        }
    }
    session.draft = restored;

    match session.draft() {
        Some(room) => format!(
            "Undid {} step(s) - back to room '{}' ({} x {})",
            popped,
            room.name,
            fmt_ft(room.width_ft),
            fmt_ft(room.length_ft)
        ),
        None => format!("Undid {} step(s) - no room in progress", popped),
    }
}
