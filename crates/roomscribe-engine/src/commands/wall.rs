//! Wall-first commands: select a wall, update its properties, move it.

use serde::{Deserialize, Serialize};

use roomscribe_core::errors::{Result, RoomscribeError};
use roomscribe_core::geometry::WallDirection;

use super::{finish, fmt_ft, raw_params};
use crate::session::Session;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectWallParams {
    /// Cardinal name or synthetic `wall_N` index
    pub wall: String,
}

/// Move the wall cursor; subsequent wall-relative commands may omit their
/// wall reference and reuse it.
pub fn select_wall(session: &mut Session, params: SelectWallParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_select(session, params);
    finish(session, "select_wall", raw, outcome)
}

fn apply_select(session: &mut Session, params: SelectWallParams) -> Result<String> {
    let wall = WallDirection::parse(&params.wall)?;
    session.selected_wall = Some(wall);
    match session.draft() {
        Some(room) => Ok(format!(
            "Selected the {} wall ({} long)",
            wall,
            fmt_ft(room.wall_length_ft(wall))
        )),
        None => Ok(format!("Selected the {} wall", wall)),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWallPropertiesParams {
    /// Wall name; the selected wall when omitted
    pub wall: Option<String>,
    pub material: Option<String>,
    pub condition: Option<String>,
}

/// Record material/condition properties against a wall of the draft room.
pub fn update_wall_properties(session: &mut Session, params: UpdateWallPropertiesParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_update(session, params);
    finish(session, "update_wall_properties", raw, outcome)
}

fn apply_update(session: &mut Session, params: UpdateWallPropertiesParams) -> Result<String> {
    if params.material.is_none() && params.condition.is_none() {
        return Err(RoomscribeError::NoChangesSpecified);
    }
    let wall = match params.wall.as_deref() {
        Some(w) => WallDirection::parse(w)?,
        None => session
            .selected_wall()
            .ok_or(RoomscribeError::NoWallSelected)?,
    };
    session.require_draft_ref()?;

    session.push_undo();
    let draft = session.require_draft()?;
    draft.set_wall_properties(wall, params.material.clone(), params.condition.clone());
    Ok(format!("Updated the {} wall's properties", wall))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveWallParams {
    /// Wall name; the selected wall when omitted
    pub wall: Option<String>,
    /// `out`/`right` grow the room, `in`/`left` shrink it
    pub direction: String,
    pub distance_ft: f64,
}

/// Move a wall of the draft room in or out, re-synthesizing the polygon.
///
/// North/south walls adjust the room's length; east/west walls its width.
/// Only the room being edited is affected - a wall spatially shared with
/// another room stays put there.
pub fn move_wall(session: &mut Session, params: MoveWallParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_move(session, params);
    finish(session, "move_wall", raw, outcome)
}

fn apply_move(session: &mut Session, params: MoveWallParams) -> Result<String> {
    let wall = match params.wall.as_deref() {
        Some(w) => WallDirection::parse(w)?,
        None => session
            .selected_wall()
            .ok_or(RoomscribeError::NoWallSelected)?,
    };
    let delta = match params.direction.trim().to_lowercase().as_str() {
        "out" | "right" => params.distance_ft,
        "in" | "left" => -params.distance_ft,
        other => {
            return Err(RoomscribeError::UnknownMoveDirection {
                value: other.to_string(),
            })
        }
    };

    // Validate on a working copy so a move past zero never half-applies.
    let mut updated = session.require_draft_ref()?.clone();
    if wall.runs_east_west() {
        updated.length_ft += delta;
    } else {
        updated.width_ft += delta;
    }
    updated.resynthesize()?;

    let message = format!(
        "Moved the {} wall {} {} - room is now {} x {}",
        wall,
        params.direction.trim().to_lowercase(),
        fmt_ft(params.distance_ft),
        fmt_ft(updated.width_ft),
        fmt_ft(updated.length_ft)
    );
    session.push_undo();
    session.draft = Some(updated);
    Ok(message)
}
