//! Opening commands: add, delete, update.

use serde::{Deserialize, Serialize};

use roomscribe_core::errors::{Result, RoomscribeError};
use roomscribe_core::geometry::{resolve_position, PositionFrom, WallDirection, WallPosition};
use roomscribe_core::model::{Opening, OpeningKind};
use roomscribe_core::resolver::{resolve_index, Selector};

use super::{finish, fmt_ft, raw_params};
use crate::session::Session;

fn parse_position_from(s: Option<&str>) -> PositionFrom {
    match s.map(str::trim).map(str::to_lowercase).as_deref() {
        Some("end") => PositionFrom::End,
        _ => PositionFrom::Start,
    }
}

/// Resolve the wall parameter, falling back to the session's wall cursor.
fn wall_or_cursor(session: &Session, wall: Option<&str>) -> Result<WallDirection> {
    match wall {
        Some(w) => WallDirection::parse(w),
        None => session
            .selected_wall()
            .ok_or(RoomscribeError::NoWallSelected),
    }
}

// ---------------------------------------------------------------------------
// add_opening
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddOpeningParams {
    /// Opening kind keyword; door when omitted
    pub kind: Option<String>,
    /// Wall name; the selected wall when omitted
    pub wall: Option<String>,
    pub width_ft: f64,
    /// Defaulted by kind when omitted (doors 6.67 ft, windows 4 ft)
    pub height_ft: Option<f64>,
    /// `left`/`center`/`right` or feet; center when omitted
    pub position: Option<String>,
    /// `start` or `end`; start when omitted
    pub position_from: Option<String>,
    /// Window sill height; 3 ft for windows when omitted
    pub sill_height_ft: Option<f64>,
}

/// Add an opening to the draft room, applying kind-based defaults.
///
/// The dictated position is stored as given - initial placement is not
/// clamped to the wall.
pub fn add_opening(session: &mut Session, params: AddOpeningParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_add(session, params);
    finish(session, "add_opening", raw, outcome)
}

fn apply_add(session: &mut Session, params: AddOpeningParams) -> Result<String> {
    let wall = wall_or_cursor(session, params.wall.as_deref())?;
    let kind = params
        .kind
        .as_deref()
        .map(OpeningKind::parse)
        .unwrap_or_default();
    let position = match params.position.as_deref() {
        Some(p) => WallPosition::parse(p)?,
        None => WallPosition::default(),
    };
    session.require_draft_ref()?;

    let opening = Opening::new(
        kind,
        wall,
        params.width_ft,
        params.height_ft,
        position,
        parse_position_from(params.position_from.as_deref()),
        params.sill_height_ft,
    );
    let message = format!(
        "Added {} {} on the {} wall",
        fmt_ft(opening.width_ft),
        opening.kind,
        wall
    );

    session.push_undo();
    session.require_draft()?.openings.push(opening);
    Ok(message)
}

// ---------------------------------------------------------------------------
// delete_opening
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpeningSelectorParams {
    /// Zero-based index into the draft's opening list
    pub index: Option<usize>,
    pub id: Option<String>,
    pub wall: Option<String>,
    /// Opening kind keyword (door, window, ...)
    pub kind: Option<String>,
}

impl OpeningSelectorParams {
    fn selector(&self) -> Result<Selector> {
        Ok(Selector {
            index: self.index,
            id: self.id.clone(),
            wall: self.wall.as_deref().map(WallDirection::parse).transpose()?,
            kind: self.kind.clone(),
        })
    }
}

/// Delete an opening located through the disambiguation chain.
pub fn delete_opening(session: &mut Session, params: OpeningSelectorParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_delete(session, params);
    finish(session, "delete_opening", raw, outcome)
}

fn apply_delete(session: &mut Session, params: OpeningSelectorParams) -> Result<String> {
    let selector = params.selector()?;
    let draft = session.require_draft_ref()?;
    let idx = resolve_index(&draft.openings, &selector, "opening")?;
    let message = format!(
        "Deleted the {} on the {} wall",
        draft.openings[idx].kind, draft.openings[idx].wall
    );
    session.push_undo();
    session.require_draft()?.openings.remove(idx);
    Ok(message)
}

// ---------------------------------------------------------------------------
// update_opening
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOpeningParams {
    #[serde(flatten)]
    pub selector: OpeningSelectorParams,
    pub width_ft: Option<f64>,
    pub height_ft: Option<f64>,
    /// New position along the wall; clamped to the wall's bounds
    pub position: Option<String>,
    pub position_from: Option<String>,
    pub sill_height_ft: Option<f64>,
    /// Move the opening to a different wall
    pub new_wall: Option<String>,
}

/// Update an opening, applying only the fields present.
///
/// Position changes go through the clamped move-along-wall path: the new
/// offset is resolved against the wall and stored as an absolute position.
pub fn update_opening(session: &mut Session, params: UpdateOpeningParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_update(session, params);
    finish(session, "update_opening", raw, outcome)
}

fn apply_update(session: &mut Session, params: UpdateOpeningParams) -> Result<String> {
    if params.width_ft.is_none()
        && params.height_ft.is_none()
        && params.position.is_none()
        && params.sill_height_ft.is_none()
        && params.new_wall.is_none()
    {
        return Err(RoomscribeError::NoChangesSpecified);
    }

    let selector = params.selector.selector()?;
    let new_wall = params.new_wall.as_deref().map(WallDirection::parse).transpose()?;
    let new_position = params.position.as_deref().map(WallPosition::parse).transpose()?;

    let draft = session.require_draft_ref()?;
    let idx = resolve_index(&draft.openings, &selector, "opening")?;

    let mut opening = draft.openings[idx].clone();
    if let Some(w) = params.width_ft {
        opening.width_ft = w;
    }
    if let Some(h) = params.height_ft {
        opening.height_ft = h;
    }
    if let Some(s) = params.sill_height_ft {
        opening.sill_height_ft = Some(s);
    }
    if let Some(wall) = new_wall {
        opening.wall = wall;
    }
    if let Some(position) = new_position {
        // Moving along the wall clamps, unlike initial placement.
        let wall_len = draft.wall_length_ft(opening.wall);
        let offset = resolve_position(
            wall_len,
            position,
            parse_position_from(params.position_from.as_deref()),
            opening.width_ft,
            true,
        );
        opening.position = WallPosition::Offset(offset);
        opening.position_from = PositionFrom::Start;
    }

    let message = format!(
        "Updated the {} on the {} wall",
        opening.kind, opening.wall
    );
    session.push_undo();
    session.require_draft()?.openings[idx] = opening;
    Ok(message)
}
