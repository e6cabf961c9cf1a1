//! Feature commands: add, delete.

use serde::{Deserialize, Serialize};

use roomscribe_core::errors::{Result, RoomscribeError};
use roomscribe_core::geometry::{PositionFrom, WallDirection, WallPosition};
use roomscribe_core::model::{Feature, FeatureKind};
use roomscribe_core::resolver::{resolve_index, Selector};

use super::{finish, fmt_ft, raw_params};
use crate::session::Session;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddFeatureParams {
    /// Feature kind keyword (closet, island, fireplace, ...)
    pub kind: String,
    /// Wall name for embedded kinds; the selected wall when omitted
    pub wall: Option<String>,
    pub width_ft: f64,
    /// Protrusion beyond the wall (embedded) or footprint depth (freestanding)
    pub depth_ft: f64,
    /// Position along the wall; center when omitted (embedded kinds)
    pub position: Option<String>,
    /// `start` or `end`; start when omitted
    pub position_from: Option<String>,
    /// Offset from the west wall (freestanding kinds); 0 when omitted
    pub x_offset_ft: Option<f64>,
    /// Offset from the south wall (freestanding kinds); 0 when omitted
    pub y_offset_ft: Option<f64>,
}

/// Add a feature to the draft room.
///
/// Islands and peninsulas are freestanding and located by floor offsets;
/// every other kind embeds into a wall.
pub fn add_feature(session: &mut Session, params: AddFeatureParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_add(session, params);
    finish(session, "add_feature", raw, outcome)
}

fn apply_add(session: &mut Session, params: AddFeatureParams) -> Result<String> {
    let kind = FeatureKind::parse(&params.kind);
    session.require_draft_ref()?;

    let (feature, message) = if kind.is_freestanding() {
        let feature = Feature::freestanding(
            kind,
            params.width_ft,
            params.depth_ft,
            params.x_offset_ft.unwrap_or(0.0),
            params.y_offset_ft.unwrap_or(0.0),
        );
        let message = format!(
            "Added {} ({} x {})",
            kind,
            fmt_ft(feature.width_ft),
            fmt_ft(feature.depth_ft)
        );
        (feature, message)
    } else {
        let wall = match params.wall.as_deref() {
            Some(w) => WallDirection::parse(w)?,
            None => session
                .selected_wall()
                .ok_or(RoomscribeError::NoWallSelected)?,
        };
        let position = match params.position.as_deref() {
            Some(p) => WallPosition::parse(p)?,
            None => WallPosition::default(),
        };
        let position_from = match params.position_from.as_deref().map(str::to_lowercase) {
            Some(ref s) if s == "end" => PositionFrom::End,
            _ => PositionFrom::Start,
        };
        let feature = Feature::embedded(
            kind,
            wall,
            params.width_ft,
            params.depth_ft,
            position,
            position_from,
        );
        let message = format!(
            "Added {} {} on the {} wall",
            fmt_ft(feature.width_ft),
            kind,
            wall
        );
        (feature, message)
    };

    session.push_undo();
    session.require_draft()?.features.push(feature);
    Ok(message)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureSelectorParams {
    /// Zero-based index into the draft's feature list
    pub index: Option<usize>,
    pub id: Option<String>,
    pub wall: Option<String>,
    /// Feature kind keyword
    pub kind: Option<String>,
}

/// Delete a feature located through the disambiguation chain.
pub fn delete_feature(session: &mut Session, params: FeatureSelectorParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_delete(session, params);
    finish(session, "delete_feature", raw, outcome)
}

fn apply_delete(session: &mut Session, params: FeatureSelectorParams) -> Result<String> {
    let selector = Selector {
        index: params.index,
        id: params.id.clone(),
        wall: params.wall.as_deref().map(WallDirection::parse).transpose()?,
        kind: params.kind.clone(),
    };
    let draft = session.require_draft_ref()?;
    let idx = resolve_index(&draft.features, &selector, "feature")?;
    let message = match draft.features[idx].wall {
        Some(wall) => format!("Deleted the {} on the {} wall", draft.features[idx].kind, wall),
        None => format!("Deleted the {}", draft.features[idx].kind),
    };
    session.push_undo();
    session.require_draft()?.features.remove(idx);
    Ok(message)
}
