//! Damage zone commands: mark, edit, delete.

use serde::{Deserialize, Serialize};

use roomscribe_core::errors::{Result, RoomscribeError};
use roomscribe_core::geometry::{Point, WallDirection};
use roomscribe_core::model::{DamageKind, DamageZone, WaterCategory};
use roomscribe_core::resolver::{resolve_index, Selector};

use super::{finish, fmt_ft, raw_params};
use crate::session::Session;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkDamageParams {
    /// Damage kind keyword; water when omitted
    pub kind: Option<String>,
    /// IICRC water category (1/2/3)
    pub category: Option<u8>,
    /// Walls the damage touches; the selected wall when omitted
    pub affected_walls: Option<Vec<String>>,
    /// Floor affected; true when omitted
    pub floor_affected: Option<bool>,
    /// Ceiling affected; false when omitted
    pub ceiling_affected: Option<bool>,
    /// Distance from each affected wall; 2 ft when omitted
    pub extent_ft: Option<f64>,
    /// Explicit footprint for freeform zones
    pub polygon: Option<Vec<Point>>,
    /// Marks `polygon` as overriding wall/extent derivation
    pub is_freeform: Option<bool>,
    pub severity: Option<String>,
    pub surface: Option<String>,
    pub source: Option<String>,
}

/// Record a damage zone on the draft room.
///
/// The 2 ft extent default and floor-affected default are applied here;
/// footprint derivation stays with the rendering collaborator unless a
/// freeform polygon is supplied.
pub fn mark_damage(session: &mut Session, params: MarkDamageParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_mark(session, params);
    finish(session, "mark_damage", raw, outcome)
}

fn apply_mark(session: &mut Session, params: MarkDamageParams) -> Result<String> {
    let kind = params
        .kind
        .as_deref()
        .map(DamageKind::parse)
        .unwrap_or(DamageKind::Water);

    let affected_walls = match &params.affected_walls {
        Some(walls) => walls
            .iter()
            .map(|w| WallDirection::parse(w))
            .collect::<Result<Vec<_>>>()?,
        None => session.selected_wall().into_iter().collect(),
    };
    session.require_draft_ref()?;

    let mut zone = DamageZone::new(kind, affected_walls, params.extent_ft);
    zone.category = params.category.and_then(WaterCategory::parse);
    if let Some(floor) = params.floor_affected {
        zone.floor_affected = floor;
    }
    if let Some(ceiling) = params.ceiling_affected {
        zone.ceiling_affected = ceiling;
    }
    if params.is_freeform.unwrap_or(false) {
        if let Some(polygon) = params.polygon.clone() {
            zone.polygon = Some(polygon);
            zone.is_freeform = true;
        }
    }
    zone.severity = params.severity.clone();
    zone.surface = params.surface.clone();
    zone.source = params.source.clone();

    let walls = if zone.affected_walls.is_empty() {
        "no walls".to_string()
    } else {
        zone.affected_walls
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let message = format!(
        "Marked {} damage ({} wall(s): {}, {} extent)",
        zone.kind,
        zone.affected_walls.len(),
        walls,
        fmt_ft(zone.extent_ft)
    );

    session.push_undo();
    session.require_draft()?.damage_zones.push(zone);
    Ok(message)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageSelectorParams {
    /// Zero-based index into the draft's damage zone list
    pub index: Option<usize>,
    pub id: Option<String>,
    pub wall: Option<String>,
    /// Damage kind keyword (water, mold, ...)
    pub kind: Option<String>,
}

impl DamageSelectorParams {
    fn selector(&self) -> Result<Selector> {
        Ok(Selector {
            index: self.index,
            id: self.id.clone(),
            wall: self.wall.as_deref().map(WallDirection::parse).transpose()?,
            kind: self.kind.clone(),
        })
    }
}

/// Delete a damage zone located through the disambiguation chain.
pub fn delete_damage_zone(session: &mut Session, params: DamageSelectorParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_delete(session, params);
    finish(session, "delete_damage_zone", raw, outcome)
}

fn apply_delete(session: &mut Session, params: DamageSelectorParams) -> Result<String> {
    let selector = params.selector()?;
    let draft = session.require_draft_ref()?;
    let idx = resolve_index(&draft.damage_zones, &selector, "damage zone")?;
    let message = format!("Deleted the {} damage zone", draft.damage_zones[idx].kind);
    session.push_undo();
    session.require_draft()?.damage_zones.remove(idx);
    Ok(message)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditDamageZoneParams {
    #[serde(flatten)]
    pub selector: DamageSelectorParams,
    pub category: Option<u8>,
    pub affected_walls: Option<Vec<String>>,
    pub floor_affected: Option<bool>,
    pub ceiling_affected: Option<bool>,
    pub extent_ft: Option<f64>,
    pub severity: Option<String>,
    pub surface: Option<String>,
    pub source: Option<String>,
}

/// Edit a damage zone, applying only the fields present.
pub fn edit_damage_zone(session: &mut Session, params: EditDamageZoneParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_edit(session, params);
    finish(session, "edit_damage_zone", raw, outcome)
}

fn apply_edit(session: &mut Session, params: EditDamageZoneParams) -> Result<String> {
    if params.category.is_none()
        && params.affected_walls.is_none()
        && params.floor_affected.is_none()
        && params.ceiling_affected.is_none()
        && params.extent_ft.is_none()
        && params.severity.is_none()
        && params.surface.is_none()
        && params.source.is_none()
    {
        return Err(RoomscribeError::NoChangesSpecified);
    }

    let selector = params.selector.selector()?;
    let affected_walls = params
        .affected_walls
        .as_ref()
        .map(|walls| {
            walls
                .iter()
                .map(|w| WallDirection::parse(w))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    let draft = session.require_draft_ref()?;
    let idx = resolve_index(&draft.damage_zones, &selector, "damage zone")?;

    let mut zone = draft.damage_zones[idx].clone();
    if let Some(category) = params.category {
        zone.category = WaterCategory::parse(category);
    }
    if let Some(walls) = affected_walls {
        zone.affected_walls = walls;
    }
    if let Some(floor) = params.floor_affected {
        zone.floor_affected = floor;
    }
    if let Some(ceiling) = params.ceiling_affected {
        zone.ceiling_affected = ceiling;
    }
    if let Some(extent) = params.extent_ft {
        zone.extent_ft = extent;
    }
    if params.severity.is_some() {
        zone.severity = params.severity.clone();
    }
    if params.surface.is_some() {
        zone.surface = params.surface.clone();
    }
    if params.source.is_some() {
        zone.source = params.source.clone();
    }

    let message = format!("Updated the {} damage zone", zone.kind);
    session.push_undo();
    session.require_draft()?.damage_zones[idx] = zone;
    Ok(message)
}
