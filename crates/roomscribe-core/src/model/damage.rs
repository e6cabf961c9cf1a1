use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::geometry::{Point, WallDirection};

/// Default distance damage extends from an affected wall, in feet.
///
/// Applied by the engine when the operator does not state an extent; callers
/// must never assume it on their side.
pub const DEFAULT_EXTENT_FT: f64 = 2.0;

/// Kind of damage observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageKind {
    Water,
    Fire,
    Smoke,
    Mold,
    Wind,
    Impact,
}

impl DamageKind {
    /// Parse a spoken damage kind; unknown values default to `Water`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "fire" => DamageKind::Fire,
            "smoke" => DamageKind::Smoke,
            "mold" | "mould" => DamageKind::Mold,
            "wind" => DamageKind::Wind,
            "impact" => DamageKind::Impact,
            _ => DamageKind::Water,
        }
    }
}

impl fmt::Display for DamageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DamageKind::Water => "water",
            DamageKind::Fire => "fire",
            DamageKind::Smoke => "smoke",
            DamageKind::Mold => "mold",
            DamageKind::Wind => "wind",
            DamageKind::Impact => "impact",
        };
        write!(f, "{}", s)
    }
}

/// IICRC water contamination category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterCategory {
    /// Category 1 - clean water
    Cat1,
    /// Category 2 - gray water
    Cat2,
    /// Category 3 - black water
    Cat3,
}

impl WaterCategory {
    /// Parse a category number (1/2/3); anything else yields `None`.
    pub fn parse(n: u8) -> Option<Self> {
        match n {
            1 => Some(WaterCategory::Cat1),
            2 => Some(WaterCategory::Cat2),
            3 => Some(WaterCategory::Cat3),
            _ => None,
        }
    }
}

/// A zone of damage recorded against the room
///
/// Most zones are recorded as affected walls plus an extent; the footprint is
/// derived on demand by the rendering collaborator. A freeform zone instead
/// carries an explicit polygon which overrides wall/extent derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageZone {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Kind of damage
    pub kind: DamageKind,

    /// IICRC water category, for water damage
    pub category: Option<WaterCategory>,

    /// Walls the damage touches
    pub affected_walls: Vec<WallDirection>,

    /// Whether the floor is affected
    pub floor_affected: bool,

    /// Whether the ceiling is affected
    pub ceiling_affected: bool,

    /// Distance the damage extends from each affected wall, in feet
    pub extent_ft: f64,

    /// Explicit footprint for freeform zones
    pub polygon: Option<Vec<Point>>,

    /// Whether `polygon` overrides wall/extent derivation
    pub is_freeform: bool,

    /// Dictated severity, when stated
    pub severity: Option<String>,

    /// Affected surface description, when stated
    pub surface: Option<String>,

    /// Damage source description, when stated
    pub source: Option<String>,

    /// Timestamp when this zone was recorded
    pub created_at: DateTime<Utc>,
}

impl DamageZone {
    /// Create a damage zone, applying the engine-side defaults: extent
    /// [`DEFAULT_EXTENT_FT`] and floor affected.
    pub fn new(
        kind: DamageKind,
        affected_walls: Vec<WallDirection>,
        extent_ft: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            kind,
            category: None,
            affected_walls,
            floor_affected: true,
            ceiling_affected: false,
            extent_ft: extent_ft.unwrap_or(DEFAULT_EXTENT_FT),
            polygon: None,
            is_freeform: false,
            severity: None,
            surface: None,
            source: None,
            created_at: Utc::now(),
        }
    }
}
