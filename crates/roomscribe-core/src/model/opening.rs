use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::geometry::{PositionFrom, WallDirection, WallPosition};

/// Standard door height in feet (6 ft 8 in).
pub const DEFAULT_DOOR_HEIGHT_FT: f64 = 6.67;
/// Standard window height in feet.
pub const DEFAULT_WINDOW_HEIGHT_FT: f64 = 4.0;
/// Standard window sill height in feet.
pub const DEFAULT_SILL_HEIGHT_FT: f64 = 3.0;

/// Kind of wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningKind {
    #[default]
    Door,
    Window,
    Archway,
    Sliding,
    FrenchDoor,
}

impl OpeningKind {
    /// Parse a spoken opening kind; unknown values default to `Door`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "window" => OpeningKind::Window,
            "archway" | "arch" => OpeningKind::Archway,
            "sliding" | "sliding_door" | "slider" => OpeningKind::Sliding,
            "french_door" | "french_doors" | "french" => OpeningKind::FrenchDoor,
            _ => OpeningKind::Door,
        }
    }

    /// Default height when the operator did not state one.
    pub fn default_height_ft(&self) -> f64 {
        match self {
            OpeningKind::Window => DEFAULT_WINDOW_HEIGHT_FT,
            _ => DEFAULT_DOOR_HEIGHT_FT,
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpeningKind::Door => "door",
            OpeningKind::Window => "window",
            OpeningKind::Archway => "archway",
            OpeningKind::Sliding => "sliding door",
            OpeningKind::FrenchDoor => "french door",
        };
        write!(f, "{}", s)
    }
}

/// A door, window, or archway set into one of the room's four walls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Kind of opening
    pub kind: OpeningKind,

    /// Wall the opening is set into
    pub wall: WallDirection,

    /// Width in feet
    pub width_ft: f64,

    /// Height in feet (defaulted by kind when not stated)
    pub height_ft: f64,

    /// Position along the wall
    pub position: WallPosition,

    /// Which corner a numeric position is measured from
    pub position_from: PositionFrom,

    /// Sill height for windows, in feet
    pub sill_height_ft: Option<f64>,

    /// Timestamp when this opening was recorded
    pub created_at: DateTime<Utc>,
}

impl Opening {
    /// Create an opening, applying kind-based height and sill defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: OpeningKind,
        wall: WallDirection,
        width_ft: f64,
        height_ft: Option<f64>,
        position: WallPosition,
        position_from: PositionFrom,
        sill_height_ft: Option<f64>,
    ) -> Self {
        let sill = match kind {
            OpeningKind::Window => sill_height_ft.or(Some(DEFAULT_SILL_HEIGHT_FT)),
            _ => sill_height_ft,
        };
        Self {
            id: Uuid::now_v7().to_string(),
            kind,
            wall,
            width_ft,
            height_ft: height_ft.unwrap_or_else(|| kind.default_height_ft()),
            position,
            position_from,
            sill_height_ft: sill,
            created_at: Utc::now(),
        }
    }
}
