use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::geometry::{PositionFrom, WallDirection, WallPosition};

/// Kind of built-in or freestanding room feature.
///
/// Wall-embedded kinds extend outward from a wall (depth = protrusion beyond
/// the wall plane); freestanding kinds sit on the floor (depth = footprint),
/// located by x/y offsets from the west and south walls respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Closet,
    Alcove,
    Pantry,
    BumpOut,
    Fireplace,
    BuiltIn,
    Island,
    Peninsula,
}

impl FeatureKind {
    /// Parse a spoken feature kind; unknown values default to `BuiltIn`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "closet" => FeatureKind::Closet,
            "alcove" => FeatureKind::Alcove,
            "pantry" => FeatureKind::Pantry,
            "bump_out" | "bumpout" => FeatureKind::BumpOut,
            "fireplace" => FeatureKind::Fireplace,
            "island" => FeatureKind::Island,
            "peninsula" => FeatureKind::Peninsula,
            _ => FeatureKind::BuiltIn,
        }
    }

    /// Whether this kind sits on the floor rather than in a wall.
    pub fn is_freestanding(&self) -> bool {
        matches!(self, FeatureKind::Island | FeatureKind::Peninsula)
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeatureKind::Closet => "closet",
            FeatureKind::Alcove => "alcove",
            FeatureKind::Pantry => "pantry",
            FeatureKind::BumpOut => "bump-out",
            FeatureKind::Fireplace => "fireplace",
            FeatureKind::BuiltIn => "built-in",
            FeatureKind::Island => "island",
            FeatureKind::Peninsula => "peninsula",
        };
        write!(f, "{}", s)
    }
}

/// A built-in or freestanding feature of a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Kind of feature
    pub kind: FeatureKind,

    /// Wall the feature is embedded in (wall-embedded kinds only)
    pub wall: Option<WallDirection>,

    /// Width in feet (along the wall, or the footprint's east-west side)
    pub width_ft: f64,

    /// Depth in feet: protrusion beyond the wall for embedded kinds, floor
    /// footprint north-south side for freestanding kinds
    pub depth_ft: f64,

    /// Position along the wall (wall-embedded kinds only)
    pub position: Option<WallPosition>,

    /// Which corner a numeric position is measured from
    pub position_from: PositionFrom,

    /// Offset from the west wall in feet (freestanding kinds only)
    pub x_offset_ft: Option<f64>,

    /// Offset from the south wall in feet (freestanding kinds only)
    pub y_offset_ft: Option<f64>,

    /// Timestamp when this feature was recorded
    pub created_at: DateTime<Utc>,
}

impl Feature {
    /// Create a wall-embedded feature.
    pub fn embedded(
        kind: FeatureKind,
        wall: WallDirection,
        width_ft: f64,
        depth_ft: f64,
        position: WallPosition,
        position_from: PositionFrom,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            kind,
            wall: Some(wall),
            width_ft,
            depth_ft,
            position: Some(position),
            position_from,
            x_offset_ft: None,
            y_offset_ft: None,
            created_at: Utc::now(),
        }
    }

    /// Create a freestanding feature located by floor offsets.
    pub fn freestanding(
        kind: FeatureKind,
        width_ft: f64,
        depth_ft: f64,
        x_offset_ft: f64,
        y_offset_ft: f64,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            kind,
            wall: None,
            width_ft,
            depth_ft,
            position: None,
            position_from: PositionFrom::Start,
            x_offset_ft: Some(x_offset_ft),
            y_offset_ft: Some(y_offset_ft),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(FeatureKind::parse("bump out"), FeatureKind::BumpOut);
        assert_eq!(FeatureKind::parse("Island"), FeatureKind::Island);
        assert_eq!(FeatureKind::parse("shelving"), FeatureKind::BuiltIn);
    }

    #[test]
    fn test_freestanding_distinction() {
        assert!(FeatureKind::Island.is_freestanding());
        assert!(FeatureKind::Peninsula.is_freestanding());
        assert!(!FeatureKind::Closet.is_freestanding());

        let island = Feature::freestanding(FeatureKind::Island, 6.0, 3.0, 4.0, 5.0);
        assert!(island.wall.is_none());
        assert_eq!(island.x_offset_ft, Some(4.0));

        let closet = Feature::embedded(
            FeatureKind::Closet,
            WallDirection::East,
            4.0,
            2.0,
            WallPosition::default(),
            PositionFrom::Start,
        );
        assert_eq!(closet.wall, Some(WallDirection::East));
        assert!(closet.x_offset_ft.is_none());
    }
}
