//! Wall coordinate resolution.
//!
//! Positions along a wall are measured in feet from the wall's start corner:
//! north and south walls start at their west corner, east and west walls at
//! their north corner. A named position (left/center/right) or a numeric
//! offset plus a [`PositionFrom`] origin resolves to an absolute offset.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Result, RoomscribeError};

/// Clearance kept between a named left/right placement and the wall corner.
pub const EDGE_CLEARANCE_FT: f64 = 0.5;

/// One of the four cardinal walls of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallDirection {
    North,
    East,
    South,
    West,
}

impl WallDirection {
    /// Parse a wall reference: a cardinal name or a synthetic `wall_N` index.
    ///
    /// `wall_N` is 1-based and cycles north, east, south, west.
    ///
    /// # Errors
    ///
    /// Returns `UnknownWall` if the reference matches neither form.
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "north" => return Ok(WallDirection::North),
            "east" => return Ok(WallDirection::East),
            "south" => return Ok(WallDirection::South),
            "west" => return Ok(WallDirection::West),
            _ => {}
        }
        if let Some(n) = normalized.strip_prefix("wall_") {
            if let Ok(n) = n.parse::<usize>() {
                if n >= 1 {
                    return Ok(WallDirection::from_index(n - 1));
                }
            }
        }
        Err(RoomscribeError::UnknownWall {
            value: s.to_string(),
        })
    }

    /// Wall for a 0-based index, cycling north, east, south, west.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => WallDirection::North,
            1 => WallDirection::East,
            2 => WallDirection::South,
            _ => WallDirection::West,
        }
    }

    /// Whether this wall runs east-west (north/south walls do).
    ///
    /// East-west walls span the room's width; north-south walls span its
    /// length.
    pub fn runs_east_west(&self) -> bool {
        matches!(self, WallDirection::North | WallDirection::South)
    }
}

impl fmt::Display for WallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WallDirection::North => "north",
            WallDirection::East => "east",
            WallDirection::South => "south",
            WallDirection::West => "west",
        };
        write!(f, "{}", s)
    }
}

/// Named coarse positions along a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedPosition {
    Left,
    Center,
    Right,
}

/// A wall-relative position: a named keyword or a numeric offset in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WallPosition {
    Named(NamedPosition),
    Offset(f64),
}

impl WallPosition {
    /// Parse a position: `left`/`center`/`right` or a number of feet.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPosition` if the value is neither a keyword nor numeric.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(WallPosition::Named(NamedPosition::Left)),
            "center" | "middle" => Ok(WallPosition::Named(NamedPosition::Center)),
            "right" => Ok(WallPosition::Named(NamedPosition::Right)),
            other => other
                .parse::<f64>()
                .map(WallPosition::Offset)
                .map_err(|_| RoomscribeError::UnknownPosition {
                    value: s.to_string(),
                }),
        }
    }
}

impl Default for WallPosition {
    fn default() -> Self {
        WallPosition::Named(NamedPosition::Center)
    }
}

/// Which corner of the wall a numeric position is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionFrom {
    #[default]
    Start,
    End,
}

/// Length of the given wall under the bounding-box approximation.
///
/// North/south walls span `width_ft`; east/west walls span `length_ft`.
/// L/T notches and stems are deliberately not subtracted - openings placed
/// near a notch inherit this approximation.
#[must_use]
pub fn wall_length(direction: WallDirection, width_ft: f64, length_ft: f64) -> f64 {
    if direction.runs_east_west() {
        width_ft
    } else {
        length_ft
    }
}

/// Resolve a wall-relative position to an absolute offset from the wall's
/// start corner, in feet.
///
/// `element_width_ft` is the width of the element being placed; named
/// left/right placements sit half the element width plus [`EDGE_CLEARANCE_FT`]
/// in from the corner. Numeric positions measured from [`PositionFrom::End`]
/// count back from the far corner.
///
/// When `clamp` is set the result is held to
/// `[half_width, wall_len - half_width]`; initial placement passes `false`
/// and accepts out-of-bounds dictation as given, the dedicated move-along-wall
/// operation passes `true`.
#[must_use]
pub fn resolve_position(
    wall_len: f64,
    position: WallPosition,
    position_from: PositionFrom,
    element_width_ft: f64,
    clamp: bool,
) -> f64 {
    let half = element_width_ft / 2.0;
    let offset = match position {
        WallPosition::Named(NamedPosition::Left) => half + EDGE_CLEARANCE_FT,
        WallPosition::Named(NamedPosition::Center) => wall_len / 2.0,
        WallPosition::Named(NamedPosition::Right) => wall_len - half - EDGE_CLEARANCE_FT,
        WallPosition::Offset(v) => match position_from {
            PositionFrom::Start => v,
            PositionFrom::End => wall_len - v,
        },
    };
    if clamp {
        // An element wider than its wall still gets a bounded offset.
        let min = half.min(wall_len - half);
        let max = (wall_len - half).max(half);
        offset.clamp(min, max)
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wall_length_duality() {
        assert_eq!(wall_length(WallDirection::North, 16.0, 14.0), 16.0);
        assert_eq!(wall_length(WallDirection::South, 16.0, 14.0), 16.0);
        assert_eq!(wall_length(WallDirection::East, 16.0, 14.0), 14.0);
        assert_eq!(wall_length(WallDirection::West, 16.0, 14.0), 14.0);
    }

    #[test]
    fn test_parse_cardinal_and_index() {
        assert_eq!(WallDirection::parse("north").unwrap(), WallDirection::North);
        assert_eq!(WallDirection::parse(" West ").unwrap(), WallDirection::West);
        assert_eq!(WallDirection::parse("wall_1").unwrap(), WallDirection::North);
        assert_eq!(WallDirection::parse("wall_2").unwrap(), WallDirection::East);
        assert_eq!(WallDirection::parse("wall_4").unwrap(), WallDirection::West);
        // Index cycles past the fourth wall
        assert_eq!(WallDirection::parse("wall_5").unwrap(), WallDirection::North);
        assert!(WallDirection::parse("ceiling").is_err());
        assert!(WallDirection::parse("wall_0").is_err());
    }

    #[test]
    fn test_named_positions() {
        // 3 ft door on a 16 ft wall
        let left = resolve_position(
            16.0,
            WallPosition::Named(NamedPosition::Left),
            PositionFrom::Start,
            3.0,
            false,
        );
        assert_eq!(left, 2.0);

        let center = resolve_position(
            16.0,
            WallPosition::Named(NamedPosition::Center),
            PositionFrom::Start,
            3.0,
            false,
        );
        assert_eq!(center, 8.0);

        let right = resolve_position(
            16.0,
            WallPosition::Named(NamedPosition::Right),
            PositionFrom::Start,
            3.0,
            false,
        );
        assert_eq!(right, 14.0);
    }

    #[test]
    fn test_numeric_position_from_end() {
        let from_end = resolve_position(
            16.0,
            WallPosition::Offset(4.0),
            PositionFrom::End,
            3.0,
            false,
        );
        assert_eq!(from_end, 12.0);
    }

    #[test]
    fn test_unclamped_placement_accepts_out_of_bounds() {
        let off = resolve_position(
            10.0,
            WallPosition::Offset(14.0),
            PositionFrom::Start,
            3.0,
            false,
        );
        assert_eq!(off, 14.0);
    }

    #[test]
    fn test_clamped_move_stays_on_wall() {
        let off = resolve_position(
            10.0,
            WallPosition::Offset(14.0),
            PositionFrom::Start,
            3.0,
            true,
        );
        assert_eq!(off, 8.5);

        let off = resolve_position(
            10.0,
            WallPosition::Offset(-2.0),
            PositionFrom::Start,
            3.0,
            true,
        );
        assert_eq!(off, 1.5);
    }

    proptest! {
        /// A numeric offset measured from both ends of the same wall sums to
        /// the wall length.
        #[test]
        fn prop_position_symmetry(wall_len in 1.0f64..100.0, x in 0.0f64..100.0) {
            let from_start = resolve_position(
                wall_len, WallPosition::Offset(x), PositionFrom::Start, 0.0, false);
            let from_end = resolve_position(
                wall_len, WallPosition::Offset(x), PositionFrom::End, 0.0, false);
            prop_assert!((from_start + from_end - wall_len).abs() < 1e-9);
        }
    }
}
