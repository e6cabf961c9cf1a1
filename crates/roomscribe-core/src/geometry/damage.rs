//! Damage footprint derivation.
//!
//! A damage zone recorded as walls-plus-extent resolves to one rectangular
//! strip per affected wall, inset `extent_ft` from that wall into the room's
//! bounding box. Rendering collaborators call this on demand; the zone itself
//! stores only the wall/extent data unless a freeform polygon was captured.

use crate::geometry::polygon::Point;
use crate::geometry::wall::WallDirection;

/// Derive the footprint strips for a walls-plus-extent damage zone.
///
/// Returns one clockwise rectangle per affected wall. Strips are clamped so
/// an extent deeper than the room never escapes the bounding box; opposite
/// walls with large extents simply overlap.
#[must_use]
pub fn damage_footprint(
    width_ft: f64,
    length_ft: f64,
    affected_walls: &[WallDirection],
    extent_ft: f64,
) -> Vec<Vec<Point>> {
    let depth_ns = extent_ft.min(length_ft);
    let depth_ew = extent_ft.min(width_ft);

    affected_walls
        .iter()
        .map(|wall| match wall {
            WallDirection::North => vec![
                Point::new(0.0, 0.0),
                Point::new(width_ft, 0.0),
                Point::new(width_ft, depth_ns),
                Point::new(0.0, depth_ns),
            ],
            WallDirection::South => vec![
                Point::new(0.0, length_ft - depth_ns),
                Point::new(width_ft, length_ft - depth_ns),
                Point::new(width_ft, length_ft),
                Point::new(0.0, length_ft),
            ],
            WallDirection::East => vec![
                Point::new(width_ft - depth_ew, 0.0),
                Point::new(width_ft, 0.0),
                Point::new(width_ft, length_ft),
                Point::new(width_ft - depth_ew, length_ft),
            ],
            WallDirection::West => vec![
                Point::new(0.0, 0.0),
                Point::new(depth_ew, 0.0),
                Point::new(depth_ew, length_ft),
                Point::new(0.0, length_ft),
            ],
        })
        .collect()
}
