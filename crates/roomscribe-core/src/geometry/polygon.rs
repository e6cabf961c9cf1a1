//! Room outline synthesis.
//!
//! Maps a shape plus real-world dimensions to an ordered vertex sequence in
//! feet. Room-local origin is the north-west corner of the main body, x
//! increasing east, y increasing south; vertices run clockwise. Synthesis is
//! a pure function: identical inputs always yield identical polygons.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Result, RoomscribeError};
use crate::geometry::wall::WallDirection;

/// A vertex in room-local coordinates, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Supported room topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    LShape,
    TShape,
    Irregular,
}

impl ShapeKind {
    /// Parse a shape keyword.
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` for anything but the four supported topologies.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rectangle" | "rectangular" | "rect" => Ok(ShapeKind::Rectangle),
            "l_shape" | "l-shape" | "l" => Ok(ShapeKind::LShape),
            "t_shape" | "t-shape" | "t" => Ok(ShapeKind::TShape),
            "irregular" => Ok(ShapeKind::Irregular),
            _ => Err(RoomscribeError::UnknownShape {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::LShape => "l_shape",
            ShapeKind::TShape => "t_shape",
            ShapeKind::Irregular => "irregular",
        };
        write!(f, "{}", s)
    }
}

/// A corner of the room's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    Ne,
    Nw,
    Se,
    Sw,
}

impl Corner {
    /// Parse a corner keyword (`ne`, `northeast`, `north_east`, ...).
    ///
    /// # Errors
    ///
    /// Returns `UnknownCorner` for unrecognized keywords.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "ne" | "northeast" => Ok(Corner::Ne),
            "nw" | "northwest" => Ok(Corner::Nw),
            "se" | "southeast" => Ok(Corner::Se),
            "sw" | "southwest" => Ok(Corner::Sw),
            _ => Err(RoomscribeError::UnknownCorner {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Corner::Ne => "ne",
            Corner::Nw => "nw",
            Corner::Se => "se",
            Corner::Sw => "sw",
        };
        write!(f, "{}", s)
    }
}

/// Notch configuration for an L-shaped room.
///
/// The notch is the rectangle carved out of the named bounding-box corner;
/// width runs east-west, length north-south.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LShapeConfig {
    pub notch_corner: Corner,
    pub notch_width_ft: f64,
    pub notch_length_ft: f64,
}

/// Stem configuration for a T-shaped room.
///
/// The stem is the rectangle protruding outward from `stem_wall`, spanning
/// `stem_width_ft` along the wall starting `stem_position_ft` from the wall's
/// start corner, and reaching `stem_length_ft` out from the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TShapeConfig {
    pub stem_wall: WallDirection,
    pub stem_width_ft: f64,
    pub stem_length_ft: f64,
    pub stem_position_ft: f64,
}

/// Synthesize the ordered vertex sequence for a room outline.
///
/// Deterministic and side-effect free; re-invocation with identical inputs
/// yields an identical polygon. Stem overflow past the end of its wall is
/// the caller's concern - the synthesizer only generates geometry.
///
/// # Errors
///
/// Fails only on malformed numeric input: non-positive dimensions, a notch
/// or stem at least as large as the bounding box, a missing L/T config, or
/// an irregular outline with fewer than three vertices.
pub fn synthesize(
    shape: ShapeKind,
    width_ft: f64,
    length_ft: f64,
    l_config: Option<&LShapeConfig>,
    t_config: Option<&TShapeConfig>,
    vertices: Option<&[Point]>,
) -> Result<Vec<Point>> {
    if shape != ShapeKind::Irregular {
        require_positive("room width", width_ft)?;
        require_positive("room length", length_ft)?;
    }

    match shape {
        ShapeKind::Rectangle => Ok(rectangle(width_ft, length_ft)),
        ShapeKind::LShape => {
            let cfg = l_config.ok_or_else(|| RoomscribeError::MissingShapeConfig {
                shape: "l_shape".to_string(),
            })?;
            l_shape(width_ft, length_ft, cfg)
        }
        ShapeKind::TShape => {
            let cfg = t_config.ok_or_else(|| RoomscribeError::MissingShapeConfig {
                shape: "t_shape".to_string(),
            })?;
            t_shape(width_ft, length_ft, cfg)
        }
        ShapeKind::Irregular => {
            let verts = vertices.unwrap_or_default();
            if verts.len() < 3 {
                return Err(RoomscribeError::TooFewVertices { count: verts.len() });
            }
            Ok(verts.to_vec())
        }
    }
}

fn require_positive(what: &str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(RoomscribeError::NonPositiveDimension {
            what: what.to_string(),
            value,
        })
    }
}

/// Four corners clockwise from the north-west origin.
fn rectangle(w: f64, l: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, l),
        Point::new(0.0, l),
    ]
}

/// Rectangle with one corner replaced by the two corners of the notch
/// cut-out; always six vertices.
fn l_shape(w: f64, l: f64, cfg: &LShapeConfig) -> Result<Vec<Point>> {
    require_positive("notch width", cfg.notch_width_ft)?;
    require_positive("notch length", cfg.notch_length_ft)?;
    let (nw, nl) = (cfg.notch_width_ft, cfg.notch_length_ft);
    if nw >= w || nl >= l {
        return Err(RoomscribeError::NotchExceedsBounds {
            notch_width_ft: nw,
            notch_length_ft: nl,
            width_ft: w,
            length_ft: l,
        });
    }

    let polygon = match cfg.notch_corner {
        Corner::Ne => vec![
            Point::new(0.0, 0.0),
            Point::new(w - nw, 0.0),
            Point::new(w - nw, nl),
            Point::new(w, nl),
            Point::new(w, l),
            Point::new(0.0, l),
        ],
        Corner::Nw => vec![
            Point::new(nw, 0.0),
            Point::new(w, 0.0),
            Point::new(w, l),
            Point::new(0.0, l),
            Point::new(0.0, nl),
            Point::new(nw, nl),
        ],
        Corner::Se => vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, l - nl),
            Point::new(w - nw, l - nl),
            Point::new(w - nw, l),
            Point::new(0.0, l),
        ],
        Corner::Sw => vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, l),
            Point::new(nw, l),
            Point::new(nw, l - nl),
            Point::new(0.0, l - nl),
        ],
    };
    Ok(polygon)
}

/// Main-body rectangle with four extra vertices for the stem protruding
/// outward from the stem wall; always eight vertices.
fn t_shape(w: f64, l: f64, cfg: &TShapeConfig) -> Result<Vec<Point>> {
    require_positive("stem width", cfg.stem_width_ft)?;
    require_positive("stem length", cfg.stem_length_ft)?;
    let (sw, sl, p) = (cfg.stem_width_ft, cfg.stem_length_ft, cfg.stem_position_ft);
    let wall_span = if cfg.stem_wall.runs_east_west() { w } else { l };
    if sw >= wall_span {
        return Err(RoomscribeError::StemExceedsBounds {
            stem_width_ft: sw,
            stem_length_ft: sl,
            width_ft: w,
            length_ft: l,
        });
    }

    let polygon = match cfg.stem_wall {
        WallDirection::North => vec![
            Point::new(0.0, 0.0),
            Point::new(p, 0.0),
            Point::new(p, -sl),
            Point::new(p + sw, -sl),
            Point::new(p + sw, 0.0),
            Point::new(w, 0.0),
            Point::new(w, l),
            Point::new(0.0, l),
        ],
        WallDirection::East => vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, p),
            Point::new(w + sl, p),
            Point::new(w + sl, p + sw),
            Point::new(w, p + sw),
            Point::new(w, l),
            Point::new(0.0, l),
        ],
        WallDirection::South => vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, l),
            Point::new(p + sw, l),
            Point::new(p + sw, l + sl),
            Point::new(p, l + sl),
            Point::new(p, l),
            Point::new(0.0, l),
        ],
        WallDirection::West => vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, l),
            Point::new(0.0, l),
            Point::new(0.0, p + sw),
            Point::new(-sl, p + sw),
            Point::new(-sl, p),
            Point::new(0.0, p),
        ],
    };
    Ok(polygon)
}
