pub mod damage;
pub mod polygon;
pub mod wall;

pub use damage::damage_footprint;
pub use polygon::{synthesize, Corner, LShapeConfig, Point, ShapeKind, TShapeConfig};
pub use wall::{
    resolve_position, wall_length, NamedPosition, PositionFrom, WallDirection, WallPosition,
};
