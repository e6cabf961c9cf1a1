use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::annotation::{Note, Photo};
use super::damage::DamageZone;
use super::feature::Feature;
use super::object::StoredObject;
use super::opening::Opening;
use crate::errors::Result;
use crate::geometry::{
    synthesize, wall_length, LShapeConfig, Point, ShapeKind, TShapeConfig, WallDirection,
};

/// Per-wall material/condition record kept alongside the room geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallProperties {
    /// Wall these properties describe
    pub wall: WallDirection,

    /// Wall material (drywall, plaster, paneling, ...), when stated
    pub material: Option<String>,

    /// Condition description, when stated
    pub condition: Option<String>,
}

/// Normalize a dictated room name: lowercase, spaces to underscores.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// A room under documentation - the central entity of the model
///
/// The polygon is always a pure function of (shape, dimensions, shape
/// config): it is regenerated through [`Room::resynthesize`] whenever any of
/// those change, never hand-edited. A sub-room is an ordinary room record
/// carrying a `parent_room_id` back-reference, not a nested container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Normalized name (lowercase, spaces to underscores)
    pub name: String,

    /// Room topology
    pub shape: ShapeKind,

    /// East-west extent of the bounding box, in feet
    pub width_ft: f64,

    /// North-south extent of the bounding box, in feet
    pub length_ft: f64,

    /// Ceiling height in feet; 0 is permitted for exterior zones such as a
    /// roof or elevation
    pub ceiling_height_ft: f64,

    /// Flooring type, when stated
    pub flooring: Option<String>,

    /// Notch configuration (L-shaped rooms)
    pub l_config: Option<LShapeConfig>,

    /// Stem configuration (T-shaped rooms)
    pub t_config: Option<TShapeConfig>,

    /// Explicit outline for irregular rooms
    pub irregular_vertices: Option<Vec<Point>>,

    /// Derived outline - regenerate via [`Room::resynthesize`], never edit
    pub polygon: Vec<Point>,

    /// Openings set into the walls
    pub openings: Vec<Opening>,

    /// Built-in and freestanding features
    pub features: Vec<Feature>,

    /// Recorded damage zones
    pub damage_zones: Vec<DamageZone>,

    /// Free-text notes
    pub notes: Vec<Note>,

    /// Contents inventory
    pub objects: Vec<StoredObject>,

    /// Attached photos
    pub photos: Vec<Photo>,

    /// Per-wall material/condition records
    pub wall_properties: Vec<WallProperties>,

    /// Owning structure, when assigned
    pub structure_id: Option<String>,

    /// Parent room for sub-rooms (shallow back-reference)
    pub parent_room_id: Option<String>,

    /// Hierarchy level tag (`room` or `sub_room`)
    pub hierarchy_level: String,

    /// Timestamp when this room was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this room was last updated
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Create a room, normalizing the name and synthesizing the polygon.
    ///
    /// # Errors
    ///
    /// Fails when the polygon cannot be synthesized from the given shape and
    /// dimensions (see [`synthesize`]).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        shape: ShapeKind,
        width_ft: f64,
        length_ft: f64,
        ceiling_height_ft: f64,
        l_config: Option<LShapeConfig>,
        t_config: Option<TShapeConfig>,
        irregular_vertices: Option<Vec<Point>>,
    ) -> Result<Self> {
        let polygon = synthesize(
            shape,
            width_ft,
            length_ft,
            l_config.as_ref(),
            t_config.as_ref(),
            irregular_vertices.as_deref(),
        )?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7().to_string(),
            name: normalize_name(name),
            shape,
            width_ft,
            length_ft,
            ceiling_height_ft,
            flooring: None,
            l_config,
            t_config,
            irregular_vertices,
            polygon,
            openings: Vec::new(),
            features: Vec::new(),
            damage_zones: Vec::new(),
            notes: Vec::new(),
            objects: Vec::new(),
            photos: Vec::new(),
            wall_properties: Vec::new(),
            structure_id: None,
            parent_room_id: None,
            hierarchy_level: "room".to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Regenerate the polygon from the current shape, dimensions, and config.
    ///
    /// Must be called after any change to those fields; the polygon is never
    /// edited directly.
    ///
    /// # Errors
    ///
    /// Fails when the current fields no longer form a valid shape; the
    /// polygon is left unchanged in that case.
    pub fn resynthesize(&mut self) -> Result<()> {
        let polygon = synthesize(
            self.shape,
            self.width_ft,
            self.length_ft,
            self.l_config.as_ref(),
            self.t_config.as_ref(),
            self.irregular_vertices.as_deref(),
        )?;
        self.polygon = polygon;
        self.updated_at = Utc::now();
        debug!(room = %self.name, shape = %self.shape, "polygon regenerated");
        Ok(())
    }

    /// Length of the given wall under the bounding-box approximation.
    #[must_use]
    pub fn wall_length_ft(&self, wall: WallDirection) -> f64 {
        wall_length(wall, self.width_ft, self.length_ft)
    }

    /// Whether this room is a sub-room of another.
    pub fn is_sub_room(&self) -> bool {
        self.parent_room_id.is_some()
    }

    /// Set or merge the properties record for a wall.
    pub fn set_wall_properties(
        &mut self,
        wall: WallDirection,
        material: Option<String>,
        condition: Option<String>,
    ) {
        if let Some(existing) = self.wall_properties.iter_mut().find(|p| p.wall == wall) {
            if material.is_some() {
                existing.material = material;
            }
            if condition.is_some() {
                existing.condition = condition;
            }
        } else {
            self.wall_properties.push(WallProperties {
                wall,
                material,
                condition,
            });
        }
        self.updated_at = Utc::now();
    }
}
