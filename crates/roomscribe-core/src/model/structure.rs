use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::annotation::{Note, Photo};

/// Building category for a documented structure.
///
/// Unrecognized spoken categories fall back to `Other` rather than failing
/// the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureCategory {
    #[default]
    MainDwelling,
    AttachedGarage,
    DetachedGarage,
    Shed,
    GuestHouse,
    PoolHouse,
    Barn,
    Other,
}

impl StructureCategory {
    /// Parse a spoken category; unknown values default to `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "main_dwelling" | "main_house" | "house" | "dwelling" => {
                StructureCategory::MainDwelling
            }
            "attached_garage" => StructureCategory::AttachedGarage,
            "detached_garage" | "garage" => StructureCategory::DetachedGarage,
            "shed" => StructureCategory::Shed,
            "guest_house" => StructureCategory::GuestHouse,
            "pool_house" => StructureCategory::PoolHouse,
            "barn" => StructureCategory::Barn,
            _ => StructureCategory::Other,
        }
    }
}

impl fmt::Display for StructureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StructureCategory::MainDwelling => "main_dwelling",
            StructureCategory::AttachedGarage => "attached_garage",
            StructureCategory::DetachedGarage => "detached_garage",
            StructureCategory::Shed => "shed",
            StructureCategory::GuestHouse => "guest_house",
            StructureCategory::PoolHouse => "pool_house",
            StructureCategory::Barn => "barn",
            StructureCategory::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// A building or detached unit under documentation
///
/// Structures own their rooms: deleting a structure cascades to every room
/// recorded against it. At most one structure is "current" at a time; new
/// rooms are assigned to the current structure unless an explicit structure
/// id is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Human-readable name, as dictated
    pub name: String,

    /// Building category
    pub category: StructureCategory,

    /// Number of stories, when stated
    pub stories: Option<u32>,

    /// Year built, when stated
    pub year_built: Option<i32>,

    /// Free-text construction description (framing, cladding, ...)
    pub construction: Option<String>,

    /// IDs of rooms owned by this structure (room records live in the
    /// session's confirmed list)
    pub room_ids: Vec<String>,

    /// Photos attached directly to the structure
    pub photos: Vec<Photo>,

    /// Notes attached directly to the structure
    pub notes: Vec<Note>,

    /// Timestamp when this structure was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this structure was last updated
    pub updated_at: DateTime<Utc>,
}

impl Structure {
    /// Create a new structure with the given name and category.
    ///
    /// Generates a UUID v7 for deterministic time-ordered ids.
    pub fn new(name: String, category: StructureCategory) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7().to_string(),
            name,
            category,
            stories: None,
            year_built: None,
            construction: None,
            room_ids: Vec::new(),
            photos: Vec::new(),
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive match against an id or spoken name.
    pub fn matches(&self, reference: &str) -> bool {
        self.id == reference || self.name.eq_ignore_ascii_case(reference.trim())
    }

    /// Record a room as owned by this structure.
    pub fn add_room_id(&mut self, room_id: String) {
        if !self.room_ids.contains(&room_id) {
            self.room_ids.push(room_id);
        }
    }

    /// Drop a room from this structure's ownership list.
    pub fn remove_room_id(&mut self, room_id: &str) {
        self.room_ids.retain(|id| id != room_id);
    }
}
