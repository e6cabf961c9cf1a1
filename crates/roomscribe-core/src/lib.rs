//! Roomscribe Core - domain layer of the room geometry command engine
//!
//! This crate provides the foundational data structures and pure geometry for
//! roomscribe, including:
//! - Structure/Room/Opening/Feature/DamageZone/StoredObject entity models
//! - Deterministic polygon synthesis for the four room topologies
//! - Wall coordinate resolution with two measurement origins per wall
//! - Damage footprint derivation from wall-plus-extent data
//! - The shared sub-entity disambiguation chain
//! - Error taxonomy and logging facility
//!
//! Session state, command dispatch, history, and undo live in the
//! `roomscribe-engine` crate on top of this one.

pub mod errors;
pub mod geometry;
pub mod logging_facility;
pub mod model;
pub mod resolver;

// Re-export commonly used types
pub use errors::{Result, RoomscribeError};
pub use geometry::{
    damage_footprint, resolve_position, synthesize, wall_length, Corner, LShapeConfig,
    NamedPosition, Point, PositionFrom, ShapeKind, TShapeConfig, WallDirection, WallPosition,
};
pub use model::{
    normalize_name, DamageKind, DamageZone, Feature, FeatureKind, Note, NoteTarget, Opening,
    OpeningKind, Photo, Room, StoredObject, Structure, StructureCategory, WallProperties,
    WaterCategory, DEFAULT_EXTENT_FT,
};
pub use resolver::{resolve_index, Resolvable, Selector};
