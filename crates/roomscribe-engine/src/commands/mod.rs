//! Command operations - the engine's external boundary.
//!
//! One free function per supported command. Each takes the session plus a
//! plain parameter record, validates before mutating, and returns a
//! human-readable result string; errors come back as `Error:`-prefixed
//! strings rather than crossing the boundary as types. Every dispatch leaves
//! one command-log entry, success or failure.

pub mod damage;
pub mod feature;
pub mod object;
pub mod opening;
pub mod photo;
pub mod room;
pub mod structure;
pub mod wall;

pub use damage::{
    delete_damage_zone, edit_damage_zone, mark_damage, DamageSelectorParams, EditDamageZoneParams,
    MarkDamageParams,
};
pub use feature::{add_feature, delete_feature, AddFeatureParams, FeatureSelectorParams};
pub use object::{
    add_object, delete_object, edit_object, AddObjectParams, EditObjectParams,
    ObjectSelectorParams,
};
pub use opening::{
    add_opening, delete_opening, update_opening, AddOpeningParams, OpeningSelectorParams,
    UpdateOpeningParams,
};
pub use photo::{attach_photo, AttachPhotoParams, PhotoAttachResult};
pub use room::{
    add_note, confirm_room, create_room, delete_room, edit_room, modify_dimension, undo,
    AddNoteParams, ConfirmRoomParams, CreateRoomParams, DeleteRoomParams, EditRoomParams,
    ModifyDimensionParams, UndoParams,
};
pub use structure::{
    create_structure, delete_structure, edit_structure, select_structure, CreateStructureParams,
    DeleteStructureParams, EditStructureParams, SelectStructureParams,
};
pub use wall::{
    move_wall, select_wall, update_wall_properties, MoveWallParams, SelectWallParams,
    UpdateWallPropertiesParams,
};

use serde::Serialize;
use serde_json::Value;

use roomscribe_core::errors::Result;

use crate::session::Session;

/// Serialize a parameter record for the command log.
pub(crate) fn raw_params<P: Serialize>(params: &P) -> Value {
    serde_json::to_value(params).unwrap_or(Value::Null)
}

/// Render an operation outcome as the boundary string and log the dispatch.
pub(crate) fn finish(
    session: &mut Session,
    kind: &'static str,
    params: Value,
    outcome: Result<String>,
) -> String {
    let result = match outcome {
        Ok(message) => message,
        Err(err) => format!("Error: {}", err),
    };
    session.record(kind, params, &result);
    result
}

/// Format a length in feet without trailing noise (`16 ft`, `6.67 ft`).
pub(crate) fn fmt_ft(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{} ft", value.round() as i64)
    } else {
        format!("{} ft", value)
    }
}
