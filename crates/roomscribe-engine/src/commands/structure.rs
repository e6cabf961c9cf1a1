//! Structure commands: create, edit, delete, select.

use serde::{Deserialize, Serialize};

use roomscribe_core::errors::{Result, RoomscribeError};
use roomscribe_core::model::{Structure, StructureCategory};

use super::{finish, raw_params};
use crate::session::Session;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateStructureParams {
    /// Structure name, as dictated
    pub name: String,
    /// Building category keyword; unknown values become `other`
    pub category: Option<String>,
    pub stories: Option<u32>,
    pub year_built: Option<i32>,
    pub construction: Option<String>,
}

/// Create a structure and make it the current selection.
pub fn create_structure(session: &mut Session, params: CreateStructureParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_create(session, params);
    finish(session, "create_structure", raw, outcome)
}

fn apply_create(session: &mut Session, params: CreateStructureParams) -> Result<String> {
    let category = params
        .category
        .as_deref()
        .map(StructureCategory::parse)
        .unwrap_or_default();
    let mut structure = Structure::new(params.name.clone(), category);
    structure.stories = params.stories;
    structure.year_built = params.year_built;
    structure.construction = params.construction;

    let message = format!(
        "Created structure '{}' ({}) - now selected",
        structure.name, structure.category
    );
    session.current_structure_id = Some(structure.id.clone());
    session.structures.push(structure);
    Ok(message)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditStructureParams {
    /// Id or name of the structure; the current selection when omitted
    pub structure: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub stories: Option<u32>,
    pub year_built: Option<i32>,
    pub construction: Option<String>,
}

/// Edit a structure, applying only the fields present.
pub fn edit_structure(session: &mut Session, params: EditStructureParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_edit(session, params);
    finish(session, "edit_structure", raw, outcome)
}

fn apply_edit(session: &mut Session, params: EditStructureParams) -> Result<String> {
    if params.name.is_none()
        && params.category.is_none()
        && params.stories.is_none()
        && params.year_built.is_none()
        && params.construction.is_none()
    {
        return Err(RoomscribeError::NoChangesSpecified);
    }

    let reference = match &params.structure {
        Some(r) => r.clone(),
        None => session
            .current_structure()
            .map(|s| s.id.clone())
            .ok_or_else(|| RoomscribeError::StructureNotFound {
                reference: "(current selection)".to_string(),
            })?,
    };

    let structure = session.find_structure_mut(&reference)?;
    if let Some(name) = params.name {
        structure.name = name;
    }
    if let Some(category) = params.category.as_deref() {
        structure.category = StructureCategory::parse(category);
    }
    if params.stories.is_some() {
        structure.stories = params.stories;
    }
    if params.year_built.is_some() {
        structure.year_built = params.year_built;
    }
    if params.construction.is_some() {
        structure.construction = params.construction;
    }
    structure.updated_at = chrono::Utc::now();
    Ok(format!("Updated structure '{}'", structure.name))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteStructureParams {
    /// Id or name of the structure to delete
    pub structure: String,
}

/// Delete a structure and every room it owns.
///
/// Deleting the currently selected structure clears the selection.
pub fn delete_structure(session: &mut Session, params: DeleteStructureParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_delete(session, params);
    finish(session, "delete_structure", raw, outcome)
}

fn apply_delete(session: &mut Session, params: DeleteStructureParams) -> Result<String> {
    let idx = session
        .find_structure_index(&params.structure)
        .ok_or_else(|| RoomscribeError::StructureNotFound {
            reference: params.structure.clone(),
        })?;
    let structure = session.structures.remove(idx);

    // Cascade: the structure exclusively owns its rooms.
    let before = session.rooms.len();
    session
        .rooms
        .retain(|r| r.structure_id.as_deref() != Some(structure.id.as_str()));
    let removed_rooms = before - session.rooms.len();

    if session.current_structure_id.as_deref() == Some(structure.id.as_str()) {
        session.current_structure_id = None;
    }

    Ok(format!(
        "Deleted structure '{}' and {} room(s)",
        structure.name, removed_rooms
    ))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectStructureParams {
    /// Id or name of the structure to select
    pub structure: String,
}

/// Move the selection cursor to a structure.
pub fn select_structure(session: &mut Session, params: SelectStructureParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_select(session, params);
    finish(session, "select_structure", raw, outcome)
}

fn apply_select(session: &mut Session, params: SelectStructureParams) -> Result<String> {
    let idx = session
        .find_structure_index(&params.structure)
        .ok_or_else(|| RoomscribeError::StructureNotFound {
            reference: params.structure.clone(),
        })?;
    let structure = &session.structures[idx];
    session.current_structure_id = Some(structure.id.clone());
    Ok(format!("Selected structure '{}'", structure.name))
}
