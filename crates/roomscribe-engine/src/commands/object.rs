//! Contents inventory commands: add, edit, delete.

use serde::{Deserialize, Serialize};

use roomscribe_core::errors::{Result, RoomscribeError};
use roomscribe_core::model::StoredObject;
use roomscribe_core::resolver::{resolve_index, Selector};

use super::{finish, raw_params};
use crate::session::Session;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddObjectParams {
    /// Item name, as dictated
    pub name: String,
    pub category: Option<String>,
    /// Item count; 1 when omitted
    pub quantity: Option<u32>,
    pub condition: Option<String>,
    pub description: Option<String>,
}

/// Record a contents item in the draft room's inventory.
pub fn add_object(session: &mut Session, params: AddObjectParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_add(session, params);
    finish(session, "add_object", raw, outcome)
}

fn apply_add(session: &mut Session, params: AddObjectParams) -> Result<String> {
    session.require_draft_ref()?;

    let mut object = StoredObject::new(params.name.clone(), params.quantity);
    object.category = params.category.clone();
    object.condition = params.condition.clone();
    object.description = params.description.clone();
    let message = format!("Added {}x {} to the inventory", object.quantity, object.name);

    session.push_undo();
    session.require_draft()?.objects.push(object);
    Ok(message)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectSelectorParams {
    /// Zero-based index into the draft's inventory list
    pub index: Option<usize>,
    pub id: Option<String>,
    /// Item name or category
    pub name: Option<String>,
}

impl ObjectSelectorParams {
    fn selector(&self) -> Selector {
        Selector {
            index: self.index,
            id: self.id.clone(),
            wall: None,
            kind: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditObjectParams {
    #[serde(flatten)]
    pub selector: ObjectSelectorParams,
    pub new_name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub condition: Option<String>,
    pub description: Option<String>,
}

/// Edit an inventory item, applying only the fields present.
pub fn edit_object(session: &mut Session, params: EditObjectParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_edit(session, params);
    finish(session, "edit_object", raw, outcome)
}

fn apply_edit(session: &mut Session, params: EditObjectParams) -> Result<String> {
    if params.new_name.is_none()
        && params.category.is_none()
        && params.quantity.is_none()
        && params.condition.is_none()
        && params.description.is_none()
    {
        return Err(RoomscribeError::NoChangesSpecified);
    }

    let selector = params.selector.selector();
    let draft = session.require_draft_ref()?;
    let idx = resolve_index(&draft.objects, &selector, "object")?;

    let mut object = draft.objects[idx].clone();
    if let Some(name) = params.new_name.clone() {
        object.name = name;
    }
    if params.category.is_some() {
        object.category = params.category.clone();
    }
    if let Some(quantity) = params.quantity {
        object.quantity = quantity;
    }
    if params.condition.is_some() {
        object.condition = params.condition.clone();
    }
    if params.description.is_some() {
        object.description = params.description.clone();
    }
    object.updated_at = chrono::Utc::now();

    let message = format!("Updated {} in the inventory", object.name);
    session.push_undo();
    session.require_draft()?.objects[idx] = object;
    Ok(message)
}

/// Delete an inventory item located through the disambiguation chain.
pub fn delete_object(session: &mut Session, params: ObjectSelectorParams) -> String {
    let raw = raw_params(&params);
    let outcome = apply_delete(session, params);
    finish(session, "delete_object", raw, outcome)
}

fn apply_delete(session: &mut Session, params: ObjectSelectorParams) -> Result<String> {
    let selector = params.selector();
    let draft = session.require_draft_ref()?;
    let idx = resolve_index(&draft.objects, &selector, "object")?;
    let message = format!("Removed {} from the inventory", draft.objects[idx].name);
    session.push_undo();
    session.require_draft()?.objects.remove(idx);
    Ok(message)
}
