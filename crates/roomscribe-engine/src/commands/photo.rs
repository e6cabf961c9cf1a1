//! Photo attachment command.
//!
//! Photos are the one command family returning a result record instead of a
//! plain string: the capture collaborator needs the generated id and content
//! hash back. The dispatch is still logged like every other command.

use serde::{Deserialize, Serialize};

use roomscribe_core::errors::{Result, RoomscribeError};
use roomscribe_core::model::Photo;

use crate::session::Session;

use super::raw_params;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachPhotoParams {
    /// Capture reference (URI or file path) from the photo collaborator
    pub reference: String,
    pub caption: Option<String>,
    /// Id or name of a structure to attach to; the draft room when omitted
    pub structure: Option<String>,
}

/// What an attached photo resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoAttachResult {
    /// Generated photo id
    pub id: String,
    /// `room '<name>'` or `structure '<name>'`
    pub attached_to: String,
    /// SHA-256 hash of the capture reference
    pub content_hash: String,
}

/// Attach a photo record to the draft room or a structure.
///
/// # Errors
///
/// Fails when no draft room exists (and no structure was named) or the named
/// structure cannot be found; the dispatcher renders the error as its usual
/// `Error:` string.
pub fn attach_photo(
    session: &mut Session,
    params: AttachPhotoParams,
) -> Result<PhotoAttachResult> {
    let raw = raw_params(&params);
    let outcome = apply_attach(session, params);
    match &outcome {
        Ok(result) => {
            let message = format!("Attached photo to {}", result.attached_to);
            session.record("attach_photo", raw, &message);
        }
        Err(err) => {
            let message = format!("Error: {}", err);
            session.record("attach_photo", raw, &message);
        }
    }
    outcome
}

fn apply_attach(session: &mut Session, params: AttachPhotoParams) -> Result<PhotoAttachResult> {
    let photo = Photo::new(params.reference.clone(), params.caption.clone());
    let result_id = photo.id.clone();
    let content_hash = photo.content_hash.clone();

    let attached_to = match params.structure.as_deref() {
        Some(reference) => {
            let idx = session.find_structure_index(reference).ok_or_else(|| {
                RoomscribeError::StructureNotFound {
                    reference: reference.to_string(),
                }
            })?;
            let structure = &mut session.structures[idx];
            structure.photos.push(photo);
            format!("structure '{}'", structure.name)
        }
        None => {
            session.require_draft_ref()?;
            session.push_undo();
            let draft = session.require_draft()?;
            draft.photos.push(photo);
            format!("room '{}'", draft.name)
        }
    };

    Ok(PhotoAttachResult {
        id: result_id,
        attached_to,
        content_hash,
    })
}
