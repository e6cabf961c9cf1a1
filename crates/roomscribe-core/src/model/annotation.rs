use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

use crate::geometry::WallDirection;

/// What a free-text note is attached to.
///
/// Parsed once at the command boundary so downstream consumers never match on
/// raw target strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reference", rename_all = "snake_case")]
pub enum NoteTarget {
    /// The room as a whole
    Room,
    /// A specific wall of the room
    Wall(WallDirection),
    /// A feature, referenced by the dictated description
    Feature(String),
    /// A damage zone, referenced by the dictated description
    DamageZone(String),
    /// Anything else the operator named
    Other(String),
}

impl NoteTarget {
    /// Parse a dictated target string.
    ///
    /// `room` (or nothing) targets the room; a cardinal wall name targets
    /// that wall; `feature:<ref>` / `damage:<ref>` target sub-entities;
    /// anything else is kept verbatim as `Other`.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("room") {
            return NoteTarget::Room;
        }
        if let Ok(wall) = WallDirection::parse(trimmed) {
            return NoteTarget::Wall(wall);
        }
        if let Some(rest) = trimmed.strip_prefix("feature:") {
            return NoteTarget::Feature(rest.trim().to_string());
        }
        if let Some(rest) = trimmed.strip_prefix("damage:") {
            return NoteTarget::DamageZone(rest.trim().to_string());
        }
        NoteTarget::Other(trimmed.to_string())
    }
}

impl fmt::Display for NoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteTarget::Room => write!(f, "room"),
            NoteTarget::Wall(w) => write!(f, "{} wall", w),
            NoteTarget::Feature(r) => write!(f, "feature {}", r),
            NoteTarget::DamageZone(r) => write!(f, "damage zone {}", r),
            NoteTarget::Other(r) => write!(f, "{}", r),
        }
    }
}

/// A free-text note dictated against a room, wall, or sub-entity.
///
/// Notes are purely additive: they are never undo-tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// The dictated text
    pub text: String,

    /// What the note is attached to
    pub target: NoteTarget,

    /// Timestamp when this note was recorded
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(text: String, target: NoteTarget) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            text,
            target,
            created_at: Utc::now(),
        }
    }
}

/// A photo reference captured by the external photo collaborator
///
/// The engine never touches image bytes; it records the capture reference and
/// a SHA-256 hash of that reference so the persistence collaborator can
/// verify the attachment later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Capture reference (URI or file path) supplied by the capture layer
    pub reference: String,

    /// Optional dictated caption
    pub caption: Option<String>,

    /// SHA-256 hash of the capture reference
    pub content_hash: String,

    /// Timestamp when this photo was attached
    pub created_at: DateTime<Utc>,
}

impl Photo {
    /// Create a photo record, computing the content hash from the reference.
    pub fn new(reference: String, caption: Option<String>) -> Self {
        let content_hash = Self::compute_content_hash(&reference);
        Self {
            id: Uuid::now_v7().to_string(),
            reference,
            caption,
            content_hash,
            created_at: Utc::now(),
        }
    }

    /// SHA-256 hash of the capture reference, hex-encoded.
    fn compute_content_hash(reference: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(reference.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_target_parse() {
        assert_eq!(NoteTarget::parse("room"), NoteTarget::Room);
        assert_eq!(NoteTarget::parse(""), NoteTarget::Room);
        assert_eq!(
            NoteTarget::parse("north"),
            NoteTarget::Wall(WallDirection::North)
        );
        assert_eq!(
            NoteTarget::parse("feature: island"),
            NoteTarget::Feature("island".to_string())
        );
        assert_eq!(
            NoteTarget::parse("damage:ceiling stain"),
            NoteTarget::DamageZone("ceiling stain".to_string())
        );
        assert_eq!(
            NoteTarget::parse("baseboard trim"),
            NoteTarget::Other("baseboard trim".to_string())
        );
    }

    #[test]
    fn test_photo_hash_is_deterministic() {
        let a = Photo::new("file:///a.jpg".to_string(), None);
        let b = Photo::new("file:///a.jpg".to_string(), None);
        assert_eq!(a.content_hash, b.content_hash);
        assert_eq!(a.content_hash.len(), 64);

        let c = Photo::new("file:///b.jpg".to_string(), None);
        assert_ne!(a.content_hash, c.content_hash);
    }
}
