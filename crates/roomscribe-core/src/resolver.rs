//! Sub-entity disambiguation.
//!
//! Every edit/delete operation that targets an existing opening, feature,
//! damage zone, or inventory item locates its target through the same fixed
//! discriminator chain: index, then id, then wall+kind, then wall, then kind,
//! then the sole-survivor fallback. The first discriminator that yields at
//! least one candidate wins, taking the first candidate in list order; there
//! is deliberately no ambiguity detection beyond that.

use crate::errors::{Result, RoomscribeError};
use crate::geometry::WallDirection;
use crate::model::{DamageZone, Feature, Opening, StoredObject};

/// Partial identifying information for a sub-entity, as dictated.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    /// Zero-based index into the room's list
    pub index: Option<usize>,
    /// Explicit entity id
    pub id: Option<String>,
    /// Wall the entity is on
    pub wall: Option<WallDirection>,
    /// Entity kind keyword (door, water, island, ...)
    pub kind: Option<String>,
}

impl Selector {
    /// Human-readable list of the discriminators that were supplied, for
    /// not-found error messages.
    fn tried(&self) -> String {
        let mut parts = Vec::new();
        if let Some(i) = self.index {
            parts.push(format!("index={}", i));
        }
        if let Some(id) = &self.id {
            parts.push(format!("id={}", id));
        }
        if let Some(w) = self.wall {
            parts.push(format!("wall={}", w));
        }
        if let Some(k) = &self.kind {
            parts.push(format!("kind={}", k));
        }
        if parts.is_empty() {
            "no identifying fields".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// A sub-entity the disambiguation chain can search over.
pub trait Resolvable {
    /// The entity's unique id.
    fn entity_id(&self) -> &str;

    /// The wall the entity sits on, if it has one.
    fn entity_wall(&self) -> Option<WallDirection> {
        None
    }

    /// Whether the entity matches a dictated kind keyword.
    fn matches_kind(&self, kind: &str) -> bool;
}

fn normalize_kind(kind: &str) -> String {
    kind.trim().to_lowercase().replace([' ', '-'], "_")
}

impl Resolvable for Opening {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn entity_wall(&self) -> Option<WallDirection> {
        Some(self.wall)
    }

    fn matches_kind(&self, kind: &str) -> bool {
        self.kind.to_string().replace(' ', "_") == normalize_kind(kind)
    }
}

impl Resolvable for Feature {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn entity_wall(&self) -> Option<WallDirection> {
        self.wall
    }

    fn matches_kind(&self, kind: &str) -> bool {
        self.kind.to_string().replace('-', "_") == normalize_kind(kind)
    }
}

impl Resolvable for DamageZone {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn entity_wall(&self) -> Option<WallDirection> {
        self.affected_walls.first().copied()
    }

    fn matches_kind(&self, kind: &str) -> bool {
        self.kind.to_string() == normalize_kind(kind)
    }
}

impl Resolvable for StoredObject {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn matches_kind(&self, kind: &str) -> bool {
        let wanted = kind.trim().to_lowercase();
        self.name.to_lowercase() == wanted
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == wanted)
    }
}

/// Resolve a selector to an index into `items`.
///
/// `entity` names the entity kind for error messages ("opening", "feature",
/// "damage zone", "object").
///
/// # Errors
///
/// Returns `EntityNotFound` naming the discriminators tried when the chain
/// exhausts without a match.
pub fn resolve_index<T: Resolvable>(
    items: &[T],
    selector: &Selector,
    entity: &str,
) -> Result<usize> {
    let not_found = || RoomscribeError::EntityNotFound {
        entity: entity.to_string(),
        tried: selector.tried(),
    };

    // 1. Explicit index
    if let Some(i) = selector.index {
        return if i < items.len() { Ok(i) } else { Err(not_found()) };
    }

    // 2. Explicit id
    if let Some(id) = &selector.id {
        if let Some(i) = items.iter().position(|e| e.entity_id() == id) {
            return Ok(i);
        }
    }

    // 3. Wall + kind
    if let (Some(wall), Some(kind)) = (selector.wall, &selector.kind) {
        if let Some(i) = items
            .iter()
            .position(|e| e.entity_wall() == Some(wall) && e.matches_kind(kind))
        {
            return Ok(i);
        }
    }

    // 4. Wall alone
    if let Some(wall) = selector.wall {
        if let Some(i) = items.iter().position(|e| e.entity_wall() == Some(wall)) {
            return Ok(i);
        }
    }

    // 5. Kind alone
    if let Some(kind) = &selector.kind {
        if let Some(i) = items.iter().position(|e| e.matches_kind(kind)) {
            return Ok(i);
        }
    }

    // 6. Sole survivor
    if items.len() == 1 {
        return Ok(0);
    }

    Err(not_found())
}
