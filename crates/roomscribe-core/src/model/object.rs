use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An item of room contents recorded for the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredObject {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Item name, as dictated
    pub name: String,

    /// Category (furniture, appliance, electronics, ...), when stated
    pub category: Option<String>,

    /// Item count
    pub quantity: u32,

    /// Condition description, when stated
    pub condition: Option<String>,

    /// Free-text description, when stated
    pub description: Option<String>,

    /// Timestamp when this item was recorded
    pub created_at: DateTime<Utc>,

    /// Timestamp when this item was last updated
    pub updated_at: DateTime<Utc>,
}

impl StoredObject {
    /// Create an inventory item; quantity defaults to 1 when not stated.
    pub fn new(name: String, quantity: Option<u32>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7().to_string(),
            name,
            category: None,
            quantity: quantity.unwrap_or(1),
            condition: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }
}
