//! Append-only command history.
//!
//! Every dispatched command leaves exactly one log entry carrying its raw
//! parameters and the human-readable result that was returned to the caller.
//! Entries are never mutated or removed; an undo appends its own entry rather
//! than deleting history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One entry in the session's command log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCommand {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Command type tag (`create_room`, `mark_damage`, `undo`, ...)
    pub kind: String,

    /// Raw parameters as received from the caller
    pub params: Value,

    /// The human-readable result string returned to the caller
    pub result: String,

    /// Timestamp when the command was dispatched
    pub created_at: DateTime<Utc>,
}

impl GeometryCommand {
    /// Create a log entry for a dispatched command.
    pub fn new(kind: &str, params: Value, result: &str) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            kind: kind.to_string(),
            params,
            result: result.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_carries_raw_params_and_result() {
        let entry = GeometryCommand::new(
            "create_room",
            json!({"name": "kitchen", "width_ft": 10.0}),
            "Started rectangle room 'kitchen'",
        );
        assert_eq!(entry.kind, "create_room");
        assert_eq!(entry.params["name"], "kitchen");
        assert!(entry.result.contains("kitchen"));
        assert!(!entry.id.is_empty());
    }
}
