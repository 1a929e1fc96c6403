use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item. Field names are camelCase on disk (`createdAt`),
/// matching the stored JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique id, derived from creation time (epoch milliseconds)
    pub id: i64,
    /// Trimmed, non-empty task text
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp; only used for display ordering
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(id: i64, text: String, created_at: DateTime<Utc>) -> Self {
        Item {
            id,
            text,
            completed: false,
            created_at,
        }
    }
}
