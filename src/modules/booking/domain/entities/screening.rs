use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scheduled showing of an item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screening {
    pub id: Uuid,
    pub name: String,
    pub item_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
}

impl Screening {
    pub fn new(name: impl Into<String>, item_id: Uuid, scheduled_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            item_id,
            scheduled_at,
        }
    }

    /// Strictly before `now`; a screening starting exactly now is not past
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_at < now
    }
}
