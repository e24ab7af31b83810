use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Purchased quantity against a screening. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub screening_id: Uuid,
    pub user_id: Uuid,
    pub quantity: u32,
    pub purchased_at: DateTime<Utc>,
}

impl Ticket {
    pub fn new(screening_id: Uuid, user_id: Uuid, quantity: u32, purchased_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            screening_id,
            user_id,
            quantity,
            purchased_at,
        }
    }
}
