use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::{errors::AppResult, utils::Validator};

/// A single user's score for a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: Uuid,
    pub value: f64,
    pub item_id: Uuid,
    pub user_id: Uuid,
}

impl Rating {
    /// Create a rating, rejecting values outside [0, 5]
    pub fn new(item_id: Uuid, user_id: Uuid, value: f64) -> AppResult<Self> {
        Validator::validate_rating_value(value)?;

        Ok(Self {
            id: Uuid::new_v4(),
            value,
            item_id,
            user_id,
        })
    }

    pub fn is_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
