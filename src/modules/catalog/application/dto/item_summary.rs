use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::{Item, ItemType};

/// Client-facing view of a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: Uuid,
    pub title: String,
    pub overview: String,
    pub item_type: ItemType,
    pub average_rating: f64,
    pub release_date: NaiveDate,
    pub poster_path: Option<String>,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            overview: item.overview.clone(),
            item_type: item.item_type,
            average_rating: item.average_rating(),
            release_date: item.release_date,
            poster_path: item.poster_path.clone(),
        }
    }
}
