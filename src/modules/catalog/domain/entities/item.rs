use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::value_objects::ItemType;
use crate::modules::rating::domain::{average_in_tenths, average_rating, Rating};

/// Cast member of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
}

impl Actor {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            surname: surname.into(),
        }
    }
}

/// Catalog entry (movie or show). Owns its ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub overview: String,
    #[serde(default)]
    pub item_type: ItemType,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        overview: impl Into<String>,
        item_type: ItemType,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            overview: overview.into(),
            item_type,
            release_date,
            poster_path: None,
            actors: Vec::new(),
            ratings: Vec::new(),
        }
    }

    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }

    /// Mean of all ratings, 0 when unrated
    pub fn average_rating(&self) -> f64 {
        average_rating(&self.ratings)
    }

    /// Average rounded to one decimal, in tenths
    pub fn average_rating_tenths(&self) -> i64 {
        average_in_tenths(&self.ratings)
    }

    pub fn has_rating_by(&self, user_id: Uuid) -> bool {
        self.ratings.iter().any(|r| r.is_by(user_id))
    }
}
