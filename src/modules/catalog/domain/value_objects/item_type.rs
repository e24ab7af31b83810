use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Kind of catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    #[default]
    Movie,
    Show,
}

impl ItemType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemType::Movie => "Movie",
            ItemType::Show => "TV Show",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ItemType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" => Ok(ItemType::Movie),
            "show" | "shows" => Ok(ItemType::Show),
            other => Err(AppError::InvalidInput(format!(
                "Unknown item type '{}', expected movie or show",
                other
            ))),
        }
    }
}
