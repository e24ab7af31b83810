use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::rating::domain::entities::Rating;
use crate::shared::errors::AppResult;

/// Outcome of a uniqueness-guarded rating insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingInsert {
    Inserted,
    AlreadyRated,
}

/// Port for rating persistence
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// All ratings for an item, `None` when the item does not exist
    async fn find_by_item(&self, item_id: Uuid) -> AppResult<Option<Vec<Rating>>>;

    /// Insert unless the (item, user) pair is already rated.
    ///
    /// The check and the write are one unit of work.
    async fn insert_unique(&self, rating: &Rating) -> AppResult<RatingInsert>;
}
