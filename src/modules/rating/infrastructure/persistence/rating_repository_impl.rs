use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::rating::domain::{Rating, RatingInsert, RatingRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::CatalogStore;

/// Ratings are stored on their owning item
pub struct RatingRepositoryImpl {
    store: Arc<CatalogStore>,
}

impl RatingRepositoryImpl {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn find_by_item(&self, item_id: Uuid) -> AppResult<Option<Vec<Rating>>> {
        Ok(self
            .store
            .read(|state| state.item(item_id).map(|item| item.ratings.clone()))
            .await)
    }

    async fn insert_unique(&self, rating: &Rating) -> AppResult<RatingInsert> {
        self.store
            .write(|state| {
                let item = state.item_mut(rating.item_id).ok_or_else(|| {
                    AppError::NotFound(format!("Item with id {} not found", rating.item_id))
                })?;

                if item.has_rating_by(rating.user_id) {
                    return Ok(RatingInsert::AlreadyRated);
                }

                item.ratings.push(rating.clone());
                Ok(RatingInsert::Inserted)
            })
            .await
    }
}
