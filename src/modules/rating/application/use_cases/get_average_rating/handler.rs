use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::rating::domain::{average_rating, RatingRepository};
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::query::GetAverageRatingQuery;

/// Average rating of an item, `None` when the item does not exist
pub type GetAverageRatingResult = Option<f64>;

pub struct GetAverageRatingHandler {
    rating_repository: Arc<dyn RatingRepository>,
}

impl GetAverageRatingHandler {
    pub fn new(rating_repository: Arc<dyn RatingRepository>) -> Self {
        Self { rating_repository }
    }
}

#[async_trait]
impl Query<GetAverageRatingQuery, GetAverageRatingResult> for GetAverageRatingHandler {
    async fn execute(&self, query: GetAverageRatingQuery) -> AppResult<GetAverageRatingResult> {
        let ratings = self.rating_repository.find_by_item(query.item_id).await?;
        Ok(ratings.map(|ratings| average_rating(&ratings)))
    }
}
