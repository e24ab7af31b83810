use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::ItemRepository;
use crate::modules::identity::IdentityProvider;
use crate::modules::rating::domain::RatingRepository;
use crate::shared::{
    application::{Query, UseCase},
    errors::AppResult,
};
use crate::log_debug;

use super::use_cases::{
    AddRatingCommand, AddRatingHandler, AddRatingResult, GetAverageRatingHandler,
    GetAverageRatingQuery,
};

/// Entry point for rating requests; resolves the caller and delegates to the
/// use case handlers.
pub struct RatingService {
    identity: Arc<dyn IdentityProvider>,
    add_rating: AddRatingHandler,
    get_average: GetAverageRatingHandler,
}

impl RatingService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        item_repository: Arc<dyn ItemRepository>,
        rating_repository: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            identity,
            add_rating: AddRatingHandler::new(item_repository, rating_repository.clone()),
            get_average: GetAverageRatingHandler::new(rating_repository),
        }
    }

    /// Rate an item as the current caller
    pub async fn add_rating(&self, item_id: Uuid, value: f64) -> AppResult<AddRatingResult> {
        let caller = self.identity.current_caller().await?;
        log_debug!(
            "User {} rating item {} with {}",
            caller.username,
            item_id,
            value
        );

        self.add_rating
            .execute(AddRatingCommand::new(item_id, value, caller.user_id))
            .await
    }

    /// Current average of an item, `None` when the item does not exist
    pub async fn average_rating(&self, item_id: Uuid) -> AppResult<Option<f64>> {
        self.get_average
            .execute(GetAverageRatingQuery::new(item_id))
            .await
    }
}
