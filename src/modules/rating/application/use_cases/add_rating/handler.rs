use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::domain::ItemRepository;
use crate::modules::rating::domain::{Rating, RatingInsert, RatingRepository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    utils::{LogContext, Validator},
};

use super::command::AddRatingCommand;
use super::result::{AddRatingResult, ALREADY_RATED, ITEM_NOT_FOUND, RATING_ADDED};

/// Use case handler for submitting a rating.
///
/// At most one rating per (item, user); the repository enforces this
/// atomically, so concurrent submissions from the same user yield exactly one
/// accepted rating.
pub struct AddRatingHandler {
    item_repository: Arc<dyn ItemRepository>,
    rating_repository: Arc<dyn RatingRepository>,
}

impl AddRatingHandler {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        rating_repository: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            item_repository,
            rating_repository,
        }
    }
}

#[async_trait]
impl UseCase<AddRatingCommand, AddRatingResult> for AddRatingHandler {
    async fn execute(&self, command: AddRatingCommand) -> AppResult<AddRatingResult> {
        match Validator::validate_rating_value(command.value) {
            Ok(()) => {}
            Err(AppError::ValidationError(reason)) => {
                LogContext::rejected("Add rating", &reason);
                return Ok(AddRatingResult::rejected(reason));
            }
            Err(other) => return Err(other),
        }

        if !self.item_repository.exists(command.item_id).await? {
            LogContext::rejected("Add rating", ITEM_NOT_FOUND);
            return Ok(AddRatingResult::rejected(ITEM_NOT_FOUND));
        }

        let rating = Rating::new(command.item_id, command.caller_id, command.value)?;

        match self.rating_repository.insert_unique(&rating).await? {
            RatingInsert::Inserted => {
                LogContext::committed(
                    "Add rating",
                    &format!(
                        "{} for item {} by user {}",
                        rating.value, rating.item_id, rating.user_id
                    ),
                );
                Ok(AddRatingResult::accepted(RATING_ADDED))
            }
            RatingInsert::AlreadyRated => {
                LogContext::rejected("Add rating", ALREADY_RATED);
                Ok(AddRatingResult::rejected(ALREADY_RATED))
            }
        }
    }
}
