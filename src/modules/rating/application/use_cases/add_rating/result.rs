use crate::shared::application::ServiceResponse;

pub const RATING_ADDED: &str = "Successfully added rating";
pub const ALREADY_RATED: &str = "You already rated this item";
pub const ITEM_NOT_FOUND: &str = "Item does not exist";

/// Result of rating an item (`data` mirrors `success`)
pub type AddRatingResult = ServiceResponse<bool>;
