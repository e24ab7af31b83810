mod command;
mod handler;
mod result;

pub use command::AddRatingCommand;
pub use handler::AddRatingHandler;
pub use result::{AddRatingResult, ALREADY_RATED, ITEM_NOT_FOUND, RATING_ADDED};
