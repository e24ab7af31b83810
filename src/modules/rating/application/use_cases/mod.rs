pub mod add_rating;
pub mod get_average_rating;

pub use add_rating::{AddRatingCommand, AddRatingHandler, AddRatingResult};
pub use get_average_rating::{
    GetAverageRatingHandler, GetAverageRatingQuery, GetAverageRatingResult,
};
