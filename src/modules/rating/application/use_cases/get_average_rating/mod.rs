mod handler;
mod query;

pub use handler::{GetAverageRatingHandler, GetAverageRatingResult};
pub use query::GetAverageRatingQuery;
