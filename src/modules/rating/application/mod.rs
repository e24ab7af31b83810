pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use service::RatingService;
pub use use_cases::{
    AddRatingCommand, AddRatingHandler, AddRatingResult, GetAverageRatingHandler,
    GetAverageRatingQuery,
};
