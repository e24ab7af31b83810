pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::RatingService;
pub use domain::{Rating, RatingRepository};
pub use infrastructure::RatingRepositoryImpl;
