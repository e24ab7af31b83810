pub mod entities;
pub mod repositories;
pub mod services;

// Re-exports for easy access
pub use entities::Rating;
pub use repositories::{RatingInsert, RatingRepository};
pub use services::{average_in_tenths, average_rating};
