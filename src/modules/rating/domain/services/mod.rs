pub mod average_rating;

pub use average_rating::{average_in_tenths, average_rating, to_tenths};
