pub mod booking;
pub mod catalog;
pub mod identity;
pub mod rating;
