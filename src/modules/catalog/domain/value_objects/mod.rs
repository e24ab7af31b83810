//! Catalog value objects

pub mod item_type;
pub mod search_filter;

pub use item_type::ItemType;
pub use search_filter::SearchFilter;
