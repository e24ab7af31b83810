pub mod list_items;
pub mod search_items;

pub use list_items::{ListItemsHandler, ListItemsQuery, ListItemsResult};
pub use search_items::{SearchItemsHandler, SearchItemsQuery, SearchItemsResult};
