pub mod dto;
pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use dto::ItemSummary;
pub use service::CatalogService;
pub use use_cases::{
    ListItemsHandler, ListItemsQuery, ListItemsResult, SearchItemsHandler, SearchItemsQuery,
    SearchItemsResult,
};
