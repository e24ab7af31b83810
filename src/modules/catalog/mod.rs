pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{CatalogService, ItemSummary};
pub use domain::{Actor, Item, ItemRepository, ItemType, SearchFilter};
pub use infrastructure::ItemRepositoryImpl;
